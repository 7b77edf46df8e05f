// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Appliance state management types.
//!
//! [`ApplianceState`] is the snapshot of everything commanded to the air
//! conditioner; [`StateChange`] is one update to it.
//!
//! # Examples
//!
//! ```
//! use aircon_lib::state::{ApplianceState, StateChange};
//! use aircon_lib::types::Power;
//!
//! let mut state = ApplianceState::new();
//! state.apply(&StateChange::Power(Power::Active));
//!
//! assert_eq!(state.power(), Power::Active);
//! ```

mod appliance_state;
mod state_change;

pub use appliance_state::ApplianceState;
pub use state_change::StateChange;
