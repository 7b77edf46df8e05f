// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `aircon_lib` - control an air conditioner through its HTTP state endpoint.
//!
//! The crate keeps the commanded state of one air conditioner and turns
//! climate intents (power, heat/cool/auto, threshold temperatures) into the
//! JSON command the unit's controller accepts on `PUT /state`.
//!
//! # How commands are sent
//!
//! - Only setters that actually change a value send anything.
//! - The full state is encoded on every change; the device always receives a
//!   complete `{mode, fan, temp, power}` command.
//! - Auto mode has no device representation: changes made in auto mode are
//!   stored but not sent.
//! - Sending is fire-and-forget. Setters return a [`Dispatch`] that can be
//!   awaited, and failures are published as
//!   [`ApplianceEvent`](event::ApplianceEvent)s, but the stored state is
//!   never rolled back.
//!
//! # Quick Start
//!
//! ```no_run
//! use aircon_lib::Appliance;
//! use aircon_lib::types::{Mode, Power};
//!
//! #[tokio::main]
//! async fn main() -> aircon_lib::Result<()> {
//!     let mut appliance = Appliance::http("192.168.88.152").build()?;
//!
//!     appliance.set_power(Power::Active);
//!     appliance.set_target_mode(Mode::Cool);
//!
//!     // Wait for this one to reach the device
//!     appliance.set_cooling_threshold(21.0).wait().await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Host integration
//!
//! Home automation hosts usually exchange numeric characteristic values.
//! Convert them at the boundary; unknown codes are rejected before they can
//! reach the appliance:
//!
//! ```
//! use aircon_lib::types::{Mode, Power};
//!
//! assert_eq!(Mode::try_from(2), Ok(Mode::Cool));
//! assert!(Power::try_from(9).is_err());
//! ```

mod appliance;
pub mod command;
pub mod error;
pub mod event;
pub mod protocol;
pub mod state;
pub mod types;

#[cfg(feature = "http")]
pub use appliance::HttpApplianceBuilder;
pub use appliance::{Appliance, Dispatch, DispatchHandle, SharedAppliance};
pub use command::{StateCommand, encode};
pub use error::{Error, ProtocolError, Result, ValueError};
#[cfg(feature = "http")]
pub use protocol::{HttpClient, HttpConfig};
pub use protocol::Transport;
pub use state::{ApplianceState, StateChange};
pub use types::{CoolingThreshold, DeviceMode, FanSpeed, HeatingThreshold, Mode, Power};
