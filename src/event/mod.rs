// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Observable outcomes of appliance setters.
//!
//! Setters never report transport failures to their caller. Subscribe to an
//! appliance's [`EventBus`] to learn which changes were accepted and what
//! happened to the resulting commands.
//!
//! # Examples
//!
//! ```no_run
//! use aircon_lib::Appliance;
//! use aircon_lib::event::ApplianceEvent;
//! use aircon_lib::types::Mode;
//!
//! # async fn example() -> aircon_lib::Result<()> {
//! let mut appliance = Appliance::http("192.168.88.152").build()?;
//! let mut events = appliance.subscribe();
//!
//! appliance.set_target_mode(Mode::Cool);
//!
//! while let Ok(event) = events.recv().await {
//!     if let ApplianceEvent::CommandFailed { error, .. } = event {
//!         eprintln!("device did not get the command: {error}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod appliance_event;
mod event_bus;

pub use appliance_event::ApplianceEvent;
pub use event_bus::EventBus;
