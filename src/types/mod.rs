// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for air conditioner control.
//!
//! Each attribute of the appliance is a closed enum or a range-checked
//! newtype, so invalid values are rejected when they enter the crate rather
//! than when a command is built.
//!
//! # Types
//!
//! - [`Power`] - Inactive/Active
//! - [`Mode`] - Auto/Heat/Cool as commanded by the host
//! - [`DeviceMode`] - Mode codes of the device endpoint
//! - [`FanSpeed`] - Fan codes of the device endpoint
//! - [`CoolingThreshold`] - 17 to 25 degrees
//! - [`HeatingThreshold`] - 22 to 30 degrees

mod mode;
mod power;
mod speed;
mod threshold;

pub use mode::{DeviceMode, Mode};
pub use power::Power;
pub use speed::FanSpeed;
pub use threshold::{CoolingThreshold, HeatingThreshold, Threshold};
