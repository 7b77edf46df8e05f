// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `/state` wire command.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;
use crate::types::{DeviceMode, FanSpeed};

/// Complete command accepted by the device's `/state` endpoint.
///
/// Every field is mandatory; a command is only ever built when all of them
/// are known. Serializes to `{"mode":1,"fan":1,"temp":18,"power":true}`.
///
/// # Examples
///
/// ```
/// use aircon_lib::command::StateCommand;
/// use aircon_lib::types::{DeviceMode, FanSpeed};
///
/// let cmd = StateCommand::new(DeviceMode::Cool, FanSpeed::Min, 18, true);
/// assert_eq!(cmd.mode(), 1);
/// assert_eq!(
///     serde_json::to_string(&cmd).unwrap(),
///     r#"{"mode":1,"fan":1,"temp":18,"power":true}"#
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateCommand {
    mode: u8,
    fan: u8,
    temp: u8,
    power: bool,
}

impl StateCommand {
    /// Creates a command from its typed parts.
    #[must_use]
    pub const fn new(mode: DeviceMode, fan: FanSpeed, temp: u8, power: bool) -> Self {
        Self {
            mode: mode.code(),
            fan: fan.code(),
            temp,
            power,
        }
    }

    /// Device mode code.
    #[must_use]
    pub const fn mode(&self) -> u8 {
        self.mode
    }

    /// Device mode, if the code is one the device knows.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::UnknownCode` for a command deserialized with an
    /// unknown mode code.
    pub fn device_mode(&self) -> Result<DeviceMode, ValueError> {
        DeviceMode::try_from(self.mode)
    }

    /// Fan code.
    #[must_use]
    pub const fn fan(&self) -> u8 {
        self.fan
    }

    /// Target temperature in whole degrees.
    #[must_use]
    pub const fn temp(&self) -> u8 {
        self.temp
    }

    /// Whether the device should be on.
    #[must_use]
    pub const fn power(&self) -> bool {
        self.power
    }

    /// Serializes the command to its JSON body.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for StateCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "mode={}, power={}, temp={}, fan={}",
            self.mode, self.power, self.temp, self.fan
        )
    }
}
