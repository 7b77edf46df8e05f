// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Operating mode types.
//!
//! Two vocabularies meet here: the climate [`Mode`] the host integration
//! layer commands (heat, cool or auto), and the [`DeviceMode`] codes the
//! air conditioner's control endpoint understands.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Climate operating mode requested by the host.
///
/// Host characteristic codes follow the heater/cooler service: `0` is
/// auto, `1` is heat and `2` is cool.
///
/// # Examples
///
/// ```
/// use aircon_lib::types::Mode;
///
/// assert_eq!(Mode::try_from(2).unwrap(), Mode::Cool);
/// assert_eq!(Mode::Heat.code(), 1);
/// assert_eq!(Mode::default(), Mode::Auto);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mode {
    /// Let the device decide.
    #[default]
    Auto,
    /// Heat towards the heating threshold.
    Heat,
    /// Cool towards the cooling threshold.
    Cool,
}

impl Mode {
    /// Returns the name used in log lines.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "AUTO",
            Self::Heat => "HEAT",
            Self::Cool => "COOL",
        }
    }

    /// Returns the host characteristic code.
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::Auto => 0,
            Self::Heat => 1,
            Self::Cool => 2,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for Mode {
    type Error = ValueError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Auto),
            1 => Ok(Self::Heat),
            2 => Ok(Self::Cool),
            _ => Err(ValueError::UnknownCode {
                attribute: "mode",
                code,
            }),
        }
    }
}

impl FromStr for Mode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "AUTO" => Ok(Self::Auto),
            "HEAT" => Ok(Self::Heat),
            "COOL" => Ok(Self::Cool),
            _ => Err(ValueError::InvalidName(s.to_string())),
        }
    }
}

/// Mode codes accepted by the device's `/state` endpoint.
///
/// The device knows more modes than the host can command; only
/// [`DeviceMode::Cool`] and [`DeviceMode::Heat`] are ever sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceMode {
    /// Cooling.
    Cool,
    /// Dehumidify.
    Dry,
    /// Heating.
    Heat,
    /// Fan only.
    Fan,
    /// Device-side automatic mode.
    Auto,
}

impl DeviceMode {
    /// Returns the numeric code used in the `mode` field.
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::Cool => 1,
            Self::Dry => 2,
            Self::Heat => 3,
            Self::Fan => 4,
            Self::Auto => 5,
        }
    }
}

impl TryFrom<u8> for DeviceMode {
    type Error = ValueError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Cool),
            2 => Ok(Self::Dry),
            3 => Ok(Self::Heat),
            4 => Ok(Self::Fan),
            5 => Ok(Self::Auto),
            _ => Err(ValueError::UnknownCode {
                attribute: "device mode",
                code,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_codes() {
        assert_eq!(Mode::try_from(0).unwrap(), Mode::Auto);
        assert_eq!(Mode::try_from(1).unwrap(), Mode::Heat);
        assert_eq!(Mode::try_from(2).unwrap(), Mode::Cool);
        assert!(Mode::try_from(3).is_err());
    }

    #[test]
    fn device_codes() {
        assert_eq!(DeviceMode::Cool.code(), 1);
        assert_eq!(DeviceMode::Heat.code(), 3);
        assert_eq!(DeviceMode::try_from(5).unwrap(), DeviceMode::Auto);
        assert!(DeviceMode::try_from(0).is_err());
    }

    #[test]
    fn parse_names() {
        assert_eq!("cool".parse::<Mode>().unwrap(), Mode::Cool);
        assert!("dry".parse::<Mode>().is_err());
    }
}
