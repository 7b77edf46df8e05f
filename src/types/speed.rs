// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fan speed codes.

use std::fmt;

use crate::error::ValueError;

/// Fan speed as understood by the device's `fan` field.
///
/// The controller does not expose fan control; every command carries
/// [`FanSpeed::Min`].
///
/// # Examples
///
/// ```
/// use aircon_lib::types::FanSpeed;
///
/// assert_eq!(FanSpeed::default(), FanSpeed::Min);
/// assert_eq!(FanSpeed::Min.code(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum FanSpeed {
    /// Device chooses the speed.
    Auto,
    /// Lowest speed.
    #[default]
    Min,
    /// Medium speed.
    Mid,
    /// Highest speed.
    Max,
}

impl FanSpeed {
    /// Returns the numeric code used in the `fan` field.
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::Auto => 0,
            Self::Min => 1,
            Self::Mid => 2,
            Self::Max => 3,
        }
    }
}

impl fmt::Display for FanSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl TryFrom<u8> for FanSpeed {
    type Error = ValueError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Auto),
            1 => Ok(Self::Min),
            2 => Ok(Self::Mid),
            3 => Ok(Self::Max),
            _ => Err(ValueError::UnknownCode {
                attribute: "fan speed",
                code,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes() {
        assert_eq!(FanSpeed::Auto.code(), 0);
        assert_eq!(FanSpeed::Min.code(), 1);
        assert_eq!(FanSpeed::Mid.code(), 2);
        assert_eq!(FanSpeed::Max.code(), 3);
    }

    #[test]
    fn try_from_code() {
        assert_eq!(FanSpeed::try_from(2).unwrap(), FanSpeed::Mid);
        assert!(FanSpeed::try_from(4).is_err());
    }

    #[test]
    fn ordering() {
        assert!(FanSpeed::Min < FanSpeed::Max);
    }
}
