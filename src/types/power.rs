// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power types for the air conditioner.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Commanded power state of the appliance.
///
/// The host integration layer exposes this as the `Active` characteristic,
/// where `0` means inactive and `1` means active.
///
/// # Examples
///
/// ```
/// use aircon_lib::types::Power;
///
/// assert_eq!(Power::try_from(1).unwrap(), Power::Active);
/// assert_eq!(Power::Inactive.code(), 0);
/// assert!(Power::Active.as_wire());
/// assert!(Power::try_from(2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Power {
    /// The appliance is switched off.
    #[default]
    Inactive,
    /// The appliance is switched on.
    Active,
}

impl Power {
    /// Returns the name used in log lines.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inactive => "INACTIVE",
            Self::Active => "ACTIVE",
        }
    }

    /// Returns the host characteristic code.
    #[must_use]
    pub const fn code(&self) -> u8 {
        match self {
            Self::Inactive => 0,
            Self::Active => 1,
        }
    }

    /// Returns the boolean the device expects in the `power` field.
    #[must_use]
    pub const fn as_wire(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for Power {
    type Error = ValueError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Inactive),
            1 => Ok(Self::Active),
            _ => Err(ValueError::UnknownCode {
                attribute: "power",
                code,
            }),
        }
    }
}

impl FromStr for Power {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "INACTIVE" | "OFF" | "0" | "FALSE" => Ok(Self::Inactive),
            "ACTIVE" | "ON" | "1" | "TRUE" => Ok(Self::Active),
            _ => Err(ValueError::InvalidName(s.to_string())),
        }
    }
}

impl From<bool> for Power {
    fn from(value: bool) -> Self {
        if value { Self::Active } else { Self::Inactive }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_inactive() {
        assert_eq!(Power::default(), Power::Inactive);
    }

    #[test]
    fn code_conversion() {
        assert_eq!(Power::try_from(0).unwrap(), Power::Inactive);
        assert_eq!(Power::try_from(1).unwrap(), Power::Active);
        assert_eq!(
            Power::try_from(7),
            Err(ValueError::UnknownCode {
                attribute: "power",
                code: 7
            })
        );
    }

    #[test]
    fn wire_value() {
        assert!(Power::Active.as_wire());
        assert!(!Power::Inactive.as_wire());
    }

    #[test]
    fn from_str_accepts_aliases() {
        assert_eq!("on".parse::<Power>().unwrap(), Power::Active);
        assert_eq!("INACTIVE".parse::<Power>().unwrap(), Power::Inactive);
        assert!("maybe".parse::<Power>().is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Power::Active.to_string(), "ACTIVE");
        assert_eq!(Power::from(false).to_string(), "INACTIVE");
    }
}
