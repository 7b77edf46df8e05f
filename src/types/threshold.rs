// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Threshold temperatures for cooling and heating.
//!
//! Thresholds are whole degrees Celsius inside a fixed range. The range is
//! part of the type, so a [`CoolingThreshold`] can never hold 30 degrees and
//! a [`HeatingThreshold`] can never hold 17.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Target temperature bounded to `[LO, HI]` with a step of one degree.
///
/// Use the [`CoolingThreshold`] and [`HeatingThreshold`] aliases rather than
/// naming the bounds directly.
///
/// # Examples
///
/// ```
/// use aircon_lib::types::{CoolingThreshold, HeatingThreshold};
///
/// let cool = CoolingThreshold::new(19).unwrap();
/// assert_eq!(cool.value(), 19);
///
/// // Out-of-range input is either rejected...
/// assert!(HeatingThreshold::new(31).is_err());
///
/// // ...or clamped, rounding to the nearest degree first.
/// assert_eq!(CoolingThreshold::clamped(12.0).value(), 17);
/// assert_eq!(HeatingThreshold::clamped(24.6).value(), 25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Threshold<const LO: u8, const HI: u8>(u8);

/// Cooling threshold, 17 to 25 degrees, default 22.
pub type CoolingThreshold = Threshold<17, 25>;

/// Heating threshold, 22 to 30 degrees, default 30.
pub type HeatingThreshold = Threshold<22, 30>;

impl<const LO: u8, const HI: u8> Threshold<LO, HI> {
    /// Lowest accepted temperature.
    pub const MIN: Self = Self(LO);

    /// Highest accepted temperature.
    pub const MAX: Self = Self(HI);

    /// Creates a threshold from whole degrees.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if `degrees` is outside `[LO, HI]`.
    pub fn new(degrees: u8) -> Result<Self, ValueError> {
        if !(LO..=HI).contains(&degrees) {
            return Err(ValueError::OutOfRange {
                min: u16::from(LO),
                max: u16::from(HI),
                actual: u16::from(degrees),
            });
        }
        Ok(Self(degrees))
    }

    /// Creates a threshold from a host temperature value, clamping to the range.
    ///
    /// The value is rounded to the nearest degree before clamping. `NaN`
    /// clamps to the minimum.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn clamped(celsius: f32) -> Self {
        // Saturating cast: negatives and NaN become 0, large values 255.
        let degrees = celsius.round() as u8;
        Self(degrees.clamp(LO, HI))
    }

    /// Returns the temperature in whole degrees.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns the temperature as the float the host and the device use.
    #[must_use]
    pub fn celsius(&self) -> f32 {
        f32::from(self.0)
    }
}

impl Default for CoolingThreshold {
    fn default() -> Self {
        Self(22)
    }
}

impl Default for HeatingThreshold {
    fn default() -> Self {
        Self(30)
    }
}

impl<const LO: u8, const HI: u8> fmt::Display for Threshold<LO, HI> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°C", self.0)
    }
}

impl<const LO: u8, const HI: u8> TryFrom<u8> for Threshold<LO, HI> {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<const LO: u8, const HI: u8> From<Threshold<LO, HI>> for u8 {
    fn from(value: Threshold<LO, HI>) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cooling_range() {
        for v in 17..=25 {
            assert_eq!(CoolingThreshold::new(v).unwrap().value(), v);
        }
        assert!(CoolingThreshold::new(16).is_err());
        assert!(CoolingThreshold::new(26).is_err());
    }

    #[test]
    fn heating_range() {
        for v in 22..=30 {
            assert_eq!(HeatingThreshold::new(v).unwrap().value(), v);
        }
        assert_eq!(
            HeatingThreshold::new(21),
            Err(ValueError::OutOfRange {
                min: 22,
                max: 30,
                actual: 21
            })
        );
    }

    #[test]
    fn defaults() {
        assert_eq!(CoolingThreshold::default().value(), 22);
        assert_eq!(HeatingThreshold::default().value(), 30);
    }

    #[test]
    fn clamped_rounds_then_clamps() {
        assert_eq!(CoolingThreshold::clamped(18.4).value(), 18);
        assert_eq!(CoolingThreshold::clamped(18.5).value(), 19);
        assert_eq!(CoolingThreshold::clamped(40.0).value(), 25);
        assert_eq!(CoolingThreshold::clamped(-5.0).value(), 17);
        assert_eq!(HeatingThreshold::clamped(f32::NAN).value(), 22);
        assert_eq!(HeatingThreshold::clamped(f32::INFINITY).value(), 30);
    }

    #[test]
    fn bounds_constants() {
        assert_eq!(CoolingThreshold::MIN.value(), 17);
        assert_eq!(CoolingThreshold::MAX.value(), 25);
        assert_eq!(HeatingThreshold::MIN.value(), 22);
        assert_eq!(HeatingThreshold::MAX.value(), 30);
    }

    #[test]
    fn serde_rejects_out_of_range() {
        let ok: CoolingThreshold = serde_json::from_str("20").unwrap();
        assert_eq!(ok.value(), 20);
        assert!(serde_json::from_str::<CoolingThreshold>("30").is_err());
        assert_eq!(serde_json::to_string(&ok).unwrap(), "20");
    }

    #[test]
    fn display() {
        assert_eq!(HeatingThreshold::default().to_string(), "30°C");
    }
}
