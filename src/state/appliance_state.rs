// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Appliance state tracking.

use crate::types::{CoolingThreshold, HeatingThreshold, Mode, Power};

use super::StateChange;

/// Commanded state of the air conditioner.
///
/// There is no read path from the device, so "current" values are echoes of
/// what was last commanded:
///
/// - the current mode always equals the last accepted target mode;
/// - the current temperature and the display temperature follow whichever
///   threshold was set last.
///
/// # Examples
///
/// ```
/// use aircon_lib::state::{ApplianceState, StateChange};
/// use aircon_lib::types::{Mode, Power};
///
/// let mut state = ApplianceState::new();
/// assert_eq!(state.power(), Power::Inactive);
/// assert_eq!(state.target_mode(), Mode::Auto);
///
/// state.apply(&StateChange::cooling_threshold(19.0));
/// assert_eq!(state.current_temperature(), 19.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ApplianceState {
    power: Power,
    target_mode: Mode,
    current_mode: Mode,
    current_temperature: f32,
    cooling_threshold: CoolingThreshold,
    heating_threshold: HeatingThreshold,
    display_temperature: f32,
}

impl ApplianceState {
    /// Initial current temperature.
    pub const DEFAULT_CURRENT_TEMPERATURE: f32 = 0.0;

    /// Initial display temperature.
    pub const DEFAULT_DISPLAY_TEMPERATURE: f32 = 20.0;

    /// Creates the power-up state: off, auto mode, thresholds at 22 and 30.
    #[must_use]
    pub fn new() -> Self {
        Self {
            power: Power::Inactive,
            target_mode: Mode::Auto,
            current_mode: Mode::Auto,
            current_temperature: Self::DEFAULT_CURRENT_TEMPERATURE,
            cooling_threshold: CoolingThreshold::default(),
            heating_threshold: HeatingThreshold::default(),
            display_temperature: Self::DEFAULT_DISPLAY_TEMPERATURE,
        }
    }

    /// Commanded power state.
    #[must_use]
    pub fn power(&self) -> Power {
        self.power
    }

    /// Commanded operating mode.
    #[must_use]
    pub fn target_mode(&self) -> Mode {
        self.target_mode
    }

    /// Reported operating mode, an echo of the target mode.
    #[must_use]
    pub fn current_mode(&self) -> Mode {
        self.current_mode
    }

    /// Reported temperature, the last threshold that was set.
    #[must_use]
    pub fn current_temperature(&self) -> f32 {
        self.current_temperature
    }

    /// Cooling threshold.
    #[must_use]
    pub fn cooling_threshold(&self) -> CoolingThreshold {
        self.cooling_threshold
    }

    /// Heating threshold.
    #[must_use]
    pub fn heating_threshold(&self) -> HeatingThreshold {
        self.heating_threshold
    }

    /// General set temperature tracked alongside the thresholds.
    #[must_use]
    pub fn display_temperature(&self) -> f32 {
        self.display_temperature
    }

    /// Applies a change and returns `true` if the state changed.
    ///
    /// Only the targeted attribute is compared. Coupled values (current
    /// mode, current and display temperature) are overwritten when the
    /// targeted attribute moves and left alone otherwise. A batch reports a
    /// change only if the snapshot differs once all of it is applied.
    pub fn apply(&mut self, change: &StateChange) -> bool {
        match change {
            StateChange::Power(power) => {
                if self.power == *power {
                    return false;
                }
                self.power = *power;
                true
            }
            StateChange::TargetMode(mode) => {
                if self.target_mode == *mode {
                    return false;
                }
                self.target_mode = *mode;
                self.current_mode = *mode;
                true
            }
            StateChange::CoolingThreshold(threshold) => {
                if self.cooling_threshold == *threshold {
                    return false;
                }
                self.cooling_threshold = *threshold;
                self.track_temperature(threshold.celsius());
                true
            }
            StateChange::HeatingThreshold(threshold) => {
                if self.heating_threshold == *threshold {
                    return false;
                }
                self.heating_threshold = *threshold;
                self.track_temperature(threshold.celsius());
                true
            }
            StateChange::Batch(changes) => {
                let before = *self;
                for c in changes {
                    self.apply(c);
                }
                *self != before
            }
        }
    }

    fn track_temperature(&mut self, celsius: f32) {
        self.current_temperature = celsius;
        self.display_temperature = celsius;
    }
}

impl Default for ApplianceState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let state = ApplianceState::new();
        assert_eq!(state.power(), Power::Inactive);
        assert_eq!(state.target_mode(), Mode::Auto);
        assert_eq!(state.current_mode(), Mode::Auto);
        assert!(state.current_temperature().abs() < f32::EPSILON);
        assert_eq!(state.cooling_threshold().value(), 22);
        assert_eq!(state.heating_threshold().value(), 30);
        assert!((state.display_temperature() - 20.0).abs() < f32::EPSILON);
    }

    #[test]
    fn apply_power() {
        let mut state = ApplianceState::new();
        assert!(state.apply(&StateChange::Power(Power::Active)));
        assert_eq!(state.power(), Power::Active);
        assert!(!state.apply(&StateChange::Power(Power::Active)));
    }

    #[test]
    fn target_mode_moves_current_mode() {
        let mut state = ApplianceState::new();
        assert!(state.apply(&StateChange::TargetMode(Mode::Cool)));
        assert_eq!(state.current_mode(), Mode::Cool);
        assert!(state.apply(&StateChange::TargetMode(Mode::Heat)));
        assert_eq!(state.current_mode(), Mode::Heat);
    }

    #[test]
    fn threshold_moves_temperatures() {
        let mut state = ApplianceState::new();
        assert!(state.apply(&StateChange::cooling_threshold(19.0)));
        assert!((state.current_temperature() - 19.0).abs() < f32::EPSILON);
        assert!((state.display_temperature() - 19.0).abs() < f32::EPSILON);

        assert!(state.apply(&StateChange::heating_threshold(25.0)));
        assert!((state.current_temperature() - 25.0).abs() < f32::EPSILON);
        assert_eq!(state.cooling_threshold().value(), 19);
    }

    #[test]
    fn unchanged_threshold_leaves_temperatures() {
        let mut state = ApplianceState::new();
        state.apply(&StateChange::heating_threshold(24.0));

        // Default cooling threshold is 22: not a change
        assert!(!state.apply(&StateChange::cooling_threshold(22.0)));
        assert!((state.current_temperature() - 24.0).abs() < f32::EPSILON);
    }

    #[test]
    fn clamped_out_of_range_equal_to_bound_is_no_change() {
        let mut state = ApplianceState::new();
        // Heating default is 30, the maximum
        assert!(!state.apply(&StateChange::heating_threshold(45.0)));
    }

    #[test]
    fn apply_batch() {
        let mut state = ApplianceState::new();
        let batch = StateChange::batch(vec![
            StateChange::Power(Power::Inactive),
            StateChange::TargetMode(Mode::Heat),
        ]);
        assert!(state.apply(&batch));
        assert_eq!(state.target_mode(), Mode::Heat);
        assert!(!state.apply(&batch));
    }

    #[test]
    fn batch_that_cancels_out_is_no_change() {
        let mut state = ApplianceState::new();
        let batch = StateChange::batch(vec![
            StateChange::Power(Power::Active),
            StateChange::Power(Power::Inactive),
        ]);
        assert!(!state.apply(&batch));
        assert_eq!(state, ApplianceState::new());
    }
}
