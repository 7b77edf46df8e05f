// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State change representation.
//!
//! A [`StateChange`] is one commanded update to an
//! [`ApplianceState`](super::ApplianceState). Every setter of the
//! [`Appliance`](crate::Appliance) is expressed as a change, which lets the
//! state decide whether anything actually moved.
//!
//! # Examples
//!
//! ```
//! use aircon_lib::state::{ApplianceState, StateChange};
//! use aircon_lib::types::Mode;
//!
//! let mut state = ApplianceState::new();
//!
//! assert!(state.apply(&StateChange::TargetMode(Mode::Cool)));
//! // Same value again is not a change
//! assert!(!state.apply(&StateChange::TargetMode(Mode::Cool)));
//! ```

use std::fmt;

use crate::types::{CoolingThreshold, HeatingThreshold, Mode, Power};

/// A commanded change to the appliance state.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum StateChange {
    /// Switch the appliance on or off.
    Power(Power),

    /// Select the operating mode. Also moves the current mode.
    TargetMode(Mode),

    /// Set the cooling threshold. Also moves the current and display
    /// temperatures.
    CoolingThreshold(CoolingThreshold),

    /// Set the heating threshold. Also moves the current and display
    /// temperatures.
    HeatingThreshold(HeatingThreshold),

    /// Several changes applied together, dispatched as one command.
    Batch(Vec<StateChange>),
}

impl StateChange {
    /// Creates a cooling threshold change, clamping to 17..=25.
    #[must_use]
    pub fn cooling_threshold(celsius: f32) -> Self {
        Self::CoolingThreshold(CoolingThreshold::clamped(celsius))
    }

    /// Creates a heating threshold change, clamping to 22..=30.
    #[must_use]
    pub fn heating_threshold(celsius: f32) -> Self {
        Self::HeatingThreshold(HeatingThreshold::clamped(celsius))
    }

    /// Creates a batch of changes.
    #[must_use]
    pub fn batch(changes: Vec<StateChange>) -> Self {
        Self::Batch(changes)
    }

    /// Returns the attribute name used in log lines.
    #[must_use]
    pub fn attribute(&self) -> &'static str {
        match self {
            Self::Power(_) => "Active",
            Self::TargetMode(_) => "TargetHeaterCoolerState",
            Self::CoolingThreshold(_) => "CoolingThresholdTemperature",
            Self::HeatingThreshold(_) => "HeatingThresholdTemperature",
            Self::Batch(_) => "Batch",
        }
    }
}

impl fmt::Display for StateChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Power(power) => write!(f, "{power}"),
            Self::TargetMode(mode) => write!(f, "{mode}"),
            Self::CoolingThreshold(t) => write!(f, "{t}"),
            Self::HeatingThreshold(t) => write!(f, "{t}"),
            Self::Batch(changes) => write!(f, "{} changes", changes.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_constructors_clamp() {
        assert_eq!(
            StateChange::cooling_threshold(10.0),
            StateChange::CoolingThreshold(CoolingThreshold::MIN)
        );
        assert_eq!(
            StateChange::heating_threshold(99.0),
            StateChange::HeatingThreshold(HeatingThreshold::MAX)
        );
    }

    #[test]
    fn display() {
        assert_eq!(StateChange::TargetMode(Mode::Heat).to_string(), "HEAT");
        assert_eq!(StateChange::cooling_threshold(19.0).to_string(), "19°C");
    }
}
