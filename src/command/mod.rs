// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wire command encoding.
//!
//! [`encode`] turns an [`ApplianceState`] into the [`StateCommand`] the
//! device accepts, or into nothing when the state cannot be expressed as a
//! complete command.
//!
//! # Mapping
//!
//! | State | Field | Value |
//! |-------|-------|-------|
//! | `Power::Active` / `Power::Inactive` | `power` | `true` / `false` |
//! | `Mode::Cool` | `mode`, `temp` | `1`, cooling threshold |
//! | `Mode::Heat` | `mode`, `temp` | `3`, heating threshold |
//! | `Mode::Auto` | - | no command |
//! | any | `fan` | `1` (minimum) |
//!
//! # Examples
//!
//! ```
//! use aircon_lib::command::encode;
//! use aircon_lib::state::{ApplianceState, StateChange};
//! use aircon_lib::types::{Mode, Power};
//!
//! let mut state = ApplianceState::new();
//! assert!(encode(&state).is_none()); // auto mode
//!
//! state.apply(&StateChange::Power(Power::Active));
//! state.apply(&StateChange::TargetMode(Mode::Heat));
//!
//! let cmd = encode(&state).unwrap();
//! assert_eq!((cmd.mode(), cmd.fan(), cmd.temp(), cmd.power()), (3, 1, 30, true));
//! ```

mod state;

pub use state::StateCommand;

use crate::state::ApplianceState;
use crate::types::{DeviceMode, FanSpeed, Mode};

/// Fan speed carried by every command.
pub const FIXED_FAN_SPEED: FanSpeed = FanSpeed::Min;

/// Encodes the state into a device command.
///
/// Returns `None` when no complete command exists. The device never gets a
/// partial payload: auto mode has no device representation, so the whole
/// command is suppressed instead of being sent with a default mode.
#[must_use]
pub fn encode(state: &ApplianceState) -> Option<StateCommand> {
    let power = state.power().as_wire();
    let (mode, temp) = match state.target_mode() {
        Mode::Heat => (DeviceMode::Heat, state.heating_threshold().value()),
        Mode::Cool => (DeviceMode::Cool, state.cooling_threshold().value()),
        Mode::Auto => return None,
    };

    Some(StateCommand::new(mode, FIXED_FAN_SPEED, temp, power))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StateChange;
    use crate::types::Power;

    fn state_with(changes: &[StateChange]) -> ApplianceState {
        let mut state = ApplianceState::new();
        for change in changes {
            state.apply(change);
        }
        state
    }

    #[test]
    fn active_cool_uses_cooling_threshold() {
        let state = state_with(&[
            StateChange::Power(Power::Active),
            StateChange::TargetMode(Mode::Cool),
            StateChange::cooling_threshold(18.0),
        ]);
        let cmd = encode(&state).unwrap();
        assert_eq!(
            serde_json::to_value(cmd).unwrap(),
            serde_json::json!({ "mode": 1, "fan": 1, "temp": 18, "power": true })
        );
    }

    #[test]
    fn heat_uses_heating_threshold() {
        let state = state_with(&[StateChange::TargetMode(Mode::Heat)]);
        let cmd = encode(&state).unwrap();
        assert_eq!(cmd.mode(), 3);
        assert_eq!(cmd.temp(), 30);
        assert!(!cmd.power());
    }

    #[test]
    fn inactive_still_produces_command() {
        let state = state_with(&[
            StateChange::TargetMode(Mode::Cool),
            StateChange::Power(Power::Inactive),
        ]);
        let cmd = encode(&state).unwrap();
        assert!(!cmd.power());
        assert_eq!(cmd.temp(), 22);
    }

    #[test]
    fn auto_suppresses_command_for_any_power() {
        let off = ApplianceState::new();
        assert_eq!(off.target_mode(), Mode::Auto);
        assert!(encode(&off).is_none());

        let on = state_with(&[StateChange::Power(Power::Active)]);
        assert!(encode(&on).is_none());
    }

    #[test]
    fn fan_is_always_minimum() {
        for mode in [Mode::Heat, Mode::Cool] {
            let state = state_with(&[StateChange::TargetMode(mode)]);
            assert_eq!(encode(&state).unwrap().fan(), 1);
        }
    }

    #[test]
    fn threshold_of_inactive_mode_is_ignored() {
        let state = state_with(&[
            StateChange::TargetMode(Mode::Cool),
            StateChange::heating_threshold(24.0),
        ]);
        assert_eq!(encode(&state).unwrap().temp(), 22);
    }
}
