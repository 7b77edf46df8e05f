// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Appliance event types.

use crate::command::StateCommand;
use crate::state::{ApplianceState, StateChange};

/// Events emitted by an [`Appliance`](crate::Appliance).
///
/// A setter that changes state emits [`StateChanged`](Self::StateChanged)
/// followed by either [`CommandSuppressed`](Self::CommandSuppressed) or,
/// once the transport has answered, [`CommandSent`](Self::CommandSent) or
/// [`CommandFailed`](Self::CommandFailed). Setters that change nothing emit
/// nothing.
///
/// # Examples
///
/// ```
/// use aircon_lib::event::ApplianceEvent;
/// use aircon_lib::state::ApplianceState;
///
/// let event = ApplianceEvent::CommandSuppressed {
///     state: ApplianceState::new(),
/// };
/// assert!(!event.is_command_outcome());
/// ```
#[derive(Debug, Clone)]
pub enum ApplianceEvent {
    /// The commanded state changed.
    StateChanged {
        /// The change that was accepted.
        change: StateChange,
        /// The complete state after the change.
        new_state: ApplianceState,
    },

    /// The new state has no complete command, nothing was sent.
    CommandSuppressed {
        /// The state that could not be encoded.
        state: ApplianceState,
    },

    /// The transport delivered a command.
    CommandSent {
        /// The command that was delivered.
        command: StateCommand,
    },

    /// The transport failed to deliver a command. It is not retried.
    CommandFailed {
        /// The command that was lost.
        command: StateCommand,
        /// Description of the failure.
        error: String,
    },
}

impl ApplianceEvent {
    /// Returns `true` if this is a state change event.
    #[must_use]
    pub fn is_state_change(&self) -> bool {
        matches!(self, Self::StateChanged { .. })
    }

    /// Returns `true` if this reports the outcome of a transport attempt.
    #[must_use]
    pub fn is_command_outcome(&self) -> bool {
        matches!(self, Self::CommandSent { .. } | Self::CommandFailed { .. })
    }

    /// Returns the command this event is about, if any.
    #[must_use]
    pub fn command(&self) -> Option<&StateCommand> {
        match self {
            Self::CommandSent { command } | Self::CommandFailed { command, .. } => Some(command),
            Self::StateChanged { .. } | Self::CommandSuppressed { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DeviceMode, FanSpeed, Power};

    #[test]
    fn classification() {
        let changed = ApplianceEvent::StateChanged {
            change: StateChange::Power(Power::Active),
            new_state: ApplianceState::new(),
        };
        assert!(changed.is_state_change());
        assert!(!changed.is_command_outcome());
        assert!(changed.command().is_none());
    }

    #[test]
    fn command_accessor() {
        let command = StateCommand::new(DeviceMode::Cool, FanSpeed::Min, 20, true);
        let failed = ApplianceEvent::CommandFailed {
            command,
            error: "connection refused".to_string(),
        };
        assert!(failed.is_command_outcome());
        assert_eq!(failed.command(), Some(&command));
    }
}
