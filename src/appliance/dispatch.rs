// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Outcome of a setter call.

use tokio::task::JoinHandle;

use crate::command::StateCommand;
use crate::error::ProtocolError;

/// What a setter did with the device.
///
/// Dropping this value is the normal fire-and-forget path: a command that
/// was handed to the transport keeps running in the background. Callers
/// that care about delivery can wait on it instead.
///
/// # Examples
///
/// ```no_run
/// use aircon_lib::{Appliance, Dispatch};
/// use aircon_lib::types::Mode;
///
/// # async fn example() -> aircon_lib::Result<()> {
/// let mut appliance = Appliance::http("192.168.88.152").build()?;
///
/// // Fire and forget
/// appliance.set_target_mode(Mode::Heat);
///
/// // Or observe delivery
/// if let Dispatch::Sent(handle) = appliance.set_heating_threshold(24.0) {
///     handle.wait().await?;
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub enum Dispatch {
    /// The value was already stored; nothing was encoded or sent.
    Unchanged,
    /// The state changed but has no complete command (auto mode).
    Suppressed,
    /// A command was handed to the transport.
    Sent(DispatchHandle),
}

impl Dispatch {
    /// Returns `true` if the setter changed the stored state.
    #[must_use]
    pub fn changed(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }

    /// Returns `true` if a command was handed to the transport.
    #[must_use]
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent(_))
    }

    /// Returns the command handed to the transport, if any.
    #[must_use]
    pub fn command(&self) -> Option<StateCommand> {
        match self {
            Self::Sent(handle) => Some(handle.command()),
            Self::Unchanged | Self::Suppressed => None,
        }
    }

    /// Waits for the transport when a command was sent.
    ///
    /// Resolves immediately for [`Unchanged`](Self::Unchanged) and
    /// [`Suppressed`](Self::Suppressed).
    ///
    /// # Errors
    ///
    /// Returns the transport error of a sent command.
    pub async fn wait(self) -> Result<(), ProtocolError> {
        match self {
            Self::Sent(handle) => handle.wait().await,
            Self::Unchanged | Self::Suppressed => Ok(()),
        }
    }
}

/// Handle to a command running on the transport.
#[derive(Debug)]
pub struct DispatchHandle {
    command: StateCommand,
    task: JoinHandle<Result<(), ProtocolError>>,
}

impl DispatchHandle {
    pub(crate) fn new(command: StateCommand, task: JoinHandle<Result<(), ProtocolError>>) -> Self {
        Self { command, task }
    }

    /// The command being delivered.
    #[must_use]
    pub fn command(&self) -> StateCommand {
        self.command
    }

    /// Waits for the transport to finish.
    ///
    /// # Errors
    ///
    /// Returns the transport error, or `ProtocolError::TaskAborted` if the
    /// task panicked or its runtime shut down first.
    pub async fn wait(self) -> Result<(), ProtocolError> {
        match self.task.await {
            Ok(result) => result,
            Err(e) => Err(ProtocolError::TaskAborted(e.to_string())),
        }
    }
}
