// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Single-writer handle for hosts that share one appliance.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::broadcast;

use super::{Appliance, Dispatch};
use crate::event::ApplianceEvent;
use crate::protocol::Transport;
use crate::state::{ApplianceState, StateChange};
use crate::types::{CoolingThreshold, HeatingThreshold, Mode, Power};

/// Cloneable handle to one [`Appliance`].
///
/// Every call takes the same lock, so get and set handlers bound to
/// different clones run one at a time against one snapshot. The lock is
/// never held while a command is in flight.
///
/// # Examples
///
/// ```
/// use aircon_lib::{Appliance, SharedAppliance};
/// use aircon_lib::command::StateCommand;
/// use aircon_lib::error::ProtocolError;
/// use aircon_lib::protocol::Transport;
/// use aircon_lib::types::Mode;
///
/// struct Noop;
///
/// impl Transport for Noop {
///     async fn send_state(&self, _: &StateCommand) -> Result<(), ProtocolError> {
///         Ok(())
///     }
/// }
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> aircon_lib::Result<()> {
/// let shared = SharedAppliance::new(Appliance::with_transport(Noop)?);
/// let handler = shared.clone();
///
/// handler.set_target_mode(Mode::Cool);
/// assert_eq!(shared.current_mode(), Mode::Cool);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SharedAppliance<T: Transport> {
    inner: Arc<Mutex<Appliance<T>>>,
}

impl<T: Transport> SharedAppliance<T> {
    /// Wraps an appliance.
    #[must_use]
    pub fn new(appliance: Appliance<T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(appliance)),
        }
    }

    /// Runs `f` with exclusive access to the appliance.
    pub fn with<R>(&self, f: impl FnOnce(&mut Appliance<T>) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Returns a copy of the full commanded state.
    #[must_use]
    pub fn state(&self) -> ApplianceState {
        self.inner.lock().state()
    }

    /// Subscribes to state changes and command outcomes.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ApplianceEvent> {
        self.inner.lock().subscribe()
    }

    /// Commanded power state.
    #[must_use]
    pub fn power(&self) -> Power {
        self.inner.lock().power()
    }

    /// Reported mode.
    #[must_use]
    pub fn current_mode(&self) -> Mode {
        self.inner.lock().current_mode()
    }

    /// Commanded mode.
    #[must_use]
    pub fn target_mode(&self) -> Mode {
        self.inner.lock().target_mode()
    }

    /// Cooling threshold.
    #[must_use]
    pub fn cooling_threshold(&self) -> CoolingThreshold {
        self.inner.lock().cooling_threshold()
    }

    /// Heating threshold.
    #[must_use]
    pub fn heating_threshold(&self) -> HeatingThreshold {
        self.inner.lock().heating_threshold()
    }

    /// Reported temperature.
    #[must_use]
    pub fn current_temperature(&self) -> f32 {
        self.inner.lock().current_temperature()
    }

    /// See [`Appliance::set_power`].
    pub fn set_power(&self, power: Power) -> Dispatch {
        self.inner.lock().set_power(power)
    }

    /// See [`Appliance::set_target_mode`].
    pub fn set_target_mode(&self, mode: Mode) -> Dispatch {
        self.inner.lock().set_target_mode(mode)
    }

    /// See [`Appliance::set_cooling_threshold`].
    pub fn set_cooling_threshold(&self, celsius: f32) -> Dispatch {
        self.inner.lock().set_cooling_threshold(celsius)
    }

    /// See [`Appliance::set_heating_threshold`].
    pub fn set_heating_threshold(&self, celsius: f32) -> Dispatch {
        self.inner.lock().set_heating_threshold(celsius)
    }

    /// See [`Appliance::apply`].
    pub fn apply(&self, change: StateChange) -> Dispatch {
        self.inner.lock().apply(change)
    }
}

impl<T: Transport> Clone for SharedAppliance<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Transport> From<Appliance<T>> for SharedAppliance<T> {
    fn from(appliance: Appliance<T>) -> Self {
        Self::new(appliance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::StateCommand;
    use crate::error::ProtocolError;

    #[derive(Debug, Default)]
    struct Counter {
        sent: Mutex<usize>,
    }

    impl Transport for Counter {
        async fn send_state(&self, _command: &StateCommand) -> Result<(), ProtocolError> {
            *self.sent.lock() += 1;
            Ok(())
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn concurrent_handlers_see_one_snapshot() {
        let shared = SharedAppliance::new(Appliance::with_transport(Counter::default()).unwrap());
        let _ = shared.set_target_mode(Mode::Cool);

        let mut tasks = Vec::new();
        for i in 0..8u8 {
            let handle = shared.clone();
            tasks.push(tokio::spawn(async move {
                handle
                    .set_cooling_threshold(f32::from(17 + i))
                    .wait()
                    .await
            }));
        }
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        let state = shared.state();
        assert!(
            (state.current_temperature() - state.cooling_threshold().celsius()).abs()
                < f32::EPSILON
        );
        assert_eq!(shared.current_mode(), Mode::Cool);
    }

    #[tokio::test]
    async fn with_gives_exclusive_access() {
        let shared: SharedAppliance<Counter> =
            Appliance::with_transport(Counter::default()).unwrap().into();

        let dispatch = shared.with(|appliance| {
            let _ = appliance.set_power(Power::Active);
            appliance.set_target_mode(Mode::Heat)
        });
        dispatch.wait().await.unwrap();

        assert_eq!(shared.with(|a| *a.transport().sent.lock()), 1);
        assert_eq!(shared.power(), Power::Active);
        assert_eq!(shared.heating_threshold().value(), 30);
    }
}
