// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The appliance controller.
//!
//! [`Appliance`] owns the commanded state of one air conditioner. Getters
//! read that state. Setters compare the new value with the stored one and,
//! only when it differs, update the state, encode it and hand the command to
//! the transport on a background task.
//!
//! # Concurrency
//!
//! Setters take `&mut self`: an `Appliance` is driven by one caller at a
//! time. Hosts that call handlers from several places share it through a
//! [`SharedAppliance`], which serializes every call behind one lock.
//!
//! ```no_run
//! use aircon_lib::Appliance;
//! use aircon_lib::types::{Mode, Power};
//!
//! # async fn example() -> aircon_lib::Result<()> {
//! let mut appliance = Appliance::http("192.168.88.152").build()?;
//!
//! appliance.set_power(Power::Active); // auto mode: nothing sent yet
//! appliance.set_target_mode(Mode::Cool); // sends mode=1, temp=22
//! appliance.set_cooling_threshold(19.0); // sends mode=1, temp=19
//!
//! assert_eq!(appliance.current_temperature(), 19.0);
//! # Ok(())
//! # }
//! ```

mod dispatch;
#[cfg(feature = "http")]
mod http_builder;
mod shared;

pub use dispatch::{Dispatch, DispatchHandle};
#[cfg(feature = "http")]
pub use http_builder::HttpApplianceBuilder;
pub use shared::SharedAppliance;

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::broadcast;

use crate::command;
use crate::error::Error;
use crate::event::{ApplianceEvent, EventBus};
#[cfg(feature = "http")]
use crate::protocol::{HttpClient, HttpConfig};
use crate::protocol::Transport;
use crate::state::{ApplianceState, StateChange};
use crate::types::{CoolingThreshold, HeatingThreshold, Mode, Power};

/// Controller for a single air conditioner.
///
/// # Type Parameter
///
/// `T` is the transport commands are delivered with, [`HttpClient`] for the
/// device's HTTP endpoint.
#[derive(Debug)]
pub struct Appliance<T: Transport> {
    transport: Arc<T>,
    state: ApplianceState,
    events: EventBus,
    runtime: Handle,
}

#[cfg(feature = "http")]
impl Appliance<HttpClient> {
    /// Starts building an appliance reached at `http://<host>/state`.
    #[must_use]
    pub fn http(host: impl Into<String>) -> HttpApplianceBuilder {
        HttpApplianceBuilder::new(HttpConfig::new(host))
    }

    /// Starts building an appliance from a full HTTP configuration.
    #[must_use]
    pub fn http_config(config: HttpConfig) -> HttpApplianceBuilder {
        HttpApplianceBuilder::new(config)
    }
}

impl<T: Transport> Appliance<T> {
    /// Creates an appliance in its power-up state using a custom transport.
    ///
    /// Dispatches run on the runtime that is current at this call.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoRuntime` if called outside a tokio runtime.
    pub fn with_transport(transport: T) -> Result<Self, Error> {
        let runtime = Handle::try_current().map_err(|_| Error::NoRuntime)?;
        Ok(Self::assemble(transport, runtime, None))
    }

    /// Creates an appliance whose dispatches run on `runtime`.
    #[must_use]
    pub fn with_transport_on(transport: T, runtime: Handle) -> Self {
        Self::assemble(transport, runtime, None)
    }

    pub(crate) fn assemble(transport: T, runtime: Handle, event_capacity: Option<usize>) -> Self {
        let events = event_capacity.map_or_else(EventBus::new, EventBus::with_capacity);
        Self {
            transport: Arc::new(transport),
            state: ApplianceState::new(),
            events,
            runtime,
        }
    }

    /// Returns the transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns a copy of the full commanded state.
    #[must_use]
    pub fn state(&self) -> ApplianceState {
        self.state
    }

    /// Subscribes to state changes and command outcomes.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ApplianceEvent> {
        self.events.subscribe()
    }

    /// Returns the event bus of this appliance.
    #[must_use]
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    // ========== Getters ==========

    /// Commanded power state.
    #[must_use]
    pub fn power(&self) -> Power {
        self.state.power()
    }

    /// Reported mode, always the last accepted target mode.
    #[must_use]
    pub fn current_mode(&self) -> Mode {
        self.state.current_mode()
    }

    /// Commanded mode.
    #[must_use]
    pub fn target_mode(&self) -> Mode {
        self.state.target_mode()
    }

    /// Cooling threshold.
    #[must_use]
    pub fn cooling_threshold(&self) -> CoolingThreshold {
        self.state.cooling_threshold()
    }

    /// Heating threshold.
    #[must_use]
    pub fn heating_threshold(&self) -> HeatingThreshold {
        self.state.heating_threshold()
    }

    /// Reported temperature, the last threshold that was set.
    #[must_use]
    pub fn current_temperature(&self) -> f32 {
        self.state.current_temperature()
    }

    /// Display temperature, the last threshold that was set.
    #[must_use]
    pub fn display_temperature(&self) -> f32 {
        self.state.display_temperature()
    }

    // ========== Setters ==========

    /// Switches the appliance on or off.
    pub fn set_power(&mut self, power: Power) -> Dispatch {
        self.apply(StateChange::Power(power))
    }

    /// Selects the operating mode; the current mode follows.
    pub fn set_target_mode(&mut self, mode: Mode) -> Dispatch {
        self.apply(StateChange::TargetMode(mode))
    }

    /// Sets the cooling threshold, clamped to 17..=25.
    ///
    /// On change the current and display temperatures take the new value.
    pub fn set_cooling_threshold(&mut self, celsius: f32) -> Dispatch {
        self.apply(StateChange::cooling_threshold(celsius))
    }

    /// Sets the heating threshold, clamped to 22..=30.
    ///
    /// On change the current and display temperatures take the new value.
    pub fn set_heating_threshold(&mut self, celsius: f32) -> Dispatch {
        self.apply(StateChange::heating_threshold(celsius))
    }

    /// Applies any change, dispatching at most one command.
    ///
    /// A change that leaves the state as it was is a no-op: no log line, no
    /// event, no encoding and no network traffic.
    pub fn apply(&mut self, change: StateChange) -> Dispatch {
        let previous = self.state;
        if !self.state.apply(&change) {
            return Dispatch::Unchanged;
        }

        log_transition(&previous, &self.state, &change);
        self.events.publish(ApplianceEvent::StateChanged {
            change,
            new_state: self.state,
        });

        self.dispatch()
    }

    fn dispatch(&self) -> Dispatch {
        let Some(command) = command::encode(&self.state) else {
            tracing::debug!(
                power = %self.state.power(),
                mode = %self.state.target_mode(),
                "No complete command for state, nothing sent"
            );
            self.events.publish(ApplianceEvent::CommandSuppressed { state: self.state });
            return Dispatch::Suppressed;
        };

        tracing::info!(%command, "Send");

        let transport = Arc::clone(&self.transport);
        let events = self.events.clone();
        let task = self.runtime.spawn(async move {
            let result = transport.send_state(&command).await;
            match &result {
                Ok(()) => events.publish(ApplianceEvent::CommandSent { command }),
                Err(e) => {
                    tracing::warn!(error = %e, %command, "Command not delivered");
                    events.publish(ApplianceEvent::CommandFailed {
                        command,
                        error: e.to_string(),
                    });
                }
            }
            result
        });

        Dispatch::Sent(DispatchHandle::new(command, task))
    }
}

/// Logs `old -> new` for every attribute the change moved.
fn log_transition(previous: &ApplianceState, current: &ApplianceState, change: &StateChange) {
    let attribute = change.attribute();
    match change {
        StateChange::Power(_) if previous.power() != current.power() => {
            tracing::info!(
                attribute,
                "Change {attribute}: {} -> {}",
                previous.power(),
                current.power()
            );
        }
        StateChange::TargetMode(_) if previous.target_mode() != current.target_mode() => {
            tracing::info!(
                attribute,
                "Change {attribute}: {} -> {}",
                previous.target_mode(),
                current.target_mode()
            );
        }
        StateChange::CoolingThreshold(_)
            if previous.cooling_threshold() != current.cooling_threshold() =>
        {
            tracing::info!(
                attribute,
                "Change {attribute}: {} -> {}",
                previous.cooling_threshold(),
                current.cooling_threshold()
            );
        }
        StateChange::HeatingThreshold(_)
            if previous.heating_threshold() != current.heating_threshold() =>
        {
            tracing::info!(
                attribute,
                "Change {attribute}: {} -> {}",
                previous.heating_threshold(),
                current.heating_threshold()
            );
        }
        StateChange::Batch(changes) => {
            for c in changes {
                log_transition(previous, current, c);
            }
        }
        _ => {}
    }
}
