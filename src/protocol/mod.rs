// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transports that deliver commands to the air conditioner.
//!
//! - [`HttpClient`]: `PUT /state` with a JSON body (feature `http`)
//!
//! Any type implementing [`Transport`] can stand in for the HTTP client,
//! for example a bridge to another radio or a recorder in tests.

#[cfg(feature = "http")]
mod http;

#[cfg(feature = "http")]
pub use http::{HttpClient, HttpConfig};

use std::future::Future;

use crate::command::StateCommand;
use crate::error::ProtocolError;

/// A one-way channel to the device.
///
/// Implementations make a single attempt per call. The returned future must
/// be `Send` so the appliance can run it on a spawned task.
pub trait Transport: Send + Sync + 'static {
    /// Sends a complete state command to the device.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the command could not be delivered or the
    /// device refused it.
    fn send_state(
        &self,
        command: &StateCommand,
    ) -> impl Future<Output = Result<(), ProtocolError>> + Send;
}
