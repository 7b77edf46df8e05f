// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP appliance builder.

use std::time::Duration;

use tokio::runtime::Handle;

use crate::appliance::Appliance;
use crate::error::Error;
use crate::protocol::{HttpClient, HttpConfig};

/// Builder for an appliance controlled over HTTP.
///
/// Created with `Appliance::http("host")` or
/// `Appliance::http_config(HttpConfig::new("host").with_port(8080))`.
///
/// # Examples
///
/// ```no_run
/// use aircon_lib::Appliance;
/// use std::time::Duration;
///
/// # async fn example() -> aircon_lib::Result<()> {
/// let appliance = Appliance::http("192.168.88.152")
///     .with_timeout(Duration::from_secs(3))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct HttpApplianceBuilder {
    config: HttpConfig,
    runtime: Option<Handle>,
    event_capacity: Option<usize>,
}

impl HttpApplianceBuilder {
    pub(crate) fn new(config: HttpConfig) -> Self {
        Self {
            config,
            runtime: None,
            event_capacity: None,
        }
    }

    /// Sets the device port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.config = self.config.with_port(port);
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.with_timeout(timeout);
        self
    }

    /// Runs dispatches on the given runtime instead of the current one.
    ///
    /// Needed when the appliance is built outside an async context.
    #[must_use]
    pub fn with_runtime(mut self, runtime: Handle) -> Self {
        self.runtime = Some(runtime);
        self
    }

    /// Sets how many events a slow subscriber may fall behind.
    #[must_use]
    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = Some(capacity);
        self
    }

    /// Returns the HTTP configuration.
    #[must_use]
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Builds the appliance.
    ///
    /// No request is made; the device is only contacted on the first
    /// command.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - the host is empty or the HTTP client cannot be created
    /// - no runtime was given and none is running
    pub fn build(self) -> Result<Appliance<HttpClient>, Error> {
        let client = self.config.into_client()?;
        let runtime = match self.runtime {
            Some(handle) => handle,
            None => Handle::try_current().map_err(|_| Error::NoRuntime)?,
        };

        tracing::debug!(url = %client.state_url(), "Built HTTP appliance");

        Ok(Appliance::assemble(client, runtime, self.event_capacity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_outside_runtime_fails() {
        let result = Appliance::http("192.168.88.152").build();
        assert!(matches!(result, Err(Error::NoRuntime)));
    }

    #[test]
    fn build_with_explicit_runtime() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let appliance = Appliance::http("192.168.88.152")
            .with_runtime(runtime.handle().clone())
            .build()
            .unwrap();
        assert_eq!(
            appliance.transport().state_url(),
            "http://192.168.88.152/state"
        );
    }

    #[tokio::test]
    async fn builder_options_reach_config() {
        let builder = Appliance::http("aircon.local")
            .with_port(8080)
            .with_timeout(Duration::from_secs(2));
        assert_eq!(builder.config().port(), 8080);
        assert_eq!(builder.config().timeout(), Duration::from_secs(2));

        let appliance = builder.build().unwrap();
        assert_eq!(
            appliance.transport().state_url(),
            "http://aircon.local:8080/state"
        );
    }

    #[tokio::test]
    async fn empty_host_fails() {
        let result = Appliance::http("").build();
        assert!(matches!(result, Err(Error::Protocol(_))));
    }
}
