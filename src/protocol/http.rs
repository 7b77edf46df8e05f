// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for the air conditioner's control endpoint.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::ACCEPT;

use crate::command::StateCommand;
use crate::error::ProtocolError;
use crate::protocol::Transport;

// ============================================================================
// HttpConfig - Connection parameters for the device
// ============================================================================

/// Configuration for the device's HTTP endpoint.
///
/// The device exposes a single `PUT /state` endpoint with no
/// authentication. Each command is an independent request.
///
/// # Examples
///
/// ```
/// use aircon_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// let config = HttpConfig::new("192.168.88.152");
/// assert_eq!(config.state_url(), "http://192.168.88.152/state");
///
/// let config = HttpConfig::new("aircon.local")
///     .with_port(8080)
///     .with_timeout(Duration::from_secs(2));
/// assert_eq!(config.state_url(), "http://aircon.local:8080/state");
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    host: String,
    port: u16,
    use_https: bool,
    timeout: Duration,
}

impl HttpConfig {
    /// Default HTTP port.
    pub const DEFAULT_PORT: u16 = 80;
    /// Default HTTPS port.
    pub const DEFAULT_HTTPS_PORT: u16 = 443;
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
    /// Path of the state endpoint.
    pub const STATE_PATH: &'static str = "/state";

    /// Creates a new HTTP configuration for the specified host.
    ///
    /// # Arguments
    ///
    /// * `host` - Hostname or IP address of the device. A `host:port`
    ///   string or a full `http://` base URL is also accepted.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            use_https: false,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Enables HTTPS.
    ///
    /// If port hasn't been explicitly set, it will be changed to 443.
    #[must_use]
    pub fn with_https(mut self) -> Self {
        self.use_https = true;
        if self.port == Self::DEFAULT_PORT {
            self.port = Self::DEFAULT_HTTPS_PORT;
        }
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns whether HTTPS is enabled.
    #[must_use]
    pub fn use_https(&self) -> bool {
        self.use_https
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the base URL from this configuration.
    #[must_use]
    pub fn base_url(&self) -> String {
        if self.host.starts_with("http://") || self.host.starts_with("https://") {
            return self.host.trim_end_matches('/').to_string();
        }

        let scheme = if self.use_https { "https" } else { "http" };
        let port_suffix =
            if (self.use_https && self.port == 443) || (!self.use_https && self.port == 80) {
                String::new()
            } else {
                format!(":{}", self.port)
            };
        format!("{scheme}://{}{port_suffix}", self.host)
    }

    /// Returns the full URL commands are sent to.
    #[must_use]
    pub fn state_url(&self) -> String {
        format!("{}{}", self.base_url(), Self::STATE_PATH)
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the host is empty or the HTTP client cannot be
    /// created.
    pub fn into_client(self) -> Result<HttpClient, ProtocolError> {
        if self.host.trim().is_empty() {
            return Err(ProtocolError::InvalidAddress(
                "host is required".to_string(),
            ));
        }

        let state_url = self.state_url();

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(HttpClient { state_url, client })
    }
}

// ============================================================================
// HttpClient - Transport implementation
// ============================================================================

/// HTTP client for the device's `/state` endpoint.
///
/// # Examples
///
/// ```no_run
/// use aircon_lib::command::StateCommand;
/// use aircon_lib::protocol::{HttpConfig, Transport};
/// use aircon_lib::types::{DeviceMode, FanSpeed};
///
/// # async fn example() -> aircon_lib::Result<()> {
/// let client = HttpConfig::new("192.168.88.152").into_client()?;
/// let cmd = StateCommand::new(DeviceMode::Cool, FanSpeed::Min, 22, true);
/// client.send_state(&cmd).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    state_url: String,
    client: Client,
}

impl HttpClient {
    /// Creates a client for the specified host with default settings.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new(host: impl Into<String>) -> Result<Self, ProtocolError> {
        HttpConfig::new(host).into_client()
    }

    /// Returns the URL commands are sent to.
    #[must_use]
    pub fn state_url(&self) -> &str {
        &self.state_url
    }
}

impl Transport for HttpClient {
    async fn send_state(&self, command: &StateCommand) -> Result<(), ProtocolError> {
        tracing::debug!(url = %self.state_url, command = %command, "Sending HTTP state command");

        let response = self
            .client
            .put(&self.state_url)
            .header(ACCEPT, "application/json; charset=UTF-8")
            .json(command)
            .send()
            .await
            .map_err(ProtocolError::Http)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProtocolError::Rejected {
                status: status.as_u16(),
            });
        }

        tracing::debug!(status = status.as_u16(), "Device accepted state command");

        Ok(())
    }
}
