// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the air conditioner library.
//!
//! Validation errors surface when host values are converted into the
//! crate's types. Transport errors never reach a setter: they are only
//! observable through a [`DispatchHandle`](crate::DispatchHandle) or an
//! [`ApplianceEvent::CommandFailed`](crate::event::ApplianceEvent::CommandFailed).

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// Error occurred while talking to the device.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// The appliance was built outside a tokio runtime.
    #[error("no tokio runtime available to dispatch commands")]
    NoRuntime,
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u16,
        /// Maximum allowed value.
        max: u16,
        /// The actual value that was provided.
        actual: u16,
    },

    /// A host characteristic code has no matching variant.
    #[error("unknown {attribute} code: {code}")]
    UnknownCode {
        /// The attribute the code was meant for.
        attribute: &'static str,
        /// The code that was provided.
        code: u8,
    },

    /// A textual value has no matching variant.
    #[error("invalid value name: {0}")]
    InvalidName(String),
}

/// Errors related to the device transport.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The device answered with a non-success status.
    #[error("device rejected command: HTTP {status}")]
    Rejected {
        /// The HTTP status code returned.
        status: u16,
    },

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// The dispatch task ended before reporting a result.
    #[error("dispatch task aborted: {0}")]
    TaskAborted(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::OutOfRange {
            min: 17,
            max: 25,
            actual: 30,
        };
        assert_eq!(err.to_string(), "value 30 is out of range [17, 25]");
    }

    #[test]
    fn unknown_code_display() {
        let err = ValueError::UnknownCode {
            attribute: "mode",
            code: 9,
        };
        assert_eq!(err.to_string(), "unknown mode code: 9");
    }

    #[test]
    fn error_from_value_error() {
        let err: Error = ValueError::InvalidName("dry".to_string()).into();
        assert!(matches!(err, Error::Value(ValueError::InvalidName(_))));
    }

    #[test]
    fn protocol_error_display() {
        let err = ProtocolError::Rejected { status: 500 };
        assert_eq!(err.to_string(), "device rejected command: HTTP 500");
    }
}
