//! Error types for device protocols.

use thiserror::Error;

/// Errors that can occur when building device commands.
///
/// Encoding an already constructed [`DeviceCommand`](crate::DeviceCommand)
/// never fails. These errors come from converting caller values (typically
/// floating point geometry) into the integer parameters the wire format
/// carries.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProtocolError {
    /// Parameter is NaN or infinite.
    #[error("{name} is not a finite number: {value}")]
    NonFinite {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// Parameter has a fractional part.
    #[error("{name} must be a whole number, got {value}")]
    NonInteger {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// Parameter does not fit the device integer range.
    #[error("{name} is out of range [{min}, {max}]: {value}")]
    OutOfRange {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
        /// Smallest accepted value.
        min: i32,
        /// Largest accepted value.
        max: i32,
    },

    /// Unknown protocol name.
    #[error("unknown device protocol: {0}")]
    UnknownProtocol(String),
}

/// Result type alias for protocol operations.
pub type ProtocolResult<T> = Result<T, ProtocolError>;
