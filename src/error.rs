// src/error.rs
//! Unified error handling for the synthesis and filtering pipeline
//!
//! Every fallible operation in the crate returns [`EcgResult`]. All three
//! error kinds are raised synchronously at the point of violation and
//! represent caller programming errors (bad parameter combinations), not
//! transient conditions, so none of them is ever retried internally.

use thiserror::Error;

/// Errors produced by the synthesis and filtering pipeline
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EcgError {
    /// A scalar input is outside its documented domain
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter
        name: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// A filter specification cannot be realized at the given sample rate
    #[error("invalid filter spec: {reason}")]
    InvalidSpec {
        /// Why the specification was rejected
        reason: String,
    },

    /// The signal is too short for zero-phase edge padding
    #[error("signal too short: {len} samples, zero-phase filtering needs at least {min_len}")]
    SignalTooShort {
        /// Actual signal length in samples
        len: usize,
        /// Shortest length the filter's edge padding permits
        min_len: usize,
    },
}

/// Result alias used throughout the crate
pub type EcgResult<T> = Result<T, EcgError>;

impl EcgError {
    /// Shorthand for an [`EcgError::InvalidParameter`]
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Shorthand for an [`EcgError::InvalidSpec`]
    pub fn invalid_spec(reason: impl Into<String>) -> Self {
        Self::InvalidSpec {
            reason: reason.into(),
        }
    }
}
