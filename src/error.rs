//! Error types for the simulator.
//!
//! The core has a single failure mode: a configuration rejected before any
//! trial runs. Playing a game and updating the histogram cannot fail once the
//! configuration is valid.

use thiserror::Error;

/// Top-level error type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ThreesError {
    #[error("Invalid configuration: {field} = {value} ({reason})")]
    InvalidConfiguration {
        field: &'static str,
        value: i64,
        reason: &'static str,
    },
}

impl ThreesError {
    pub(crate) fn invalid(field: &'static str, value: i64, reason: &'static str) -> Self {
        Self::InvalidConfiguration {
            field,
            value,
            reason,
        }
    }

    /// Name of the offending configuration field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidConfiguration { field, .. } => field,
        }
    }
}

/// Result alias for simulator operations.
pub type Result<T> = std::result::Result<T, ThreesError>;
