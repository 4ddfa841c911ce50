//! Custom error types for the switch manager
//!
//! Malformed requests are the only condition that aborts an operation before
//! anything executes; execution and transport failures are captured as data
//! and handed back to the caller instead.

use std::fmt;

#[derive(Debug)]
pub enum ManagerError {
    /// A required request field is missing
    MalformedRequest { field: String },

    /// A request field is present but unusable
    InvalidValue { field: String, reason: String },

    /// Remote shell session could not be established or executed
    Transport { host: String, reason: String },
}

impl ManagerError {
    pub fn missing(field: &str) -> Self {
        ManagerError::MalformedRequest {
            field: field.to_string(),
        }
    }

    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        ManagerError::InvalidValue {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ManagerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManagerError::MalformedRequest { field } => {
                write!(f, "malformed request: missing required field '{}'", field)
            }
            ManagerError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
            ManagerError::Transport { host, reason } => {
                write!(f, "transport failure on {}: {}", host, reason)
            }
        }
    }
}

impl std::error::Error for ManagerError {}
