//! Error types for the record services.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Invalid-argument failures raised by records and services.
///
/// Every variant is a deterministic consequence of caller input. The message
/// names the offending field or identity and the rule it broke.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Required value was absent
    #[error("{field} must not be null")]
    Missing { field: &'static str },

    /// Value was the empty string where emptiness is rejected
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    /// Value is longer than the field allows
    #[error("{field} cannot exceed {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// Value is not exactly `len` ASCII digits
    #[error("{field} must be exactly {len} digits")]
    NotDigits { field: &'static str, len: usize },

    /// Date lies strictly before the current instant
    #[error("{field} cannot be in the past")]
    InPast { field: &'static str },

    /// A record with this identity is already stored
    #[error("{field} already exists: {id}")]
    AlreadyExists { field: &'static str, id: String },

    /// No record with this identity is stored
    #[error("{field} not found: {id}")]
    NotFound { field: &'static str, id: String },
}

impl RecordError {
    /// Name of the field or identity the failure refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field }
            | Self::Empty { field }
            | Self::TooLong { field, .. }
            | Self::NotDigits { field, .. }
            | Self::InPast { field }
            | Self::AlreadyExists { field, .. }
            | Self::NotFound { field, .. } => field,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors raised while handling a line on the command surface.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The line was not a well-formed command
    #[error("Malformed command: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The command was rejected by a record or service
    #[error(transparent)]
    Record(#[from] RecordError),
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RecordError::Missing {
            field: "contact_id",
        };
        assert_eq!(err.to_string(), "contact_id must not be null");

        let err = RecordError::TooLong {
            field: "name",
            max: 20,
        };
        assert_eq!(err.to_string(), "name cannot exceed 20 characters");

        let err = RecordError::NotDigits {
            field: "phone",
            len: 10,
        };
        assert_eq!(err.to_string(), "phone must be exactly 10 digits");

        let err = RecordError::InPast {
            field: "appointment_date",
        };
        assert_eq!(err.to_string(), "appointment_date cannot be in the past");

        let err = ConfigError::InvalidValue {
            var: "RECORDS_PRETTY_OUTPUT".to_string(),
            reason: "Must be true or false".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for RECORDS_PRETTY_OUTPUT: Must be true or false"
        );
    }

    #[test]
    fn test_identity_error_variants() {
        let err = RecordError::NotFound {
            field: "task_id",
            id: "NOPE".to_string(),
        };
        assert_eq!(err.to_string(), "task_id not found: NOPE");
        assert_eq!(err.field(), "task_id");

        let err = RecordError::AlreadyExists {
            field: "contact_id",
            id: "ID1".to_string(),
        };
        assert!(err.to_string().contains("already exists"));
        assert!(err.to_string().contains("ID1"));
    }

    #[test]
    fn test_command_error_wraps_record_error() {
        let err: CommandError = RecordError::Empty { field: "address" }.into();
        assert_eq!(err.to_string(), "address must not be empty");
    }
}
