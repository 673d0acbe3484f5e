//! Error types shared by the services and viewmodels.
//!
//! Every error here is recovered at the viewmodel boundary: it becomes a toast
//! and an `Error` fetch state with a manual retry. None of them is fatal.

use thiserror::Error;

/// Failures of the remote pet API, one variant per operation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Listing pets by status failed (network, HTTP status or body)
    #[error("failed to fetch pets: {reason}")]
    Fetch { reason: String },

    /// A single pet could not be read
    #[error("pet {id} not found: {reason}")]
    NotFound { id: i64, reason: String },

    /// The full-record replace was rejected or never reached the server
    #[error("failed to update pet {id}: {reason}")]
    Update { id: i64, reason: String },
}

impl ApiError {
    /// Short text for toasts
    pub fn user_message(&self) -> &'static str {
        match self {
            ApiError::Fetch { .. } => "Failed to fetch pets",
            ApiError::NotFound { .. } => "Could not load pet details",
            ApiError::Update { .. } => "Failed to update pet",
        }
    }
}

/// A form field failed a local check. Never sent to the server.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("localStorage is not available")]
    Unavailable,

    #[error("could not write key `{0}`")]
    Write(String),

    #[error("could not remove key `{0}`")]
    Remove(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages_follow_the_operation() {
        let fetch = ApiError::Fetch { reason: "HTTP 500".into() };
        let missing = ApiError::NotFound { id: 7, reason: "HTTP 404".into() };
        let update = ApiError::Update { id: 7, reason: "HTTP 400".into() };

        assert_eq!(fetch.user_message(), "Failed to fetch pets");
        assert_eq!(missing.user_message(), "Could not load pet details");
        assert_eq!(update.user_message(), "Failed to update pet");
        assert_eq!(missing.to_string(), "pet 7 not found: HTTP 404");
    }

    #[test]
    fn validation_error_converts_into_auth_error() {
        let err: AuthError = ValidationError::new("email", "Please enter your email!").into();
        assert_eq!(err.to_string(), "email: Please enter your email!");
    }
}
