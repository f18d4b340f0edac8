//! Configuration error types for the EventBrite connector.
//!
//! All configuration constructors return `Result<T, ConfigError>` so invalid
//! credentials or endpoints are rejected before any request is built.
//!
//! # Example
//!
//! ```rust
//! use eventbrite_connector::{ClientId, ConfigError};
//!
//! let result = ClientId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyClientId)));
//! ```

use thiserror::Error;

/// Errors that can occur while building connector configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Client id cannot be empty.
    #[error("Client id cannot be empty. Please provide your Eventbrite app client id.")]
    EmptyClientId,

    /// Client secret cannot be empty.
    #[error("Client secret cannot be empty. Please provide your Eventbrite app client secret.")]
    EmptyClientSecret,

    /// An access token was provided but it is empty.
    ///
    /// Absence of a token is expressed with `None`, never with an empty string.
    #[error("Access token cannot be empty. Omit the token instead of passing an empty one.")]
    EmptyAccessToken,

    /// Endpoint URL is invalid.
    #[error("Invalid endpoint '{url}'. Expected an absolute http(s) URL (e.g., 'https://www.eventbriteapi.com/v3').")]
    InvalidEndpoint {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_client_id_error_message() {
        let message = ConfigError::EmptyClientId.to_string();
        assert!(message.contains("Client id cannot be empty"));
    }

    #[test]
    fn test_invalid_endpoint_error_message() {
        let error = ConfigError::InvalidEndpoint {
            url: "ftp://nope".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("ftp://nope"));
        assert!(message.contains("http(s)"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "client_id" };
        assert!(error.to_string().contains("client_id"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyClientSecret;
        let _: &dyn std::error::Error = &error;
    }
}
