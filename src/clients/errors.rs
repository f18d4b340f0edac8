//! Error types for the connector and its transport.
//!
//! - [`TransportError`]: the transport could not produce a successful response
//! - [`ConnectorError`]: everything a [`Connector`](crate::Connector) operation can fail with
//!
//! # Example
//!
//! ```rust,ignore
//! use eventbrite_connector::{Connector, ConnectorError};
//!
//! match connector.get_entity("events", "123") {
//!     Ok(entity) => { /* use it */ }
//!     Err(ConnectorError::UnknownEntity { api_type, id }) => {
//!         println!("{api_type}/{id} was never added");
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned by a [`Transport`](crate::clients::Transport).
///
/// Transport semantics (TLS, redirects, which statuses count as failures)
/// belong to the transport implementation; the connector only propagates
/// the failure.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The server answered with a non-2xx status.
    ///
    /// `message` carries the serialized `error`/`error_description` fields
    /// of the response body when present, otherwise the raw body.
    #[error("HTTP {code}: {message}")]
    Status {
        /// The HTTP status code.
        code: u16,
        /// Serialized error message.
        message: String,
    },

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl TransportError {
    /// Returns the HTTP status code, if the server answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { code, .. } => Some(*code),
            Self::Network(_) => None,
        }
    }
}

/// Error type for [`Connector`](crate::Connector) operations.
#[derive(Debug, Error)]
pub enum ConnectorError {
    /// No access token is available for a request that requires one.
    #[error("Missing Access Token")]
    MissingCredential,

    /// The API reported an error in the response body.
    #[error("Remote error: {message}")]
    RemoteError {
        /// The error reported by the API.
        message: String,
    },

    /// The token exchange returned nothing.
    #[error("Empty response")]
    EmptyResponse,

    /// The transport failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response body is not valid JSON.
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// No entity is registered under the given type and id.
    #[error("Undefined entity {api_type} with id {id}")]
    UnknownEntity {
        /// The resource type name.
        api_type: String,
        /// The entity id.
        id: String,
    },

    /// No resource variant is registered for the given name.
    #[error("Undefined entity type {name}")]
    UnknownEntityType {
        /// The requested type name.
        name: String,
    },
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TransportError>();
    assert_send_sync::<ConnectorError>();
};
