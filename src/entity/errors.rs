//! Error type for entity operations.

use std::path::PathBuf;

use thiserror::Error;

use crate::clients::ConnectorError;
use crate::entity::Capability;

/// Error type for [`Entity`](crate::entity::Entity) operations.
///
/// Every request an entity issues goes through its connector, so connector
/// failures (missing token, transport, decoding) surface as
/// [`EntityError::Connector`].
///
/// # Example
///
/// ```rust,ignore
/// use eventbrite_connector::{ConnectorError, EntityError};
///
/// match event.delete().await {
///     Err(EntityError::InvalidState(reason)) => println!("{reason}"),
///     Err(EntityError::Connector(ConnectorError::MissingCredential)) => {
///         // send the user through the OAuth flow
///     }
///     Err(e) => println!("Other error: {e}"),
///     Ok(_) => {}
/// }
/// ```
#[derive(Debug, Error)]
pub enum EntityError {
    /// A capability was invoked in the wrong lifecycle state.
    #[error("Invalid state: {0}")]
    InvalidState(&'static str),

    /// The operation needs an entity id and the entity has none.
    #[error("Cannot address entity of type {api_type} without an entity id")]
    MissingIdentity {
        /// The resource type name.
        api_type: &'static str,
    },

    /// A data key could not be parsed back into property and conditions.
    #[error("Malformed data key: {key}")]
    MalformedKey {
        /// The offending key.
        key: String,
    },

    /// A media upload crop mask is missing one of its four parameters.
    #[error("You must specify all crop mask params, missing {missing}")]
    IncompleteCropMask {
        /// The first missing parameter.
        missing: &'static str,
    },

    /// The resource variant does not expose the capability.
    #[error("Entity of type {api_type} does not support {capability}")]
    UnsupportedCapability {
        /// The resource type name.
        api_type: &'static str,
        /// The requested capability.
        capability: Capability,
    },

    /// The resource variant cannot be loaded with the given arguments.
    #[error("Entity of type {api_type} cannot be loaded with {argument}")]
    UnsupportedLoad {
        /// The resource type name.
        api_type: &'static str,
        /// The rejected argument.
        argument: &'static str,
    },

    /// The entity was created remotely but loading it afterwards failed.
    ///
    /// The resource exists on the server under `id`.
    #[error("Entity of type {api_type} was created with id {id} but could not be loaded: {source}")]
    CreatedNotLoaded {
        /// The resource type name.
        api_type: &'static str,
        /// The id assigned by the server.
        id: String,
        /// Why the load failed.
        #[source]
        source: Box<EntityError>,
    },

    /// The entity is not attached to a live connector.
    #[error("Entity is not attached to a connector")]
    Detached,

    /// The API refused to hand out upload instructions.
    #[error("Cannot proceed uploading the specified file: {message}")]
    UploadRejected {
        /// What was missing from the instructions.
        message: String,
    },

    /// A file to upload could not be read.
    #[error("Cannot read file {}: {source}", path.display())]
    File {
        /// The file path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The connector failed to issue the request.
    #[error(transparent)]
    Connector(#[from] ConnectorError),
}

// Verify EntityError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<EntityError>();
};
