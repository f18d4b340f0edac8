//! Authentication for the EventBrite connector.
//!
//! - [`oauth`]: authorization URL, token exchange request and response parsing
//! - [`CredentialStore`]: where the connector persists its access token
//! - [`MemoryCredentialStore`]: the default in-memory store
//! - [`FailedRequest`]: context recorded when a request lacks a token

mod credential_store;
pub mod oauth;

pub use credential_store::{CredentialStore, FailedRequest, MemoryCredentialStore};
