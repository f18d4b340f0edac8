//! # EventBrite Connector
//!
//! A Rust client for the Eventbrite REST API. Remote resources (events,
//! orders, users, venues, media, ...) are mapped onto local entities that
//! share one lifecycle, one response cache and one request channel.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ConnectorConfig`] and [`ConnectorConfigBuilder`]
//! - Validated newtypes for credentials and endpoints
//! - The OAuth 2.0 authorization code flow via [`auth::oauth`]
//! - A pluggable [`CredentialStore`] for the access token
//! - A [`Connector`] that builds requests and keeps an identity cache of entities
//! - Entities with cached loads and optional create/update/delete/upload
//!   capabilities, see [`entity`]
//!
//! ## Quick Start
//!
//! ```rust
//! use eventbrite_connector::{ConnectorConfig, ClientId, ClientSecret, AccessToken};
//!
//! let config = ConnectorConfig::builder()
//!     .client_id(ClientId::new("your-client-id").unwrap())
//!     .client_secret(ClientSecret::new("your-client-secret").unwrap())
//!     .access_token(AccessToken::new("your-token").unwrap())
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## OAuth Authentication
//!
//! ```rust,ignore
//! use eventbrite_connector::Connector;
//!
//! let connector = Connector::new(config);
//!
//! // Step 1: redirect the user
//! let url = connector.authorization_url();
//!
//! // Step 2: exchange the code sent back to the redirect URI
//! let token = connector.exchange_auth_code(&code).await?;
//! ```
//!
//! ## Working with Entities
//!
//! ```rust,ignore
//! use eventbrite_connector::entity::{Conditions, Entity, EntityFactory};
//! use serde_json::json;
//!
//! // Registered, cached instances
//! let me = connector.add_entity("users", None)?;
//! let organizations = me
//!     .lock()
//!     .await
//!     .load("organizations", &Conditions::new(), false)
//!     .await?
//!     .clone();
//!
//! // One-off creation through the factory
//! let values = json!({"event": {"name": {"html": "Launch party"}}});
//! let event = EntityFactory::create(&connector, "events", values.as_object().unwrap().clone()).await?;
//! println!("created {:?}", event.entity_id());
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: tokens live in an injected [`CredentialStore`]
//! - **Fail-fast validation**: all newtypes validate on construction
//! - **Thread-safe**: connectors and entities are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime

pub mod auth;
pub mod clients;
pub mod config;
pub mod entity;
pub mod error;

// Re-export public types at crate root for convenience
pub use auth::{CredentialStore, FailedRequest, MemoryCredentialStore};
pub use config::{
    AccessToken, ApiEndpoint, ClientId, ClientSecret, ConnectorConfig, ConnectorConfigBuilder,
};
pub use error::ConfigError;

// Re-export client types
pub use clients::{
    Connector, ConnectorError, HttpMethod, HttpTransport, RequestSpec, Transport, TransportError,
    WeakConnector,
};

// Re-export entity types
pub use entity::{
    Capability, Conditions, Creatable, Deletable, Entity, EntityError, EntityFactory,
    SharedEntity, Updatable, Uploadable,
};
