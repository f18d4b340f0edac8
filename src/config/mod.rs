//! Configuration types for the EventBrite connector.
//!
//! - [`ConnectorConfig`]: credentials, endpoints and request settings
//! - [`ConnectorConfigBuilder`]: a builder for [`ConnectorConfig`]
//! - [`ClientId`], [`ClientSecret`], [`AccessToken`]: validated credentials
//! - [`ApiEndpoint`]: a validated base URL
//!
//! # Example
//!
//! ```rust
//! use eventbrite_connector::{ConnectorConfig, ClientId, ClientSecret, AccessToken};
//!
//! let config = ConnectorConfig::builder()
//!     .client_id(ClientId::new("my-client-id").unwrap())
//!     .client_secret(ClientSecret::new("my-secret").unwrap())
//!     .access_token(AccessToken::new("T").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.endpoint().as_ref(), "https://www.eventbriteapi.com/v3");
//! ```

mod newtypes;

pub use newtypes::{AccessToken, ApiEndpoint, ClientId, ClientSecret};

use crate::error::ConfigError;

/// Default base URL for Eventbrite API calls.
pub const API_ENDPOINT: &str = "https://www.eventbriteapi.com/v3";

/// Default base URL for the Eventbrite OAuth endpoints.
pub const OAUTH_ENDPOINT: &str = "https://www.eventbrite.com/oauth";

/// Configuration for a [`Connector`](crate::Connector).
///
/// `ConnectorConfig` is `Clone + Send + Sync`. The connector copies the
/// values it needs at construction; later changes go through the connector's
/// explicit setters.
#[derive(Clone, Debug)]
pub struct ConnectorConfig {
    client_id: ClientId,
    client_secret: ClientSecret,
    access_token: Option<AccessToken>,
    endpoint: ApiEndpoint,
    oauth_endpoint: ApiEndpoint,
    user_agent_prefix: Option<String>,
}

impl ConnectorConfig {
    /// Creates a new builder for constructing a `ConnectorConfig`.
    #[must_use]
    pub fn builder() -> ConnectorConfigBuilder {
        ConnectorConfigBuilder::new()
    }

    /// Returns the client id.
    #[must_use]
    pub const fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Returns the client secret.
    #[must_use]
    pub const fn client_secret(&self) -> &ClientSecret {
        &self.client_secret
    }

    /// Returns the initial access token, if one was configured.
    #[must_use]
    pub const fn access_token(&self) -> Option<&AccessToken> {
        self.access_token.as_ref()
    }

    /// Returns the API endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &ApiEndpoint {
        &self.endpoint
    }

    /// Returns the OAuth endpoint.
    #[must_use]
    pub const fn oauth_endpoint(&self) -> &ApiEndpoint {
        &self.oauth_endpoint
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    pub(crate) fn set_client_id(&mut self, client_id: ClientId) {
        self.client_id = client_id;
    }

    pub(crate) fn set_client_secret(&mut self, client_secret: ClientSecret) {
        self.client_secret = client_secret;
    }

    pub(crate) fn set_endpoint(&mut self, endpoint: ApiEndpoint) {
        self.endpoint = endpoint;
    }
}

// Verify ConnectorConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ConnectorConfig>();
};

/// Builder for [`ConnectorConfig`].
///
/// `client_id` and `client_secret` are required.
///
/// # Defaults
///
/// - `endpoint`: [`API_ENDPOINT`]
/// - `oauth_endpoint`: [`OAUTH_ENDPOINT`]
/// - `access_token`: `None`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct ConnectorConfigBuilder {
    client_id: Option<ClientId>,
    client_secret: Option<ClientSecret>,
    access_token: Option<AccessToken>,
    endpoint: Option<ApiEndpoint>,
    oauth_endpoint: Option<ApiEndpoint>,
    user_agent_prefix: Option<String>,
}

impl ConnectorConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the client id (required).
    #[must_use]
    pub fn client_id(mut self, id: ClientId) -> Self {
        self.client_id = Some(id);
        self
    }

    /// Sets the client secret (required).
    #[must_use]
    pub fn client_secret(mut self, secret: ClientSecret) -> Self {
        self.client_secret = Some(secret);
        self
    }

    /// Sets an initial access token.
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Overrides the API endpoint.
    #[must_use]
    pub fn endpoint(mut self, endpoint: ApiEndpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Overrides the OAuth endpoint.
    #[must_use]
    pub fn oauth_endpoint(mut self, endpoint: ApiEndpoint) -> Self {
        self.oauth_endpoint = Some(endpoint);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ConnectorConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `client_id` or
    /// `client_secret` are not set.
    pub fn build(self) -> Result<ConnectorConfig, ConfigError> {
        let client_id = self
            .client_id
            .ok_or(ConfigError::MissingRequiredField { field: "client_id" })?;
        let client_secret = self
            .client_secret
            .ok_or(ConfigError::MissingRequiredField {
                field: "client_secret",
            })?;

        let endpoint = match self.endpoint {
            Some(endpoint) => endpoint,
            None => ApiEndpoint::new(API_ENDPOINT)?,
        };
        let oauth_endpoint = match self.oauth_endpoint {
            Some(endpoint) => endpoint,
            None => ApiEndpoint::new(OAUTH_ENDPOINT)?,
        };

        Ok(ConnectorConfig {
            client_id,
            client_secret,
            access_token: self.access_token,
            endpoint,
            oauth_endpoint,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
