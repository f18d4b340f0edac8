//! Validated newtype wrappers for connector credentials and endpoints.
//!
//! Invalid values are rejected on construction. Secret-bearing types mask
//! their contents in `Debug` output so they never reach logs.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Eventbrite application client id (the "API key").
///
/// # Example
///
/// ```rust
/// use eventbrite_connector::ClientId;
///
/// let id = ClientId::new("ABCDEF123").unwrap();
/// assert_eq!(id.as_ref(), "ABCDEF123");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientId(String);

impl ClientId {
    /// Creates a new validated client id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientId`] if the id is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ConfigError::EmptyClientId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for ClientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated Eventbrite application client secret.
///
/// The `Debug` implementation prints `ClientSecret(*****)`.
///
/// ```rust
/// use eventbrite_connector::ClientSecret;
///
/// let secret = ClientSecret::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "ClientSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ClientSecret(String);

impl ClientSecret {
    /// Creates a new validated client secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyClientSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for ClientSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClientSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClientSecret(*****)")
    }
}

/// An OAuth bearer token.
///
/// A missing token is modelled as `Option<AccessToken>::None`; an
/// `AccessToken` is never empty.
///
/// Serializes as a plain string so credential stores can persist it.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }

    /// Returns the `Authorization` header value for this token.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

impl Serialize for AccessToken {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AccessToken {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated base URL for API or OAuth calls.
///
/// The scheme must be `http` or `https` and a host must be present. Trailing
/// slashes are trimmed so paths can be joined with a single `/`.
///
/// # Example
///
/// ```rust
/// use eventbrite_connector::ApiEndpoint;
///
/// let endpoint = ApiEndpoint::new("https://www.eventbriteapi.com/v3/").unwrap();
/// assert_eq!(endpoint.as_ref(), "https://www.eventbriteapi.com/v3");
/// assert_eq!(endpoint.host_name(), "www.eventbriteapi.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiEndpoint {
    url: String,
    host_start: usize,
    host_end: usize,
}

impl ApiEndpoint {
    /// Creates a new validated endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] if the URL has no http(s)
    /// scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into().trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidEndpoint { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        if !matches!(&url[..scheme_end], "http" | "https") {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);
        if host_end == host_start {
            return Err(invalid());
        }

        Ok(Self {
            url,
            host_start,
            host_end,
        })
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }

    /// Joins path segments onto the endpoint with `/`.
    ///
    /// Empty segments are skipped.
    #[must_use]
    pub fn join<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> String {
        let mut url = self.url.clone();
        for segment in segments.into_iter().filter(|s| !s.is_empty()) {
            url.push('/');
            url.push_str(segment);
        }
        url
    }
}

impl AsRef<str> for ApiEndpoint {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for ApiEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_id_rejects_empty_string() {
        assert!(matches!(ClientId::new(""), Err(ConfigError::EmptyClientId)));
    }

    #[test]
    fn test_client_secret_masks_value_in_debug() {
        let secret = ClientSecret::new("super-secret").unwrap();
        let debug_output = format!("{secret:?}");
        assert_eq!(debug_output, "ClientSecret(*****)");
        assert!(!debug_output.contains("super-secret"));
    }

    #[test]
    fn test_access_token_rejects_empty_and_masks_debug() {
        assert!(matches!(
            AccessToken::new(""),
            Err(ConfigError::EmptyAccessToken)
        ));

        let token = AccessToken::new("T").unwrap();
        assert_eq!(format!("{token:?}"), "AccessToken(*****)");
        assert_eq!(token.bearer(), "Bearer T");
    }

    #[test]
    fn test_access_token_serializes_as_plain_string() {
        let token = AccessToken::new("abc").unwrap();
        assert_eq!(serde_json::to_string(&token).unwrap(), r#""abc""#);

        let restored: AccessToken = serde_json::from_str(r#""abc""#).unwrap();
        assert_eq!(restored, token);
        assert!(serde_json::from_str::<AccessToken>(r#""""#).is_err());
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let endpoint = ApiEndpoint::new("https://www.eventbriteapi.com/v3/").unwrap();
        assert_eq!(endpoint.as_ref(), "https://www.eventbriteapi.com/v3");
        assert_eq!(endpoint.host_name(), "www.eventbriteapi.com");
    }

    #[test]
    fn test_endpoint_accepts_local_mock_servers() {
        let endpoint = ApiEndpoint::new("http://127.0.0.1:53412").unwrap();
        assert_eq!(endpoint.host_name(), "127.0.0.1");
    }

    #[test]
    fn test_endpoint_rejects_invalid() {
        assert!(ApiEndpoint::new("www.eventbriteapi.com").is_err());
        assert!(ApiEndpoint::new("ftp://files.example.com").is_err());
        assert!(ApiEndpoint::new("https://").is_err());
    }

    #[test]
    fn test_endpoint_join_skips_empty_segments() {
        let endpoint = ApiEndpoint::new("https://api.example.com/v3").unwrap();
        assert_eq!(
            endpoint.join(["events", "", "attendees"]),
            "https://api.example.com/v3/events/attendees"
        );
        assert_eq!(endpoint.join([]), "https://api.example.com/v3");
    }
}
