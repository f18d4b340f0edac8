//! Request specification types for the EventBrite connector.
//!
//! [`RequestSpec`] is the single input to
//! [`Connector::request`](crate::Connector::request): URL, method, headers,
//! data and whether a bearer token is required.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::{Map, Value};

/// Content type used for form-encoded request bodies.
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Content type used for JSON request bodies.
pub const APPLICATION_JSON: &str = "application/json";

/// HTTP methods used by the Eventbrite API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating and updating resources.
    Post,
    /// HTTP PUT method, used by some upload targets.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the upper-case method name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Parses a method name case-insensitively.
    #[must_use]
    pub fn parse(method: &str) -> Option<Self> {
        match method.to_ascii_uppercase().as_str() {
            "GET" => Some(Self::Get),
            "POST" => Some(Self::Post),
            "PUT" => Some(Self::Put),
            "DELETE" => Some(Self::Delete),
            _ => None,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request to be issued through a [`Connector`](crate::Connector).
///
/// Use [`RequestSpec::builder`] to construct one.
///
/// # Defaults
///
/// - `method`: GET
/// - `headers`: empty
/// - `data`: empty
/// - `requires_auth`: `true`
///
/// # Example
///
/// ```rust
/// use eventbrite_connector::clients::{RequestSpec, HttpMethod};
/// use serde_json::json;
///
/// let spec = RequestSpec::builder("https://www.eventbriteapi.com/v3/events/123/")
///     .method(HttpMethod::Post)
///     .param("events.name.html", json!("Renamed"))
///     .build();
///
/// assert_eq!(spec.method, HttpMethod::Post);
/// assert!(spec.requires_auth);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RequestSpec {
    /// Absolute request URL, without query string.
    pub url: String,
    /// The HTTP method.
    pub method: HttpMethod,
    /// Request headers.
    pub headers: BTreeMap<String, String>,
    /// Query parameters for GET, body fields otherwise.
    pub data: Map<String, Value>,
    /// Whether an `Authorization: Bearer` header must be attached.
    pub requires_auth: bool,
}

impl RequestSpec {
    /// Creates a new builder for the given URL.
    #[must_use]
    pub fn builder(url: impl Into<String>) -> RequestSpecBuilder {
        RequestSpecBuilder::new(url)
    }

    /// Returns the value of a header, matching the name case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Builder for [`RequestSpec`].
#[derive(Debug)]
pub struct RequestSpecBuilder {
    url: String,
    method: HttpMethod,
    headers: BTreeMap<String, String>,
    data: Map<String, Value>,
    requires_auth: bool,
}

impl RequestSpecBuilder {
    fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: HttpMethod::Get,
            headers: BTreeMap::new(),
            data: Map::new(),
            requires_auth: true,
        }
    }

    /// Sets the HTTP method.
    #[must_use]
    pub const fn method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    /// Adds a single header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Replaces the request data.
    #[must_use]
    pub fn data(mut self, data: Map<String, Value>) -> Self {
        self.data = data;
        self
    }

    /// Adds a single data field.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Sets whether a bearer token is required.
    #[must_use]
    pub const fn requires_auth(mut self, requires_auth: bool) -> Self {
        self.requires_auth = requires_auth;
        self
    }

    /// Builds the [`RequestSpec`].
    #[must_use]
    pub fn build(self) -> RequestSpec {
        RequestSpec {
            url: self.url,
            method: self.method,
            headers: self.headers,
            data: self.data,
            requires_auth: self.requires_auth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display_is_upper_case() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_http_method_parse_is_case_insensitive() {
        assert_eq!(HttpMethod::parse("post"), Some(HttpMethod::Post));
        assert_eq!(HttpMethod::parse("PUT"), Some(HttpMethod::Put));
        assert_eq!(HttpMethod::parse("patch"), None);
    }

    #[test]
    fn test_builder_defaults() {
        let spec = RequestSpec::builder("https://example.com/v3/events/1/").build();

        assert_eq!(spec.method, HttpMethod::Get);
        assert!(spec.headers.is_empty());
        assert!(spec.data.is_empty());
        assert!(spec.requires_auth);
    }

    #[test]
    fn test_builder_with_all_options() {
        let spec = RequestSpec::builder("https://example.com/oauth/token")
            .method(HttpMethod::Post)
            .header("Content-type", FORM_URLENCODED)
            .param("code", "abc")
            .param("grant_type", json!("authorization_code"))
            .requires_auth(false)
            .build();

        assert_eq!(spec.method, HttpMethod::Post);
        assert_eq!(spec.data.get("code"), Some(&json!("abc")));
        assert!(!spec.requires_auth);
    }

    #[test]
    fn test_header_lookup_ignores_case() {
        let spec = RequestSpec::builder("https://example.com")
            .header("Content-type", APPLICATION_JSON)
            .build();

        assert_eq!(spec.header("content-type"), Some(APPLICATION_JSON));
        assert_eq!(spec.header("CONTENT-TYPE"), Some(APPLICATION_JSON));
        assert_eq!(spec.header("accept"), None);
    }
}
