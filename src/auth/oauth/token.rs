//! Authorization URL and token exchange payloads.

use serde::Deserialize;
use serde_json::Value;

use crate::clients::{ConnectorError, HttpMethod, RequestSpec, FORM_URLENCODED};
use crate::config::{AccessToken, ConnectorConfig};

/// Grant type sent with the token exchange.
pub const AUTHORIZATION_CODE_GRANT_TYPE: &str = "authorization_code";

/// Successful token endpoint response.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Builds the URL of the Eventbrite authorization page.
///
/// Pure; no network call is made.
///
/// # Example
///
/// ```rust
/// use eventbrite_connector::{ConnectorConfig, ClientId, ClientSecret};
/// use eventbrite_connector::auth::oauth::authorization_url;
///
/// let config = ConnectorConfig::builder()
///     .client_id(ClientId::new("MYAPP").unwrap())
///     .client_secret(ClientSecret::new("secret").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     authorization_url(&config),
///     "https://www.eventbrite.com/oauth/authorize?response_type=code&client_id=MYAPP"
/// );
/// ```
#[must_use]
pub fn authorization_url(config: &ConnectorConfig) -> String {
    let params = [
        ("response_type", "code"),
        ("client_id", config.client_id().as_ref()),
    ];

    let query_string = params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}?{}",
        config.oauth_endpoint().join(["authorize"]),
        query_string
    )
}

/// Builds the token exchange request for an authorization code.
///
/// The request is a form-encoded POST that does not carry a bearer token.
#[must_use]
pub fn token_request(config: &ConnectorConfig, auth_code: &str) -> RequestSpec {
    RequestSpec::builder(config.oauth_endpoint().join(["token"]))
        .method(HttpMethod::Post)
        .header("Content-Type", FORM_URLENCODED)
        .param("code", auth_code)
        .param("client_secret", config.client_secret().as_ref())
        .param("client_id", config.client_id().as_ref())
        .param("grant_type", AUTHORIZATION_CODE_GRANT_TYPE)
        .requires_auth(false)
        .build()
}

/// Extracts the access token from a decoded token endpoint response.
///
/// # Errors
///
/// - [`ConnectorError::EmptyResponse`] if the response is `null` or empty
/// - [`ConnectorError::RemoteError`] if the response carries an `error`
///   field, or has no usable `access_token`
pub fn parse_token_response(response: Value) -> Result<AccessToken, ConnectorError> {
    let is_empty = match &response {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::String(s) => s.is_empty(),
        _ => false,
    };
    if is_empty {
        return Err(ConnectorError::EmptyResponse);
    }

    if let Some(error) = response.get("error").filter(|e| !e.is_null()) {
        let mut message = error
            .as_str()
            .map_or_else(|| error.to_string(), ToString::to_string);
        if let Some(description) = response.get("error_description").and_then(Value::as_str) {
            message = format!("{message}: {description}");
        }
        return Err(ConnectorError::RemoteError { message });
    }

    let token: TokenResponse =
        serde_json::from_value(response).map_err(|e| ConnectorError::RemoteError {
            message: format!("Token response has no access_token: {e}"),
        })?;

    AccessToken::new(token.access_token).map_err(|e| ConnectorError::RemoteError {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiEndpoint, ClientId, ClientSecret};
    use serde_json::json;

    fn create_test_config() -> ConnectorConfig {
        ConnectorConfig::builder()
            .client_id(ClientId::new("client id").unwrap())
            .client_secret(ClientSecret::new("shh").unwrap())
            .oauth_endpoint(ApiEndpoint::new("https://auth.example.com/oauth").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_authorization_url_encodes_client_id() {
        let url = authorization_url(&create_test_config());
        assert_eq!(
            url,
            "https://auth.example.com/oauth/authorize?response_type=code&client_id=client%20id"
        );
    }

    #[test]
    fn test_token_request_is_unauthenticated_form_post() {
        let spec = token_request(&create_test_config(), "the-code");

        assert_eq!(spec.url, "https://auth.example.com/oauth/token");
        assert_eq!(spec.method, HttpMethod::Post);
        assert!(!spec.requires_auth);
        assert_eq!(spec.header("content-type"), Some(FORM_URLENCODED));
        assert_eq!(spec.data.get("code"), Some(&json!("the-code")));
        assert_eq!(spec.data.get("client_secret"), Some(&json!("shh")));
        assert_eq!(spec.data.get("client_id"), Some(&json!("client id")));
        assert_eq!(
            spec.data.get("grant_type"),
            Some(&json!("authorization_code"))
        );
    }

    #[test]
    fn test_parse_token_response_success() {
        let token = parse_token_response(json!({"access_token": "T", "token_type": "bearer"}))
            .unwrap();
        assert_eq!(token.as_ref(), "T");
    }

    #[test]
    fn test_parse_token_response_empty() {
        assert!(matches!(
            parse_token_response(Value::Null),
            Err(ConnectorError::EmptyResponse)
        ));
        assert!(matches!(
            parse_token_response(json!({})),
            Err(ConnectorError::EmptyResponse)
        ));
    }

    #[test]
    fn test_parse_token_response_reports_remote_error() {
        let result = parse_token_response(json!({
            "error": "invalid_grant",
            "error_description": "Code has expired"
        }));

        match result {
            Err(ConnectorError::RemoteError { message }) => {
                assert_eq!(message, "invalid_grant: Code has expired");
            }
            other => panic!("Expected RemoteError, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_token_response_without_token() {
        assert!(matches!(
            parse_token_response(json!({"token_type": "bearer"})),
            Err(ConnectorError::RemoteError { .. })
        ));
        assert!(matches!(
            parse_token_response(json!({"access_token": ""})),
            Err(ConnectorError::RemoteError { .. })
        ));
    }
}
