//! The HTTP transport seam.
//!
//! The connector never talks to the network directly. It hands a fully
//! built [`TransportRequest`] to a [`Transport`] and gets back the raw body
//! or a [`TransportError`]. [`HttpTransport`] is the default implementation
//! on top of `reqwest`; tests and embedders can supply their own.

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::clients::errors::TransportError;
use crate::clients::http_request::HttpMethod;

/// The body of a [`TransportRequest`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RequestBody {
    /// No body.
    #[default]
    Empty,
    /// An already encoded body (form or JSON); the content type is in the headers.
    Text(String),
    /// A `multipart/form-data` body.
    Multipart(Vec<MultipartField>),
}

/// One field of a multipart body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultipartField {
    /// The form field name.
    pub name: String,
    /// The field contents.
    pub contents: MultipartContents,
}

/// Contents of a [`MultipartField`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MultipartContents {
    /// A plain text value.
    Text(String),
    /// A file part.
    File {
        /// File name reported to the server.
        file_name: String,
        /// The file bytes.
        bytes: Vec<u8>,
    },
}

impl MultipartField {
    /// Creates a text field.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: MultipartContents::Text(value.into()),
        }
    }

    /// Creates a file field.
    #[must_use]
    pub fn file(name: impl Into<String>, file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            contents: MultipartContents::File {
                file_name: file_name.into(),
                bytes,
            },
        }
    }
}

/// A request ready to be sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportRequest {
    /// The HTTP method.
    pub method: HttpMethod,
    /// Absolute URL including any query string.
    pub url: String,
    /// Request headers.
    pub headers: BTreeMap<String, String>,
    /// Request body.
    pub body: RequestBody,
}

/// A successful response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportResponse {
    /// The HTTP status code (always 2xx for [`HttpTransport`]).
    pub status: u16,
    /// The raw response body.
    pub body: String,
}

/// Performs one HTTP request.
///
/// Implementations decide what counts as failure; a successful call must
/// yield the raw body, a failed call a [`TransportError`]. No retries are
/// expected; callers needing them wrap the transport.
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    /// Sends a request and returns the raw response.
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;
}

/// Default [`Transport`] backed by `reqwest` with rustls.
///
/// Any non-2xx status is reported as [`TransportError::Status`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

// Verify HttpTransport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpTransport>();
};

impl HttpTransport {
    /// Creates a transport with a default rustls client.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");
        Self { client }
    }

    /// Creates a transport around an existing client.
    #[must_use]
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Serializes the error fields of a failed response (matching the API's
    /// `error` / `error_description` convention), falling back to the raw body.
    fn serialize_error(body: &str) -> String {
        let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
            return body.to_string();
        };

        let mut error_body = serde_json::Map::new();
        for field in ["error", "error_description", "status_code"] {
            if let Some(item) = value.get(field) {
                error_body.insert(field.to_string(), item.clone());
            }
        }

        if error_body.is_empty() {
            body.to_string()
        } else {
            serde_json::Value::Object(error_body).to_string()
        }
    }

    fn multipart_form(fields: Vec<MultipartField>) -> reqwest::multipart::Form {
        fields
            .into_iter()
            .fold(reqwest::multipart::Form::new(), |form, field| {
                match field.contents {
                    MultipartContents::Text(value) => form.text(field.name, value),
                    MultipartContents::File { file_name, bytes } => form.part(
                        field.name,
                        reqwest::multipart::Part::bytes(bytes).file_name(file_name),
                    ),
                }
            })
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
            HttpMethod::Put => self.client.put(&request.url),
            HttpMethod::Delete => self.client.delete(&request.url),
        };

        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }

        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Text(body) => builder.body(body),
            RequestBody::Multipart(fields) => builder.multipart(Self::multipart_form(fields)),
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        if !(200..300).contains(&status) {
            return Err(TransportError::Status {
                code: status,
                message: Self::serialize_error(&body),
            });
        }

        Ok(TransportResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_error_keeps_error_fields() {
        let body = r#"{"status_code":404,"error_description":"The event you requested does not exist.","error":"NOT_FOUND","extra":1}"#;
        let message = HttpTransport::serialize_error(body);

        assert!(message.contains("NOT_FOUND"));
        assert!(message.contains("does not exist"));
        assert!(!message.contains("extra"));
    }

    #[test]
    fn test_serialize_error_falls_back_to_raw_body() {
        assert_eq!(HttpTransport::serialize_error("Bad Gateway"), "Bad Gateway");
        assert_eq!(HttpTransport::serialize_error(r#"{"x":1}"#), r#"{"x":1}"#);
    }

    #[test]
    fn test_multipart_field_constructors() {
        let text = MultipartField::text("upload_token", "tok");
        assert_eq!(text.contents, MultipartContents::Text("tok".to_string()));

        let file = MultipartField::file("file", "logo.png", vec![1, 2, 3]);
        assert!(matches!(
            file.contents,
            MultipartContents::File { ref file_name, .. } if file_name == "logo.png"
        ));
    }

    #[test]
    fn test_default_request_body_is_empty() {
        assert_eq!(RequestBody::default(), RequestBody::Empty);
    }
}
