//! HTTP plumbing for the Eventbrite API.
//!
//! # Overview
//!
//! - [`Connector`]: credentials, request building and the entity registry
//! - [`RequestSpec`]: one request as the connector receives it
//! - [`Transport`]: the seam that performs HTTP requests
//! - [`HttpTransport`]: the default `reqwest` transport
//! - [`ConnectorError`], [`TransportError`]: failures
//!
//! # Example
//!
//! ```rust,ignore
//! use eventbrite_connector::clients::{HttpMethod, RequestSpec};
//!
//! let spec = RequestSpec::builder(connector.endpoint().join(["users", "me", "organizations"]))
//!     .method(HttpMethod::Get)
//!     .build();
//!
//! let organizations = connector.request(spec).await?;
//! ```
//!
//! # Request encoding
//!
//! GET data becomes the query string. For other methods the data is the
//! body, form-encoded unless the caller sets a JSON content type. Nested
//! values use bracket notation, see [`encode_query`].

mod connector;
mod errors;
mod http_request;
mod query;
mod transport;

pub use connector::{Connector, WeakConnector, CONNECTOR_VERSION};
pub use errors::{ConnectorError, TransportError};
pub use http_request::{
    HttpMethod, RequestSpec, RequestSpecBuilder, APPLICATION_JSON, FORM_URLENCODED,
};
pub use query::{decode_pairs, encode_pairs, encode_query};
pub use transport::{
    HttpTransport, MultipartContents, MultipartField, RequestBody, Transport, TransportRequest,
    TransportResponse,
};
