//! OAuth 2.0 authorization code flow for Eventbrite apps.
//!
//! The flow has two steps:
//!
//! 1. Redirect the user to [`authorization_url`]
//! 2. Exchange the `code` sent back to your redirect URI for an access token
//!    with [`Connector::exchange_auth_code`](crate::Connector::exchange_auth_code)
//!
//! The redirect itself and the callback handling belong to the embedding web
//! application. This module only builds the URL and the token request, and
//! interprets the token response.
//!
//! # Example
//!
//! ```rust,ignore
//! use eventbrite_connector::Connector;
//!
//! // Step 1: send the user to Eventbrite
//! let url = connector.authorization_url();
//!
//! // Step 2: in the redirect handler
//! connector.exchange_auth_code(&query.code).await?;
//! ```

mod token;

pub use token::{authorization_url, parse_token_response, token_request, AUTHORIZATION_CODE_GRANT_TYPE};
