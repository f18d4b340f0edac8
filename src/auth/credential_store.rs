//! Access token persistence.
//!
//! A [`Connector`](crate::Connector) never keeps process-wide token state.
//! It is handed a [`CredentialStore`] at construction and follows a fixed
//! contract: read before first use, write on set, delete on logout.

use std::sync::{Mutex, PoisonError, RwLock};

use chrono::{DateTime, Utc};

use crate::clients::HttpMethod;
use crate::config::AccessToken;

/// Context of a request that was refused because no token was available.
///
/// Recorded so the caller can replay the request after completing the
/// OAuth flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FailedRequest {
    /// The method of the refused request.
    pub method: HttpMethod,
    /// The URL of the refused request, without query string.
    pub url: String,
    /// When the request was refused.
    pub occurred_at: DateTime<Utc>,
}

impl FailedRequest {
    /// Creates a record stamped with the current time.
    #[must_use]
    pub fn now(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            occurred_at: Utc::now(),
        }
    }
}

/// Key-value persistence for the access token of one logical session.
pub trait CredentialStore: Send + Sync + std::fmt::Debug {
    /// Returns the persisted token, if any.
    fn read(&self) -> Option<AccessToken>;

    /// Persists a token, replacing any previous one.
    fn write(&self, token: &AccessToken);

    /// Removes the persisted token.
    fn delete(&self);

    /// Records a request refused for lack of a token. Best effort.
    fn record_failed_request(&self, _request: FailedRequest) {}
}

/// In-memory [`CredentialStore`], the default for a new connector.
///
/// # Example
///
/// ```rust
/// use eventbrite_connector::{AccessToken, CredentialStore, MemoryCredentialStore};
///
/// let store = MemoryCredentialStore::new();
/// store.write(&AccessToken::new("T").unwrap());
/// assert_eq!(store.read().unwrap().as_ref(), "T");
///
/// store.delete();
/// assert!(store.read().is_none());
/// ```
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: RwLock<Option<AccessToken>>,
    last_failed_request: Mutex<Option<FailedRequest>>,
}

impl MemoryCredentialStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with a token.
    #[must_use]
    pub fn with_token(token: AccessToken) -> Self {
        Self {
            token: RwLock::new(Some(token)),
            last_failed_request: Mutex::new(None),
        }
    }

    /// Returns the most recently refused request.
    #[must_use]
    pub fn last_failed_request(&self) -> Option<FailedRequest> {
        self.last_failed_request
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn read(&self) -> Option<AccessToken> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn write(&self, token: &AccessToken) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.clone());
    }

    fn delete(&self) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    fn record_failed_request(&self, request: FailedRequest) {
        *self
            .last_failed_request
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(request);
    }
}
