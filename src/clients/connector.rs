//! The connector: credentials, request building and the entity registry.
//!
//! A [`Connector`] is a cheap, cloneable handle. Clones share the same
//! settings, transport, credential store and entity registry. Entities hold
//! a [`WeakConnector`] so the registry never keeps its owner alive.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, Weak};

use serde_json::Value;

use crate::auth::oauth;
use crate::auth::{CredentialStore, FailedRequest, MemoryCredentialStore};
use crate::clients::errors::ConnectorError;
use crate::clients::http_request::{HttpMethod, RequestSpec, APPLICATION_JSON, FORM_URLENCODED};
use crate::clients::query::encode_query;
use crate::clients::transport::{
    HttpTransport, MultipartField, RequestBody, Transport, TransportRequest,
};
use crate::config::{AccessToken, ApiEndpoint, ClientId, ClientSecret, ConnectorConfig};
use crate::entity::{Entity, EntityFactory, SharedEntity};

/// Connector version from Cargo.toml.
pub const CONNECTOR_VERSION: &str = env!("CARGO_PKG_VERSION");

type Registry = HashMap<String, HashMap<String, SharedEntity>>;

#[derive(Debug)]
struct ConnectorInner {
    config: RwLock<ConnectorConfig>,
    default_headers: BTreeMap<String, String>,
    transport: Arc<dyn Transport>,
    credentials: Arc<dyn CredentialStore>,
    entities: Mutex<Registry>,
}

/// Client for the Eventbrite API.
///
/// Owns the application credentials, issues every API request and keeps an
/// identity cache of entities keyed by `(api type, id)`.
///
/// # Thread Safety
///
/// `Connector` is `Send + Sync`. The registry and settings are guarded by
/// locks that are never held across an `.await`. Individual entities are
/// behind their own async mutex; see [`SharedEntity`].
///
/// # Example
///
/// ```rust,ignore
/// use eventbrite_connector::{Connector, ConnectorConfig, ClientId, ClientSecret, AccessToken};
///
/// let config = ConnectorConfig::builder()
///     .client_id(ClientId::new("client-id").unwrap())
///     .client_secret(ClientSecret::new("secret").unwrap())
///     .access_token(AccessToken::new("T").unwrap())
///     .build()
///     .unwrap();
///
/// let connector = Connector::new(config);
/// let event = connector.add_entity("events", Some("123"))?;
/// let data = event.lock().await.load("", &Default::default(), false).await?.clone();
/// ```
#[derive(Clone, Debug)]
pub struct Connector {
    inner: Arc<ConnectorInner>,
}

/// Non-owning handle to a [`Connector`].
#[derive(Clone, Debug, Default)]
pub struct WeakConnector {
    inner: Weak<ConnectorInner>,
}

// Verify Connector is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Connector>();
    assert_send_sync::<WeakConnector>();
};

impl WeakConnector {
    /// Returns the connector if it is still alive.
    #[must_use]
    pub fn upgrade(&self) -> Option<Connector> {
        self.inner.upgrade().map(|inner| Connector { inner })
    }
}

impl Connector {
    /// Creates a connector with the default [`HttpTransport`] and an empty
    /// [`MemoryCredentialStore`].
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. See
    /// [`HttpTransport::new`].
    #[must_use]
    pub fn new(config: ConnectorConfig) -> Self {
        Self::with_collaborators(
            config,
            Arc::new(HttpTransport::new()),
            Arc::new(MemoryCredentialStore::new()),
        )
    }

    /// Creates a connector with an explicit transport and credential store.
    ///
    /// A token present in `config` is written to the store; otherwise the
    /// store is left as is, so a token persisted by an earlier session is
    /// picked up on first use.
    #[must_use]
    pub fn with_collaborators(
        config: ConnectorConfig,
        transport: Arc<dyn Transport>,
        credentials: Arc<dyn CredentialStore>,
    ) -> Self {
        if let Some(token) = config.access_token() {
            credentials.write(token);
        }

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}EventBrite Connector v{CONNECTOR_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = BTreeMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), APPLICATION_JSON.to_string());

        Self {
            inner: Arc::new(ConnectorInner {
                config: RwLock::new(config),
                default_headers,
                transport,
                credentials,
                entities: Mutex::new(HashMap::new()),
            }),
        }
    }

    /// Returns a non-owning handle to this connector.
    #[must_use]
    pub fn downgrade(&self) -> WeakConnector {
        WeakConnector {
            inner: Arc::downgrade(&self.inner),
        }
    }

    fn config(&self) -> ConnectorConfig {
        self.inner
            .config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn update_config(&self, f: impl FnOnce(&mut ConnectorConfig)) {
        f(&mut self
            .inner
            .config
            .write()
            .unwrap_or_else(PoisonError::into_inner));
    }

    fn registry(&self) -> MutexGuard<'_, Registry> {
        self.inner
            .entities
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the API base URL.
    #[must_use]
    pub fn endpoint(&self) -> ApiEndpoint {
        self.config().endpoint().clone()
    }

    /// Replaces the API base URL.
    pub fn set_endpoint(&self, endpoint: ApiEndpoint) {
        self.update_config(|config| config.set_endpoint(endpoint));
    }

    /// Returns the application client id.
    #[must_use]
    pub fn client_id(&self) -> ClientId {
        self.config().client_id().clone()
    }

    /// Replaces the application client id.
    pub fn set_client_id(&self, client_id: ClientId) {
        self.update_config(|config| config.set_client_id(client_id));
    }

    /// Returns the application client secret.
    #[must_use]
    pub fn client_secret(&self) -> ClientSecret {
        self.config().client_secret().clone()
    }

    /// Replaces the application client secret.
    pub fn set_client_secret(&self, client_secret: ClientSecret) {
        self.update_config(|config| config.set_client_secret(client_secret));
    }

    /// Returns the URL to redirect users to for authorizing this application.
    #[must_use]
    pub fn authorization_url(&self) -> String {
        oauth::authorization_url(&self.config())
    }

    /// Exchanges an OAuth authorization code for an access token and stores it.
    ///
    /// # Errors
    ///
    /// - [`ConnectorError::EmptyResponse`] if the token endpoint returns nothing
    /// - [`ConnectorError::RemoteError`] if it reports an error
    /// - [`ConnectorError::Transport`] / [`ConnectorError::Decode`] on
    ///   transport or decoding failures
    pub async fn exchange_auth_code(&self, auth_code: &str) -> Result<AccessToken, ConnectorError> {
        let spec = oauth::token_request(&self.config(), auth_code);
        let response = self.request(spec).await?;
        let token = oauth::parse_token_response(response)?;
        self.set_access_token(&token);
        Ok(token)
    }

    /// Returns the current access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError::MissingCredential`] if the credential store
    /// holds no token.
    pub fn access_token(&self) -> Result<AccessToken, ConnectorError> {
        self.inner
            .credentials
            .read()
            .ok_or(ConnectorError::MissingCredential)
    }

    /// Stores an access token.
    pub fn set_access_token(&self, token: &AccessToken) {
        self.inner.credentials.write(token);
    }

    /// Removes the stored access token (logout).
    pub fn delete_access_token(&self) {
        self.inner.credentials.delete();
    }

    /// Issues an API request and decodes the response body.
    ///
    /// For GET requests `data` is appended to the URL as a query string.
    /// For other methods it becomes the body: JSON if the caller set a
    /// `Content-Type` of `application/json`, form-encoded otherwise. An empty
    /// response body decodes to [`Value::Null`].
    ///
    /// # Errors
    ///
    /// - [`ConnectorError::MissingCredential`] if `requires_auth` is set and
    ///   no token is available; no network call is made
    /// - [`ConnectorError::Transport`] if the transport fails
    /// - [`ConnectorError::Decode`] if the body is not valid JSON
    pub async fn request(&self, spec: RequestSpec) -> Result<Value, ConnectorError> {
        let RequestSpec {
            url,
            method,
            headers: extra_headers,
            data,
            requires_auth,
        } = spec;

        let mut headers = self.inner.default_headers.clone();
        if requires_auth {
            let token = self.access_token().map_err(|e| {
                tracing::warn!("Refusing {} request to {} without an access token", method, url);
                self.inner
                    .credentials
                    .record_failed_request(FailedRequest::now(method, url.clone()));
                e
            })?;
            set_header(&mut headers, "Authorization", token.bearer());
        }
        for (key, value) in extra_headers {
            set_header(&mut headers, &key, value);
        }

        let (url, body) = if method == HttpMethod::Get {
            if data.is_empty() {
                (url, RequestBody::Empty)
            } else {
                let separator = if url.contains('?') { '&' } else { '?' };
                let query = encode_query(&data);
                (format!("{url}{separator}{query}"), RequestBody::Empty)
            }
        } else if data.is_empty() {
            (url, RequestBody::Empty)
        } else {
            let is_json = header_value(&headers, "Content-Type")
                .is_some_and(|content_type| content_type.starts_with(APPLICATION_JSON));
            let body = if is_json {
                serde_json::to_string(&data)?
            } else {
                if header_value(&headers, "Content-Type").is_none() {
                    set_header(&mut headers, "Content-Type", FORM_URLENCODED.to_string());
                }
                encode_query(&data)
            };
            (url, RequestBody::Text(body))
        };

        tracing::debug!("Sending {} request to {}", method, url);

        let response = self
            .inner
            .transport
            .send(TransportRequest {
                method,
                url,
                headers,
                body,
            })
            .await?;

        if response.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&response.body)?)
    }

    /// Sends a multipart request to a third-party URL.
    ///
    /// Used for the file step of media uploads. No bearer token or default
    /// headers are attached and the response body is not decoded.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError::Transport`] if the transport fails.
    pub async fn send_multipart(
        &self,
        method: HttpMethod,
        url: &str,
        fields: Vec<MultipartField>,
    ) -> Result<(), ConnectorError> {
        tracing::debug!("Sending multipart {} request to {}", method, url);

        self.inner
            .transport
            .send(TransportRequest {
                method,
                url: url.to_string(),
                headers: BTreeMap::new(),
                body: RequestBody::Multipart(fields),
            })
            .await?;
        Ok(())
    }

    /// Constructs an entity through [`EntityFactory`] and registers it.
    ///
    /// `type_name` may be the API type (`"events"`) or the singular name
    /// (`"event"`). If an entity with the same API type and id is already
    /// registered, that instance is returned and the registry is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError::UnknownEntityType`] if no resource variant
    /// matches `type_name`.
    pub fn add_entity(
        &self,
        type_name: &str,
        id: Option<&str>,
    ) -> Result<SharedEntity, ConnectorError> {
        let entity = EntityFactory::get(type_name, id)?;
        Ok(self.insert_entity(entity))
    }

    /// Registers an already constructed entity and attaches it to this connector.
    ///
    /// Entities without an id are registered under the empty string. If the
    /// `(api type, id)` pair is taken, the registered instance is returned
    /// and `entity` is dropped.
    ///
    /// The registry key is fixed at insertion. A new entity that is later
    /// created remotely stays under the empty string until
    /// [`reindex_entity`](Self::reindex_entity) is called; until then
    /// [`get_entity`](Self::get_entity) with the assigned id fails and
    /// another id-less [`add_entity`](Self::add_entity) returns it.
    pub fn insert_entity(&self, mut entity: Box<dyn Entity>) -> SharedEntity {
        let api_type = entity.entity_api_type();
        let id = entity.entity_id().unwrap_or_default().to_string();

        let mut registry = self.registry();
        let by_id = registry.entry(api_type.to_string()).or_default();
        if let Some(existing) = by_id.get(&id) {
            tracing::debug!("Entity {}/{} already registered", api_type, id);
            return Arc::clone(existing);
        }

        entity.set_connector(self.downgrade());
        let shared: SharedEntity = Arc::new(tokio::sync::Mutex::new(entity));
        by_id.insert(id.clone(), Arc::clone(&shared));
        tracing::debug!("Registered entity {}/{}", api_type, id);
        shared
    }

    /// Moves a registered entity to the key of its current id.
    ///
    /// Call this after creating an entity that was registered while new.
    /// Any other key pointing at the same instance is dropped. If another
    /// instance already holds the id, that instance is returned and stays
    /// registered.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let event = connector.insert_entity(Box::new(Event::default()));
    /// event.lock().await.as_creatable().unwrap().submit().await?;
    /// let event = connector.reindex_entity(&event).await;
    /// ```
    pub async fn reindex_entity(&self, entity: &SharedEntity) -> SharedEntity {
        let (api_type, id) = {
            let entity = entity.lock().await;
            (
                entity.entity_api_type(),
                entity.entity_id().unwrap_or_default().to_string(),
            )
        };

        let mut registry = self.registry();
        let by_id = registry.entry(api_type.to_string()).or_default();
        by_id.retain(|_, registered| !Arc::ptr_eq(registered, entity));
        tracing::debug!("Reindexed entity {}/{}", api_type, id);
        Arc::clone(by_id.entry(id).or_insert_with(|| Arc::clone(entity)))
    }

    /// Returns a registered entity.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError::UnknownEntity`] if nothing is registered
    /// under the pair.
    pub fn get_entity(&self, type_name: &str, id: &str) -> Result<SharedEntity, ConnectorError> {
        let api_type = EntityFactory::api_type_of(type_name).unwrap_or(type_name);
        self.registry()
            .get(api_type)
            .and_then(|by_id| by_id.get(id))
            .map(Arc::clone)
            .ok_or_else(|| ConnectorError::UnknownEntity {
                api_type: api_type.to_string(),
                id: id.to_string(),
            })
    }

    /// Removes an entity from the registry, returning it if it was present.
    ///
    /// Pass `None` for entities registered without an id.
    pub fn remove_entity(&self, type_name: &str, id: Option<&str>) -> Option<SharedEntity> {
        let api_type = EntityFactory::api_type_of(type_name).unwrap_or(type_name);
        let id = id.unwrap_or_default();

        let mut registry = self.registry();
        let removed = registry.get_mut(api_type)?.remove(id);
        if removed.is_some() {
            tracing::debug!("Removed entity {}/{}", api_type, id);
        }
        removed
    }

    /// Returns every registered entity of one API type, sorted by id.
    #[must_use]
    pub fn entities(&self, type_name: &str) -> Vec<SharedEntity> {
        let api_type = EntityFactory::api_type_of(type_name).unwrap_or(type_name);
        let registry = self.registry();
        let Some(by_id) = registry.get(api_type) else {
            return Vec::new();
        };

        let mut ids: Vec<&String> = by_id.keys().collect();
        ids.sort();
        ids.into_iter()
            .filter_map(|id| by_id.get(id).map(Arc::clone))
            .collect()
    }
}

fn header_value<'a>(headers: &'a BTreeMap<String, String>, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

/// Inserts a header, replacing any existing header with the same name in
/// any letter case.
fn set_header(headers: &mut BTreeMap<String, String>, name: &str, value: String) {
    headers.retain(|key, _| !key.eq_ignore_ascii_case(name));
    headers.insert(name.to_string(), value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::errors::TransportError;
    use crate::clients::transport::TransportResponse;
    use async_trait::async_trait;
    use serde_json::json;

    /// Transport double that records requests and replays canned bodies.
    #[derive(Debug, Default)]
    struct RecordingTransport {
        requests: Mutex<Vec<TransportRequest>>,
        body: String,
    }

    impl RecordingTransport {
        fn replying(body: &str) -> Arc<Self> {
            Arc::new(Self {
                requests: Mutex::new(Vec::new()),
                body: body.to_string(),
            })
        }

        fn requests(&self) -> Vec<TransportRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn send(
            &self,
            request: TransportRequest,
        ) -> Result<TransportResponse, TransportError> {
            self.requests.lock().unwrap().push(request);
            Ok(TransportResponse {
                status: 200,
                body: self.body.clone(),
            })
        }
    }

    fn create_test_config(token: Option<&str>) -> ConnectorConfig {
        let mut builder = ConnectorConfig::builder()
            .client_id(ClientId::new("client-id").unwrap())
            .client_secret(ClientSecret::new("secret").unwrap())
            .endpoint(ApiEndpoint::new("https://api.example.com/v3").unwrap());
        if let Some(token) = token {
            builder = builder.access_token(AccessToken::new(token).unwrap());
        }
        builder.build().unwrap()
    }

    fn create_connector(
        token: Option<&str>,
        body: &str,
    ) -> (Connector, Arc<RecordingTransport>, Arc<MemoryCredentialStore>) {
        let transport = RecordingTransport::replying(body);
        let store = Arc::new(MemoryCredentialStore::new());
        let connector = Connector::with_collaborators(
            create_test_config(token),
            transport.clone(),
            store.clone(),
        );
        (connector, transport, store)
    }

    #[tokio::test]
    async fn test_get_request_appends_query_and_bearer() {
        let (connector, transport, _) = create_connector(Some("T"), r#"{"ok":true}"#);

        let spec = RequestSpec::builder("https://api.example.com/v3/events/1/")
            .param("expand", "venue")
            .build();
        let response = connector.request(spec).await.unwrap();

        assert_eq!(response, json!({"ok": true}));
        let sent = &transport.requests()[0];
        assert_eq!(sent.method, HttpMethod::Get);
        assert_eq!(sent.url, "https://api.example.com/v3/events/1/?expand=venue");
        assert_eq!(sent.headers.get("Authorization").unwrap(), "Bearer T");
        assert_eq!(sent.headers.get("Accept").unwrap(), "application/json");
        assert!(sent.headers.get("User-Agent").unwrap().contains("EventBrite Connector"));
        assert_eq!(sent.body, RequestBody::Empty);
    }

    #[tokio::test]
    async fn test_post_request_defaults_to_form_encoding() {
        let (connector, transport, _) = create_connector(Some("T"), "{}");

        let spec = RequestSpec::builder("https://api.example.com/v3/events/")
            .method(HttpMethod::Post)
            .param("event", json!({"name": {"html": "Foo"}}))
            .build();
        connector.request(spec).await.unwrap();

        let sent = &transport.requests()[0];
        assert_eq!(
            sent.headers.get("Content-Type").unwrap(),
            "application/x-www-form-urlencoded"
        );
        assert_eq!(
            sent.body,
            RequestBody::Text("event%5Bname%5D%5Bhtml%5D=Foo".to_string())
        );
    }

    #[tokio::test]
    async fn test_post_request_with_json_content_type() {
        let (connector, transport, _) = create_connector(Some("T"), "{}");

        let spec = RequestSpec::builder("https://api.example.com/v3/webhooks/")
            .method(HttpMethod::Post)
            .header("content-type", "application/json")
            .param("endpoint_url", "https://hooks.example.com")
            .build();
        connector.request(spec).await.unwrap();

        let sent = &transport.requests()[0];
        assert_eq!(
            sent.body,
            RequestBody::Text(r#"{"endpoint_url":"https://hooks.example.com"}"#.to_string())
        );
        assert!(sent.headers.get("Content-Type").is_none());
        assert_eq!(sent.headers.get("content-type").unwrap(), "application/json");
    }

    #[tokio::test]
    async fn test_request_without_token_fails_before_network() {
        let (connector, transport, store) = create_connector(None, "{}");

        let spec = RequestSpec::builder("https://api.example.com/v3/users/me/").build();
        let result = connector.request(spec).await;

        assert!(matches!(result, Err(ConnectorError::MissingCredential)));
        assert!(transport.requests().is_empty());
        let failed = store.last_failed_request().unwrap();
        assert_eq!(failed.method, HttpMethod::Get);
        assert_eq!(failed.url, "https://api.example.com/v3/users/me/");
    }

    #[tokio::test]
    async fn test_unauthenticated_request_skips_bearer() {
        let (connector, transport, _) = create_connector(None, "{}");

        let spec = RequestSpec::builder("https://api.example.com/v3/system/")
            .requires_auth(false)
            .build();
        connector.request(spec).await.unwrap();

        assert!(transport.requests()[0].headers.get("Authorization").is_none());
    }

    #[tokio::test]
    async fn test_empty_body_decodes_to_null() {
        let (connector, _, _) = create_connector(Some("T"), "");
        let spec = RequestSpec::builder("https://api.example.com/v3/events/1/")
            .method(HttpMethod::Delete)
            .build();
        assert_eq!(connector.request(spec).await.unwrap(), Value::Null);
    }

    #[tokio::test]
    async fn test_invalid_body_is_decode_error() {
        let (connector, _, _) = create_connector(Some("T"), "<html>");
        let spec = RequestSpec::builder("https://api.example.com/v3/events/1/").build();
        assert!(matches!(
            connector.request(spec).await,
            Err(ConnectorError::Decode(_))
        ));
    }

    #[test]
    fn test_token_lifecycle_goes_through_store() {
        let (connector, _, store) = create_connector(Some("T"), "{}");
        assert_eq!(store.read().unwrap().as_ref(), "T");

        connector.set_access_token(&AccessToken::new("U").unwrap());
        assert_eq!(connector.access_token().unwrap().as_ref(), "U");

        connector.delete_access_token();
        assert!(matches!(
            connector.access_token(),
            Err(ConnectorError::MissingCredential)
        ));
    }

    #[test]
    fn test_token_is_read_from_existing_store() {
        let store = Arc::new(MemoryCredentialStore::with_token(
            AccessToken::new("persisted").unwrap(),
        ));
        let connector = Connector::with_collaborators(
            create_test_config(None),
            RecordingTransport::replying("{}"),
            store,
        );
        assert_eq!(connector.access_token().unwrap().as_ref(), "persisted");
    }

    #[test]
    fn test_setters_replace_settings() {
        let (connector, _, _) = create_connector(None, "{}");

        connector.set_endpoint(ApiEndpoint::new("https://other.example.com/v3/").unwrap());
        connector.set_client_id(ClientId::new("other-id").unwrap());
        connector.set_client_secret(ClientSecret::new("other-secret").unwrap());

        assert_eq!(connector.endpoint().as_ref(), "https://other.example.com/v3");
        assert_eq!(connector.client_id().as_ref(), "other-id");
        assert_eq!(connector.client_secret().as_ref(), "other-secret");
        assert!(connector.authorization_url().ends_with("client_id=other-id"));
    }

    #[test]
    fn test_add_entity_is_idempotent() {
        let (connector, _, _) = create_connector(Some("T"), "{}");

        let first = connector.add_entity("events", Some("123")).unwrap();
        let second = connector.add_entity("event", Some("123")).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(connector.entities("events").len(), 1);
    }

    #[test]
    fn test_get_entity_unknown_pair() {
        let (connector, _, _) = create_connector(Some("T"), "{}");

        match connector.get_entity("events", "123") {
            Err(ConnectorError::UnknownEntity { api_type, id }) => {
                assert_eq!(api_type, "events");
                assert_eq!(id, "123");
            }
            other => panic!("Expected UnknownEntity, got {other:?}"),
        }
    }

    #[test]
    fn test_add_entity_unknown_type() {
        let (connector, _, _) = create_connector(Some("T"), "{}");
        assert!(matches!(
            connector.add_entity("tickets", None),
            Err(ConnectorError::UnknownEntityType { .. })
        ));
    }

    #[test]
    fn test_remove_entity() {
        let (connector, _, _) = create_connector(Some("T"), "{}");
        connector.add_entity("venues", Some("9")).unwrap();

        assert!(connector.remove_entity("venues", Some("9")).is_some());
        assert!(connector.remove_entity("venues", Some("9")).is_none());
        assert!(connector.get_entity("venues", "9").is_err());
    }

    #[tokio::test]
    async fn test_registered_entity_is_attached() {
        let (connector, _, _) = create_connector(Some("T"), "{}");
        let user = connector.add_entity("users", None).unwrap();

        let user = user.lock().await;
        assert_eq!(user.entity_id(), Some("me"));
        assert!(user.connector().is_ok());
        assert!(connector.get_entity("users", "me").is_ok());
    }

    #[test]
    fn test_weak_connector_does_not_keep_connector_alive() {
        let (connector, _, _) = create_connector(None, "{}");
        let weak = connector.downgrade();
        assert!(weak.upgrade().is_some());

        drop(connector);
        assert!(weak.upgrade().is_none());
        assert!(WeakConnector::default().upgrade().is_none());
    }
}
