//! The [`Entity`] trait and the state every resource variant carries.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::clients::{Connector, HttpMethod, RequestSpec, WeakConnector};
use crate::entity::data_key::{build_data_key, parse_data_key, Conditions};
use crate::entity::normalize::normalize;
use crate::entity::{Creatable, Deletable, EntityError, Updatable, Uploadable};

/// An entity as stored in the [`Connector`] registry.
///
/// Operations on one entity mutate its cached data, so they are serialized
/// through an async mutex.
pub type SharedEntity = Arc<tokio::sync::Mutex<Box<dyn Entity>>>;

/// Which arguments a resource variant accepts in [`Entity::load`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadScope {
    /// Both a property and conditions.
    Full,
    /// Conditions only; the property must be empty.
    ConditionsOnly,
    /// A property only; conditions must be empty.
    PropertyOnly,
}

/// Identity, cache and staging state shared by all resource variants.
#[derive(Clone, Debug, Default)]
pub struct EntityState {
    entity_id: Option<String>,
    connector: WeakConnector,
    data: BTreeMap<String, Value>,
    active_data_set: Option<String>,
    values: Map<String, Value>,
}

impl EntityState {
    /// Creates the state of a detached entity.
    #[must_use]
    pub fn new(entity_id: Option<&str>) -> Self {
        Self {
            entity_id: entity_id.map(ToString::to_string),
            ..Self::default()
        }
    }

    /// Stores a payload under `key` and makes it the active data set.
    pub(crate) fn commit(&mut self, key: String, payload: Value) {
        self.data.insert(key.clone(), payload);
        self.active_data_set = Some(key);
    }
}

/// A remote Eventbrite resource mapped onto a local object.
///
/// An entity is *new* until it has an id or has been loaded. Loading caches
/// each response under its [data key](crate::entity::build_data_key), so
/// repeating a load with the same property and conditions is free unless
/// `reset` is set. Optional behaviors are exposed through
/// [`as_creatable`](Entity::as_creatable),
/// [`as_updatable`](Entity::as_updatable),
/// [`as_deletable`](Entity::as_deletable) and
/// [`as_uploadable`](Entity::as_uploadable).
///
/// Implementors provide the API type and access to their [`EntityState`];
/// everything else has a default implementation.
#[async_trait]
pub trait Entity: Send + Sync + fmt::Debug {
    /// The API path segment naming this resource type, e.g. `"events"`.
    fn entity_api_type(&self) -> &'static str;

    /// Returns the shared entity state.
    fn state(&self) -> &EntityState;

    /// Returns the shared entity state mutably.
    fn state_mut(&mut self) -> &mut EntityState;

    /// Which load arguments this variant accepts.
    fn load_scope(&self) -> LoadScope {
        LoadScope::Full
    }

    /// Whether loading needs an entity id.
    fn requires_identity(&self) -> bool {
        true
    }

    /// Returns the create capability, if this variant has it.
    fn as_creatable(&mut self) -> Option<&mut dyn Creatable> {
        None
    }

    /// Returns the update capability, if this variant has it.
    fn as_updatable(&mut self) -> Option<&mut dyn Updatable> {
        None
    }

    /// Returns the delete capability, if this variant has it.
    fn as_deletable(&mut self) -> Option<&mut dyn Deletable> {
        None
    }

    /// Returns the upload capability, if this variant has it.
    fn as_uploadable(&mut self) -> Option<&mut dyn Uploadable> {
        None
    }

    /// Returns the entity id.
    fn entity_id(&self) -> Option<&str> {
        self.state().entity_id.as_deref()
    }

    /// Sets the entity id.
    fn set_entity_id(&mut self, entity_id: Option<String>) {
        self.state_mut().entity_id = entity_id;
    }

    /// Whether the entity has neither an id nor loaded data.
    fn is_new(&self) -> bool {
        self.state().entity_id.is_none() && self.state().active_data_set.is_none()
    }

    /// Returns every cached payload keyed by data key.
    fn data(&self) -> &BTreeMap<String, Value> {
        &self.state().data
    }

    /// Returns the payload cached under `key`.
    fn data_for(&self, key: &str) -> Option<&Value> {
        self.state().data.get(key)
    }

    /// Returns the data key of the most recent load.
    fn active_data_set(&self) -> Option<&str> {
        self.state().active_data_set.as_deref()
    }

    /// Returns the staged values of a new entity, or the normalized view of
    /// the active data set once loaded.
    fn values(&self) -> &Map<String, Value> {
        &self.state().values
    }

    /// Replaces the staged values.
    fn set_values(&mut self, values: Map<String, Value>) {
        self.state_mut().values = values;
    }

    /// Attaches the entity to a connector.
    fn set_connector(&mut self, connector: WeakConnector) {
        self.state_mut().connector = connector;
    }

    /// Returns the connector this entity issues requests through.
    ///
    /// # Errors
    ///
    /// Returns [`EntityError::Detached`] if the entity was never attached or
    /// the connector has been dropped.
    fn connector(&self) -> Result<Connector, EntityError> {
        self.state().connector.upgrade().ok_or(EntityError::Detached)
    }

    /// `<endpoint>/<api type>/<id>`, leaving out the id if there is none.
    ///
    /// # Errors
    ///
    /// Returns [`EntityError::Detached`] if there is no connector.
    fn entity_endpoint(&self) -> Result<String, EntityError> {
        let endpoint = self.connector()?.endpoint();
        Ok(endpoint.join([self.entity_api_type(), self.entity_id().unwrap_or_default()]))
    }

    /// `<endpoint>/<api type>/`, where new entities are posted.
    ///
    /// # Errors
    ///
    /// Returns [`EntityError::Detached`] if there is no connector.
    fn collection_endpoint(&self) -> Result<String, EntityError> {
        let endpoint = self.connector()?.endpoint();
        Ok(format!("{}/", endpoint.join([self.entity_api_type()])))
    }

    /// Builds the data key for a load call on this entity.
    fn build_data_key(&self, property: &str, conditions: &Conditions) -> String {
        build_data_key(property, conditions, self.entity_id())
    }

    /// Splits a data key of this entity into property and conditions.
    ///
    /// # Errors
    ///
    /// Returns [`EntityError::MalformedKey`] if the key cannot be parsed.
    fn parse_data_key(&self, key: &str) -> Result<(String, Conditions), EntityError> {
        parse_data_key(key, self.entity_id())
    }

    /// Loads `<endpoint>/<api type>/<id>/<property>` with `conditions` as
    /// query parameters and caches the response.
    ///
    /// Without `reset`, a load whose data key is already cached returns the
    /// cached payload without a network call and leaves the active data set
    /// alone. A successful request makes its key the active data set and
    /// replaces [`values`](Entity::values) with the normalized payload. A
    /// failed load leaves the state untouched.
    ///
    /// # Errors
    ///
    /// - [`EntityError::UnsupportedLoad`] if the variant does not accept the
    ///   property or conditions
    /// - [`EntityError::MissingIdentity`] if the variant needs an id and has none
    /// - [`EntityError::Detached`] if there is no connector
    /// - [`EntityError::Connector`] if the request fails
    async fn load(
        &mut self,
        property: &str,
        conditions: &Conditions,
        reset: bool,
    ) -> Result<&Value, EntityError> {
        let api_type = self.entity_api_type();
        match self.load_scope() {
            LoadScope::ConditionsOnly if !property.is_empty() => {
                return Err(EntityError::UnsupportedLoad {
                    api_type,
                    argument: "a property",
                });
            }
            LoadScope::PropertyOnly if !conditions.is_empty() => {
                return Err(EntityError::UnsupportedLoad {
                    api_type,
                    argument: "conditions",
                });
            }
            _ => {}
        }
        if self.requires_identity() && self.entity_id().is_none() {
            return Err(EntityError::MissingIdentity { api_type });
        }

        let key = self.build_data_key(property, conditions);
        if reset || !self.state().data.contains_key(&key) {
            let connector = self.connector()?;
            let url = format!("{}/{}", self.entity_endpoint()?, property);
            let data = conditions
                .iter()
                .map(|(k, v)| (k.clone(), Value::String(v.clone())))
                .collect();
            let spec = RequestSpec::builder(url).data(data).build();

            let payload = connector.request(spec).await?;
            let values = normalize(api_type, &payload);

            let state = self.state_mut();
            state.commit(key.clone(), payload);
            state.values = values;
        } else {
            tracing::debug!("Using cached {} data for key {:?}", api_type, key);
        }

        Ok(&self.state().data[&key])
    }

    /// Posts the entity to the API and returns the raw response.
    ///
    /// A new entity posts its staged values to the collection endpoint. A
    /// loaded entity posts the normalized view of its active data set to its
    /// own endpoint.
    ///
    /// # Errors
    ///
    /// - [`EntityError::MissingIdentity`] if the entity is loaded but has no id
    /// - [`EntityError::Detached`] if there is no connector
    /// - [`EntityError::Connector`] if the request fails
    async fn save(&mut self) -> Result<Value, EntityError> {
        if self.is_new() {
            let url = self.collection_endpoint()?;
            let values = self.values().clone();
            return post(&*self, url, values).await;
        }

        let payload = self
            .active_data_set()
            .and_then(|key| self.data_for(key))
            .map_or_else(Map::new, |data| normalize(self.entity_api_type(), data));
        post_to_entity(&*self, payload).await
    }
}

/// POSTs `data` to `url` through the entity's connector.
pub(crate) async fn post<E: Entity + ?Sized>(
    entity: &E,
    url: String,
    data: Map<String, Value>,
) -> Result<Value, EntityError> {
    let connector = entity.connector()?;
    let spec = RequestSpec::builder(url)
        .method(HttpMethod::Post)
        .data(data)
        .build();
    Ok(connector.request(spec).await?)
}

/// POSTs `data` to `<endpoint>/<api type>/<id>/`.
pub(crate) async fn post_to_entity<E: Entity + ?Sized>(
    entity: &E,
    data: Map<String, Value>,
) -> Result<Value, EntityError> {
    let url = format!("{}/", identified_endpoint(entity)?);
    post(entity, url, data).await
}

/// The entity endpoint, failing if the entity has no id.
pub(crate) fn identified_endpoint<E: Entity + ?Sized>(entity: &E) -> Result<String, EntityError> {
    if entity.entity_id().is_none() {
        return Err(EntityError::MissingIdentity {
            api_type: entity.entity_api_type(),
        });
    }
    entity.entity_endpoint()
}
