//! Optional behaviors a resource variant may expose.
//!
//! Not every Eventbrite resource supports every operation: events can be
//! created, updated and deleted, orders can only be read, media can only be
//! uploaded. Each behavior is a trait a variant implements selectively and
//! hands out through the matching `as_*` accessor on [`Entity`].
//!
//! | Trait          | Operation                       | Fails on a new entity |
//! |----------------|---------------------------------|-----------------------|
//! | [`Creatable`]  | `create`, `submit`, `save_property` | no                |
//! | [`Updatable`]  | `update`                        | yes                   |
//! | [`Deletable`]  | `delete`                        | yes                   |
//! | [`Uploadable`] | `upload`, `upload_bytes`        | no                    |

use std::fmt;
use std::path::Path;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::clients::{Connector, HttpMethod, RequestSpec};
use crate::entity::data_key::Conditions;
use crate::entity::lifecycle::{identified_endpoint, post, post_to_entity};
use crate::entity::normalize::{merge, normalize};
use crate::entity::resources::ImageType;
use crate::entity::{Entity, EntityError};

/// A capability a resource variant may expose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    /// [`Creatable`].
    Create,
    /// [`Updatable`].
    Update,
    /// [`Deletable`].
    Delete,
    /// [`Uploadable`].
    Upload,
}

impl Capability {
    /// Returns the lower-case capability name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Upload => "upload",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extracts the server-assigned id from a create response.
fn server_id(response: &Value) -> Option<String> {
    match response.get("id")? {
        Value::String(id) if !id.is_empty() => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

/// Resources that can be created remotely.
#[async_trait]
pub trait Creatable: Entity {
    /// Posts the staged values of a new entity to its collection.
    ///
    /// If the response carries an `id`, the entity takes it and loads its
    /// canonical representation. Returns the raw create response.
    ///
    /// The create and the load are separate requests. If the load fails, the
    /// resource already exists remotely: the entity keeps the assigned id and
    /// the error is [`EntityError::CreatedNotLoaded`], which carries it too.
    ///
    /// # Errors
    ///
    /// - [`EntityError::InvalidState`] if the entity is not new
    /// - any error of [`Entity::save`]
    /// - [`EntityError::CreatedNotLoaded`] if the follow-up load fails
    async fn submit(&mut self) -> Result<Value, EntityError> {
        if !self.is_new() {
            return Err(EntityError::InvalidState("cannot create an existing entity"));
        }

        let response = self.save().await?;
        if let Some(id) = server_id(&response) {
            let api_type = self.entity_api_type();
            tracing::debug!("Created {} entity {}", api_type, id);
            self.set_entity_id(Some(id.clone()));
            if let Err(source) = self.load("", &Conditions::new(), false).await {
                tracing::warn!("Created {} entity {} but loading it failed", api_type, id);
                return Err(EntityError::CreatedNotLoaded {
                    api_type,
                    id,
                    source: Box::new(source),
                });
            }
        }
        Ok(response)
    }

    /// Constructs a new entity attached to `connector`, stages `values` and
    /// submits it.
    ///
    /// The entity is not added to the connector's registry; use
    /// [`Connector::insert_entity`] for that.
    ///
    /// # Errors
    ///
    /// Same as [`submit`](Creatable::submit). The entity is dropped on error,
    /// so after [`EntityError::CreatedNotLoaded`] the id in the error is the
    /// only handle on the remote resource.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use eventbrite_connector::entity::{Creatable, Entity};
    /// use eventbrite_connector::entity::resources::Venue;
    /// use serde_json::json;
    ///
    /// let values = json!({"venue": {"name": "Teatro"}}).as_object().unwrap().clone();
    /// let venue = Venue::create(&connector, values).await?;
    /// println!("created venue {:?}", venue.entity_id());
    /// ```
    async fn create(connector: &Connector, values: Map<String, Value>) -> Result<Self, EntityError>
    where
        Self: Sized + Default,
    {
        let mut entity = Self::default();
        entity.set_connector(connector.downgrade());
        entity.set_values(values);
        entity.submit().await?;
        Ok(entity)
    }

    /// Posts `values` to `<endpoint>/<api type>/<id>/<property>/`.
    ///
    /// # Errors
    ///
    /// - [`EntityError::MissingIdentity`] if the entity has no id
    /// - [`EntityError::Detached`] / [`EntityError::Connector`] on request failures
    async fn save_property(
        &mut self,
        property: &str,
        values: Map<String, Value>,
    ) -> Result<Value, EntityError> {
        let url = format!("{}/{}/", identified_endpoint(&*self)?, property);
        post(&*self, url, values).await
    }
}

/// Resources whose loaded data can be changed remotely.
#[async_trait]
pub trait Updatable: Entity {
    /// Merges `values` into the active data set, saves it and reloads it.
    ///
    /// `values` is nested like the API payload and carries no type prefix,
    /// e.g. `{"name": {"html": "My event"}}`. The merged data replaces the
    /// local copy only once the save succeeds. The reload repeats the
    /// property and conditions of the active data set with `reset` set.
    ///
    /// The save and the reload are separate requests. If the reload fails,
    /// the remote change has already been applied.
    ///
    /// # Errors
    ///
    /// - [`EntityError::InvalidState`] if the entity is new; no request is made
    /// - [`EntityError::MalformedKey`] if the active data key cannot be parsed
    /// - [`EntityError::MissingIdentity`] if the entity has no id
    /// - any error of [`Entity::load`]
    async fn update(&mut self, values: Map<String, Value>) -> Result<&Value, EntityError> {
        if self.is_new() {
            return Err(EntityError::InvalidState("cannot update a New entity"));
        }

        let key = self.active_data_set().map_or_else(
            || self.build_data_key("", &Conditions::new()),
            ToString::to_string,
        );
        let (property, conditions) = self.parse_data_key(&key)?;

        let mut merged = self
            .data_for(&key)
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()));
        merge(&mut merged, Value::Object(values));

        post_to_entity(&*self, normalize(self.entity_api_type(), &merged)).await?;
        self.state_mut().commit(key, merged);

        self.load(&property, &conditions, true).await
    }
}

/// Resources that can be deleted remotely.
#[async_trait]
pub trait Deletable: Entity {
    /// Issues a DELETE to `<endpoint>/<api type>/<id>/`.
    ///
    /// The entity stays in the connector registry; remove it with
    /// [`Connector::remove_entity`].
    ///
    /// # Errors
    ///
    /// - [`EntityError::InvalidState`] if the entity is new; no request is made
    /// - [`EntityError::MissingIdentity`] if the entity has no id
    /// - [`EntityError::Detached`] / [`EntityError::Connector`] on request failures
    async fn delete(&self) -> Result<Value, EntityError> {
        if self.is_new() {
            return Err(EntityError::InvalidState("cannot delete a New entity"));
        }

        let url = format!("{}/", identified_endpoint(self)?);
        let spec = RequestSpec::builder(url).method(HttpMethod::Delete).build();
        Ok(self.connector()?.request(spec).await?)
    }
}

/// Resources that accept file uploads.
#[async_trait]
pub trait Uploadable: Entity {
    /// Uploads file contents as an image of the given type.
    ///
    /// `crop_mask` is either empty or holds all of `crop_mask.top_left.x`,
    /// `crop_mask.top_left.y`, `crop_mask.width` and `crop_mask.height`.
    /// Returns the API's response to the final notification step.
    ///
    /// # Errors
    ///
    /// - [`EntityError::IncompleteCropMask`] before any request if the mask
    ///   is partial
    /// - [`EntityError::UploadRejected`] if the API returns no usable upload
    ///   instructions
    /// - [`EntityError::Detached`] / [`EntityError::Connector`] on request failures
    async fn upload_bytes(
        &mut self,
        file_name: &str,
        bytes: Vec<u8>,
        image_type: ImageType,
        crop_mask: &Map<String, Value>,
    ) -> Result<Value, EntityError>;

    /// Reads a file and uploads it with [`upload_bytes`](Uploadable::upload_bytes).
    ///
    /// # Errors
    ///
    /// Returns [`EntityError::File`] if the file cannot be read, otherwise the
    /// errors of [`upload_bytes`](Uploadable::upload_bytes).
    async fn upload(
        &mut self,
        path: &Path,
        image_type: ImageType,
        crop_mask: &Map<String, Value>,
    ) -> Result<Value, EntityError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| EntityError::File {
                path: path.to_path_buf(),
                source,
            })?;
        let file_name = path
            .file_name()
            .map_or_else(|| "upload".to_string(), |name| name.to_string_lossy().into_owned());

        self.upload_bytes(&file_name, bytes, image_type, crop_mask)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_capability_names() {
        assert_eq!(Capability::Create.to_string(), "create");
        assert_eq!(Capability::Update.to_string(), "update");
        assert_eq!(Capability::Delete.to_string(), "delete");
        assert_eq!(Capability::Upload.to_string(), "upload");
    }

    #[test]
    fn test_server_id_accepts_strings_and_numbers() {
        assert_eq!(server_id(&json!({"id": "123"})), Some("123".to_string()));
        assert_eq!(server_id(&json!({"id": 123})), Some("123".to_string()));
    }

    #[test]
    fn test_server_id_ignores_missing_or_empty() {
        assert_eq!(server_id(&json!({"name": "x"})), None);
        assert_eq!(server_id(&json!({"id": ""})), None);
        assert_eq!(server_id(&json!({"id": null})), None);
        assert_eq!(server_id(&Value::Null), None);
    }
}
