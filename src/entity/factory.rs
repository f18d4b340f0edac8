//! Resolution of resource type names to concrete variants.

use serde_json::{Map, Value};

use crate::clients::{Connector, ConnectorError};
use crate::entity::resources::{
    Category, Event, Media, Order, Organizer, Series, Subcategory, System, User, Venue, Webhook,
};
use crate::entity::{Capability, Entity, EntityError};

/// Describes one resource variant known to the [`EntityFactory`].
#[derive(Clone, Copy)]
pub struct EntityDescriptor {
    /// Singular name, e.g. `"event"`.
    pub name: &'static str,
    /// API path segment, e.g. `"events"`.
    pub api_type: &'static str,
    /// Capabilities the variant exposes.
    pub capabilities: &'static [Capability],
    construct: fn(Option<&str>) -> Box<dyn Entity>,
}

impl EntityDescriptor {
    /// Whether the variant exposes `capability`.
    #[must_use]
    pub fn supports(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    /// Constructs a detached instance of the variant.
    #[must_use]
    pub fn construct(&self, entity_id: Option<&str>) -> Box<dyn Entity> {
        (self.construct)(entity_id)
    }

    fn matches(&self, type_name: &str) -> bool {
        self.api_type.eq_ignore_ascii_case(type_name) || self.name.eq_ignore_ascii_case(type_name)
    }
}

impl std::fmt::Debug for EntityDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityDescriptor")
            .field("name", &self.name)
            .field("api_type", &self.api_type)
            .field("capabilities", &self.capabilities)
            .finish_non_exhaustive()
    }
}

static DESCRIPTORS: &[EntityDescriptor] = &[
    EntityDescriptor {
        name: "event",
        api_type: Event::API_TYPE,
        capabilities: &[Capability::Create, Capability::Update, Capability::Delete],
        construct: |id| Box::new(Event::new(id)),
    },
    EntityDescriptor {
        name: "venue",
        api_type: Venue::API_TYPE,
        capabilities: &[Capability::Create, Capability::Update],
        construct: |id| Box::new(Venue::new(id)),
    },
    EntityDescriptor {
        name: "organizer",
        api_type: Organizer::API_TYPE,
        capabilities: &[Capability::Create, Capability::Update],
        construct: |id| Box::new(Organizer::new(id)),
    },
    EntityDescriptor {
        name: "series",
        api_type: Series::API_TYPE,
        capabilities: &[Capability::Update, Capability::Delete],
        construct: |id| Box::new(Series::new(id)),
    },
    EntityDescriptor {
        name: "webhook",
        api_type: Webhook::API_TYPE,
        capabilities: &[Capability::Create, Capability::Delete],
        construct: |id| Box::new(Webhook::new(id)),
    },
    EntityDescriptor {
        name: "media",
        api_type: Media::API_TYPE,
        capabilities: &[Capability::Upload],
        construct: |id| Box::new(Media::new(id)),
    },
    EntityDescriptor {
        name: "order",
        api_type: Order::API_TYPE,
        capabilities: &[],
        construct: |id| Box::new(Order::new(id)),
    },
    EntityDescriptor {
        name: "user",
        api_type: User::API_TYPE,
        capabilities: &[],
        construct: |id| Box::new(User::new(id)),
    },
    EntityDescriptor {
        name: "category",
        api_type: Category::API_TYPE,
        capabilities: &[],
        construct: |id| Box::new(Category::new(id)),
    },
    EntityDescriptor {
        name: "subcategory",
        api_type: Subcategory::API_TYPE,
        capabilities: &[],
        construct: |id| Box::new(Subcategory::new(id)),
    },
    EntityDescriptor {
        name: "system",
        api_type: System::API_TYPE,
        capabilities: &[],
        construct: |id| Box::new(System::new(id)),
    },
];

/// The single place where a resource type name becomes a concrete variant.
///
/// Names match the API type (`"events"`) or the singular name (`"event"`),
/// ignoring ASCII case. Unknown names fail closed with
/// [`ConnectorError::UnknownEntityType`].
///
/// # Example
///
/// ```rust
/// use eventbrite_connector::entity::EntityFactory;
///
/// let event = EntityFactory::get("event", Some("123")).unwrap();
/// assert_eq!(event.entity_api_type(), "events");
/// assert_eq!(event.entity_id(), Some("123"));
///
/// assert!(EntityFactory::get("tickets", None).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct EntityFactory;

impl EntityFactory {
    /// Returns every registered variant.
    #[must_use]
    pub fn descriptors() -> &'static [EntityDescriptor] {
        DESCRIPTORS
    }

    /// Returns the descriptor matching `type_name`.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError::UnknownEntityType`] if nothing matches.
    pub fn descriptor(type_name: &str) -> Result<&'static EntityDescriptor, ConnectorError> {
        DESCRIPTORS
            .iter()
            .find(|descriptor| descriptor.matches(type_name))
            .ok_or_else(|| ConnectorError::UnknownEntityType {
                name: type_name.to_string(),
            })
    }

    /// Returns the API type for `type_name`, if it names a known variant.
    #[must_use]
    pub fn api_type_of(type_name: &str) -> Option<&'static str> {
        Self::descriptor(type_name).ok().map(|d| d.api_type)
    }

    /// Constructs a detached entity of the named type.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectorError::UnknownEntityType`] if nothing matches.
    pub fn get(type_name: &str, entity_id: Option<&str>) -> Result<Box<dyn Entity>, ConnectorError> {
        Ok(Self::descriptor(type_name)?.construct(entity_id))
    }

    /// Constructs a new entity of the named type and creates it remotely.
    ///
    /// The returned entity is attached to `connector` but not registered.
    ///
    /// # Errors
    ///
    /// - [`EntityError::Connector`] wrapping `UnknownEntityType` for unknown names
    /// - [`EntityError::UnsupportedCapability`] if the variant cannot be created
    /// - any error of [`Creatable::submit`](crate::entity::Creatable::submit);
    ///   on [`EntityError::CreatedNotLoaded`] the remote resource exists and
    ///   its id is in the error
    pub async fn create(
        connector: &Connector,
        type_name: &str,
        values: Map<String, Value>,
    ) -> Result<Box<dyn Entity>, EntityError> {
        let mut entity = Self::get(type_name, None)?;
        let api_type = entity.entity_api_type();
        entity.set_connector(connector.downgrade());
        entity.set_values(values);

        entity
            .as_creatable()
            .ok_or(EntityError::UnsupportedCapability {
                api_type,
                capability: Capability::Create,
            })?
            .submit()
            .await?;
        Ok(entity)
    }
}
