//! The entity data and request model.
//!
//! Every Eventbrite resource is an [`Entity`]: it has an optional id, a
//! cache of loaded payloads keyed by [data key](build_data_key), and a
//! handle back to the [`Connector`](crate::Connector) it issues requests
//! through. Resource variants live in [`resources`] and are resolved by name
//! through the [`EntityFactory`].
//!
//! # Lifecycle
//!
//! ```text
//!  new (no id) --create--> loaded --load/update--> loaded
//! ```
//!
//! An entity constructed with an id is immediately loadable. Nothing ever
//! returns an entity to the new state.
//!
//! # Example
//!
//! ```rust,ignore
//! use eventbrite_connector::entity::{Conditions, Entity};
//! use serde_json::json;
//!
//! let event = connector.add_entity("events", Some("123"))?;
//! let mut event = event.lock().await;
//!
//! let payload = event.load("", &Conditions::new(), false).await?;
//! println!("{}", payload["name"]["text"]);
//!
//! if let Some(updatable) = event.as_updatable() {
//!     let values = json!({"name": {"html": "Renamed"}});
//!     updatable.update(values.as_object().unwrap().clone()).await?;
//! }
//! ```

mod capabilities;
mod data_key;
mod errors;
mod factory;
mod lifecycle;
mod normalize;
pub mod resources;

pub use capabilities::{Capability, Creatable, Deletable, Updatable, Uploadable};
pub use data_key::{build_data_key, parse_data_key, Conditions, DATA_KEY_SEPARATOR};
pub use errors::EntityError;
pub use factory::{EntityDescriptor, EntityFactory};
pub use lifecycle::{Entity, EntityState, LoadScope, SharedEntity};
pub use normalize::normalize;
