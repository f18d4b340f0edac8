//! Events, the central Eventbrite resource.

use crate::entity::{Creatable, Deletable, Entity, EntityState, Updatable};

/// An Eventbrite event, addressed as `/events/{id}/`.
///
/// Events support create, update and delete. Sub-resources such as
/// `attendees`, `orders` or `ticket_classes` are loaded as properties:
///
/// ```rust,ignore
/// let attendees = event.load("attendees", &Conditions::new(), false).await?;
/// ```
#[derive(Debug, Default)]
pub struct Event {
    state: EntityState,
}

impl Event {
    /// API path segment for events.
    pub const API_TYPE: &'static str = "events";

    /// Creates a detached event.
    #[must_use]
    pub fn new(entity_id: Option<&str>) -> Self {
        Self {
            state: EntityState::new(entity_id),
        }
    }
}

impl Entity for Event {
    fn entity_api_type(&self) -> &'static str {
        Self::API_TYPE
    }

    fn state(&self) -> &EntityState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut EntityState {
        &mut self.state
    }

    fn as_creatable(&mut self) -> Option<&mut dyn Creatable> {
        Some(self)
    }

    fn as_updatable(&mut self) -> Option<&mut dyn Updatable> {
        Some(self)
    }

    fn as_deletable(&mut self) -> Option<&mut dyn Deletable> {
        Some(self)
    }
}

impl Creatable for Event {}

impl Updatable for Event {}

impl Deletable for Event {}
