//! Organizers.

use crate::entity::{Creatable, Entity, EntityState, Updatable};

/// An organizer profile, addressed as `/organizers/{id}/`.
///
/// Organizers can be created and updated. Their events are available as the
/// `events` property.
#[derive(Debug, Default)]
pub struct Organizer {
    state: EntityState,
}

impl Organizer {
    /// API path segment for organizers.
    pub const API_TYPE: &'static str = "organizers";

    /// Creates a detached organizer.
    #[must_use]
    pub fn new(entity_id: Option<&str>) -> Self {
        Self {
            state: EntityState::new(entity_id),
        }
    }
}

impl Entity for Organizer {
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
}

impl Creatable for Organizer {}

impl Updatable for Organizer {}
