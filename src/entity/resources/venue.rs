//! Venues.

use crate::entity::{Creatable, Entity, EntityState, Updatable};

/// A venue, addressed as `/venues/{id}/`. Supports create and update.
#[derive(Debug, Default)]
pub struct Venue {
    state: EntityState,
}

impl Venue {
    /// API path segment for venues.
    pub const API_TYPE: &'static str = "venues";

    /// Creates a detached venue.
    #[must_use]
    pub fn new(entity_id: Option<&str>) -> Self {
        Self {
            state: EntityState::new(entity_id),
        }
    }
}

impl Entity for Venue {
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

impl Creatable for Venue {}

impl Updatable for Venue {}
