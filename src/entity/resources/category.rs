//! Event categories.

use serde_json::Value;

use crate::entity::{Conditions, Entity, EntityError, EntityState, LoadScope};

/// A category, addressed as `/categories/{id}/`.
///
/// Without an id the entity loads the category listing (`/categories/`).
/// Only conditions are accepted when loading.
#[derive(Debug, Default)]
pub struct Category {
    state: EntityState,
}

impl Category {
    /// API path segment for categories.
    pub const API_TYPE: &'static str = "categories";

    /// Creates a detached category.
    #[must_use]
    pub fn new(entity_id: Option<&str>) -> Self {
        Self {
            state: EntityState::new(entity_id),
        }
    }

    /// Loads the category, or the listing, with the given conditions.
    ///
    /// # Errors
    ///
    /// Same as [`Entity::load`].
    pub async fn load_where(
        &mut self,
        conditions: &Conditions,
        reset: bool,
    ) -> Result<&Value, EntityError> {
        self.load("", conditions, reset).await
    }
}

impl Entity for Category {
    fn entity_api_type(&self) -> &'static str {
        Self::API_TYPE
    }

    fn state(&self) -> &EntityState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut EntityState {
        &mut self.state
    }

    fn load_scope(&self) -> LoadScope {
        LoadScope::ConditionsOnly
    }

    fn requires_identity(&self) -> bool {
        false
    }
}
