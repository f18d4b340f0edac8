//! Event subcategories.

use serde_json::Value;

use crate::entity::{Conditions, Entity, EntityError, EntityState, LoadScope};

/// A subcategory, addressed as `/subcategories/{id}/`.
///
/// Behaves like [`Category`](super::Category): listable without an id and
/// loaded with conditions only.
#[derive(Debug, Default)]
pub struct Subcategory {
    state: EntityState,
}

impl Subcategory {
    /// API path segment for subcategories.
    pub const API_TYPE: &'static str = "subcategories";

    /// Creates a detached subcategory.
    #[must_use]
    pub fn new(entity_id: Option<&str>) -> Self {
        Self {
            state: EntityState::new(entity_id),
        }
    }

    /// Loads the subcategory, or the listing, with the given conditions.
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

impl Entity for Subcategory {
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
