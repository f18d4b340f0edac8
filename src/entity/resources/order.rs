//! Orders.

use serde_json::Value;

use crate::entity::{Conditions, Entity, EntityError, EntityState, LoadScope};

/// An order, addressed as `/orders/{id}/`.
///
/// Orders are read-only and are loaded without a property; only
/// conditions such as `expand` are accepted.
#[derive(Debug, Default)]
pub struct Order {
    state: EntityState,
}

impl Order {
    /// API path segment for orders.
    pub const API_TYPE: &'static str = "orders";

    /// Creates a detached order.
    #[must_use]
    pub fn new(entity_id: Option<&str>) -> Self {
        Self {
            state: EntityState::new(entity_id),
        }
    }

    /// Loads the order with the given conditions.
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

impl Entity for Order {
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
}
