//! Webhooks.

use serde_json::Value;

use crate::entity::{Conditions, Creatable, Deletable, Entity, EntityError, EntityState, LoadScope};

/// A webhook subscription, addressed as `/webhooks/{id}/`.
///
/// Webhooks can be created and deleted but not updated; a changed
/// subscription is a new webhook. Only conditions are accepted when loading.
#[derive(Debug, Default)]
pub struct Webhook {
    state: EntityState,
}

impl Webhook {
    /// API path segment for webhooks.
    pub const API_TYPE: &'static str = "webhooks";

    /// Creates a detached webhook.
    #[must_use]
    pub fn new(entity_id: Option<&str>) -> Self {
        Self {
            state: EntityState::new(entity_id),
        }
    }

    /// Loads the webhook with the given conditions.
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

impl Entity for Webhook {
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

    fn as_creatable(&mut self) -> Option<&mut dyn Creatable> {
        Some(self)
    }

    fn as_deletable(&mut self) -> Option<&mut dyn Deletable> {
        Some(self)
    }
}

impl Creatable for Webhook {}

impl Deletable for Webhook {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_webhook_capabilities() {
        let mut webhook = Webhook::new(Some("5"));
        assert!(webhook.as_creatable().is_some());
        assert!(webhook.as_updatable().is_none());
        assert!(webhook.as_deletable().is_some());
        assert_eq!(webhook.load_scope(), LoadScope::ConditionsOnly);
    }
}
