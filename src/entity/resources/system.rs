//! System reference data.

use serde_json::Value;

use crate::entity::{Conditions, Entity, EntityError, EntityState, LoadScope};

/// Reference data under `/system/`, such as `timezones` or `regions`.
///
/// The system resource has no id and supports no capability. It is loaded
/// by property only.
///
/// ```rust,ignore
/// let timezones = system.load_property("timezones", false).await?;
/// ```
#[derive(Debug, Default)]
pub struct System {
    state: EntityState,
}

impl System {
    /// API path segment for system data.
    pub const API_TYPE: &'static str = "system";

    /// Creates a detached system entity. The id is ignored.
    #[must_use]
    pub fn new(_entity_id: Option<&str>) -> Self {
        Self::default()
    }

    /// Loads one system property.
    ///
    /// # Errors
    ///
    /// Same as [`Entity::load`].
    pub async fn load_property(&mut self, property: &str, reset: bool) -> Result<&Value, EntityError> {
        self.load(property, &Conditions::new(), reset).await
    }
}

impl Entity for System {
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
        LoadScope::PropertyOnly
    }

    fn requires_identity(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_system_rejects_conditions() {
        let mut system = System::default();
        let mut conditions = Conditions::new();
        conditions.insert("page".to_string(), "2".to_string());

        let result = system.load("timezones", &conditions, false).await;
        assert!(matches!(
            result,
            Err(EntityError::UnsupportedLoad {
                argument: "conditions",
                ..
            })
        ));
    }

    #[test]
    fn test_system_has_no_id() {
        assert!(System::new(Some("ignored")).entity_id().is_none());
        assert!(!System::default().requires_identity());
    }
}
