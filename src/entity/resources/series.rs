//! Repeating event series.

use crate::entity::{Deletable, Entity, EntityState, Updatable};

/// A series parent event, addressed as `/series/{id}/`.
///
/// Series are created implicitly through repeating events, so only update
/// and delete are exposed.
#[derive(Debug, Default)]
pub struct Series {
    state: EntityState,
}

impl Series {
    /// API path segment for series.
    pub const API_TYPE: &'static str = "series";

    /// Creates a detached series.
    #[must_use]
    pub fn new(entity_id: Option<&str>) -> Self {
        Self {
            state: EntityState::new(entity_id),
        }
    }
}

impl Entity for Series {
    fn entity_api_type(&self) -> &'static str {
        Self::API_TYPE
    }

    fn state(&self) -> &EntityState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut EntityState {
        &mut self.state
    }

    fn as_updatable(&mut self) -> Option<&mut dyn Updatable> {
        Some(self)
    }

    fn as_deletable(&mut self) -> Option<&mut dyn Deletable> {
        Some(self)
    }
}

impl Updatable for Series {}

impl Deletable for Series {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_cannot_be_created() {
        let mut series = Series::new(Some("77"));
        assert!(series.as_creatable().is_none());
        assert!(series.as_updatable().is_some());
        assert!(series.as_deletable().is_some());
    }
}
