//! Users.

use crate::entity::{Entity, EntityState};

/// Id that addresses the user owning the access token.
pub const CURRENT_USER_ID: &str = "me";

/// A user, addressed as `/users/{id}/`.
///
/// Without an explicit id the entity addresses the current user
/// (`/users/me/`). Users are read-only.
#[derive(Debug)]
pub struct User {
    state: EntityState,
}

impl User {
    /// API path segment for users.
    pub const API_TYPE: &'static str = "users";

    /// Creates a detached user, defaulting to [`CURRENT_USER_ID`].
    #[must_use]
    pub fn new(entity_id: Option<&str>) -> Self {
        Self {
            state: EntityState::new(Some(entity_id.unwrap_or(CURRENT_USER_ID))),
        }
    }
}

impl Default for User {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Entity for User {
    fn entity_api_type(&self) -> &'static str {
        Self::API_TYPE
    }

    fn state(&self) -> &EntityState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut EntityState {
        &mut self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_defaults_to_current_user() {
        assert_eq!(User::default().entity_id(), Some("me"));
        assert_eq!(User::new(Some("42")).entity_id(), Some("42"));
        assert!(!User::default().is_new());
    }
}
