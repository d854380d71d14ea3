use uuid::Uuid;

use crate::identity::application::domain::entities::UserId;
use crate::identity::application::ports::outgoing::{IdentityError, IdentityProvider};

/// Interprets the session's stored `user_id` value.
///
/// The external identity service writes the value at login; this adapter
/// only has to read it back.
#[derive(Debug, Clone, Default)]
pub struct SessionIdentityProvider;

impl IdentityProvider for SessionIdentityProvider {
    fn resolve(&self, raw: &str) -> Result<UserId, IdentityError> {
        Uuid::parse_str(raw)
            .map(UserId::from)
            .map_err(|e| IdentityError::Malformed(format!("session user_id {raw:?}: {e}")))
    }
}
