use crate::identity::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum IdentityError {
    #[error("Malformed identity value: {0}")]
    Malformed(String),
}

/// Resolves the raw session value into a user identity.
///
/// The session transport (cookie, store, middleware) is the extractor's
/// concern; this port only interprets the stored value.
pub trait IdentityProvider: Send + Sync {
    fn resolve(&self, raw: &str) -> Result<UserId, IdentityError>;
}
