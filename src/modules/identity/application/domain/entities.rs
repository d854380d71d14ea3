use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity a Topic (and transitively its Entries) belongs to.
///
/// Opaque on purpose: the user store lives with the external identity
/// service, this core only ever compares and forwards ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(Uuid);

impl UserId {
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<UserId> for Uuid {
    fn from(id: UserId) -> Self {
        id.0
    }
}
