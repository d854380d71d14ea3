use async_trait::async_trait;
use uuid::Uuid;

use super::create_entry_use_case::EntryFormError;
use crate::entry::application::ports::outgoing::EntryResult;
use crate::identity::application::domain::entities::UserId;

//
// ──────────────────────────────────────────────────────────
// Edit Entry Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct EditEntryCommand {
    owner: UserId,
    entry_id: Uuid,
    text: String,
}

impl EditEntryCommand {
    pub fn new(owner: UserId, entry_id: Uuid, text: String) -> Result<Self, EntryFormError> {
        let text = text.trim();

        if text.is_empty() {
            return Err(EntryFormError::EmptyText);
        }

        Ok(Self {
            owner,
            entry_id,
            text: text.to_string(),
        })
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }

    pub fn entry_id(&self) -> Uuid {
        self.entry_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateEntryError {
    /// Absent, or reachable only through someone else's topic.
    #[error("Entry not found")]
    EntryNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UpdateEntryUseCase: Send + Sync {
    async fn execute(&self, command: EditEntryCommand) -> Result<EntryResult, UpdateEntryError>;
}
