use async_trait::async_trait;
use uuid::Uuid;

use crate::entry::application::ports::outgoing::EntryResult;
use crate::identity::application::domain::entities::UserId;

//
// ──────────────────────────────────────────────────────────
// New Entry Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntryFormError {
    #[error("Text cannot be empty")]
    EmptyText,
}

#[derive(Debug, Clone)]
pub struct NewEntryCommand {
    owner: UserId,
    topic_id: Uuid,
    text: String,
}

impl NewEntryCommand {
    pub fn new(owner: UserId, topic_id: Uuid, text: String) -> Result<Self, EntryFormError> {
        let text = text.trim();

        if text.is_empty() {
            return Err(EntryFormError::EmptyText);
        }

        Ok(Self {
            owner,
            topic_id,
            text: text.to_string(),
        })
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }

    /// The path-resolved topic the entry is bound to.
    pub fn topic_id(&self) -> Uuid {
        self.topic_id
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
pub enum CreateEntryError {
    /// Absent, or owned by someone else.
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateEntryUseCase: Send + Sync {
    async fn execute(&self, command: NewEntryCommand) -> Result<EntryResult, CreateEntryError>;
}
