use async_trait::async_trait;
use uuid::Uuid;

use crate::entry::application::ports::outgoing::EntryQueryResult;
use crate::identity::application::domain::entities::UserId;
use crate::topic::application::ports::outgoing::TopicQueryResult;

/// Context for the pre-filled "edit entry" form.
#[derive(Debug, Clone)]
pub struct EditEntryFormData {
    pub entry: EntryQueryResult,
    pub topic: TopicQueryResult,
    pub nav_topics: Vec<TopicQueryResult>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EditEntryFormError {
    /// Absent, or reachable only through someone else's topic.
    #[error("Entry not found")]
    EntryNotFound,

    #[error("Failed to fetch entry: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait EditEntryFormUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        entry_id: Uuid,
    ) -> Result<EditEntryFormData, EditEntryFormError>;
}
