use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

// Input DTO for creating an entry. `topic_id` is always the path-resolved
// topic; nothing client-supplied reaches this field.
#[derive(Debug, Clone)]
pub struct CreateEntryData {
    pub topic_id: Uuid,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EntryResult {
    pub id: Uuid,
    pub topic_id: Uuid,
    pub text: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EntryRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Entry not found")]
    EntryNotFound,
}

#[async_trait]
pub trait EntryRepository: Send + Sync {
    async fn create_entry(&self, data: CreateEntryData)
        -> Result<EntryResult, EntryRepositoryError>;

    /// Update semantics: only `text` is mutable, everything else is fixed
    /// at creation.
    async fn update_entry_text(
        &self,
        entry_id: Uuid,
        text: String,
    ) -> Result<EntryResult, EntryRepositoryError>;
}
