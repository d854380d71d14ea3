use async_trait::async_trait;
use uuid::Uuid;

use crate::identity::application::domain::entities::UserId;
use crate::shared::render::EntryView;

/// Read-only DTO for entry queries
#[derive(Debug, Clone)]
pub struct EntryQueryResult {
    pub id: Uuid,
    pub topic_id: Uuid,
    pub text: String,
    pub date_added: chrono::DateTime<chrono::Utc>,
}

impl From<&EntryQueryResult> for EntryView {
    fn from(entry: &EntryQueryResult) -> Self {
        EntryView {
            id: entry.id,
            text: entry.text.clone(),
            date_added: entry.date_added,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EntryQueryError {
    #[error("Database error: {0}")]
    Database(String),

    /// Type-mismatch class errors. The dashboard degrades on these.
    #[error("Malformed query: {0}")]
    Malformed(String),
}

#[async_trait]
pub trait EntryQuery: Send + Sync {
    /// Entries of one topic, newest first.
    async fn list_for_topic(&self, topic_id: Uuid)
        -> Result<Vec<EntryQueryResult>, EntryQueryError>;

    /// Entries across every topic the owner has, newest first.
    async fn list_for_owner(&self, owner: UserId)
        -> Result<Vec<EntryQueryResult>, EntryQueryError>;

    async fn find_by_id(&self, entry_id: Uuid)
        -> Result<Option<EntryQueryResult>, EntryQueryError>;
}
