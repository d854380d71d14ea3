use async_trait::async_trait;
use uuid::Uuid;

use crate::identity::application::domain::entities::UserId;
use crate::shared::render::TopicView;

/// Read-only DTO for topic queries
#[derive(Debug, Clone)]
pub struct TopicQueryResult {
    pub id: Uuid,
    pub owner: UserId,
    pub text: String,
    pub date_added: chrono::DateTime<chrono::Utc>,
}

impl From<&TopicQueryResult> for TopicView {
    fn from(topic: &TopicQueryResult) -> Self {
        TopicView {
            id: topic.id,
            text: topic.text.clone(),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicQueryError {
    #[error("Database error: {0}")]
    Database(String),

    /// Type-mismatch class errors, e.g. a filter value the backend cannot
    /// coerce. The dashboard degrades on these instead of failing.
    #[error("Malformed query: {0}")]
    Malformed(String),
}

#[async_trait]
pub trait TopicQuery: Send + Sync {
    /// Owner's topics, text ascending. Doubles as the navigation list.
    async fn list_for_owner(&self, owner: UserId)
        -> Result<Vec<TopicQueryResult>, TopicQueryError>;

    async fn find_by_id(&self, topic_id: Uuid)
        -> Result<Option<TopicQueryResult>, TopicQueryError>;
}
