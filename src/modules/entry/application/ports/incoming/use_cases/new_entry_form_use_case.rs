use async_trait::async_trait;
use uuid::Uuid;

use crate::identity::application::domain::entities::UserId;
use crate::topic::application::ports::outgoing::TopicQueryResult;

/// Context for the blank "add entry" form, scoped to its topic.
#[derive(Debug, Clone)]
pub struct NewEntryFormData {
    pub topic: TopicQueryResult,
    pub nav_topics: Vec<TopicQueryResult>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum NewEntryFormError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Failed to fetch topic: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait NewEntryFormUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        topic_id: Uuid,
    ) -> Result<NewEntryFormData, NewEntryFormError>;
}
