use async_trait::async_trait;
use uuid::Uuid;

use crate::entry::application::ports::outgoing::EntryQueryResult;
use crate::identity::application::domain::entities::UserId;
use crate::topic::application::ports::outgoing::TopicQueryResult;

/// Aggregate context for the topic detail page.
#[derive(Debug, Clone)]
pub struct TopicDetailData {
    pub topic: TopicQueryResult,
    /// Newest first.
    pub entries: Vec<EntryQueryResult>,
    pub nav_topics: Vec<TopicQueryResult>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicDetailError {
    /// Absent, or owned by someone else. The two are indistinguishable.
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Failed to fetch topic: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait TopicDetailUseCase: Send + Sync {
    async fn execute(
        &self,
        owner: UserId,
        topic_id: Uuid,
    ) -> Result<TopicDetailData, TopicDetailError>;
}
