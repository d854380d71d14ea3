use async_trait::async_trait;

use crate::identity::application::domain::entities::UserId;
use crate::topic::application::ports::outgoing::TopicQueryResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListTopicsError {
    #[error("Failed to fetch topics: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListTopicsUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<Vec<TopicQueryResult>, ListTopicsError>;
}
