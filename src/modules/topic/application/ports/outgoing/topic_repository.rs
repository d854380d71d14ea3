use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::identity::application::domain::entities::UserId;

// Input DTO for creating a topic. `owner` is always the acting identity;
// nothing client-supplied reaches this field.
#[derive(Debug, Clone)]
pub struct CreateTopicData {
    pub owner: UserId,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopicResult {
    pub id: Uuid,
    pub owner: UserId,
    pub text: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TopicRepository: Send + Sync {
    async fn create_topic(&self, data: CreateTopicData)
        -> Result<TopicResult, TopicRepositoryError>;
}
