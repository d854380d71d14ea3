use async_trait::async_trait;

use crate::topic::application::ports::{
    incoming::use_cases::{CreateTopicError, CreateTopicUseCase, NewTopicCommand},
    outgoing::{CreateTopicData, TopicRepository, TopicResult},
};

#[derive(Debug, Clone)]
pub struct CreateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateTopicUseCase for CreateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    async fn execute(&self, command: NewTopicCommand) -> Result<TopicResult, CreateTopicError> {
        // Owner comes from the command, which only ever carries the acting
        // identity.
        let data = CreateTopicData {
            owner: command.owner(),
            text: command.text().to_string(),
        };

        self.repository
            .create_topic(data)
            .await
            .map_err(|e| CreateTopicError::RepositoryError(e.to_string()))
    }
}
