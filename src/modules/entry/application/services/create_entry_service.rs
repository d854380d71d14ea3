use async_trait::async_trait;

use crate::{
    entry::application::ports::{
        incoming::use_cases::{CreateEntryError, CreateEntryUseCase, NewEntryCommand},
        outgoing::{CreateEntryData, EntryRepository, EntryResult},
    },
    shared::ownership::check_topic_owner,
    topic::application::ports::outgoing::TopicQuery,
};

#[derive(Debug, Clone)]
pub struct CreateEntryService<Q, R>
where
    Q: TopicQuery + Send + Sync,
    R: EntryRepository + Send + Sync,
{
    topics: Q,
    repository: R,
}

impl<Q, R> CreateEntryService<Q, R>
where
    Q: TopicQuery + Send + Sync,
    R: EntryRepository + Send + Sync,
{
    pub fn new(topics: Q, repository: R) -> Self {
        Self { topics, repository }
    }
}

#[async_trait]
impl<Q, R> CreateEntryUseCase for CreateEntryService<Q, R>
where
    Q: TopicQuery + Send + Sync,
    R: EntryRepository + Send + Sync,
{
    async fn execute(&self, command: NewEntryCommand) -> Result<EntryResult, CreateEntryError> {
        // Both the missing-row and the wrong-owner path collapse into
        // TopicNotFound.
        let topic = self
            .topics
            .find_by_id(command.topic_id())
            .await
            .map_err(|e| CreateEntryError::RepositoryError(e.to_string()))?
            .ok_or(CreateEntryError::TopicNotFound)?;

        check_topic_owner(topic.owner, command.owner())
            .map_err(|_| CreateEntryError::TopicNotFound)?;

        // The entry is bound to the fetched topic, not to anything the
        // client submitted.
        let data = CreateEntryData {
            topic_id: topic.id,
            text: command.text().to_string(),
        };

        self.repository
            .create_entry(data)
            .await
            .map_err(|e| CreateEntryError::RepositoryError(e.to_string()))
    }
}
