use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entry::application::ports::{
        incoming::use_cases::{EditEntryCommand, UpdateEntryError, UpdateEntryUseCase},
        outgoing::{EntryQuery, EntryRepository, EntryRepositoryError, EntryResult},
    },
    identity::application::domain::entities::UserId,
    shared::ownership::check_topic_owner,
    topic::application::ports::outgoing::TopicQuery,
};

#[derive(Debug, Clone)]
pub struct UpdateEntryService<EQ, TQ, R>
where
    EQ: EntryQuery + Send + Sync,
    TQ: TopicQuery + Send + Sync,
    R: EntryRepository + Send + Sync,
{
    entries: EQ,
    topics: TQ,
    repository: R,
}

impl<EQ, TQ, R> UpdateEntryService<EQ, TQ, R>
where
    EQ: EntryQuery + Send + Sync,
    TQ: TopicQuery + Send + Sync,
    R: EntryRepository + Send + Sync,
{
    pub fn new(entries: EQ, topics: TQ, repository: R) -> Self {
        Self {
            entries,
            topics,
            repository,
        }
    }

    async fn owned_entry_topic(
        &self,
        owner: UserId,
        entry_id: Uuid,
    ) -> Result<Uuid, UpdateEntryError> {
        let entry = self
            .entries
            .find_by_id(entry_id)
            .await
            .map_err(|e| UpdateEntryError::RepositoryError(e.to_string()))?
            .ok_or(UpdateEntryError::EntryNotFound)?;

        let topic = self
            .topics
            .find_by_id(entry.topic_id)
            .await
            .map_err(|e| UpdateEntryError::RepositoryError(e.to_string()))?
            .ok_or(UpdateEntryError::EntryNotFound)?;

        check_topic_owner(topic.owner, owner).map_err(|_| UpdateEntryError::EntryNotFound)?;

        Ok(topic.id)
    }
}

#[async_trait]
impl<EQ, TQ, R> UpdateEntryUseCase for UpdateEntryService<EQ, TQ, R>
where
    EQ: EntryQuery + Send + Sync,
    TQ: TopicQuery + Send + Sync,
    R: EntryRepository + Send + Sync,
{
    async fn execute(&self, command: EditEntryCommand) -> Result<EntryResult, UpdateEntryError> {
        self.owned_entry_topic(command.owner(), command.entry_id())
            .await?;

        self.repository
            .update_entry_text(command.entry_id(), command.text().to_string())
            .await
            .map_err(|e| match e {
                EntryRepositoryError::EntryNotFound => UpdateEntryError::EntryNotFound,
                other => UpdateEntryError::RepositoryError(other.to_string()),
            })
    }
}
