use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entry::application::ports::{
        incoming::use_cases::{EditEntryFormData, EditEntryFormError, EditEntryFormUseCase},
        outgoing::EntryQuery,
    },
    identity::application::domain::entities::UserId,
    shared::ownership::check_topic_owner,
    topic::application::ports::outgoing::TopicQuery,
};

#[derive(Debug, Clone)]
pub struct EditEntryFormService<EQ, TQ>
where
    EQ: EntryQuery + Send + Sync,
    TQ: TopicQuery + Send + Sync,
{
    entries: EQ,
    topics: TQ,
}

impl<EQ, TQ> EditEntryFormService<EQ, TQ>
where
    EQ: EntryQuery + Send + Sync,
    TQ: TopicQuery + Send + Sync,
{
    pub fn new(entries: EQ, topics: TQ) -> Self {
        Self { entries, topics }
    }
}

#[async_trait]
impl<EQ, TQ> EditEntryFormUseCase for EditEntryFormService<EQ, TQ>
where
    EQ: EntryQuery + Send + Sync,
    TQ: TopicQuery + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        entry_id: Uuid,
    ) -> Result<EditEntryFormData, EditEntryFormError> {
        let entry = self
            .entries
            .find_by_id(entry_id)
            .await
            .map_err(|e| EditEntryFormError::QueryFailed(e.to_string()))?
            .ok_or(EditEntryFormError::EntryNotFound)?;

        // Ownership is inherited from the parent topic.
        let topic = self
            .topics
            .find_by_id(entry.topic_id)
            .await
            .map_err(|e| EditEntryFormError::QueryFailed(e.to_string()))?
            .ok_or(EditEntryFormError::EntryNotFound)?;

        check_topic_owner(topic.owner, owner)
            .map_err(|_| EditEntryFormError::EntryNotFound)?;

        let nav_topics = self
            .topics
            .list_for_owner(owner)
            .await
            .map_err(|e| EditEntryFormError::QueryFailed(e.to_string()))?;

        Ok(EditEntryFormData {
            entry,
            topic,
            nav_topics,
        })
    }
}
