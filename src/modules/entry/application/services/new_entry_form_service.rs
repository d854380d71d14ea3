use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entry::application::ports::incoming::use_cases::{
        NewEntryFormData, NewEntryFormError, NewEntryFormUseCase,
    },
    identity::application::domain::entities::UserId,
    shared::ownership::check_topic_owner,
    topic::application::ports::outgoing::TopicQuery,
};

#[derive(Debug, Clone)]
pub struct NewEntryFormService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    topics: Q,
}

impl<Q> NewEntryFormService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    pub fn new(topics: Q) -> Self {
        Self { topics }
    }
}

#[async_trait]
impl<Q> NewEntryFormUseCase for NewEntryFormService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        topic_id: Uuid,
    ) -> Result<NewEntryFormData, NewEntryFormError> {
        let topic = self
            .topics
            .find_by_id(topic_id)
            .await
            .map_err(|e| NewEntryFormError::QueryFailed(e.to_string()))?
            .ok_or(NewEntryFormError::TopicNotFound)?;

        check_topic_owner(topic.owner, owner)
            .map_err(|_| NewEntryFormError::TopicNotFound)?;

        let nav_topics = self
            .topics
            .list_for_owner(owner)
            .await
            .map_err(|e| NewEntryFormError::QueryFailed(e.to_string()))?;

        Ok(NewEntryFormData { topic, nav_topics })
    }
}
