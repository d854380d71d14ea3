use async_trait::async_trait;

use crate::{
    identity::application::domain::entities::UserId,
    topic::application::{
        ports::incoming::use_cases::{ListTopicsError, ListTopicsUseCase},
        ports::outgoing::{TopicQuery, TopicQueryResult},
    },
};

#[derive(Debug, Clone)]
pub struct ListTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListTopicsUseCase for ListTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    async fn execute(&self, owner: UserId) -> Result<Vec<TopicQueryResult>, ListTopicsError> {
        // The owner filter is the only guard a list needs.
        self.query
            .list_for_owner(owner)
            .await
            .map_err(|e| ListTopicsError::QueryFailed(e.to_string()))
    }
}
