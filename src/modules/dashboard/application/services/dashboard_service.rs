use async_trait::async_trait;

use crate::{
    dashboard::application::ports::incoming::use_cases::{
        DashboardData, DashboardError, DashboardUseCase,
    },
    entry::application::ports::outgoing::{EntryQuery, EntryQueryError},
    identity::application::domain::entities::UserId,
    topic::application::ports::outgoing::{TopicQuery, TopicQueryError},
};

#[derive(Debug, Clone)]
pub struct DashboardService<TQ, EQ>
where
    TQ: TopicQuery + Send + Sync,
    EQ: EntryQuery + Send + Sync,
{
    topics: TQ,
    entries: EQ,
}

impl<TQ, EQ> DashboardService<TQ, EQ>
where
    TQ: TopicQuery + Send + Sync,
    EQ: EntryQuery + Send + Sync,
{
    pub fn new(topics: TQ, entries: EQ) -> Self {
        Self { topics, entries }
    }
}

#[async_trait]
impl<TQ, EQ> DashboardUseCase for DashboardService<TQ, EQ>
where
    TQ: TopicQuery + Send + Sync,
    EQ: EntryQuery + Send + Sync,
{
    async fn execute(&self, owner: Option<UserId>) -> Result<DashboardData, DashboardError> {
        let Some(owner) = owner else {
            return Ok(DashboardData::default());
        };

        // Malformed-query errors degrade to the empty landing page instead
        // of failing the request. Anything else still propagates.
        let topics = match self.topics.list_for_owner(owner).await {
            Ok(topics) => topics,
            Err(TopicQueryError::Malformed(msg)) => {
                tracing::warn!("Dashboard topic query degraded to empty context: {msg}");
                return Ok(DashboardData::default());
            }
            Err(TopicQueryError::Database(msg)) => return Err(DashboardError::QueryFailed(msg)),
        };

        let entries = match self.entries.list_for_owner(owner).await {
            Ok(entries) => entries,
            Err(EntryQueryError::Malformed(msg)) => {
                tracing::warn!("Dashboard entry query degraded to empty context: {msg}");
                return Ok(DashboardData::default());
            }
            Err(EntryQueryError::Database(msg)) => return Err(DashboardError::QueryFailed(msg)),
        };

        Ok(DashboardData {
            topic_count: topics.len(),
            entry_count: entries.len(),
            topics,
            entries,
        })
    }
}
