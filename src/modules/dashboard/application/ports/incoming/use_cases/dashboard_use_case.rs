use async_trait::async_trait;

use crate::entry::application::ports::outgoing::EntryQueryResult;
use crate::identity::application::domain::entities::UserId;
use crate::topic::application::ports::outgoing::TopicQueryResult;

/// Landing page aggregates. Anonymous visitors get the default value.
#[derive(Debug, Clone, Default)]
pub struct DashboardData {
    pub topics: Vec<TopicQueryResult>,
    /// Newest first, across every topic the owner has.
    pub entries: Vec<EntryQueryResult>,
    pub topic_count: usize,
    pub entry_count: usize,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DashboardError {
    #[error("Failed to build dashboard: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait DashboardUseCase: Send + Sync {
    async fn execute(&self, owner: Option<UserId>) -> Result<DashboardData, DashboardError>;
}
