use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entry::application::ports::outgoing::EntryQuery,
    identity::application::domain::entities::UserId,
    shared::ownership::check_topic_owner,
    topic::application::{
        ports::incoming::use_cases::{TopicDetailData, TopicDetailError, TopicDetailUseCase},
        ports::outgoing::TopicQuery,
    },
};

#[derive(Debug, Clone)]
pub struct TopicDetailService<TQ, EQ>
where
    TQ: TopicQuery + Send + Sync,
    EQ: EntryQuery + Send + Sync,
{
    topics: TQ,
    entries: EQ,
}

impl<TQ, EQ> TopicDetailService<TQ, EQ>
where
    TQ: TopicQuery + Send + Sync,
    EQ: EntryQuery + Send + Sync,
{
    pub fn new(topics: TQ, entries: EQ) -> Self {
        Self { topics, entries }
    }
}

#[async_trait]
impl<TQ, EQ> TopicDetailUseCase for TopicDetailService<TQ, EQ>
where
    TQ: TopicQuery + Send + Sync,
    EQ: EntryQuery + Send + Sync,
{
    async fn execute(
        &self,
        owner: UserId,
        topic_id: Uuid,
    ) -> Result<TopicDetailData, TopicDetailError> {
        let topic = self
            .topics
            .find_by_id(topic_id)
            .await
            .map_err(|e| TopicDetailError::QueryFailed(e.to_string()))?
            .ok_or(TopicDetailError::TopicNotFound)?;

        // Ownership before any data leaves the service.
        check_topic_owner(topic.owner, owner)
            .map_err(|_| TopicDetailError::TopicNotFound)?;

        let entries = self
            .entries
            .list_for_topic(topic_id)
            .await
            .map_err(|e| TopicDetailError::QueryFailed(e.to_string()))?;

        let nav_topics = self
            .topics
            .list_for_owner(owner)
            .await
            .map_err(|e| TopicDetailError::QueryFailed(e.to_string()))?;

        Ok(TopicDetailData {
            topic,
            entries,
            nav_topics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use uuid::Uuid;

    use crate::{
        entry::application::ports::outgoing::{EntryQueryError, EntryQueryResult},
        topic::application::ports::outgoing::{TopicQueryError, TopicQueryResult},
    };

    // ============================================================
    // Mocks
    // ============================================================

    #[derive(Clone)]
    struct MockTopicQuery {
        find_result: Result<Option<TopicQueryResult>, TopicQueryError>,
        list_result: Result<Vec<TopicQueryResult>, TopicQueryError>,
    }

    #[async_trait]
    impl TopicQuery for MockTopicQuery {
        async fn list_for_owner(
            &self,
            _owner: UserId,
        ) -> Result<Vec<TopicQueryResult>, TopicQueryError> {
            self.list_result.clone()
        }

        async fn find_by_id(
            &self,
            _topic_id: Uuid,
        ) -> Result<Option<TopicQueryResult>, TopicQueryError> {
            self.find_result.clone()
        }
    }

    #[derive(Clone)]
    struct MockEntryQuery {
        list_result: Result<Vec<EntryQueryResult>, EntryQueryError>,
    }

    #[async_trait]
    impl EntryQuery for MockEntryQuery {
        async fn list_for_topic(
            &self,
            _topic_id: Uuid,
        ) -> Result<Vec<EntryQueryResult>, EntryQueryError> {
            self.list_result.clone()
        }

        async fn list_for_owner(
            &self,
            _owner: UserId,
        ) -> Result<Vec<EntryQueryResult>, EntryQueryError> {
            unimplemented!("Not used in topic_detail tests")
        }

        async fn find_by_id(
            &self,
            _entry_id: Uuid,
        ) -> Result<Option<EntryQueryResult>, EntryQueryError> {
            unimplemented!("Not used in topic_detail tests")
        }
    }

    /// Entry query that must never be reached; the guard fires first.
    #[derive(Clone)]
    struct UnreachableEntryQuery;

    #[async_trait]
    impl EntryQuery for UnreachableEntryQuery {
        async fn list_for_topic(
            &self,
            _topic_id: Uuid,
        ) -> Result<Vec<EntryQueryResult>, EntryQueryError> {
            panic!("entries must not be fetched when the guard fails")
        }

        async fn list_for_owner(
            &self,
            _owner: UserId,
        ) -> Result<Vec<EntryQueryResult>, EntryQueryError> {
            panic!("entries must not be fetched when the guard fails")
        }

        async fn find_by_id(
            &self,
            _entry_id: Uuid,
        ) -> Result<Option<EntryQueryResult>, EntryQueryError> {
            panic!("entries must not be fetched when the guard fails")
        }
    }

    // ============================================================
    // Helpers
    // ============================================================

    fn topic(id: Uuid, owner: UserId, text: &str) -> TopicQueryResult {
        TopicQueryResult {
            id,
            owner,
            text: text.to_string(),
            date_added: Utc::now(),
        }
    }

    fn entry(topic_id: Uuid, text: &str) -> EntryQueryResult {
        EntryQueryResult {
            id: Uuid::new_v4(),
            topic_id,
            text: text.to_string(),
            date_added: Utc::now(),
        }
    }

    // ============================================================
    // Tests
    // ============================================================

    #[tokio::test]
    async fn detail_returns_topic_entries_and_nav() {
        // Arrange
        let owner = UserId::from(Uuid::new_v4());
        let topic_id = Uuid::new_v4();
        let chess = topic(topic_id, owner, "Chess");

        let topics = MockTopicQuery {
            find_result: Ok(Some(chess.clone())),
            list_result: Ok(vec![chess.clone()]),
        };
        let entries = MockEntryQuery {
            list_result: Ok(vec![entry(topic_id, "newest"), entry(topic_id, "older")]),
        };

        let service = TopicDetailService::new(topics, entries);

        // Act
        let result = service.execute(owner, topic_id).await;

        // Assert
        let detail = result.unwrap();
        assert_eq!(detail.topic.text, "Chess");
        assert_eq!(detail.entries.len(), 2);
        assert_eq!(detail.entries[0].text, "newest");
        assert_eq!(detail.nav_topics.len(), 1);
    }

    #[tokio::test]
    async fn absent_topic_is_not_found() {
        let owner = UserId::from(Uuid::new_v4());

        let topics = MockTopicQuery {
            find_result: Ok(None),
            list_result: Ok(vec![]),
        };
        let service = TopicDetailService::new(topics, UnreachableEntryQuery);

        let result = service.execute(owner, Uuid::new_v4()).await;

        assert!(matches!(result, Err(TopicDetailError::TopicNotFound)));
    }

    #[tokio::test]
    async fn foreign_topic_is_reported_as_not_found() {
        let owner = UserId::from(Uuid::new_v4());
        let stranger = UserId::from(Uuid::new_v4());
        let topic_id = Uuid::new_v4();

        let topics = MockTopicQuery {
            find_result: Ok(Some(topic(topic_id, stranger, "Theirs"))),
            list_result: Ok(vec![]),
        };
        let service = TopicDetailService::new(topics, UnreachableEntryQuery);

        let result = service.execute(owner, topic_id).await;

        // NotFound, not Forbidden: existence must not leak.
        assert!(matches!(result, Err(TopicDetailError::TopicNotFound)));
    }

    #[tokio::test]
    async fn query_failure_is_mapped() {
        let owner = UserId::from(Uuid::new_v4());

        let topics = MockTopicQuery {
            find_result: Err(TopicQueryError::Database("db down".to_string())),
            list_result: Ok(vec![]),
        };
        let service = TopicDetailService::new(topics, UnreachableEntryQuery);

        let result = service.execute(owner, Uuid::new_v4()).await;

        assert!(matches!(result, Err(TopicDetailError::QueryFailed(_))));
    }
}
