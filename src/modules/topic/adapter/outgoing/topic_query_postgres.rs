use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::identity::application::domain::entities::UserId;
use crate::topic::application::ports::outgoing::{TopicQuery, TopicQueryError, TopicQueryResult};

// SeaORM entity
use super::sea_orm_entity::{Column as TopicColumn, Entity as TopicEntity, Model as TopicModel};

#[derive(Debug, Clone)]
pub struct TopicQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> TopicQueryError {
    match e {
        DbErr::Type(msg) => TopicQueryError::Malformed(msg),
        other => TopicQueryError::Database(other.to_string()),
    }
}

#[async_trait]
impl TopicQuery for TopicQueryPostgres {
    async fn list_for_owner(
        &self,
        owner: UserId,
    ) -> Result<Vec<TopicQueryResult>, TopicQueryError> {
        let models: Vec<TopicModel> = TopicEntity::find()
            .filter(TopicColumn::Owner.eq(owner.value()))
            .order_by_asc(TopicColumn::Text)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.iter().map(TopicModel::to_query_result).collect())
    }

    async fn find_by_id(
        &self,
        topic_id: Uuid,
    ) -> Result<Option<TopicQueryResult>, TopicQueryError> {
        let model = TopicEntity::find_by_id(topic_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(|m| m.to_query_result()))
    }
}
