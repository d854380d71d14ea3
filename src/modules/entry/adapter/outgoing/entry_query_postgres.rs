use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::entry::application::ports::outgoing::{EntryQuery, EntryQueryError, EntryQueryResult};
use crate::identity::application::domain::entities::UserId;

// SeaORM entities; the owner filter joins through topics.
use super::sea_orm_entity::{Column as EntryColumn, Entity as EntryEntity, Model as EntryModel};
use crate::topic::adapter::outgoing::sea_orm_entity::{
    Column as TopicColumn, Entity as TopicEntity,
};

#[derive(Debug, Clone)]
pub struct EntryQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EntryQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> EntryQueryError {
    match e {
        DbErr::Type(msg) => EntryQueryError::Malformed(msg),
        other => EntryQueryError::Database(other.to_string()),
    }
}

#[async_trait]
impl EntryQuery for EntryQueryPostgres {
    async fn list_for_topic(
        &self,
        topic_id: Uuid,
    ) -> Result<Vec<EntryQueryResult>, EntryQueryError> {
        let models: Vec<EntryModel> = EntryEntity::find()
            .filter(EntryColumn::TopicId.eq(topic_id))
            .order_by_desc(EntryColumn::DateAdded)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.iter().map(EntryModel::to_query_result).collect())
    }

    async fn list_for_owner(
        &self,
        owner: UserId,
    ) -> Result<Vec<EntryQueryResult>, EntryQueryError> {
        let models: Vec<EntryModel> = EntryEntity::find()
            .inner_join(TopicEntity)
            .filter(TopicColumn::Owner.eq(owner.value()))
            .order_by_desc(EntryColumn::DateAdded)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.iter().map(EntryModel::to_query_result).collect())
    }

    async fn find_by_id(
        &self,
        entry_id: Uuid,
    ) -> Result<Option<EntryQueryResult>, EntryQueryError> {
        let model = EntryEntity::find_by_id(entry_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(|m| m.to_query_result()))
    }
}
