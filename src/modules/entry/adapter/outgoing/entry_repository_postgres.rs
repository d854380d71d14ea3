use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::entry::application::ports::outgoing::{
    CreateEntryData, EntryRepository, EntryRepositoryError, EntryResult,
};

// SeaORM entity imports
use super::sea_orm_entity::{ActiveModel as EntryActiveModel, Model as EntryModel};

#[derive(Debug, Clone)]
pub struct EntryRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EntryRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EntryRepository for EntryRepositoryPostgres {
    async fn create_entry(
        &self,
        data: CreateEntryData,
    ) -> Result<EntryResult, EntryRepositoryError> {
        // date_added is filled by the database default.
        let active = EntryActiveModel {
            id: Set(Uuid::new_v4()),
            topic_id: Set(data.topic_id),
            text: Set(data.text),
            ..Default::default()
        };

        let inserted: EntryModel = active
            .insert(&*self.db)
            .await
            .map_err(|e| EntryRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_repository_result())
    }

    async fn update_entry_text(
        &self,
        entry_id: Uuid,
        text: String,
    ) -> Result<EntryResult, EntryRepositoryError> {
        let active = EntryActiveModel {
            id: Set(entry_id),
            text: Set(text),
            ..Default::default()
        };

        let updated = active.update(&*self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => EntryRepositoryError::EntryNotFound,
            other => EntryRepositoryError::DatabaseError(other.to_string()),
        })?;

        Ok(updated.to_repository_result())
    }
}
