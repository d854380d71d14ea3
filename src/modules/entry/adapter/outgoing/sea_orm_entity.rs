use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::entry::application::ports::outgoing::{EntryQueryResult, EntryResult};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub topic_id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub text: String,

    pub date_added: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_repository_result(&self) -> EntryResult {
        EntryResult {
            id: self.id,
            topic_id: self.topic_id,
            text: self.text.clone(),
        }
    }

    pub fn to_query_result(&self) -> EntryQueryResult {
        EntryQueryResult {
            id: self.id,
            topic_id: self.topic_id,
            text: self.text.clone(),
            date_added: self.date_added.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::topic::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::TopicId",
        to = "crate::topic::adapter::outgoing::sea_orm_entity::Column::Id"
    )]
    Topic,
}

impl Related<crate::topic::adapter::outgoing::sea_orm_entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Topic.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
