use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::identity::application::domain::entities::UserId;
use crate::topic::application::ports::outgoing::{TopicQueryResult, TopicResult};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "topics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub owner: Uuid,

    pub text: String,

    pub date_added: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_repository_result(&self) -> TopicResult {
        TopicResult {
            id: self.id,
            owner: UserId::from(self.owner),
            text: self.text.clone(),
        }
    }

    pub fn to_query_result(&self) -> TopicQueryResult {
        TopicQueryResult {
            id: self.id,
            owner: UserId::from(self.owner),
            text: self.text.clone(),
            date_added: self.date_added.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::entry::adapter::outgoing::sea_orm_entity::Entity")]
    Entry,
}

impl Related<crate::entry::adapter::outgoing::sea_orm_entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Entry.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
