use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use crate::models::{NewUser, User};

/// Sea-ORM entity for the `users` table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "nombre")]
    pub first_name: String,
    #[sea_orm(column_name = "apellido")]
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(column_name = "reparto")]
    pub department: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for User {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            department: model.department,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

// Timestamps are always set on insert; column defaults are never relied on.
impl From<NewUser> for ActiveModel {
    fn from(user: NewUser) -> Self {
        let now = chrono::Utc::now();
        ActiveModel {
            id: NotSet,
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            email: Set(user.email),
            department: Set(user.department),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
    }
}
