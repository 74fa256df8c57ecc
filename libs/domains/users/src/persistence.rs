use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait};

use crate::{
    entity,
    error::UserResult,
    models::{NewUser, User},
    repository::UserRepository,
};

/// SeaORM-backed repository; works with any backend the connection was opened on.
#[derive(Debug, Clone)]
pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn create(&self, user: NewUser) -> UserResult<User> {
        let active_model: entity::ActiveModel = user.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(user_id = model.id, "Created user");
        Ok(model.into())
    }

    async fn list_all(&self) -> UserResult<Vec<User>> {
        let models = entity::Entity::find().all(&self.db).await?;
        Ok(models.into_iter().map(Into::into).collect())
    }
}
