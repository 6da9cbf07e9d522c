//! SeaORM implementation of UserRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::domain::{DomainError, User, UserRecord, UserRepository};
use crate::models::user::{ActiveModel, Column, Entity as UserEntity, Model};

/// SeaORM-based implementation of UserRepository
pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_user(model: Model) -> Result<User, DomainError> {
    match (model.name, model.email) {
        (Some(name), Some(email)) => Ok(User {
            id: model.id,
            name,
            email,
        }),
        _ => Err(DomainError::Internal(format!(
            "user {} has a NULL name or email",
            model.id
        ))),
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let users = UserEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        users.into_iter().map(to_user).collect()
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DomainError> {
        let user = UserEntity::find_by_id(id).one(&self.db).await?;

        user.map(to_user).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let user = UserEntity::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await?;

        user.map(to_user).transpose()
    }

    async fn save(&self, record: UserRecord) -> Result<User, DomainError> {
        let saved = match record.id {
            None => {
                let user = ActiveModel {
                    name: Set(record.name),
                    email: Set(record.email),
                    ..Default::default()
                };
                user.insert(&self.db).await?
            }
            Some(id) => {
                let user = ActiveModel {
                    id: Unchanged(id),
                    name: Set(record.name),
                    email: Set(record.email),
                };
                user.update(&self.db).await?
            }
        };

        to_user(saved)
    }

    async fn delete(&self, id: i32) -> Result<u64, DomainError> {
        let result = UserEntity::delete_by_id(id).exec(&self.db).await?;

        Ok(result.rows_affected)
    }
}
