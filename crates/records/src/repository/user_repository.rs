//! User repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use common::AppResult;
use domain::{Id, User};

use super::base::{map_row, map_rows, CrudRepository};
use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::infra::{ConnectionProvider, ScopedConnection};

#[cfg(any(test, feature = "test-utils"))]
use mockall::mock;

/// User repository trait for dependency injection.
#[async_trait]
pub trait UserRepository: CrudRepository<User> {
    /// Find user by exact email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
}

#[cfg(any(test, feature = "test-utils"))]
mock! {
    pub UserRepository {}

    #[async_trait]
    impl CrudRepository<User> for UserRepository {
        async fn add(&self, item: User) -> AppResult<User>;
        async fn find_by_id(&self, id: Id) -> AppResult<Option<User>>;
        async fn list(&self) -> AppResult<Vec<User>>;
        async fn update(&self, item: &User) -> AppResult<u64>;
        async fn delete(&self, id: Id) -> AppResult<u64>;
    }

    #[async_trait]
    impl UserRepository for UserRepository {
        async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
    }
}

/// Concrete implementation of UserRepository over the `users` table
pub struct UserStore {
    connections: Arc<dyn ConnectionProvider>,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(connections: Arc<dyn ConnectionProvider>) -> Self {
        Self { connections }
    }
}

#[async_trait]
impl CrudRepository<User> for UserStore {
    async fn add(&self, mut user: User) -> AppResult<User> {
        let conn = ScopedConnection::open(self.connections.as_ref()).await?;
        let result = UserEntity::insert(ActiveModel::from(&user))
            .exec(&*conn)
            .await?;
        conn.release().await;

        user.id = result.last_insert_id;
        tracing::debug!(user_id = user.id, "User added");
        Ok(user)
    }

    async fn find_by_id(&self, id: Id) -> AppResult<Option<User>> {
        let conn = ScopedConnection::open(self.connections.as_ref()).await?;
        let row = UserEntity::find_by_id(id).one(&*conn).await?;
        conn.release().await;

        map_row(row)
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let conn = ScopedConnection::open(self.connections.as_ref()).await?;
        let rows = UserEntity::find()
            .order_by_asc(user::Column::UserId)
            .all(&*conn)
            .await?;
        conn.release().await;

        map_rows(rows)
    }

    async fn update(&self, user: &User) -> AppResult<u64> {
        let conn = ScopedConnection::open(self.connections.as_ref()).await?;
        let result = UserEntity::update_many()
            .set(ActiveModel::from(user))
            .filter(user::Column::UserId.eq(user.id))
            .exec(&*conn)
            .await?;
        conn.release().await;

        tracing::debug!(user_id = user.id, rows = result.rows_affected, "User updated");
        Ok(result.rows_affected)
    }

    async fn delete(&self, id: Id) -> AppResult<u64> {
        let conn = ScopedConnection::open(self.connections.as_ref()).await?;
        let result = UserEntity::delete_by_id(id).exec(&*conn).await?;
        conn.release().await;

        tracing::debug!(user_id = id, rows = result.rows_affected, "User deleted");
        Ok(result.rows_affected)
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let conn = ScopedConnection::open(self.connections.as_ref()).await?;
        let row = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&*conn)
            .await?;
        conn.release().await;

        // Case-insensitive collations (MySQL's default) may match other casings
        map_row(row.filter(|model| model.email == email))
    }
}
