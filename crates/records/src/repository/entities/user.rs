//! `users` table entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set};

use domain::{DomainResult, User, UserRole};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub role: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database row to domain entity
impl TryFrom<Model> for User {
    type Error = domain::DomainError;

    fn try_from(model: Model) -> DomainResult<Self> {
        Ok(User {
            id: model.user_id,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            password: model.password,
            role: UserRole::try_from(model.role.as_str())?,
        })
    }
}

/// Every column except the identity, which storage assigns
impl From<&User> for ActiveModel {
    fn from(user: &User) -> Self {
        ActiveModel {
            user_id: NotSet,
            first_name: Set(user.first_name.clone()),
            last_name: Set(user.last_name.clone()),
            email: Set(user.email.clone()),
            password: Set(user.password.clone()),
            role: Set(user.role.to_string()),
        }
    }
}
