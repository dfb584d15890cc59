//! User domain entity and related types.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{ROLE_ADMIN, ROLE_STUDENT, ROLE_TEACHER, UNSET_ID};
use crate::error::DomainError;
use crate::Id;

/// User roles enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Student,
    Teacher,
    Admin,
}

impl UserRole {
    /// Value stored in the `role` column
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => ROLE_STUDENT,
            UserRole::Teacher => ROLE_TEACHER,
            UserRole::Admin => ROLE_ADMIN,
        }
    }
}

impl FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [UserRole::Student, UserRole::Teacher, UserRole::Admin]
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::unknown_role(s))
    }
}

impl TryFrom<&str> for UserRole {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        role.as_str().to_string()
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Storage-assigned identity (0 until stored)
    #[serde(default)]
    pub id: Id,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Stored as given, no hashing
    #[serde(skip_serializing, default)]
    pub password: String,
    pub role: UserRole,
}

impl User {
    /// Create a user that has not been stored yet
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        role: UserRole,
    ) -> Self {
        Self {
            id: UNSET_ID,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            password: password.into(),
            role,
        }
    }

    /// Full display name
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Check if the storage has assigned an identity yet
    pub fn is_stored(&self) -> bool {
        self.id != UNSET_ID
    }

    /// Copy of this user carrying the given identity
    pub fn with_id(mut self, id: Id) -> Self {
        self.id = id;
        self
    }
}
