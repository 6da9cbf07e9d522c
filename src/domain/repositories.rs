//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::DomainError;

/// A persisted user row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// In-memory user record, not yet persisted.
///
/// `id` is `None` until storage assigns one. Missing `name` or `email` are
/// written as NULL and rejected by the table constraints on save.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserRecord {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl From<User> for UserRecord {
    fn from(user: User) -> Self {
        Self {
            id: Some(user.id),
            name: Some(user.name),
            email: Some(user.email),
        }
    }
}

/// Repository trait for User entity
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find all users, in insertion order
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;

    /// Find a user by ID. A missing row is `Ok(None)`, never an error.
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, DomainError>;

    /// Find a user by email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Build a record in memory without touching storage
    fn create(&self, name: Option<String>, email: Option<String>) -> UserRecord {
        UserRecord {
            id: None,
            name,
            email,
        }
    }

    /// Insert (no id) or update (id set) a record.
    ///
    /// Fails on NULL or duplicate email.
    async fn save(&self, record: UserRecord) -> Result<User, DomainError>;

    /// Delete a user by ID, returning the number of rows removed.
    /// Deleting a missing id is not an error.
    async fn delete(&self, id: i32) -> Result<u64, DomainError>;
}
