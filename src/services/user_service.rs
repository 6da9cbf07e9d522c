//! User Service - Pure business logic without HTTP layer
//!
//! Orchestrates the user repository and the exchange-rate client. Storage
//! errors are returned as-is; only exchange-rate failures are translated.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::domain::{DomainError, ExchangeRateClient, User, UserRecord, UserRepository};

/// Acknowledgment returned by delete, whether or not a row existed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeleteAck {
    pub deleted: bool,
}

#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
    rates: Arc<dyn ExchangeRateClient>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, rates: Arc<dyn ExchangeRateClient>) -> Self {
        Self { users, rates }
    }

    pub async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        self.users.find_all().await
    }

    /// `Ok(None)` when no user has this id
    pub async fn find_one(&self, id: i32) -> Result<Option<User>, DomainError> {
        tracing::debug!("Looking up user {}", id);
        self.users.find_by_id(id).await
    }

    pub async fn create(
        &self,
        name: Option<String>,
        email: Option<String>,
    ) -> Result<User, DomainError> {
        let record = self.users.create(name, email);
        let user = self.users.save(record).await?;

        tracing::info!("Created user {}", user.id);
        Ok(user)
    }

    /// Overwrites name and email of an existing user.
    ///
    /// Returns `Ok(None)` without writing anything when the id is unknown.
    /// Read and write are two separate storage calls with no isolation.
    pub async fn update(
        &self,
        id: i32,
        name: Option<String>,
        email: Option<String>,
    ) -> Result<Option<User>, DomainError> {
        let Some(user) = self.find_one(id).await? else {
            return Ok(None);
        };

        let mut record = UserRecord::from(user);
        record.name = name;
        record.email = email;

        let saved = self.users.save(record).await?;
        tracing::info!("Updated user {}", saved.id);
        Ok(Some(saved))
    }

    pub async fn delete(&self, id: i32) -> Result<DeleteAck, DomainError> {
        let removed = self.users.delete(id).await?;
        tracing::info!("Delete user {} ({} rows)", id, removed);

        Ok(DeleteAck { deleted: true })
    }

    /// Adds two numbers, defaulting to 1 and 2
    pub fn sumar(a: Option<f64>, b: Option<f64>) -> f64 {
        a.unwrap_or(1.0) + b.unwrap_or(2.0)
    }

    pub async fn dolar(&self, date_token: &str) -> Result<Value, DomainError> {
        self.rates.dolar(date_token).await.map_err(|e| {
            tracing::warn!("Dolar lookup for {} failed: {}", date_token, e);
            match e {
                DomainError::RateUnavailable(msg) => DomainError::RateUnavailable(msg),
                other => DomainError::RateUnavailable(other.to_string()),
            }
        })
    }
}
