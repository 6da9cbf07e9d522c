//! Exchange-rate lookup contract

use async_trait::async_trait;
use serde_json::Value;

use super::DomainError;

/// Fetches the USD rate document for a date token (e.g. `01-01-2023`).
///
/// The payload is passed through untouched; callers should only expect a
/// `serie` array of `{fecha, valor}` entries.
#[async_trait]
pub trait ExchangeRateClient: Send + Sync {
    async fn dolar(&self, date_token: &str) -> Result<Value, DomainError>;
}
