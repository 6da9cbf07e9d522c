//! Domain layer - Pure business abstractions
//!
//! This layer has no HTTP framework dependencies (no Axum).
//! Only trait definitions, domain types and error types.

pub mod errors;
pub mod exchange_rates;
pub mod repositories;

pub use errors::DomainError;
pub use exchange_rates::ExchangeRateClient;
pub use repositories::*;
