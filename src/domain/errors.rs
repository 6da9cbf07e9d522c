//! Domain error types
//!
//! Absence of a user is an `Option`, not an error. Only storage failures,
//! exchange-rate failures and unexpected states end up here.

use std::fmt;

#[derive(Debug)]
pub enum DomainError {
    /// Storage failure, constraint violations included. Passed through as-is.
    Database(String),
    /// The exchange-rate lookup failed (transport, status or decoding)
    RateUnavailable(String),
    /// A row read back in a shape the table should never allow
    Internal(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::Database(msg) => write!(f, "Database error: {}", msg),
            DomainError::RateUnavailable(cause) => {
                write!(f, "Error al obtener el dólar: {}", cause)
            }
            DomainError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Database(e.to_string())
    }
}
