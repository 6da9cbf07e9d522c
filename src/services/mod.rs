//! Services Layer
//!
//! This module contains pure business logic extracted from HTTP handlers.

pub mod user_service;

// Re-export for convenience
pub use user_service::{DeleteAck, UserService};
