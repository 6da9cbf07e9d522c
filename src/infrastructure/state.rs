//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{ExchangeRateClient, UserRepository};
use crate::infrastructure::SeaOrmUserRepository;
use crate::infrastructure::config::Config;
use crate::modules::integrations::mindicador::MindicadorClient;
use crate::services::UserService;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection
    db: DatabaseConnection,
    /// User repository
    pub user_repo: Arc<dyn UserRepository>,
    /// User service (CRUD + dolar lookup)
    pub user_service: UserService,
}

impl AppState {
    /// Create a new AppState backed by SeaORM and mindicador.cl
    pub fn new(db: DatabaseConnection, config: &Config) -> Self {
        let rates = Arc::new(MindicadorClient::new(config.mindicador_base_url.clone()));
        Self::with_rate_client(db, rates)
    }

    /// Same as [`AppState::new`] with a caller-supplied exchange-rate client
    pub fn with_rate_client(db: DatabaseConnection, rates: Arc<dyn ExchangeRateClient>) -> Self {
        let user_repo: Arc<dyn UserRepository> = Arc::new(SeaOrmUserRepository::new(db.clone()));
        let user_service = UserService::new(user_repo.clone(), rates);

        Self {
            db,
            user_repo,
            user_service,
        }
    }
}

// Implement FromRef to allow extracting DatabaseConnection from AppState
impl axum::extract::FromRef<AppState> for DatabaseConnection {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}
