pub mod dolar;
pub mod error;
pub mod health;
pub mod users;

use axum::{Router, routing::get};

use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Root + health
        .route("/", get(health::hello))
        .route("/health", get(health::health_check))
        // Users
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        // Exchange rate proxy
        .route("/dolar/:fecha", get(dolar::get_dolar))
        .with_state(state)
}
