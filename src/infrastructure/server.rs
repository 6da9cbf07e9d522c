// Server module - Builds the router and runs the HTTP server

use axum::Router;
use axum::http::HeaderValue;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api;
use crate::api_docs::ApiDoc;
use crate::infrastructure::AppState;
use crate::infrastructure::config::Config;
use crate::infrastructure::db;

fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let mut allowed = Vec::new();
    for origin in origins {
        match origin.parse::<HeaderValue>() {
            Ok(v) => allowed.push(v),
            Err(e) => tracing::error!("Failed to parse CORS origin '{}': {}", origin, e),
        }
    }
    cors.allow_origin(allowed)
}

/// Build the full application router for the given state
pub fn build_router(state: AppState, config: &Config) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/api/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(api::api_router(state))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_allowed_origins))
}

/// Connect to the database and serve until the process is stopped
pub async fn run(config: Config) -> Result<(), String> {
    let db = db::init_db(&config.database_url)
        .await
        .map_err(|e| format!("Failed to initialize database: {}", e))?;

    let state = AppState::new(db, &config);
    let app = build_router(state, &config);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", addr, e))?;

    tracing::info!("usuarios-api listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| format!("HTTP server error: {}", e))
}

