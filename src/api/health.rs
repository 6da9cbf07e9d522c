use axum::{Json, extract::State};
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Greeting")
    )
)]
pub async fn hello() -> Json<Value> {
    Json(json!({
        "statusCode": 200,
        "message": "Hello World!"
    }))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy")
    )
)]
pub async fn health_check(State(db): State<DatabaseConnection>) -> Json<Value> {
    let database = match db.ping().await {
        Ok(()) => "ok",
        Err(e) => {
            tracing::warn!("Database ping failed: {}", e);
            "unavailable"
        }
    };

    Json(json!({
        "status": "ok",
        "service": "usuarios-api",
        "version": env!("CARGO_PKG_VERSION"),
        "database": database
    }))
}
