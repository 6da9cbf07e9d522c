//! User API handlers
//!
//! Thin adapters over [`UserService`](crate::services::UserService). A missing
//! user is answered with `200 {}` rather than 404.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::User;
use crate::infrastructure::AppState;
use crate::services::DeleteAck;

/// Request body for create and update.
///
/// Both fields are optional on the wire; the table rejects missing values.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UserPayload {
    pub name: Option<String>,
    pub email: Option<String>,
}

fn absent() -> axum::response::Response {
    (StatusCode::OK, Json(json!({}))).into_response()
}

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = [User])
    )
)]
pub async fn list_users(State(state): State<AppState>) -> impl IntoResponse {
    match state.user_service.find_all().await {
        Ok(users) => (StatusCode::OK, Json(users)).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "The user, or {} when it does not exist", body = User)
    )
)]
pub async fn get_user(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    match state.user_service.find_one(id).await {
        Ok(Some(user)) => (StatusCode::OK, Json(user)).into_response(),
        Ok(None) => absent(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 500, description = "Missing field or duplicate email")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<UserPayload>,
) -> impl IntoResponse {
    match state
        .user_service
        .create(payload.name, payload.email)
        .await
    {
        Ok(user) => (StatusCode::CREATED, Json(user)).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User id")),
    request_body = UserPayload,
    responses(
        (status = 200, description = "Updated user, or {} when it does not exist", body = User),
        (status = 500, description = "Missing field or duplicate email")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UserPayload>,
) -> impl IntoResponse {
    match state
        .user_service
        .update(id, payload.name, payload.email)
        .await
    {
        Ok(Some(user)) => (StatusCode::OK, Json(user)).into_response(),
        Ok(None) => absent(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "Always acknowledged", body = DeleteAck)
    )
)]
pub async fn delete_user(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    match state.user_service.delete(id).await {
        Ok(ack) => (StatusCode::OK, Json(ack)).into_response(),
        Err(e) => e.into_response(),
    }
}
