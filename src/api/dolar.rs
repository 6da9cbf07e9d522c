use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::infrastructure::AppState;

/// Proxy to mindicador.cl; the upstream document is returned verbatim
#[utoipa::path(
    get,
    path = "/dolar/{fecha}",
    params(("fecha" = String, Path, description = "Date token, e.g. 01-01-2023")),
    responses(
        (status = 200, description = "Upstream rate document"),
        (status = 502, description = "Rate lookup failed")
    )
)]
pub async fn get_dolar(State(state): State<AppState>, Path(fecha): Path<String>) -> impl IntoResponse {
    match state.user_service.dolar(&fecha).await {
        Ok(doc) => (StatusCode::OK, Json(doc)).into_response(),
        Err(e) => e.into_response(),
    }
}
