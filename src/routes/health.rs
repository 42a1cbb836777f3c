use axum::{Json, extract::State};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    response::{ApiResponse, Meta},
    state::AppState,
};

#[derive(Serialize, ToSchema)]
pub struct HealthData {
    pub status: String,
    pub store: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "OK", body = ApiResponse<HealthData>),
        (status = 504, description = "Store did not answer in time"),
    ),
    tag = "Health"
)]
pub async fn health_check(State(state): State<AppState>) -> AppResult<Json<ApiResponse<HealthData>>> {
    let reachable = state
        .bounded(async { Ok(state.orm.ping().await.is_ok()) })
        .await?;
    if !reachable {
        tracing::warn!("store ping failed");
    }

    let data = HealthData {
        status: "ok".to_string(),
        store: if reachable { "up" } else { "down" }.to_string(),
    };

    Ok(Json(ApiResponse::success(
        "Health check",
        data,
        Some(Meta::empty()),
    )))
}
