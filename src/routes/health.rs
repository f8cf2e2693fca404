use axum::{Json, extract::State};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

#[derive(Serialize, ToSchema)]
pub struct HealthData {
    pub status: String,
    pub database: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "OK", body = HealthData),
    ),
        tag = "Health"
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthData> {
    let database = match state.orm.ping().await {
        Ok(()) => "ok",
        Err(err) => {
            tracing::warn!(error = %err, "database ping failed");
            "unavailable"
        }
    };

    Json(HealthData {
        status: "ok".to_string(),
        database: database.to_string(),
    })
}
