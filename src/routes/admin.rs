use axum::{
    Json, Router,
    extract::{Multipart, State},
    routing::post,
};

use crate::{
    analysis::Screenshot,
    dto::analysis::{AnalysisBody, ScreenshotForm},
    error::{AppError, AppResult},
    middleware::auth::AdminSession,
    response::ErrorBody,
    services::analysis_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/analyze-screenshots", post(analyze_screenshots))
}

#[utoipa::path(
    post,
    path = "/api/admin/analyze-screenshots",
    request_body(content = ScreenshotForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Fields read from the screenshots", body = AnalysisBody),
        (status = 400, description = "No images uploaded", body = ErrorBody),
        (status = 401, description = "Not logged in", body = ErrorBody),
        (status = 501, description = "No recognition backend configured", body = ErrorBody)
    ),
    security(("admin_session" = [])),
    tag = "Admin"
)]
pub async fn analyze_screenshots(
    State(state): State<AppState>,
    _session: AdminSession,
    mut multipart: Multipart,
) -> AppResult<Json<AnalysisBody>> {
    let mut screenshots = Vec::new();
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("images") {
            continue;
        }
        let file_name = field.file_name().unwrap_or("screenshot").to_string();
        let content_type = field.content_type().map(str::to_string);
        if content_type
            .as_deref()
            .is_some_and(|ct| !ct.starts_with("image/"))
        {
            return Err(AppError::BadRequest(format!("{file_name} is not an image")));
        }
        let bytes = field.bytes().await?;
        screenshots.push(Screenshot {
            file_name,
            content_type,
            bytes: bytes.to_vec(),
        });
    }

    let result = analysis_service::analyze_screenshots(&state, screenshots).await?;
    Ok(Json(AnalysisBody { result }))
}
