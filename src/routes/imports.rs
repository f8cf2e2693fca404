use axum::{
    Json, Router,
    extract::{Multipart, State},
    routing::post,
};

use crate::{
    dto::imports::UploadForm,
    error::AppResult,
    import::ImportError,
    middleware::auth::AdminSession,
    response::{ErrorBody, ImportSummary},
    services::import_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/upload-excel", post(upload_excel))
}

#[utoipa::path(
    post,
    path = "/api/upload-excel",
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Rows imported; `errors` lists rows that were skipped", body = ImportSummary),
        (status = 400, description = "No file, no data rows, or missing required columns", body = ErrorBody),
        (status = 401, description = "Not logged in", body = ErrorBody),
        (status = 413, description = "Upload exceeds the configured size limit", body = ErrorBody),
        (status = 500, description = "The workbook could not be processed", body = ErrorBody)
    ),
    security(("admin_session" = [])),
    tag = "Import"
)]
pub async fn upload_excel(
    State(state): State<AppState>,
    session: AdminSession,
    mut multipart: Multipart,
) -> AppResult<Json<ImportSummary>> {
    let mut file = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            let bytes = field.bytes().await?;
            file = Some(bytes.to_vec());
            break;
        }
    }

    let file = file
        .filter(|bytes| !bytes.is_empty())
        .ok_or(ImportError::MissingFile)?;
    let summary = import_service::import_workbook(&state, &session.username, file).await?;
    Ok(Json(summary))
}
