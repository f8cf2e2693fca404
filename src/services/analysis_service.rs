use crate::{
    analysis::{AnalysisError, ExtractedOrder, Screenshot},
    error::{AppError, AppResult},
    state::AppState,
};

pub async fn analyze_screenshots(
    state: &AppState,
    screenshots: Vec<Screenshot>,
) -> AppResult<ExtractedOrder> {
    if screenshots.is_empty() {
        return Err(AppError::BadRequest(
            "upload at least one image under the `images` field".into(),
        ));
    }

    tracing::info!(images = screenshots.len(), "screenshot analysis requested");
    state
        .analyzer
        .analyze(&screenshots)
        .await
        .map_err(|err| match err {
            err @ AnalysisError::NotConfigured => AppError::NotImplemented(err.to_string()),
            AnalysisError::Failed(reason) => AppError::Internal(anyhow::anyhow!(reason)),
        })
}
