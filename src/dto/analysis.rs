use serde::Serialize;
use utoipa::ToSchema;

use crate::analysis::ExtractedOrder;

/// Multipart body of a screenshot analysis request.
#[allow(dead_code)]
#[derive(ToSchema)]
pub struct ScreenshotForm {
    /// One part per image, repeated.
    #[schema(value_type = Vec<String>)]
    pub images: Vec<Vec<u8>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AnalysisBody {
    pub result: ExtractedOrder,
}
