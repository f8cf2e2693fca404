use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// An uploaded screenshot (payment slip, order page or waybill).
#[derive(Debug, Clone)]
pub struct Screenshot {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Order fields read off a set of screenshots. Meant for a human to confirm, never
/// written to the database as is.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ExtractedOrder {
    pub order_number: Option<String>,
    pub customer_name: Option<String>,
    pub weight: Option<f64>,
    pub shipping_fee: Option<f64>,
    pub payment_status: Option<String>,
    /// 0 to 100.
    pub confidence: u8,
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("screenshot analysis is not configured")]
    NotConfigured,

    #[error("screenshot analysis failed: {0}")]
    Failed(String),
}

#[async_trait]
pub trait ScreenshotAnalyzer: Send + Sync {
    async fn analyze(&self, screenshots: &[Screenshot]) -> Result<ExtractedOrder, AnalysisError>;
}

/// Placeholder used until a recognition backend is wired in.
pub struct UnconfiguredAnalyzer;

#[async_trait]
impl ScreenshotAnalyzer for UnconfiguredAnalyzer {
    async fn analyze(&self, _screenshots: &[Screenshot]) -> Result<ExtractedOrder, AnalysisError> {
        Err(AnalysisError::NotConfigured)
    }
}
