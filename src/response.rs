use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Order;

/// Body of every failed request.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SuccessBody {
    pub success: bool,
}

impl SuccessBody {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderBody {
    pub order: Order,
}

/// Outcome of a spreadsheet upload. `errors` is omitted when every row went through.
#[derive(Debug, Serialize, ToSchema)]
pub struct ImportSummary {
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}
