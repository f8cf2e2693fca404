use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

pub const PAID: &str = "已付款";
pub const UNPAID: &str = "未付款";
pub const PARTIALLY_PAID: &str = "部分付款";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PaymentState {
    Paid,
    Unpaid,
    Partial,
    Other,
}

impl PaymentState {
    /// Classify a free-form payment status as written in the spreadsheet.
    pub fn classify(status: &str) -> Self {
        let status = status.trim();
        match status.to_lowercase().as_str() {
            PAID | "paid" => PaymentState::Paid,
            UNPAID | "unpaid" => PaymentState::Unpaid,
            PARTIALLY_PAID | "partial" | "partially paid" => PaymentState::Partial,
            _ => PaymentState::Other,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: Uuid,
    pub order_number: String,
    pub customer_name: String,
    /// Kilograms.
    pub weight: f64,
    pub unit_price: f64,
    pub shipping_fee: f64,
    pub payment_status: String,
    pub payment_state: PaymentState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A normalized spreadsheet row, ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub order_number: String,
    pub customer_name: String,
    pub weight: f64,
    pub unit_price: f64,
    pub shipping_fee: f64,
    pub payment_status: String,
}
