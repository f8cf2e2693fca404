use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchOrderQuery {
    /// Order number printed on the waybill.
    #[serde(rename = "orderNumber")]
    pub order_number: Option<String>,
}
