use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};

use crate::{
    dto::orders::SearchOrderQuery,
    error::AppResult,
    response::{ErrorBody, OrderBody},
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/search-order", get(search_order))
}

#[utoipa::path(
    get,
    path = "/api/search-order",
    params(SearchOrderQuery),
    responses(
        (status = 200, description = "The order with that number", body = OrderBody),
        (status = 400, description = "orderNumber missing or blank", body = ErrorBody),
        (status = 404, description = "No order with that number", body = ErrorBody),
        (status = 500, description = "Lookup failed", body = ErrorBody)
    ),
    tag = "Orders"
)]
pub async fn search_order(
    State(state): State<AppState>,
    Query(query): Query<SearchOrderQuery>,
) -> AppResult<Json<OrderBody>> {
    let order =
        order_service::find_by_order_number(&state.orm, query.order_number.as_deref()).await?;
    Ok(Json(OrderBody { order }))
}
