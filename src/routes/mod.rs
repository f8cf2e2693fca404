use axum::Router;

use crate::state::AppState;

pub mod admin;
pub mod auth;
pub mod doc;
pub mod health;
pub mod imports;
pub mod orders;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/admin", auth::router().merge(admin::router()))
        .merge(imports::router())
        .merge(orders::router())
}
