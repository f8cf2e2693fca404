use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use axum_extra::extract::cookie::CookieJar;

use crate::{
    dto::auth::LoginRequest,
    error::AppResult,
    middleware::auth::{AdminSession, removal_cookie, session_cookie},
    response::{ErrorBody, SuccessBody},
    services::auth_service::login_admin,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/verify", get(verify))
}

#[utoipa::path(
    post,
    path = "/api/admin/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in, session cookie set", body = SuccessBody),
        (status = 401, description = "Invalid credentials", body = ErrorBody)
    ),
    tag = "Admin"
)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> AppResult<(CookieJar, Json<SuccessBody>)> {
    let token = login_admin(&state, payload).await?;
    let jar = jar.add(session_cookie(token, state.cookie_secure));
    Ok((jar, Json(SuccessBody::ok())))
}

#[utoipa::path(
    post,
    path = "/api/admin/logout",
    responses(
        (status = 200, description = "Session cookie cleared", body = SuccessBody)
    ),
    tag = "Admin"
)]
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<SuccessBody>) {
    (jar.add(removal_cookie()), Json(SuccessBody::ok()))
}

#[utoipa::path(
    get,
    path = "/api/admin/verify",
    responses(
        (status = 200, description = "Session is valid", body = SuccessBody),
        (status = 401, description = "Missing, invalid or expired session", body = ErrorBody)
    ),
    security(("admin_session" = [])),
    tag = "Admin"
)]
pub async fn verify(_session: AdminSession) -> Json<SuccessBody> {
    Json(SuccessBody::ok())
}
