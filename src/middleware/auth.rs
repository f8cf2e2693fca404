use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::{
    error::AppError,
    session::{SESSION_COOKIE, SessionError, session_ttl},
    state::AppState,
};

/// A request carrying a valid admin session cookie.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub username: String,
}

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(SESSION_COOKIE).ok_or(SessionError::Missing)?;

        let claims = state.sessions.verify(token.value()).map_err(|err| {
            tracing::debug!(error = %err, "admin session rejected");
            err
        })?;

        Ok(AdminSession {
            username: claims.sub,
        })
    }
}

pub fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    let max_age = time::Duration::seconds(session_ttl().num_seconds());
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .secure(secure)
        .max_age(max_age)
        .build()
}

/// Cookie that makes the browser drop the session.
pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .build();
    cookie.make_removal();
    cookie
}
