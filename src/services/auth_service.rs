use crate::{
    audit::log_audit,
    dto::auth::LoginRequest,
    error::{AppError, AppResult},
    state::AppState,
};

/// Verify the admin credentials and return a signed session token.
pub async fn login_admin(state: &AppState, payload: LoginRequest) -> AppResult<String> {
    let LoginRequest { username, password } = payload;

    // argon2 is CPU bound.
    let sessions = state.sessions.clone();
    let name = username.clone();
    let token = tokio::task::spawn_blocking(move || sessions.login(&name, &password))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e)))?;

    let token = match token {
        Ok(token) => token,
        Err(err) => {
            tracing::warn!(username = %username, "admin login rejected");
            return Err(err.into());
        }
    };

    if let Err(err) = log_audit(&state.orm, Some(&username), "admin_login", None, None).await {
        tracing::warn!(error = %err, "audit log failed");
    }

    Ok(token)
}
