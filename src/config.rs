use std::env;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub enum AdminSecret {
    /// Plain password, hashed with argon2 at startup.
    Password(String),
    /// Pre-computed argon2 PHC string.
    Hash(String),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub admin_username: String,
    pub admin_secret: AdminSecret,
    pub session_secret: String,
    pub cookie_secure: bool,
    pub max_upload_bytes: usize,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);

        let admin_username = env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string());
        let admin_secret = match (env::var("ADMIN_PASSWORD_HASH"), env::var("ADMIN_PASSWORD")) {
            (Ok(hash), _) if !hash.is_empty() => AdminSecret::Hash(hash),
            (_, Ok(password)) if !password.is_empty() => AdminSecret::Password(password),
            _ => anyhow::bail!("either ADMIN_PASSWORD or ADMIN_PASSWORD_HASH must be set"),
        };

        let session_secret = env::var("SESSION_SECRET")
            .map_err(|_| anyhow::anyhow!("SESSION_SECRET is not set"))?;
        if session_secret.len() < 16 {
            anyhow::bail!("SESSION_SECRET must be at least 16 bytes");
        }

        let cookie_secure = env::var("COOKIE_SECURE")
            .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        let max_upload_bytes = env::var("MAX_UPLOAD_BYTES")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES);

        Ok(Self {
            port,
            database_url,
            host,
            admin_username,
            admin_secret,
            session_secret,
            cookie_secure,
            max_upload_bytes,
        })
    }
}
