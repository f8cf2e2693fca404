use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier, SaltString},
};
use password_hash::rand_core::OsRng;

use crate::config::AdminSecret;

/// Source of truth for the admin account.
pub trait CredentialProvider: Send + Sync {
    /// The only username allowed into the admin area.
    fn username(&self) -> &str;

    fn verify(&self, username: &str, password: &str) -> bool;
}

/// One admin account taken from configuration. Only the argon2 hash is kept in memory.
pub struct StaticCredentials {
    username: String,
    password_hash: String,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: &str) -> anyhow::Result<Self> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!(e.to_string()))?
            .to_string();
        Ok(Self {
            username: username.into(),
            password_hash,
        })
    }

    pub fn from_hash(username: impl Into<String>, password_hash: String) -> anyhow::Result<Self> {
        PasswordHash::new(&password_hash)
            .map_err(|e| anyhow::anyhow!("invalid ADMIN_PASSWORD_HASH: {e}"))?;
        Ok(Self {
            username: username.into(),
            password_hash,
        })
    }

    pub fn from_secret(username: impl Into<String>, secret: &AdminSecret) -> anyhow::Result<Self> {
        match secret {
            AdminSecret::Password(password) => Self::new(username, password),
            AdminSecret::Hash(hash) => Self::from_hash(username, hash.clone()),
        }
    }
}

impl CredentialProvider for StaticCredentials {
    fn username(&self) -> &str {
        &self.username
    }

    fn verify(&self, username: &str, password: &str) -> bool {
        // Always run the hash check so a wrong username costs the same as a wrong password.
        let password_ok = PasswordHash::new(&self.password_hash)
            .map(|parsed| {
                Argon2::default()
                    .verify_password(password.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false);
        password_ok && username == self.username
    }
}
