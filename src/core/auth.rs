//! Professor login: a single credential pair from the configuration file.
//! The password is only ever compared as a SHA-256 digest.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use sha2::{Digest, Sha256};

pub fn hash_password(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    format!("{:x}", digest)
}

#[derive(Debug, Clone)]
pub struct Credentials {
    user: String,
    password_sha256: String,
}

impl Credentials {
    pub fn new(user: &str, password_sha256: &str) -> Self {
        Self {
            user: user.to_string(),
            password_sha256: password_sha256.to_ascii_lowercase(),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(&cfg.professor_user, &cfg.professor_password_sha256)
    }

    /// `Ok` only when both the user name and the password match.
    pub fn verify(&self, user: &str, password: &str) -> AppResult<()> {
        if user == self.user && hash_password(password) == self.password_sha256 {
            Ok(())
        } else {
            Err(AppError::InvalidCredentials)
        }
    }
}
