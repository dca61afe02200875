use serde::Deserialize;

use crate::error::{Error, Result};
use crate::utils::constants::{
    DEFAULT_API_BASE, DEFAULT_AUTH_URL, DEFAULT_HTTP_TIMEOUT_MS, ENV_EMAIL, ENV_PASSWORD,
};

/// ================================
/// Client-wide settings
/// ================================
///
/// Credentials are immutable for the lifetime of the client. Missing or
/// blank credentials are rejected at construction, not at first use.
#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    pub email: String,
    pub password: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_auth_url")]
    pub auth_url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl ClientConfig {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Result<Self> {
        let config = Self {
            email: email.into(),
            password: password.into(),
            api_base: default_api_base(),
            auth_url: default_auth_url(),
            timeout_ms: default_timeout_ms(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Build from `ZOHO_EMAIL` / `ZOHO_PASSWORD` when credentials are
    /// not supplied explicitly.
    pub fn from_env() -> Result<Self> {
        let email = std::env::var(ENV_EMAIL)
            .map_err(|_| Error::Config(format!("{ENV_EMAIL} is not set")))?;
        let password = std::env::var(ENV_PASSWORD)
            .map_err(|_| Error::Config(format!("{ENV_PASSWORD} is not set")))?;
        Self::new(email, password)
    }

    pub fn validate(&self) -> Result<()> {
        if self.email.trim().is_empty() {
            return Err(Error::Config("email must not be empty".into()));
        }
        if self.password.trim().is_empty() {
            return Err(Error::Config("password must not be empty".into()));
        }
        if self.api_base.trim().is_empty() || self.auth_url.trim().is_empty() {
            return Err(Error::Config("api_base and auth_url must not be empty".into()));
        }
        Ok(())
    }
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_auth_url() -> String {
    DEFAULT_AUTH_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_HTTP_TIMEOUT_MS
}
