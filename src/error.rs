//! Client error taxonomy

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the CRM client.
///
/// Nothing here is retried internally; the caller owns retry policy.
#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid scope '{0}'")]
    Scope(String),

    #[error("unsupported HTTP method '{0}'")]
    Method(String),

    #[error("request rejected with status {status}")]
    Request { status: u16 },

    #[error("http transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("auth token exchange failed: {0}")]
    Auth(String),

    /// Application-level rejection embedded in a 2xx response.
    #[error("vendor error: {message}")]
    Vendor {
        code: Option<String>,
        message: String,
    },

    #[error("xml error: {0}")]
    Xml(String),
}
