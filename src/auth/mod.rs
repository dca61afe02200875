//! Credential exchange
//!
//! Exchanges the configured email/password for an opaque auth token.
//! The vendor answers in plain text, one KEY=VALUE pair per line; the
//! token rides on the AUTHTOKEN pair.

pub mod token_cache;

use std::sync::OnceLock;

use regex::Regex;
use reqwest::Client;
use tracing::debug;

use crate::config::settings::ClientConfig;
use crate::error::{Error, Result};
use crate::transport::{dispatch, HttpMethod};
use crate::utils::constants::{AUTH_SCOPE, AUTH_TOKEN_MARKER};

pub use token_cache::TokenCache;

static TOKEN_PAIR: OnceLock<Regex> = OnceLock::new();

fn token_pair_re() -> &'static Regex {
    TOKEN_PAIR.get_or_init(|| Regex::new(r"(\w+)=(\S+)").expect("token pair pattern"))
}

/// One round-trip to the auth endpoint. HTTP failures surface as
/// [`Error::Request`]; an unparseable body as [`Error::Auth`].
pub async fn exchange_credentials(client: &Client, config: &ClientConfig) -> Result<String> {
    debug!(auth_url = %config.auth_url, "exchanging credentials for auth token");

    let params = vec![
        ("SCOPE".to_string(), AUTH_SCOPE.to_string()),
        ("EMAIL_ID".to_string(), config.email.clone()),
        ("PASSWORD".to_string(), config.password.clone()),
    ];

    let body = dispatch(client, &config.auth_url, &params, HttpMethod::Get).await?;
    extract_token(&body)
}

/// Scan the plain-text body for the first KEY=VALUE pair; the KEY must
/// be the AUTHTOKEN marker or the exchange is considered rejected.
pub fn extract_token(body: &str) -> Result<String> {
    let captures = token_pair_re()
        .captures(body)
        .ok_or_else(|| Error::Auth("no KEY=VALUE pair in auth response".into()))?;

    if &captures[1] != AUTH_TOKEN_MARKER {
        return Err(Error::Auth(format!(
            "expected {AUTH_TOKEN_MARKER} pair, found '{}'",
            &captures[1]
        )));
    }
    Ok(captures[2].to_string())
}
