//! HTTP request dispatch
//!
//! A finite method set mapped to explicit reqwest calls; no dispatch by
//! method-name string ever reaches the HTTP client.

use std::fmt;
use std::str::FromStr;

use reqwest::Client;
use tracing::debug;

use crate::error::{Error, Result};

/// Methods the dispatcher supports. Anything else fails fast before
/// any network I/O.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl FromStr for HttpMethod {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "DELETE" => Ok(HttpMethod::Delete),
            _ => Err(Error::Method(name.to_string())),
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Send one request and return the response body.
///
/// Params are form-encoded into the query string for GET and into the
/// request body otherwise. A non-2xx status aborts with
/// [`Error::Request`]; no retry.
pub async fn dispatch(
    client: &Client,
    url: &str,
    params: &[(String, String)],
    method: HttpMethod,
) -> Result<String> {
    debug!(url, method = %method, "dispatching request");

    let request = match method {
        HttpMethod::Get => client.get(url).query(params),
        HttpMethod::Post => client.post(url).form(params),
        HttpMethod::Put => client.put(url).form(params),
        HttpMethod::Delete => client.delete(url).form(params),
    };

    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::Request {
            status: status.as_u16(),
        });
    }

    Ok(response.text().await?)
}
