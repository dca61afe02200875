//! # Zoho CRM Client Library
//!
//! Provides a client for the Zoho CRM HTTP API: exchanging account
//! credentials for an auth token, caching that token for the lifetime
//! of the client, and performing record CRUD against CRM modules over
//! the vendor's row/FL XML wire format.
//!
//! Modules:
//! - `config` — client configuration and credential validation
//! - `auth` — credential exchange and token cache
//! - `codec` — row/FL XML encoding and generic XML decoding
//! - `transport` — HTTP method set and request dispatch
//! - `client` — public CRM operations

pub mod auth;
pub mod client;
pub mod codec;
pub mod config;
pub mod error;
pub mod record;
pub mod scope;
pub mod tests;
pub mod transport;
pub mod utils;

pub use crate::client::ZohoClient;
pub use crate::codec::node::XmlNode;
pub use crate::config::settings::ClientConfig;
pub use crate::error::{Error, Result};
pub use crate::record::{Record, RecordSet};
pub use crate::scope::Scope;
pub use crate::transport::HttpMethod;
