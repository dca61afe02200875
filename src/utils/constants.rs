//! Shared constants and invariants

pub const DEFAULT_AUTH_URL: &str = "https://accounts.zoho.com/apiauthtoken/nb/create";
pub const DEFAULT_API_BASE: &str = "https://crm.zoho.com/crm/private/xml";

pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 5000;

// Fixed value of the SCOPE param on the credential exchange
pub const AUTH_SCOPE: &str = "ZohoCRM/crmapi";
// KEY of the KEY=VALUE pair carrying the token in the auth response
pub const AUTH_TOKEN_MARKER: &str = "AUTHTOKEN";

// Env fallbacks for credentials
pub const ENV_EMAIL: &str = "ZOHO_EMAIL";
pub const ENV_PASSWORD: &str = "ZOHO_PASSWORD";
