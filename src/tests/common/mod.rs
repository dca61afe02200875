// Shared helpers for the end-to-end operation tests.

use httpmock::prelude::*;
use httpmock::Mock;

use crate::config::settings::ClientConfig;
use crate::ZohoClient;

pub const TEST_TOKEN: &str = "tok123";
pub const AUTH_BODY: &str = "AUTHTOKEN=tok123\nRESULT=TRUE";

/// A client whose auth and CRM endpoints both point at the mock server.
pub fn test_client(server: &MockServer) -> ZohoClient {
    let config = ClientConfig {
        email: "user@example.com".to_string(),
        password: "secret".to_string(),
        api_base: server.url("/crm"),
        auth_url: server.url("/auth"),
        timeout_ms: 5000,
    };
    ZohoClient::new(config).expect("test client")
}

/// Mock a successful credential exchange.
pub async fn mock_auth(server: &MockServer) -> Mock<'_> {
    server
        .mock_async(|when, then| {
            when.method(GET).path("/auth");
            then.status(200).body(AUTH_BODY);
        })
        .await
}
