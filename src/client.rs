//! Public CRM operations
//!
//! Every operation follows one template: validate scope, ensure a
//! token, build the URL, encode records for writes, dispatch, decode,
//! raise on a vendor-reported error.

use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

use crate::auth::{self, TokenCache};
use crate::codec::{self, XmlNode};
use crate::config::settings::ClientConfig;
use crate::error::{Error, Result};
use crate::record::RecordSet;
use crate::scope::Scope;
use crate::transport::{dispatch, HttpMethod};

/// Zoho CRM API client.
///
/// Cheap to clone; clones share the HTTP connection pool and the
/// cached auth token.
#[derive(Debug, Clone)]
pub struct ZohoClient {
    config: ClientConfig,
    http: Client,
    tokens: TokenCache,
}

impl ZohoClient {
    /// Fails with [`Error::Config`] on missing or blank credentials.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            config,
            http,
            tokens: TokenCache::new(),
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Insert records into a CRM module.
    pub async fn insert_records(
        &self,
        scope: &str,
        records: impl Into<RecordSet>,
    ) -> Result<XmlNode> {
        self.write_operation(scope, "insertRecords", records.into())
            .await
    }

    /// Update existing records in a CRM module.
    pub async fn update_records(
        &self,
        scope: &str,
        records: impl Into<RecordSet>,
    ) -> Result<XmlNode> {
        self.write_operation(scope, "updateRecords", records.into())
            .await
    }

    /// Fetch all records of a CRM module.
    pub async fn get_records(&self, scope: &str) -> Result<XmlNode> {
        self.read_operation(scope, "getRecords", &[]).await
    }

    /// Fetch the records owned by the authenticated user.
    pub async fn get_my_records(&self, scope: &str) -> Result<XmlNode> {
        self.read_operation(scope, "getMyRecords", &[]).await
    }

    /// Fetch a single record by its id.
    pub async fn get_record_by_id(&self, scope: &str, id: &str) -> Result<XmlNode> {
        self.read_operation(scope, "getRecordById", &[("id", id)])
            .await
    }

    /// Drop the cached auth token; the next operation re-acquires one.
    pub async fn invalidate_token(&self) {
        self.tokens.invalidate().await;
    }

    async fn write_operation(
        &self,
        scope: &str,
        operation: &str,
        records: RecordSet,
    ) -> Result<XmlNode> {
        let scope: Scope = scope.parse()?;
        let xml = codec::encode(scope, &records)?;
        self.call(scope, operation, HttpMethod::Post, vec![("xmlData".into(), xml)])
            .await
    }

    async fn read_operation(
        &self,
        scope: &str,
        operation: &str,
        extra: &[(&str, &str)],
    ) -> Result<XmlNode> {
        let scope: Scope = scope.parse()?;
        let params = extra
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.call(scope, operation, HttpMethod::Get, params).await
    }

    async fn call(
        &self,
        scope: Scope,
        operation: &str,
        method: HttpMethod,
        extra: Vec<(String, String)>,
    ) -> Result<XmlNode> {
        let token = self.ensure_token().await?;

        let url = format!("{}/{}/{}", self.config.api_base, scope, operation);
        let mut params = vec![("authtoken".to_string(), token)];
        params.extend(extra);

        debug!(scope = %scope, operation, "calling crm api");
        let body = dispatch(&self.http, &url, &params, method).await?;

        let decoded = codec::decode(&body)?;
        let response = decoded
            .child("response")
            .cloned()
            .ok_or_else(|| Error::Xml("response element missing".into()))?;

        if let Some(rejection) = response.child("error") {
            let message = rejection
                .child_text("message")
                .unwrap_or("unknown vendor error")
                .to_string();
            let code = rejection.child_text("code").map(str::to_string);
            warn!(scope = %scope, operation, %message, "vendor rejected request");
            return Err(Error::Vendor { code, message });
        }

        Ok(response)
    }

    /// Return the cached token, acquiring one first if the cache is
    /// empty. Acquisition happens at most once per cache lifetime; a
    /// vendor rejection of a stale token is NOT re-acquired here.
    pub(crate) async fn ensure_token(&self) -> Result<String> {
        if let Some(token) = self.tokens.get().await {
            return Ok(token);
        }

        let token = auth::exchange_credentials(&self.http, &self.config).await?;
        self.tokens.set(token.clone()).await;
        Ok(token)
    }
}
