use std::sync::Arc;
use tokio::sync::RwLock;

/// Cache for the single session token.
///
/// No expiry tracking: a stale token is only noticed when the vendor
/// rejects it, at which point the caller invalidates and retries.
/// Clones share the same slot, so a cloned client reuses the token.
#[derive(Debug, Clone, Default)]
pub struct TokenCache {
    inner: Arc<RwLock<Option<String>>>,
}

impl TokenCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self) -> Option<String> {
        self.inner.read().await.clone()
    }

    pub async fn set(&self, token: String) {
        *self.inner.write().await = Some(token);
    }

    /// Drop the cached token; the next operation re-acquires.
    pub async fn invalidate(&self) {
        *self.inner.write().await = None;
    }
}
