use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::cache::token::CachedToken;

/// Single-slot token cache owned by one client.
///
/// Expired entries are never returned; they stay in place until overwritten
/// or cleared.
#[derive(Debug, Clone, Default)]
pub struct TokenCache {
    inner: Arc<RwLock<Option<CachedToken>>>,
}

impl TokenCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cached token
    pub async fn set(&self, token: CachedToken) {
        let mut slot = self.inner.write().await;
        *slot = Some(token);
    }

    /// Get token if it exists and is not expired at `now`
    pub async fn get(&self, now: DateTime<Utc>) -> Option<CachedToken> {
        let slot = self.inner.read().await;
        slot.as_ref()
            .filter(|token| token.is_valid_at(now))
            .cloned()
    }

    /// Cached entry regardless of expiry
    pub async fn peek(&self) -> Option<CachedToken> {
        self.inner.read().await.clone()
    }

    pub async fn clear(&self) {
        self.inner.write().await.take();
    }
}
