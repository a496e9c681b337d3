//! OAuth2 access token cache.
//!
//! Client-credentials tokens live for hours; the adapter reuses one until it
//! is within a minute of expiring. The lock is never held across the token
//! request itself.

use chrono::{DateTime, Duration, Utc};
use secrecy::{ExposeSecret, SecretString};
use tokio::sync::RwLock;

/// Tokens are treated as expired this long before the platform says so.
const EXPIRY_MARGIN_SECS: i64 = 60;

struct CachedToken {
    token: SecretString,
    expires_at: DateTime<Utc>,
}

/// Shared cache for the adapter's bearer token.
#[derive(Default)]
pub struct AccessTokenCache {
    inner: RwLock<Option<CachedToken>>,
}

impl AccessTokenCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached token if it is still fresh.
    pub async fn get(&self) -> Option<String> {
        self.get_at(Utc::now()).await
    }

    /// Stores a token valid for `expires_in` seconds.
    pub async fn store(&self, token: String, expires_in: i64) {
        self.store_at(token, expires_in, Utc::now()).await;
    }

    pub async fn clear(&self) {
        *self.inner.write().await = None;
    }

    async fn get_at(&self, now: DateTime<Utc>) -> Option<String> {
        let guard = self.inner.read().await;
        guard
            .as_ref()
            .filter(|cached| cached.expires_at > now)
            .map(|cached| cached.token.expose_secret().clone())
    }

    async fn store_at(&self, token: String, expires_in: i64, now: DateTime<Utc>) {
        let lifetime = (expires_in - EXPIRY_MARGIN_SECS).max(0);
        *self.inner.write().await = Some(CachedToken {
            token: SecretString::new(token),
            expires_at: now + Duration::seconds(lifetime),
        });
    }
}
