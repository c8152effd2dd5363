use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedToken {
    pub value: String,
    pub expires_at: DateTime<Utc>,
}

impl CachedToken {
    pub fn new(value: String, expires_at: DateTime<Utc>) -> Self {
        Self { value, expires_at }
    }

    /// Token fetched at `fetched_at`, living for `ttl`
    pub fn issued(value: String, fetched_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self::new(value, fetched_at + ttl)
    }

    /// Valid only strictly before `expires_at`
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}
