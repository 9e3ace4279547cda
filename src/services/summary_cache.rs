use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard};

use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use lru::LruCache;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value as JsonValue;
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::error::AppResult;

pub const DEFAULT_CAPACITY: usize = 256;

/// Cached report families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheOperation {
    ExecutiveSummary,
    Recommendations,
}

impl CacheOperation {
    pub fn as_str(self) -> &'static str {
        match self {
            CacheOperation::ExecutiveSummary => "dashboard_summary",
            CacheOperation::Recommendations => "ai_recommendations",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCacheKey {
    operation: CacheOperation,
    user_id: String,
    params: String,
}

impl SummaryCacheKey {
    pub fn new(operation: CacheOperation, user_id: impl Into<String>) -> Self {
        Self {
            operation,
            user_id: user_id.into(),
            params: String::new(),
        }
    }

    pub fn with_params(mut self, params: impl Into<String>) -> Self {
        self.params = params.into();
        self
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Base64 (no padding) SHA-256 over operation, user and parameters.
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.operation.as_str().as_bytes());
        hasher.update(b":");
        hasher.update(self.user_id.as_bytes());
        hasher.update(b":");
        hasher.update(self.params.as_bytes());
        STANDARD_NO_PAD.encode(hasher.finalize())
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    user_id: String,
    payload: JsonValue,
    expires_at: DateTime<Utc>,
}

/// Bounded in-memory JSON cache with per-entry expiry.
#[derive(Debug)]
pub struct SummaryCache {
    entries: Mutex<LruCache<String, CacheEntry>>,
    ttl: Duration,
}

impl SummaryCache {
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<String, CacheEntry>> {
        match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                warn!(target: "app::cache", "summary cache lock poisoned; recovering");
                poisoned.into_inner()
            }
        }
    }

    pub fn get<T: DeserializeOwned>(&self, key: &SummaryCacheKey) -> Option<T> {
        self.get_at(key, Utc::now())
    }

    pub fn get_at<T: DeserializeOwned>(
        &self,
        key: &SummaryCacheKey,
        now: DateTime<Utc>,
    ) -> Option<T> {
        let digest = key.digest();
        let mut entries = self.lock();

        let expired = match entries.get(&digest) {
            Some(entry) if entry.expires_at > now => {
                match serde_json::from_value(entry.payload.clone()) {
                    Ok(value) => {
                        debug!(target: "app::cache", key = %digest, "cache hit");
                        return Some(value);
                    }
                    Err(error) => {
                        warn!(
                            target: "app::cache",
                            key = %digest,
                            %error,
                            "dropping undecodable cache entry"
                        );
                        true
                    }
                }
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            entries.pop(&digest);
        }
        debug!(target: "app::cache", key = %digest, "cache miss");
        None
    }

    pub fn put<T: Serialize>(&self, key: &SummaryCacheKey, value: &T) -> AppResult<()> {
        self.put_at(key, value, Utc::now())
    }

    pub fn put_at<T: Serialize>(
        &self,
        key: &SummaryCacheKey,
        value: &T,
        now: DateTime<Utc>,
    ) -> AppResult<()> {
        let payload = serde_json::to_value(value)?;
        let entry = CacheEntry {
            user_id: key.user_id.clone(),
            payload,
            expires_at: now + self.ttl,
        };
        self.lock().put(key.digest(), entry);
        Ok(())
    }

    /// Drops every entry cached for `user_id`; returns how many were removed.
    pub fn invalidate(&self, user_id: &str) -> usize {
        let mut entries = self.lock();
        let stale: Vec<String> = entries
            .iter()
            .filter(|(_, entry)| entry.user_id == user_id)
            .map(|(digest, _)| digest.clone())
            .collect();

        for digest in &stale {
            entries.pop(digest);
        }

        if !stale.is_empty() {
            debug!(
                target: "app::cache",
                user_id,
                removed = stale.len(),
                "invalidated cached reports"
            );
        }
        stale.len()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SummaryCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, Duration::minutes(5))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(user: &str) -> SummaryCacheKey {
        SummaryCacheKey::new(CacheOperation::ExecutiveSummary, user)
    }

    #[test]
    fn digest_is_stable_and_distinguishes_inputs() {
        let a = key("u1").digest();
        assert_eq!(a, key("u1").digest());
        assert_ne!(a, key("u2").digest());
        assert_ne!(
            a,
            SummaryCacheKey::new(CacheOperation::Recommendations, "u1").digest()
        );
        assert_ne!(a, key("u1").with_params("refresh").digest());
        assert!(!a.ends_with('='));
    }

    #[test]
    fn entries_expire_after_ttl() {
        let cache = SummaryCache::new(4, Duration::seconds(300));
        let now = Utc::now();
        cache.put_at(&key("u1"), &vec![1, 2, 3], now).unwrap();

        let hit: Option<Vec<i32>> = cache.get_at(&key("u1"), now + Duration::seconds(299));
        assert_eq!(hit, Some(vec![1, 2, 3]));

        let miss: Option<Vec<i32>> = cache.get_at(&key("u1"), now + Duration::seconds(300));
        assert!(miss.is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn invalidate_only_touches_one_user() {
        let cache = SummaryCache::default();
        cache.put(&key("u1"), &"summary").unwrap();
        cache
            .put(&SummaryCacheKey::new(CacheOperation::Recommendations, "u1"), &"recs")
            .unwrap();
        cache.put(&key("u2"), &"other").unwrap();

        assert_eq!(cache.invalidate("u1"), 2);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get::<String>(&key("u2")).as_deref(), Some("other"));

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn capacity_evicts_least_recent() {
        let cache = SummaryCache::new(2, Duration::minutes(5));
        cache.put(&key("a"), &1).unwrap();
        cache.put(&key("b"), &2).unwrap();
        assert_eq!(cache.get::<i32>(&key("a")), Some(1));
        cache.put(&key("c"), &3).unwrap();

        assert_eq!(cache.get::<i32>(&key("b")), None);
        assert_eq!(cache.get::<i32>(&key("a")), Some(1));
        assert_eq!(cache.get::<i32>(&key("c")), Some(3));
    }
}
