use crate::core::errors::LedgerError;
use crate::core::models::GroupSnapshot;
use crate::infrastructure::cache::SnapshotCache;
use crate::infrastructure::cache::cache_keys::group_snapshot_key;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

type Entry = (Arc<GroupSnapshot>, DateTime<Utc>);

#[derive(Clone, Default)]
pub struct InMemoryCache {
    cache: Arc<RwLock<HashMap<String, Entry>>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        InMemoryCache {
            cache: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl SnapshotCache for InMemoryCache {
    async fn get_snapshot(&self, group_id: &str) -> Result<Option<Arc<GroupSnapshot>>, LedgerError> {
        let cache = self.cache.read().await;
        let now = Utc::now();
        Ok(cache
            .get(&group_snapshot_key(group_id))
            .filter(|(_, expiry)| *expiry > now)
            .map(|(snapshot, _)| Arc::clone(snapshot)))
    }

    async fn replace_snapshot(
        &self,
        snapshot: GroupSnapshot,
        ttl: std::time::Duration,
    ) -> Result<Arc<GroupSnapshot>, LedgerError> {
        let ttl = chrono::Duration::from_std(ttl)
            .map_err(|e| LedgerError::CacheError(format!("Failed to convert TTL: {}", e)))?;
        let key = group_snapshot_key(&snapshot.group_id);
        let expiry = Utc::now() + ttl;

        let mut cache = self.cache.write().await;
        if let Some((current, _)) = cache.get(&key) {
            if current.computed_at > snapshot.computed_at {
                debug!(
                    "Kept newer snapshot for group {} computed at {}",
                    current.group_id, current.computed_at
                );
                return Ok(Arc::clone(current));
            }
        }

        let snapshot = Arc::new(snapshot);
        cache.insert(key, (Arc::clone(&snapshot), expiry));
        Ok(snapshot)
    }

    async fn evict_expired(&self) -> Result<usize, LedgerError> {
        let mut cache = self.cache.write().await;
        let before = cache.len();
        let now = Utc::now();
        cache.retain(|_, (_, expiry)| *expiry > now);
        Ok(before - cache.len())
    }
}
