pub mod cache_keys;
pub mod in_memory;

use crate::core::errors::LedgerError;
use crate::core::models::GroupSnapshot;
use async_trait::async_trait;
use std::sync::Arc;

/// Holds the latest computed snapshot per group.
///
/// A snapshot is only ever swapped whole: readers get the previous one or the
/// replacement, never a partially updated result.
#[async_trait]
pub trait SnapshotCache: Send + Sync {
    async fn get_snapshot(&self, group_id: &str) -> Result<Option<Arc<GroupSnapshot>>, LedgerError>;

    /// Stores `snapshot` unless a snapshot computed later is already present,
    /// and returns whichever one is now current.
    async fn replace_snapshot(
        &self,
        snapshot: GroupSnapshot,
        ttl: std::time::Duration,
    ) -> Result<Arc<GroupSnapshot>, LedgerError>;

    /// Drops expired snapshots and returns how many were removed.
    async fn evict_expired(&self) -> Result<usize, LedgerError>;
}
