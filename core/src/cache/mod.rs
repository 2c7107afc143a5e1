pub mod format;
pub mod stats;

use crate::error::CacheError;
use crate::node::{NeighborSet, NodeId};
use rustc_hash::FxHashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

pub use stats::GraphStats;

/// In-memory copy of the durable store.
pub type AdjacencySnapshot = FxHashMap<NodeId, NeighborSet>;

/// Durable adjacency list: every key present is a node whose neighbor set is
/// complete.
pub struct AdjacencyCache {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl AdjacencyCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole store. A missing or unreadable store yields an empty
    /// snapshot.
    pub async fn load_all(&self) -> AdjacencySnapshot {
        let file_contents = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = ?self.path, "No existing adjacency cache found, starting with empty cache");
                return AdjacencySnapshot::default();
            }
            Err(e) => {
                warn!(path = ?self.path, error = %e, "Failed to read adjacency cache (will start fresh)");
                return AdjacencySnapshot::default();
            }
        };

        match format::decode(&file_contents) {
            Ok(snapshot) => {
                debug!(path = ?self.path, artists = snapshot.len(), "Loaded adjacency cache");
                snapshot
            }
            Err(e) => {
                warn!(path = ?self.path, error = %e, "Failed to parse adjacency cache (will start fresh)");
                AdjacencySnapshot::default()
            }
        }
    }

    /// Replaces the store with `snapshot`.
    pub async fn save_all(&self, snapshot: &AdjacencySnapshot) -> Result<(), CacheError> {
        let _guard = self.write_lock.lock().await;
        self.write_snapshot(snapshot).await
    }

    /// Writes every entry of `snapshot` whose key the store does not hold yet
    /// and returns the merged contents. Entries already on disk win, so two
    /// expansions of the same node never overwrite each other.
    pub async fn merge_and_save(
        &self,
        snapshot: &AdjacencySnapshot,
    ) -> Result<AdjacencySnapshot, CacheError> {
        let _guard = self.write_lock.lock().await;

        let mut merged = self.load_all().await;
        for (node, neighbors) in snapshot {
            merged
                .entry(node.clone())
                .or_insert_with(|| neighbors.clone());
        }

        self.write_snapshot(&merged).await?;
        Ok(merged)
    }

    pub fn get_neighbors<'a>(
        snapshot: &'a AdjacencySnapshot,
        node: &NodeId,
    ) -> Option<&'a NeighborSet> {
        snapshot.get(node)
    }

    async fn write_snapshot(&self, snapshot: &AdjacencySnapshot) -> Result<(), CacheError> {
        let serialized = format::encode(snapshot).map_err(|e| self.persist_failure(e))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.persist_failure(e))?;
        }

        // Write to temp file first, then atomic rename
        let temp_path = self.path.with_extension("csv.tmp");
        tokio::fs::write(&temp_path, serialized)
            .await
            .map_err(|e| self.persist_failure(e))?;
        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| self.persist_failure(e))?;

        debug!(path = ?self.path, artists = snapshot.len(), "Wrote adjacency cache");
        Ok(())
    }

    fn persist_failure(&self, source: std::io::Error) -> CacheError {
        CacheError::PersistFailure {
            path: self.path.clone(),
            source,
        }
    }
}
