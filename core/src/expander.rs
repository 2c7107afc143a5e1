use crate::cache::{AdjacencyCache, AdjacencySnapshot};
use crate::client::RateLimitedClient;
use crate::error::{CacheError, Result};
use crate::node::{NeighborSet, NodeId};
use rustc_hash::FxHashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Edge oracle for the traversals: answers "who has this artist shared a
/// track with" from the cache snapshot, querying the catalog only for nodes
/// the cache has never seen.
pub struct GraphExpander {
    client: Arc<RateLimitedClient>,
    cache: Arc<AdjacencyCache>,
    snapshot: AdjacencySnapshot,
    remote_expansions: usize,
    warnings: Vec<CacheError>,
}

impl GraphExpander {
    /// Loads the cache snapshot this expander works from.
    pub async fn load(client: Arc<RateLimitedClient>, cache: Arc<AdjacencyCache>) -> Self {
        let snapshot = cache.load_all().await;
        Self::with_snapshot(client, cache, snapshot)
    }

    pub fn with_snapshot(
        client: Arc<RateLimitedClient>,
        cache: Arc<AdjacencyCache>,
        snapshot: AdjacencySnapshot,
    ) -> Self {
        Self {
            client,
            cache,
            snapshot,
            remote_expansions: 0,
            warnings: Vec::new(),
        }
    }

    pub fn is_cached(&self, node: &NodeId) -> bool {
        self.snapshot.contains_key(node)
    }

    pub async fn neighbors_of(&mut self, node: &NodeId) -> Result<NeighborSet> {
        if let Some(neighbors) = AdjacencyCache::get_neighbors(&self.snapshot, node) {
            return Ok(neighbors.clone());
        }

        // Nothing is recorded for the node unless every catalog call succeeds
        let neighbors = self.fetch_collaborators(node).await?;
        self.remote_expansions += 1;
        self.snapshot.insert(node.clone(), neighbors.clone());

        match self.cache.merge_and_save(&self.snapshot).await {
            Ok(merged) => self.snapshot = merged,
            Err(e) => {
                warn!(node = %node, error = %e, "Continuing in memory without persisting expansion");
                self.warnings.push(e);
            }
        }

        Ok(self
            .snapshot
            .get(node)
            .cloned()
            .unwrap_or(neighbors))
    }

    /// Makes sure `node` is expanded before a traversal starts.
    pub async fn prewarm(&mut self, node: &NodeId) -> Result<()> {
        self.neighbors_of(node).await.map(|_| ())
    }

    async fn fetch_collaborators(&self, node: &NodeId) -> Result<NeighborSet> {
        let artist_id = node.catalog_id();
        let releases = self.client.list_releases(artist_id).await?;
        debug!(node = %node, releases = releases.len(), "Fetched releases");

        let mut seen = FxHashSet::default();
        let mut neighbors = Vec::new();

        for release in &releases {
            let tracks = self.client.list_tracks(&release.id).await?;
            for credited in tracks.into_iter().flat_map(|track| track.artists) {
                if credited.id == artist_id || credited.node == *node {
                    continue;
                }
                if seen.insert(credited.node.clone()) {
                    neighbors.push(credited.node);
                }
            }
        }

        info!(node = %node, collaborators = neighbors.len(), "Expanded artist from catalog");
        Ok(neighbors)
    }

    pub fn snapshot(&self) -> &AdjacencySnapshot {
        &self.snapshot
    }

    /// Nodes this expander had to fetch from the catalog.
    pub fn remote_expansions(&self) -> usize {
        self.remote_expansions
    }

    pub fn take_warnings(&mut self) -> Vec<CacheError> {
        std::mem::take(&mut self.warnings)
    }
}
