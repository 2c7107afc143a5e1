use crate::algorithm::Algorithm;
use crate::cache::{AdjacencyCache, GraphStats};
use crate::catalog::ArtistSummary;
use crate::client::RateLimitedClient;
use crate::error::{Result, SearchError};
use crate::expander::GraphExpander;
use crate::node::NodeId;
use crate::pathfinding::{PathFinder, ProgressSink, ProgressTracker, TraversalOutcome};
use crate::result::{ArtistInfo, ExpansionReport, SearchResult};
use crate::string_normalization::clean_str;
use moka::future::Cache;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Candidates requested when resolving a name, in a single catalog call.
const RESOLVE_CANDIDATES: usize = 5;

const NAME_CACHE_CAPACITY: u64 = 10_000;
const NAME_CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Entry point for connection searches: resolves names, runs the traversal,
/// and turns the node path back into artist names.
pub struct SearchOrchestrator {
    client: Arc<RateLimitedClient>,
    cache: Arc<AdjacencyCache>,
    display_names: Cache<NodeId, String>,
}

impl SearchOrchestrator {
    pub fn new(client: Arc<RateLimitedClient>, cache: Arc<AdjacencyCache>) -> Self {
        let display_names = Cache::builder()
            .max_capacity(NAME_CACHE_CAPACITY)
            .time_to_live(NAME_CACHE_TTL)
            .build();

        Self {
            client,
            cache,
            display_names,
        }
    }

    /// Looks up an artist by name, preferring a candidate whose normalized
    /// name matches the query exactly.
    pub async fn resolve_artist(&self, name: &str) -> Result<ArtistSummary> {
        let candidates = self.client.resolve_artist(name, RESOLVE_CANDIDATES).await?;
        let wanted = clean_str(name);

        let best = candidates
            .iter()
            .position(|candidate| clean_str(&candidate.name) == wanted)
            .unwrap_or(0);

        let artist = candidates
            .into_iter()
            .nth(best)
            .ok_or_else(|| SearchError::ArtistNotFound {
                name: name.to_string(),
            })?;

        self.display_names
            .insert(artist.node.clone(), artist.name.clone())
            .await;
        Ok(artist)
    }

    pub async fn find_connection(
        &self,
        from_name: &str,
        to_name: &str,
        algorithm: &str,
        progress: &mut dyn ProgressSink,
    ) -> Result<SearchResult> {
        let mut tracker = ProgressTracker::new(progress);

        let result = match algorithm.parse::<Algorithm>() {
            Ok(algorithm) => {
                self.run_search(from_name, to_name, algorithm, &mut tracker)
                    .await
            }
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            warn!(error = %e, "Search did not complete");
            tracker.finish(&format!("Search failed: {e}"));
        }
        result
    }

    async fn run_search(
        &self,
        from_name: &str,
        to_name: &str,
        algorithm: Algorithm,
        tracker: &mut ProgressTracker<'_>,
    ) -> Result<SearchResult> {
        let search_timer = Instant::now();

        tracker.report(5, "Looking up artists...");
        let start = self.resolve_artist(from_name).await?;
        let end = self.resolve_artist(to_name).await?;
        info!(from = %start.name, to = %end.name, %algorithm, "Starting connection search");

        tracker.report(8, &format!("Found both artists, starting {algorithm} search..."));
        let mut expander = GraphExpander::load(self.client.clone(), self.cache.clone()).await;

        if !expander.is_cached(&start.node) {
            tracker.report(9, &format!("Fetching related artists for {}...", start.name));
        }
        expander.prewarm(&start.node).await?;

        let outcome = PathFinder::new(&mut expander)
            .find(algorithm, &start.node, &end.node, tracker)
            .await?;

        let warnings = expander
            .take_warnings()
            .into_iter()
            .map(|e| e.to_string())
            .collect();

        let mut result = SearchResult {
            found: false,
            degrees: None,
            nodes_expanded: None,
            path_ids: Vec::new(),
            path_names: Vec::new(),
            algorithm,
            start_artist: start.name.clone(),
            end_artist: end.name.clone(),
            duration_ms: 0,
            warnings,
            message: None,
        };

        match outcome {
            TraversalOutcome::Found {
                path,
                nodes_expanded,
            } => {
                result.found = true;
                result.degrees = Some(path.len() - 1);
                result.nodes_expanded = Some(nodes_expanded);
                result.path_names = match algorithm {
                    Algorithm::Bfs => self.display_names_for(&path).await?,
                    // Exploratory paths can be long; keep identifiers
                    Algorithm::Dfs => path.iter().map(NodeId::to_string).collect(),
                };
                result.path_ids = path;
            }
            TraversalOutcome::Exhausted { .. } => {
                result.message =
                    Some("No connection found between the artists in our database.".to_string());
            }
        }

        result.duration_ms = search_timer.elapsed().as_millis() as u64;
        Ok(result)
    }

    /// One detail lookup per node not seen before. A node the catalog no
    /// longer knows keeps its identifier as its name.
    async fn display_names_for(&self, path: &[NodeId]) -> Result<Vec<String>> {
        let mut names = Vec::with_capacity(path.len());

        for node in path {
            if let Some(name) = self.display_names.get(node).await {
                names.push(name);
                continue;
            }

            let name = self
                .client
                .artist(node.catalog_id())
                .await?
                .map(|artist| artist.name)
                .unwrap_or_else(|| node.to_string());
            self.display_names.insert(node.clone(), name.clone()).await;
            names.push(name);
        }

        Ok(names)
    }

    /// Catalog details for one artist, plus what the cache already knows
    /// about it. Never expands the artist.
    pub async fn artist_info(&self, name: &str) -> Result<ArtistInfo> {
        let artist = self.resolve_artist(name).await?;
        let snapshot = self.cache.load_all().await;
        let cached = AdjacencyCache::get_neighbors(&snapshot, &artist.node);

        Ok(ArtistInfo {
            in_database: cached.is_some(),
            connections_in_db: cached.map_or(0, Vec::len),
            artist,
        })
    }

    /// Name suggestions for a partial query.
    pub async fn suggest_artists(&self, query: &str, limit: usize) -> Result<Vec<ArtistSummary>> {
        self.client.search_artists(query, limit).await
    }

    /// Expands one artist into the cache without searching.
    pub async fn expand_artist_network(&self, name: &str) -> Result<ExpansionReport> {
        let artist = self.resolve_artist(name).await?;
        let mut expander = GraphExpander::load(self.client.clone(), self.cache.clone()).await;

        let already_cached = expander.is_cached(&artist.node);
        let connections = expander.neighbors_of(&artist.node).await?;
        info!(artist = %artist.name, connections = connections.len(), already_cached, "Expanded artist network");

        // Persisting is the point of an explicit expansion, so a failed write fails it
        if let Some(e) = expander.take_warnings().into_iter().next() {
            return Err(e.into());
        }

        Ok(ExpansionReport {
            artist,
            connections,
            already_cached,
        })
    }

    pub async fn graph_stats(&self) -> GraphStats {
        GraphStats::from_snapshot(&self.cache.load_all().await)
    }
}
