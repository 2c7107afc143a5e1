use crate::algorithm::Algorithm;
use crate::catalog::ArtistSummary;
use crate::node::NodeId;
use serde::{Deserialize, Serialize};

/// Outcome of one `find_connection` call. `found == false` means the
/// traversal ran out of graph; failures are reported as errors instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub found: bool,
    pub degrees: Option<usize>,
    pub nodes_expanded: Option<usize>,
    pub path_ids: Vec<NodeId>,
    pub path_names: Vec<String>,
    pub algorithm: Algorithm,
    pub start_artist: String,
    pub end_artist: String,
    pub duration_ms: u64,
    /// Cache writes that failed during the search
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Result of expanding a single artist on request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpansionReport {
    pub artist: ArtistSummary,
    pub connections: Vec<NodeId>,
    /// The artist was already in the cache, no catalog calls were made
    pub already_cached: bool,
}

/// An artist as the catalog describes it, with its cache status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistInfo {
    pub artist: ArtistSummary,
    pub in_database: bool,
    pub connections_in_db: usize,
}
