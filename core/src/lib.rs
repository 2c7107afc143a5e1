pub mod algorithm;
pub mod cache;
pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod expander;
pub mod node;
pub mod orchestrator;
pub mod pathfinding;
pub mod result;
pub mod string_normalization;

// Re-export commonly used items
pub use algorithm::Algorithm;
pub use cache::{AdjacencyCache, AdjacencySnapshot, GraphStats};
pub use catalog::{ArtistSummary, Catalog, SpotifyCatalog};
pub use client::{Operation, RateLimitedClient, RetryPolicy};
pub use config::Config;
pub use error::{CacheError, CatalogError, SearchError};
pub use expander::GraphExpander;
pub use node::{NeighborSet, NodeId};
pub use orchestrator::SearchOrchestrator;
pub use pathfinding::{
    NoProgress, PathFinder, ProgressSink, ProgressTracker, ProgressUpdate, SearchPhase,
    TraversalOutcome,
};
pub use result::{ArtistInfo, ExpansionReport, SearchResult};
