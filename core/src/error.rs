//! Error types for catalog access, the adjacency cache, and searches.

use crate::client::Operation;
use std::path::PathBuf;
use thiserror::Error;

/// A single failed catalog call. Only the retry loop in
/// [`RateLimitedClient`](crate::client::RateLimitedClient) sees these; callers
/// get [`SearchError::RemoteUnavailable`] once attempts run out.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("catalog returned status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("failed to decode catalog response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("catalog request failed: {message}")]
    Other { message: String },
}

#[derive(Error, Debug)]
pub enum CacheError {
    /// Durable write failed; the in-memory snapshot is still valid.
    #[error("failed to persist adjacency cache at {}: {source}", path.display())]
    PersistFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors surfaced at the search boundary.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("catalog unavailable: {operation} failed after {attempts} attempt(s): {message}")]
    RemoteUnavailable {
        operation: Operation,
        attempts: u32,
        message: String,
    },

    #[error("Could not find artist: {name}")]
    ArtistNotFound { name: String },

    #[error(transparent)]
    CachePersistFailure(#[from] CacheError),

    #[error("Unknown algorithm: {value} (expected bfs or dfs)")]
    UnsupportedAlgorithm { value: String },

    #[error("Config error: {message}")]
    Config { message: String },
}

pub type Result<T, E = SearchError> = std::result::Result<T, E>;
