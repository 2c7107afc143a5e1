use serde::{Deserialize, Serialize};
use std::fmt;

pub const ARTIST_URL_PREFIX: &str = "https://open.spotify.com/artist/";

/// Stable identifier of an artist node: its canonical catalog URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

/// Distinct collaborators of a node, in discovery order.
pub type NeighborSet = Vec<NodeId>;

impl NodeId {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn from_catalog_id(catalog_id: &str) -> Self {
        Self(format!("{ARTIST_URL_PREFIX}{catalog_id}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The catalog id is the last path segment of the URL.
    pub fn catalog_id(&self) -> &str {
        self.0
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or(&self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for NodeId {
    fn from(url: String) -> Self {
        Self(url)
    }
}

impl From<&str> for NodeId {
    fn from(url: &str) -> Self {
        Self(url.to_string())
    }
}
