use super::AdjacencySnapshot;
use crate::node::NodeId;
use serde::Serialize;

/// Size of the graph materialized so far.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStats {
    pub total_artists: usize,
    pub total_connections: usize,
    pub average_connections: f64,
    pub most_connected_artist: Option<NodeId>,
    pub most_connections_count: Option<usize>,
}

impl GraphStats {
    pub fn from_snapshot(snapshot: &AdjacencySnapshot) -> Self {
        let total_artists = snapshot.len();
        let total_connections = snapshot.values().map(Vec::len).sum();
        let average_connections = if total_artists > 0 {
            total_connections as f64 / total_artists as f64
        } else {
            0.0
        };

        // Ties go to the smallest id so the answer is stable across runs
        let most_connected = snapshot
            .iter()
            .max_by(|a, b| a.1.len().cmp(&b.1.len()).then_with(|| b.0.cmp(a.0)));

        Self {
            total_artists,
            total_connections,
            average_connections,
            most_connected_artist: most_connected.map(|(id, _)| id.clone()),
            most_connections_count: most_connected.map(|(_, neighbors)| neighbors.len()),
        }
    }
}
