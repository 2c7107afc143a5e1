pub mod bfs;
pub mod dfs;
pub mod progress;
pub mod state;

use crate::algorithm::Algorithm;
use crate::error::Result;
use crate::expander::GraphExpander;
use crate::node::{NeighborSet, NodeId};
use state::{Frontier, SearchState};
use tracing::info;

pub use bfs::breadth_first;
pub use dfs::depth_first;
pub use progress::{NoProgress, ProgressSink, ProgressTracker, ProgressUpdate};

/// Progress is reported every this many expansions.
const PROGRESS_INTERVAL: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Ready,
    Searching,
    Found,
    Exhausted,
    Failed,
}

/// How a traversal that did not fail ended.
///
/// `nodes_expanded` counts distinct nodes whose neighbor set was resolved.
/// The target itself is never counted, whether it was reached through a
/// neighbor list or popped from the frontier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraversalOutcome {
    Found {
        path: Vec<NodeId>,
        nodes_expanded: usize,
    },
    Exhausted {
        nodes_expanded: usize,
    },
}

impl TraversalOutcome {
    pub fn path(&self) -> Option<&[NodeId]> {
        match self {
            TraversalOutcome::Found { path, .. } => Some(path),
            TraversalOutcome::Exhausted { .. } => None,
        }
    }

    /// Degrees of separation: edges on the path.
    pub fn degrees(&self) -> Option<usize> {
        self.path().map(|path| path.len().saturating_sub(1))
    }

    pub fn nodes_expanded(&self) -> usize {
        match self {
            TraversalOutcome::Found { nodes_expanded, .. }
            | TraversalOutcome::Exhausted { nodes_expanded } => *nodes_expanded,
        }
    }
}

/// Runs one traversal over the lazily expanded graph.
pub struct PathFinder<'a> {
    expander: &'a mut GraphExpander,
    phase: SearchPhase,
}

impl<'a> PathFinder<'a> {
    pub fn new(expander: &'a mut GraphExpander) -> Self {
        Self {
            expander,
            phase: SearchPhase::Ready,
        }
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    /// Searches from `start` to `target`. Always ends the progress sequence
    /// with a final 100, including when an expansion fails.
    pub async fn find(
        &mut self,
        algorithm: Algorithm,
        start: &NodeId,
        target: &NodeId,
        progress: &mut ProgressTracker<'_>,
    ) -> Result<TraversalOutcome> {
        self.phase = SearchPhase::Searching;

        let result = match algorithm {
            Algorithm::Bfs => breadth_first(self.expander, start, target, progress).await,
            Algorithm::Dfs => depth_first(self.expander, start, target, progress).await,
        };

        match &result {
            Ok(outcome @ TraversalOutcome::Found { .. }) => {
                self.phase = SearchPhase::Found;
                info!(%algorithm, degrees = ?outcome.degrees(), expanded = outcome.nodes_expanded(), "Connection found");
                progress.finish("Connection found!");
            }
            Ok(outcome @ TraversalOutcome::Exhausted { .. }) => {
                self.phase = SearchPhase::Exhausted;
                info!(%algorithm, expanded = outcome.nodes_expanded(), "No connection found");
                progress.finish("No connection found");
            }
            Err(e) => {
                self.phase = SearchPhase::Failed;
                progress.finish(&format!("Search failed: {e}"));
            }
        }

        result
    }
}

/// Marks `node` visited and resolves its neighbors, reporting progress.
async fn expand_node<F: Frontier>(
    expander: &mut GraphExpander,
    state: &mut SearchState<F>,
    node: &NodeId,
    progress: &mut ProgressTracker<'_>,
) -> Result<NeighborSet> {
    state.mark_visited(node);

    if !expander.is_cached(node) {
        let percent = progress.current();
        progress.report(percent, &format!("Fetching collaborators for {node}..."));
    }

    let neighbors = expander.neighbors_of(node).await?;
    let expanded = state.record_expansion();

    if expanded % PROGRESS_INTERVAL == 0 {
        let percent = (10 + expanded * 80 / 1000).min(90) as u8;
        progress.report(percent, &format!("Searched {expanded} artists..."));
    }

    Ok(neighbors)
}
