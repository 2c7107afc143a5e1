use super::state::{FrontierEntry, SearchState};
use super::{ProgressTracker, TraversalOutcome, expand_node};
use crate::error::Result;
use crate::expander::GraphExpander;
use crate::node::NodeId;

/// First path found, not necessarily the shortest. Iterative, so path length
/// is bounded by memory rather than call depth.
pub async fn depth_first(
    expander: &mut GraphExpander,
    start: &NodeId,
    target: &NodeId,
    progress: &mut ProgressTracker<'_>,
) -> Result<TraversalOutcome> {
    progress.report(10, "Starting DFS search...");
    let mut state: SearchState<Vec<FrontierEntry>> = SearchState::new(start);

    while let Some(entry) = state.next_unvisited() {
        if entry.node == *target {
            return Ok(TraversalOutcome::Found {
                path: entry.path,
                nodes_expanded: state.expanded(),
            });
        }

        let neighbors = expand_node(expander, &mut state, &entry.node, progress).await?;

        // Reversed so the first collaborator is the first one explored
        state.push_unvisited(&entry.path, neighbors.into_iter().rev());
    }

    Ok(TraversalOutcome::Exhausted {
        nodes_expanded: state.expanded(),
    })
}
