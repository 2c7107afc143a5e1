use super::state::{FrontierEntry, SearchState};
use super::{ProgressTracker, TraversalOutcome, expand_node};
use crate::error::Result;
use crate::expander::GraphExpander;
use crate::node::NodeId;
use std::collections::VecDeque;

/// Shortest path by hop count. When the target shows up among a node's
/// neighbors the search stops there instead of queueing it.
pub async fn breadth_first(
    expander: &mut GraphExpander,
    start: &NodeId,
    target: &NodeId,
    progress: &mut ProgressTracker<'_>,
) -> Result<TraversalOutcome> {
    progress.report(10, "Starting BFS search...");
    let mut state: SearchState<VecDeque<FrontierEntry>> = SearchState::new(start);

    while let Some(entry) = state.next_unvisited() {
        if entry.node == *target {
            return Ok(TraversalOutcome::Found {
                path: entry.path,
                nodes_expanded: state.expanded(),
            });
        }

        let neighbors = expand_node(expander, &mut state, &entry.node, progress).await?;

        if neighbors.contains(target) {
            let mut path = entry.path;
            path.push(target.clone());
            return Ok(TraversalOutcome::Found {
                path,
                nodes_expanded: state.expanded(),
            });
        }

        state.push_unvisited(&entry.path, neighbors);
    }

    Ok(TraversalOutcome::Exhausted {
        nodes_expanded: state.expanded(),
    })
}
