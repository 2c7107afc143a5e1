use crate::node::NodeId;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

pub struct FrontierEntry {
    pub node: NodeId,
    pub path: Vec<NodeId>,
}

/// Discovered-but-not-yet-expanded nodes.
pub trait Frontier: Default {
    fn push(&mut self, entry: FrontierEntry);
    fn pop(&mut self) -> Option<FrontierEntry>;
}

/// FIFO, for breadth-first search.
impl Frontier for VecDeque<FrontierEntry> {
    fn push(&mut self, entry: FrontierEntry) {
        self.push_back(entry);
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        self.pop_front()
    }
}

/// LIFO, for depth-first search.
impl Frontier for Vec<FrontierEntry> {
    fn push(&mut self, entry: FrontierEntry) {
        Vec::push(self, entry);
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        Vec::pop(self)
    }
}

/// Per-traversal bookkeeping. Nodes are marked visited when they are
/// expanded, so the frontier may hold duplicates; they are dropped on pop.
pub struct SearchState<F: Frontier> {
    frontier: F,
    visited: FxHashSet<NodeId>,
    expanded: usize,
}

impl<F: Frontier> SearchState<F> {
    pub fn new(start: &NodeId) -> Self {
        let mut frontier = F::default();
        frontier.push(FrontierEntry {
            node: start.clone(),
            path: vec![start.clone()],
        });

        Self {
            frontier,
            visited: FxHashSet::default(),
            expanded: 0,
        }
    }

    pub fn next_unvisited(&mut self) -> Option<FrontierEntry> {
        while let Some(entry) = self.frontier.pop() {
            if !self.visited.contains(&entry.node) {
                return Some(entry);
            }
        }
        None
    }

    pub fn mark_visited(&mut self, node: &NodeId) {
        self.visited.insert(node.clone());
    }

    /// Counts one more resolved neighbor set and returns the new total.
    pub fn record_expansion(&mut self) -> usize {
        self.expanded += 1;
        self.expanded
    }

    pub fn push_unvisited(&mut self, path: &[NodeId], neighbors: impl IntoIterator<Item = NodeId>) {
        for neighbor in neighbors {
            if self.visited.contains(&neighbor) {
                continue;
            }
            let mut extended = Vec::with_capacity(path.len() + 1);
            extended.extend_from_slice(path);
            extended.push(neighbor.clone());
            self.frontier.push(FrontierEntry {
                node: neighbor,
                path: extended,
            });
        }
    }

    pub fn expanded(&self) -> usize {
        self.expanded
    }
}
