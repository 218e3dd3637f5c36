//! Incremental cycle detection over the import graph.
//!
//! Detection runs in two tiers after each recorded edge. The bidirectional
//! check covers the overwhelmingly common 2-hop case (and the degenerate
//! self-import) in O(1); the iterative DFS catches longer cycles whose
//! closing edge was recorded while other files were analyzed earlier in the
//! session.

use std::fmt;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::graph::ImportGraph;
use crate::module_id::ModuleId;

/// Separator used when rendering a cycle as one line.
pub const CYCLE_SEPARATOR: &str = " -> ";

/// One concrete dependency path that returns to its own start.
///
/// Invariant: consecutive entries are graph edges and the first entry equals
/// the last. A self-import is the two-entry degenerate form `[a, a]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cycle {
    /// Ordered module identities along the cycle, first == last.
    pub path: Vec<ModuleId>,
}

impl Cycle {
    /// Wrap an already-closed path.
    pub fn new(path: Vec<ModuleId>) -> Self {
        debug_assert!(path.len() >= 2, "a cycle closes over at least one edge");
        debug_assert_eq!(path.first(), path.last(), "cycle path must close");
        Self { path }
    }

    /// Number of edges traversed by the cycle.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Whether this is a file importing itself.
    pub fn is_self_import(&self) -> bool {
        self.hops() == 1
    }

    /// Render the cycle as a single human-readable chain.
    ///
    /// Example: `/src/a.ts -> /src/b.ts -> /src/a.ts`
    pub fn format_chain(&self) -> String {
        self.path
            .iter()
            .map(ModuleId::path_string)
            .collect::<Vec<_>>()
            .join(CYCLE_SEPARATOR)
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_chain())
    }
}

impl ImportGraph {
    /// Tier 1: immediate bidirectional check for the edge `current -> target`.
    ///
    /// Reports `current -> current` when the edge is a self-import, and
    /// `current -> target -> current` when the target's own recorded edges
    /// already point back at the current file.
    pub fn back_edge_cycle(&self, current: &ModuleId, target: &ModuleId) -> Option<Cycle> {
        if target == current {
            return Some(Cycle::new(vec![current.clone(), current.clone()]));
        }

        let inner = self.inner.read();
        let points_back = inner
            .edges
            .get(target)
            .is_some_and(|edges| edges.contains(current));
        if points_back {
            Some(Cycle::new(vec![
                current.clone(),
                target.clone(),
                current.clone(),
            ]))
        } else {
            None
        }
    }

    /// Tier 2: depth-first search from `start` over the current graph.
    ///
    /// The traversal is iterative with an explicit stack, so pathological
    /// chains cannot overflow the call stack, and it holds a single read
    /// guard for its whole run, so the reported path reflects one consistent
    /// snapshot of the graph. The first cycle encountered in edge-iteration
    /// order wins; the returned path runs from the first occurrence of the
    /// repeated node back to itself.
    pub fn find_cycle_from(&self, start: &ModuleId) -> Option<Cycle> {
        let inner = self.inner.read();

        // (node, index of the next edge to explore)
        let mut stack: Vec<(ModuleId, usize)> = vec![(start.clone(), 0)];
        let mut path: Vec<ModuleId> = vec![start.clone()];
        let mut visited: FxHashSet<ModuleId> = FxHashSet::default();
        let mut on_stack: FxHashSet<ModuleId> = FxHashSet::default();
        visited.insert(start.clone());
        on_stack.insert(start.clone());

        while let Some(top) = stack.len().checked_sub(1) {
            let (node, cursor) = {
                let frame = &mut stack[top];
                let cursor = frame.1;
                frame.1 += 1;
                (frame.0.clone(), cursor)
            };

            let next = inner
                .edges
                .get(&node)
                .and_then(|edges| edges.get_index(cursor));

            match next {
                Some(next) if on_stack.contains(next) => {
                    let first = path.iter().position(|entry| entry == next).unwrap_or(0);
                    let mut cycle_path: Vec<ModuleId> = path[first..].to_vec();
                    cycle_path.push(next.clone());
                    let cycle = Cycle::new(cycle_path);
                    trace!(start = %start, cycle = %cycle, "cycle found by traversal");
                    return Some(cycle);
                }
                Some(next) if !visited.contains(next) => {
                    visited.insert(next.clone());
                    on_stack.insert(next.clone());
                    path.push(next.clone());
                    stack.push((next.clone(), 0));
                }
                Some(_) => {
                    // Already fully explored via another path; nothing to do.
                }
                None => {
                    if let Some((done, _)) = stack.pop() {
                        on_stack.remove(&done);
                        path.pop();
                    }
                }
            }
        }

        None
    }
}
