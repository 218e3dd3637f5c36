//! In-memory import graph store.
//!
//! Adjacency is a map from module identity to an insertion-ordered set of
//! outgoing edges. Insertion order matters: DFS walks edges in the order
//! statements were processed, which keeps cycle reports deterministic.

use std::sync::Arc;

use indexmap::IndexSet;
use parking_lot::RwLock;
use rustc_hash::{FxBuildHasher, FxHashMap};

use crate::module_id::ModuleId;

pub(crate) type EdgeSet = IndexSet<ModuleId, FxBuildHasher>;

#[derive(Debug, Default)]
pub(crate) struct GraphInner {
    pub(crate) edges: FxHashMap<ModuleId, EdgeSet>,
}

/// Session-wide dependency graph.
///
/// Cloning is cheap and shares the underlying storage, the same way one
/// graph instance is threaded through every per-file analysis of a session.
/// Nodes are created lazily on first mention and persist until the session
/// ends; a node's edge set is replaced wholesale whenever its file is
/// reprocessed (see [`ImportGraph::begin_file`]).
#[derive(Debug, Clone, Default)]
pub struct ImportGraph {
    pub(crate) inner: Arc<RwLock<GraphInner>>,
}

impl ImportGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (re)processing a file: its outgoing edge set is cleared so the
    /// edges recorded next reflect the file's current statements only.
    ///
    /// Edges *into* the file recorded by other files are untouched.
    pub fn begin_file(&self, id: &ModuleId) {
        let mut inner = self.inner.write();
        inner.edges.entry(id.clone()).or_default().clear();
    }

    /// Record a dependency edge. The target node is created empty if it has
    /// not been seen yet, so later bidirectional checks find it.
    pub fn add_edge(&self, from: &ModuleId, to: &ModuleId) {
        let mut inner = self.inner.write();
        inner
            .edges
            .entry(from.clone())
            .or_default()
            .insert(to.clone());
        inner.edges.entry(to.clone()).or_default();
    }

    /// Whether the edge `from -> to` is currently recorded.
    pub fn has_edge(&self, from: &ModuleId, to: &ModuleId) -> bool {
        let inner = self.inner.read();
        inner
            .edges
            .get(from)
            .is_some_and(|edges| edges.contains(to))
    }

    /// Snapshot of a node's current outgoing edges, in insertion order.
    pub fn edges_of(&self, id: &ModuleId) -> Vec<ModuleId> {
        let inner = self.inner.read();
        inner
            .edges
            .get(id)
            .map(|edges| edges.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Whether the graph has a node for this identity.
    pub fn contains(&self, id: &ModuleId) -> bool {
        self.inner.read().edges.contains_key(id)
    }

    /// Number of nodes currently known to the graph.
    pub fn node_count(&self) -> usize {
        self.inner.read().edges.len()
    }

    /// Total number of recorded edges.
    pub fn edge_count(&self) -> usize {
        let inner = self.inner.read();
        inner.edges.values().map(IndexSet::len).sum()
    }
}
