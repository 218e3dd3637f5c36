//! # stave-graph
//!
//! Session-wide import graph store with incremental cycle detection.
//!
//! This crate provides the graph primitives underneath stave's structural
//! checks, without any I/O or resolution logic:
//!
//! - **[`ModuleId`]**: canonical module identity — an absolute, lexically
//!   normalized file path used as the unique key for every graph node.
//! - **[`ImportGraph`]**: mapping from module identity to its current set of
//!   outgoing edges. Nodes appear lazily as files are analyzed; a node's edge
//!   set is cleared and rebuilt every time its file is reprocessed, so
//!   edit/re-lint cycles never accumulate stale edges. The structure lives
//!   for one analysis session and is never pruned.
//! - **[`Cycle`]**: one concrete path through the graph that returns to its
//!   own start, used for diagnostics.
//!
//! ## Incremental detection
//!
//! Cycle detection runs after every edge insertion from the file currently
//! being analyzed, in two tiers: an O(1) bidirectional check
//! ([`ImportGraph::back_edge_cycle`]) for the common 2-hop case, and an
//! iterative depth-first search ([`ImportGraph::find_cycle_from`]) for
//! longer cycles whose closing edge was recorded while processing earlier
//! files in the session.
//!
//! ## Thread safety
//!
//! `ImportGraph` wraps its adjacency map in `Arc<RwLock<..>>`. The intended
//! discipline is single-writer-per-key: only the analysis of file X rewrites
//! X's own edge set, while any file may read any other file's edges. A DFS
//! holds one read guard for its whole traversal, so each report is computed
//! against a consistent snapshot.

pub mod cycle;
pub mod graph;
pub mod module_id;

pub use cycle::{CYCLE_SEPARATOR, Cycle};
pub use graph::ImportGraph;
pub use module_id::ModuleId;
