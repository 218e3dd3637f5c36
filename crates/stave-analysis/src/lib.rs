//! # stave-analysis
//!
//! Per-file static analysis over a session-wide import graph.
//!
//! A host engine hands each source file to an [`AnalysisSession`] as a
//! canonical path plus its ordered top-level import/export statements. The
//! session resolves every specifier to a canonical module identity (alias
//! substitution, then relative/extension resolution, with everything else
//! classified external), records the resulting edges in the shared
//! [`stave_graph::ImportGraph`], expands barrel targets through their cached
//! export sets, and reports any dependency cycle closed by the statement.
//!
//! Files can arrive in any order and any number of times; only the file
//! currently being analyzed is reprocessed, and its edge set is replaced
//! wholesale so edit/re-lint loops never see stale edges.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use stave_analysis::{AliasTable, AnalysisSession, AnalyzerConfig, ModuleStatement, OsFileSystem};
//!
//! let aliases = AliasTable::new("/proj").rule("@pages/*", ["src/pages/*"]);
//! let mut session = AnalysisSession::new(AnalyzerConfig::new(aliases), Arc::new(OsFileSystem));
//!
//! let statements = [
//!     ModuleStatement::import("./utils"),
//!     ModuleStatement::export_all("@pages/home"),
//! ];
//! let report = session.analyze_file("/proj/src/app.ts".as_ref(), &statements);
//! for cycle in report.cycles() {
//!     eprintln!("circular dependency: {cycle}");
//! }
//! ```
//!
//! This crate emits `tracing` events and installs no subscriber; hosts that
//! want logs bring their own.

pub mod analyzer;
pub mod barrel;
pub mod config;
pub mod fs;
pub mod resolver;
pub mod result;
pub mod statement;

pub use analyzer::AnalysisSession;
pub use barrel::BarrelExportCache;
pub use config::{
    AnalyzerConfig, BARREL_ENTRY_POINT_NAMES, RESOLVE_EXTENSIONS, Resolution, VENDOR_DIRS,
};
pub use fs::{FileKind, FileSystem, FsError, MemoryFileSystem, OsFileSystem};
pub use resolver::{AliasTable, ResolveError, SpecifierResolver};
pub use result::{FileReport, ResolutionOutcome, StatementOutcome};
pub use statement::{ModuleStatement, StatementKind};

// Re-export graph types that appear in this crate's public API.
pub use stave_graph::{Cycle, ImportGraph, ModuleId};

#[cfg(test)]
mod tests;
