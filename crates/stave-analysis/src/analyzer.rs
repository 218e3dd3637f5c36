//! Per-file analysis session.
//!
//! One `AnalysisSession` lives for one analysis session (a full project lint
//! run or an editor session) and owns the shared state every per-file call
//! reads and writes: the import graph and the barrel export cache. The host
//! presents files one at a time, in any order, as often as it likes;
//! analyzing file X is the only thing that rewrites X's own edge set or
//! cache entry, which keeps the shared state consistent without locks as
//! long as files are analyzed one at a time.

use std::path::Path;
use std::sync::Arc;

use stave_graph::{Cycle, ImportGraph, ModuleId};
use tracing::debug;

use crate::barrel::{BarrelExportCache, compute_exports};
use crate::config::{AnalyzerConfig, Resolution};
use crate::fs::FileSystem;
use crate::resolver::SpecifierResolver;
use crate::result::{FileReport, ResolutionOutcome, StatementOutcome};
use crate::statement::ModuleStatement;

/// Session-wide analysis state plus the per-file entry point.
#[derive(Debug)]
pub struct AnalysisSession {
    config: AnalyzerConfig,
    fs: Arc<dyn FileSystem>,
    graph: ImportGraph,
    barrels: BarrelExportCache,
}

impl AnalysisSession {
    pub fn new(config: AnalyzerConfig, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            config,
            fs,
            graph: ImportGraph::new(),
            barrels: BarrelExportCache::new(),
        }
    }

    /// The session's shared import graph.
    pub fn graph(&self) -> &ImportGraph {
        &self.graph
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze one file: resolve every statement, record edges, detect
    /// cycles. `path` is the file's canonical absolute path; `statements`
    /// its ordered top-level import/export-with-source statements.
    ///
    /// Nothing here aborts: unresolvable specifiers degrade to exclusion,
    /// configuration errors become per-statement outcomes, and analysis of
    /// the remaining statements always continues.
    pub fn analyze_file(&mut self, path: &Path, statements: &[ModuleStatement]) -> FileReport {
        let current = ModuleId::new(path);
        debug!(file = %current, statements = statements.len(), "analyzing file");

        // Replace-on-reprocess: this file's previous edges are gone before
        // any statement is looked at.
        self.graph.begin_file(&current);

        let current_is_barrel = self.config.is_barrel(current.as_path());
        if current_is_barrel {
            let exports = compute_exports(&current, statements, &self.config, self.fs.as_ref());
            self.barrels.replace(current.clone(), exports);
        }

        let outcomes = statements
            .iter()
            .map(|statement| self.process_statement(&current, current_is_barrel, statement))
            .collect();

        FileReport {
            file: current,
            outcomes,
        }
    }

    fn process_statement(
        &mut self,
        current: &ModuleId,
        current_is_barrel: bool,
        statement: &ModuleStatement,
    ) -> StatementOutcome {
        let resolver = SpecifierResolver::new(&self.config, self.fs.as_ref());
        let importing_dir = current.parent().unwrap_or_else(|| Path::new(""));

        let (resolution, cycle) = match resolver.resolve(&statement.specifier, importing_dir) {
            Ok(Resolution::Resolved(target)) => {
                let cycle = self.record_and_detect(current, current_is_barrel, &target);
                (ResolutionOutcome::Resolved { target }, cycle)
            }
            Ok(Resolution::External(specifier)) => {
                (ResolutionOutcome::External { specifier }, None)
            }
            Ok(Resolution::Unresolved(specifier)) => {
                (ResolutionOutcome::Unresolved { specifier }, None)
            }
            Err(err) => {
                debug!(specifier = %statement.specifier, error = %err, "hard resolution failure");
                (
                    ResolutionOutcome::Error {
                        message: err.to_string(),
                    },
                    None,
                )
            }
        };

        StatementOutcome {
            statement: statement.clone(),
            resolution,
            cycle,
        }
    }

    /// Record the edge for a resolved statement, widen it through barrel
    /// expansion, and run the two detection tiers.
    fn record_and_detect(
        &mut self,
        current: &ModuleId,
        current_is_barrel: bool,
        target: &ModuleId,
    ) -> Option<Cycle> {
        self.graph.add_edge(current, target);

        // A barrel target stands for everything it exports: add synthetic
        // edges so a cycle that only closes through the barrel is visible
        // now, not after the barrel file happens to be reprocessed. An
        // export pointing back at the current file is skipped as an edge.
        let mut synthetic: Vec<ModuleId> = Vec::new();
        if target != current && self.config.is_barrel(target.as_path()) {
            for member in self.barrels.exports_of(target) {
                if member != current {
                    synthetic.push(member.clone());
                }
            }
        }
        for member in &synthetic {
            self.graph.add_edge(current, member);
        }

        // Synthetic edges get the immediate check unconditionally: a
        // re-exported module reaching back at the current file is a real
        // cycle no matter where it was spotted.
        for member in &synthetic {
            if let Some(cycle) = self.graph.back_edge_cycle(current, member) {
                debug!(cycle = %cycle, "cycle closed through barrel expansion");
                return Some(cycle);
            }
        }

        // A barrel importing from its own directory subtree is the normal
        // aggregation pattern, not a cycle. Self-import is still a cycle.
        if current_is_barrel
            && target != current
            && current.parent().is_some_and(|dir| target.is_inside(dir))
        {
            return None;
        }

        if let Some(cycle) = self.graph.back_edge_cycle(current, target) {
            debug!(cycle = %cycle, "cycle closed by back edge");
            return Some(cycle);
        }

        let found = self.graph.find_cycle_from(current);
        if let Some(cycle) = &found {
            debug!(cycle = %cycle, "cycle found by traversal");
        }
        found
    }
}
