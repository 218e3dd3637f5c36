//! Per-file analysis reports surfaced to the host.

use serde::{Deserialize, Serialize};
use stave_graph::{Cycle, ModuleId};

use crate::statement::ModuleStatement;

/// Outcome of resolving one statement, flattened for host consumption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolutionOutcome {
    /// Resolved to a local module; an edge was recorded.
    Resolved { target: ModuleId },

    /// Third-party/vendored specifier; excluded from the graph.
    External { specifier: String },

    /// Looked internal but no candidate file exists; excluded from the
    /// graph and not a diagnostic (a genuinely missing file is the host
    /// loader's problem).
    Unresolved { specifier: String },

    /// The alias/configuration lookup itself failed; worth surfacing to the
    /// user so broken configuration is not confused with a missing file.
    Error { message: String },
}

impl ResolutionOutcome {
    pub fn is_resolved(&self) -> bool {
        matches!(self, ResolutionOutcome::Resolved { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ResolutionOutcome::Error { .. })
    }
}

/// What happened to a single statement: where it resolved, and whether its
/// resolution closed a dependency cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementOutcome {
    pub statement: ModuleStatement,
    pub resolution: ResolutionOutcome,
    /// Present when this statement closed a cycle. Analysis continues past
    /// a report; cycles are diagnostics, not failures.
    pub cycle: Option<Cycle>,
}

/// Report for one analyzed file, one outcome per statement in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileReport {
    pub file: ModuleId,
    pub outcomes: Vec<StatementOutcome>,
}

impl FileReport {
    /// All cycles detected while analyzing this file.
    pub fn cycles(&self) -> impl Iterator<Item = &Cycle> {
        self.outcomes.iter().filter_map(|o| o.cycle.as_ref())
    }

    pub fn has_cycles(&self) -> bool {
        self.cycles().next().is_some()
    }

    /// Hard resolution errors (broken alias configuration, I/O failures).
    pub fn resolution_errors(&self) -> impl Iterator<Item = &StatementOutcome> {
        self.outcomes.iter().filter(|o| o.resolution.is_error())
    }
}
