//! Shared configuration and resolution outcome types.

use std::fmt;
use std::path::Path;

use stave_graph::ModuleId;

use crate::resolver::AliasTable;

/// File extensions tried, in priority order, when a specifier omits one.
///
/// Order is observable: the first existing candidate wins, so `./utils`
/// resolves to `utils.ts` before `utils.js` when both exist. Extensions are
/// appended to the specifier, never substituted, which is what lets
/// `./schema.d` find `schema.d.ts`.
pub const RESOLVE_EXTENSIONS: &[&str] = &[
    ".ts",
    ".js",
    ".tsx",
    ".jsx",
    ".json",
    ".d.js",
    ".d.ts",
    ".mjs",
    ".cjs",
    ".mts",
    ".cts",
    ".d.mjs",
    ".d.cjs",
    ".d.mts",
    ".d.cts",
];

/// File names recognized as barrel (aggregator) entry points.
pub const BARREL_ENTRY_POINT_NAMES: &[&str] = &[
    "index.ts",
    "index.tsx",
    "index.js",
    "index.jsx",
    "index.cjs",
    "index.mjs",
];

/// Directory names treated as vendored dependencies. A specifier naming one
/// of these is external: its internal structure is not ours to analyze.
pub const VENDOR_DIRS: &[&str] = &["node_modules"];

/// Configuration for one analysis session.
///
/// The alias table and base directory come from the host's configuration
/// loader; extension and barrel-name lists default to the supported set but
/// stay overridable for hosts with different conventions.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Alias rewrite rules, resolved against the project base directory.
    pub aliases: AliasTable,

    /// Extensions tried when resolving, in priority order.
    pub extensions: Vec<String>,

    /// File names classifying a module as a barrel.
    pub barrel_names: Vec<String>,

    /// Directory names classifying a specifier as vendored/external.
    pub vendor_dirs: Vec<String>,
}

impl AnalyzerConfig {
    /// Configuration with the default extension and barrel-name sets.
    pub fn new(aliases: AliasTable) -> Self {
        Self {
            aliases,
            extensions: RESOLVE_EXTENSIONS.iter().map(ToString::to_string).collect(),
            barrel_names: BARREL_ENTRY_POINT_NAMES
                .iter()
                .map(ToString::to_string)
                .collect(),
            vendor_dirs: VENDOR_DIRS.iter().map(ToString::to_string).collect(),
        }
    }

    /// Override the extension priority list.
    pub fn extensions(mut self, extensions: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Override the recognized barrel entry-point names.
    pub fn barrel_names(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.barrel_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Barrel classifier: true iff the final path segment is one of the
    /// recognized aggregator entry-point names. Pure, no I/O.
    pub fn is_barrel(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.barrel_names.iter().any(|barrel| barrel == name))
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self::new(AliasTable::default())
    }
}

/// Result of resolving one specifier.
///
/// Only [`Resolution::Resolved`] participates in the graph; the other
/// variants are silently excluded. Hard configuration/I-O failures are a
/// separate [`crate::ResolveError`], not a variant here, so callers cannot
/// confuse "missing file" with "broken alias config".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Specifier resolved to a local module.
    Resolved(ModuleId),

    /// Third-party or vendored dependency; excluded from the graph.
    External(String),

    /// Looked internal, but no candidate file exists.
    Unresolved(String),
}

impl Resolution {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }

    pub fn is_external(&self) -> bool {
        matches!(self, Resolution::External(_))
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self, Resolution::Unresolved(_))
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Resolved(id) => write!(f, "Resolved({id})"),
            Resolution::External(specifier) => write!(f, "External({specifier})"),
            Resolution::Unresolved(specifier) => write!(f, "Unresolved({specifier})"),
        }
    }
}
