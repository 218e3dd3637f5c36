//! Host-provided statement descriptions.
//!
//! The host engine parses each file and hands over only the top-level
//! statements that carry a module specifier; this crate never re-parses
//! source text.

use serde::{Deserialize, Serialize};

/// Kind of a top-level statement carrying a module specifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementKind {
    /// `import ... from "spec"` (including side-effect imports).
    Import,
    /// `export { ... } from "spec"` — a named re-export.
    ExportNamed,
    /// `export * from "spec"` — a wildcard re-export.
    ExportAll,
}

/// One top-level import/export-with-source statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleStatement {
    /// The raw specifier string exactly as written in the source.
    pub specifier: String,
    pub kind: StatementKind,
}

impl ModuleStatement {
    pub fn import(specifier: impl Into<String>) -> Self {
        Self {
            specifier: specifier.into(),
            kind: StatementKind::Import,
        }
    }

    pub fn export_named(specifier: impl Into<String>) -> Self {
        Self {
            specifier: specifier.into(),
            kind: StatementKind::ExportNamed,
        }
    }

    pub fn export_all(specifier: impl Into<String>) -> Self {
        Self {
            specifier: specifier.into(),
            kind: StatementKind::ExportAll,
        }
    }

    /// Whether this statement re-exports from another module.
    pub fn is_reexport(&self) -> bool {
        matches!(
            self.kind,
            StatementKind::ExportNamed | StatementKind::ExportAll
        )
    }
}
