//! Barrel (aggregator) export expansion.
//!
//! A barrel's job is re-exporting other modules under one conventional
//! entry-point name, so a file that imports the barrel effectively depends
//! on everything the barrel exposes. Expansion computes that set from the
//! barrel's own top-level statements — a shallow scan, never a full parse —
//! and caches it so later importers can widen their edges without touching
//! the barrel file again.
//!
//! The cache is deliberately stale-tolerant: an entry is overwritten only
//! when the barrel file itself is reprocessed, and a barrel never seen in
//! the session simply has no entry. Expansion then under-approximates,
//! which can delay a cycle report but never fabricate one.

use rustc_hash::FxHashMap;
use stave_graph::ModuleId;
use tracing::debug;

use crate::config::{AnalyzerConfig, Resolution};
use crate::fs::FileSystem;
use crate::resolver::SpecifierResolver;
use crate::statement::ModuleStatement;

/// Per-session cache of statically-computed barrel export sets.
#[derive(Debug, Default)]
pub struct BarrelExportCache {
    entries: FxHashMap<ModuleId, Vec<ModuleId>>,
}

impl BarrelExportCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached export set for a barrel; empty when the barrel has not been
    /// processed this session.
    pub fn exports_of(&self, barrel: &ModuleId) -> &[ModuleId] {
        self.entries.get(barrel).map_or(&[], Vec::as_slice)
    }

    /// Replace (never merge) the cached set for a barrel, mirroring the
    /// graph's replace-on-reprocess policy.
    pub fn replace(&mut self, barrel: ModuleId, exports: Vec<ModuleId>) {
        self.entries.insert(barrel, exports);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Compute the modules a barrel statically re-exports or imports.
///
/// Both `export ... from` and plain imports count: barrels frequently import
/// internally and re-export through a local binding. Each specifier resolves
/// relative to the barrel's own directory; only successful resolutions are
/// kept, deduplicated in first-seen order. Failures are skipped silently,
/// like everywhere else in resolution.
pub fn compute_exports(
    barrel: &ModuleId,
    statements: &[ModuleStatement],
    config: &AnalyzerConfig,
    fs: &dyn FileSystem,
) -> Vec<ModuleId> {
    let Some(dir) = barrel.parent() else {
        return Vec::new();
    };

    let resolver = SpecifierResolver::new(config, fs);
    let mut exports = Vec::new();
    for statement in statements {
        if let Ok(Resolution::Resolved(id)) = resolver.resolve(&statement.specifier, dir) {
            if !exports.contains(&id) {
                exports.push(id);
            }
        }
    }

    debug!(barrel = %barrel, count = exports.len(), "computed barrel export set");
    exports
}
