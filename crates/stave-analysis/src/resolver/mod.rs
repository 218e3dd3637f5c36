//! Specifier resolution.
//!
//! Turns a raw import specifier plus the importing file's directory into a
//! canonical module identity, trying strategies in a fixed order:
//!
//! 1. Alias-table substitution (first matching rule wins).
//! 2. Anything that is neither aliased nor a relative/absolute path — or
//!    that textually names a vendored-dependency directory — is external.
//! 3. Relative resolution against the importing directory: the literal
//!    candidate, then each configured extension appended, then `index` files
//!    inside a directory candidate.
//!
//! Failures stay silent (`Unresolved`/`External`) so one unanalyzable
//! specifier never blocks the rest of a file. The one exception is a hard
//! [`ResolveError`]: malformed alias configuration or an unexpected I/O
//! failure, surfaced distinctly so misconfiguration is not mistaken for a
//! missing file.

mod aliases;
mod extensions;

pub use aliases::AliasTable;
pub(crate) use extensions::{try_extensions, try_index_files};

use std::path::{Path, PathBuf};

use path_clean::PathClean;
use stave_graph::ModuleId;
use tracing::trace;

use crate::config::{AnalyzerConfig, Resolution};
use crate::fs::{FileSystem, FsError};

/// Hard resolution failure, distinct from an ordinary "not found".
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// An alias rule could not be applied (bad pattern or empty targets).
    #[error("invalid alias rule '{pattern}': {reason}")]
    InvalidAlias { pattern: String, reason: String },

    /// The filesystem probe itself failed.
    #[error(transparent)]
    Fs(#[from] FsError),
}

/// Resolves raw specifiers to canonical module identities.
///
/// Borrow-only view over the session configuration and filesystem, so it can
/// be constructed per statement without bookkeeping.
#[derive(Debug, Clone, Copy)]
pub struct SpecifierResolver<'a> {
    config: &'a AnalyzerConfig,
    fs: &'a dyn FileSystem,
}

impl<'a> SpecifierResolver<'a> {
    pub fn new(config: &'a AnalyzerConfig, fs: &'a dyn FileSystem) -> Self {
        Self { config, fs }
    }

    /// Resolve `specifier` as written in a file under `importing_dir`.
    ///
    /// Deterministic and idempotent for unchanged inputs: candidate order is
    /// fixed and the filesystem is only probed, never mutated.
    pub fn resolve(
        &self,
        specifier: &str,
        importing_dir: &Path,
    ) -> Result<Resolution, ResolveError> {
        // 1. Alias substitution. A matched alias that points at a directory
        //    still falls through to the index search below.
        if let Some(candidate) = self.config.aliases.substitute(specifier)? {
            trace!(specifier, candidate = %candidate.display(), "alias matched");
            return self.resolve_candidate(specifier, candidate);
        }

        // 2. Bare specifiers and vendored paths are not ours to analyze.
        if !is_path_specifier(specifier) || self.names_vendor_dir(specifier) {
            return Ok(Resolution::External(specifier.to_string()));
        }

        // 3. Relative/absolute resolution against the importing directory.
        let candidate = importing_dir.join(specifier).clean();
        self.resolve_candidate(specifier, candidate)
    }

    /// Try the candidate literally, with extensions appended, then as a
    /// directory holding an index file. First hit wins.
    fn resolve_candidate(
        &self,
        specifier: &str,
        candidate: PathBuf,
    ) -> Result<Resolution, ResolveError> {
        if let Some(found) = try_extensions(&candidate, &self.config.extensions, self.fs)? {
            trace!(specifier, resolved = %found.display(), "resolved");
            return Ok(Resolution::Resolved(ModuleId::new(found)));
        }

        if let Some(found) = try_index_files(&candidate, &self.config.extensions, self.fs)? {
            trace!(specifier, resolved = %found.display(), "resolved to index");
            return Ok(Resolution::Resolved(ModuleId::new(found)));
        }

        Ok(Resolution::Unresolved(specifier.to_string()))
    }

    fn names_vendor_dir(&self, specifier: &str) -> bool {
        specifier
            .split('/')
            .any(|segment| self.config.vendor_dirs.iter().any(|dir| dir == segment))
    }
}

/// Whether the specifier is written as a relative or absolute path.
fn is_path_specifier(specifier: &str) -> bool {
    specifier.starts_with('.') || specifier.starts_with('/')
}
