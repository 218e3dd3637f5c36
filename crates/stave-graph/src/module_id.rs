//! Canonical module identity.
//!
//! Every graph node is keyed by the absolute, lexically normalized path of
//! the file it stands for. Two import statements that resolve to the same
//! path are the same node regardless of how they were written (alias,
//! relative, with or without extension).

use std::fmt;
use std::path::{Path, PathBuf};

use path_clean::PathClean;
use serde::{Deserialize, Serialize};

/// Canonical identity of one module: a normalized absolute file path.
///
/// Construction normalizes `.` and `..` components so that equality and
/// hashing behave the same no matter which route produced the path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleId(PathBuf);

impl ModuleId {
    /// Create a module identity from a path, normalizing it lexically.
    ///
    /// Callers are expected to pass absolute, extension-resolved paths; the
    /// resolver is responsible for producing them.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into().clean())
    }

    /// The identity as a path.
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Consume the identity, returning the owned path.
    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }

    /// Final path segment, if any.
    pub fn file_name(&self) -> Option<&str> {
        self.0.file_name().and_then(|name| name.to_str())
    }

    /// Directory containing this module.
    pub fn parent(&self) -> Option<&Path> {
        self.0.parent()
    }

    /// Whether this module lives inside `dir` (or is `dir` itself).
    pub fn is_inside(&self, dir: &Path) -> bool {
        self.0.starts_with(dir)
    }

    /// The identity rendered as a string, for report formatting.
    pub fn path_string(&self) -> String {
        self.0.display().to_string()
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

impl AsRef<Path> for ModuleId {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl From<PathBuf> for ModuleId {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}
