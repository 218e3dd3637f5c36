//! Read-only filesystem probes used by resolution.
//!
//! Resolution only ever needs existence/type checks, so the abstraction is a
//! single `metadata` probe. `Ok(None)` means "does not exist" — an expected
//! outcome during candidate search — while `Err` is reserved for unexpected
//! I/O failures that the resolver surfaces as hard errors.

use std::io;
use std::path::{Path, PathBuf};

use path_clean::PathClean;
use rustc_hash::FxHashSet;

/// What a path points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    File,
    Directory,
}

/// Unexpected filesystem failure during a probe.
#[derive(Debug, thiserror::Error)]
#[error("I/O error probing {path}: {source}")]
pub struct FsError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Read-only filesystem access.
pub trait FileSystem: std::fmt::Debug + Send + Sync {
    /// Existence/type probe. `Ok(None)` means the path does not exist.
    fn metadata(&self, path: &Path) -> Result<Option<FileKind>, FsError>;

    /// Convenience: whether `path` is an existing file.
    fn is_file(&self, path: &Path) -> bool {
        matches!(self.metadata(path), Ok(Some(FileKind::File)))
    }

    /// Convenience: whether `path` is an existing directory.
    fn is_dir(&self, path: &Path) -> bool {
        matches!(self.metadata(path), Ok(Some(FileKind::Directory)))
    }
}

/// [`FileSystem`] backed by the real OS filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn metadata(&self, path: &Path) -> Result<Option<FileKind>, FsError> {
        match std::fs::metadata(path) {
            Ok(meta) if meta.is_dir() => Ok(Some(FileKind::Directory)),
            Ok(_) => Ok(Some(FileKind::File)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(FsError {
                path: path.to_path_buf(),
                source: err,
            }),
        }
    }
}

/// In-memory [`FileSystem`] for tests and embedded hosts.
///
/// Registering a file implicitly registers all its ancestor directories.
#[derive(Debug, Default, Clone)]
pub struct MemoryFileSystem {
    files: FxHashSet<PathBuf>,
    dirs: FxHashSet<PathBuf>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file, creating its ancestor directories.
    pub fn add_file(&mut self, path: impl Into<PathBuf>) {
        let path = path.into().clean();
        let mut ancestor = path.parent();
        while let Some(dir) = ancestor {
            if dir.as_os_str().is_empty() {
                break;
            }
            self.dirs.insert(dir.to_path_buf());
            ancestor = dir.parent();
        }
        self.files.insert(path);
    }

    /// Build a filesystem from a list of file paths.
    pub fn with_files(paths: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        let mut fs = Self::new();
        for path in paths {
            fs.add_file(path);
        }
        fs
    }
}

impl FileSystem for MemoryFileSystem {
    fn metadata(&self, path: &Path) -> Result<Option<FileKind>, FsError> {
        let path = path.to_path_buf().clean();
        if self.files.contains(&path) {
            Ok(Some(FileKind::File))
        } else if self.dirs.contains(&path) {
            Ok(Some(FileKind::Directory))
        } else {
            Ok(None)
        }
    }
}
