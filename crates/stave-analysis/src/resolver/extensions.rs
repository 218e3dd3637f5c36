//! Extension and index-file fallbacks for candidate paths.

use std::path::{Path, PathBuf};

use crate::fs::{FileKind, FileSystem, FsError};

/// Try a candidate literally, then with each configured extension appended.
///
/// Returns the first existing file, or `None` when every candidate misses.
pub(crate) fn try_extensions(
    candidate: &Path,
    extensions: &[String],
    fs: &dyn FileSystem,
) -> Result<Option<PathBuf>, FsError> {
    if fs.metadata(candidate)? == Some(FileKind::File) {
        return Ok(Some(candidate.to_path_buf()));
    }

    for ext in extensions {
        let with_ext = append_extension(candidate, ext);
        if fs.metadata(&with_ext)? == Some(FileKind::File) {
            return Ok(Some(with_ext));
        }
    }

    Ok(None)
}

/// If the candidate is a directory, look for `index` + each extension in it.
pub(crate) fn try_index_files(
    candidate: &Path,
    extensions: &[String],
    fs: &dyn FileSystem,
) -> Result<Option<PathBuf>, FsError> {
    if fs.metadata(candidate)? != Some(FileKind::Directory) {
        return Ok(None);
    }

    for ext in extensions {
        let index = candidate.join(format!("index{ext}"));
        if fs.metadata(&index)? == Some(FileKind::File) {
            return Ok(Some(index));
        }
    }

    Ok(None)
}

/// Append (never substitute) an extension: `./mod.view` + `.ts` gives
/// `./mod.view.ts`, and `./schema.d` + `.ts` gives `./schema.d.ts`.
fn append_extension(path: &Path, ext: &str) -> PathBuf {
    let mut joined = path.as_os_str().to_os_string();
    joined.push(ext);
    PathBuf::from(joined)
}
