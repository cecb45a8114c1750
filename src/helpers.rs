use std::fs;
use std::io;
use std::path::Path;

use fs_extra::dir::{copy as dir_copy, CopyOptions};

use crate::error::Result;

/// Create `path` and all missing ancestor directories.
///
/// Idempotent: succeeds if the directory already exists.
pub fn mkdir(path: impl AsRef<Path>) -> Result<()> {
    fs::create_dir_all(path.as_ref())?;
    Ok(())
}

/// Write `content` as the complete contents of `path`, overwriting any
/// existing file. The parent directory is created first if needed.
///
/// Failures (e.g. permission denied) propagate unchanged; there is no
/// retry or recovery.
pub fn write(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let p = path.as_ref();
    if let Some(parent) = p.parent() {
        mkdir(parent)?;
    }
    fs::write(p, content)?;
    Ok(())
}

/// Create an empty file at `path` (or truncate an existing one).
pub fn touch(path: impl AsRef<Path>) -> Result<()> {
    write(path, "")
}

/// Read the full contents of `path` as text.
///
/// Fails with a NotFound-style error if the path does not exist or is not
/// readable.
pub fn read(path: impl AsRef<Path>) -> Result<String> {
    Ok(fs::read_to_string(path.as_ref())?)
}

/// Recursively copy `src` (a file or a directory tree) to `dst`.
///
/// For a regular file the parent of `dst` is created first so the copy
/// lands at the exact expected name. For a directory the copy itself
/// creates `dst` and mirrors the tree contents beneath it.
pub(crate) fn snapshot(src: &Path, dst: &Path) -> Result<()> {
    if src.is_dir() {
        let mut options = CopyOptions::new();
        // Copy the contents of `src` into `dst` rather than nesting the
        // source directory name one level deeper.
        options.copy_inside = true;
        options.buffer_size = 64 * 1024;
        // fs_extra returns its own error type; map it to io::Error for callers.
        dir_copy(src, dst, &options)
            .map_err(|e| io::Error::other(e))?;
    } else {
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(src, dst)?;
    }
    Ok(())
}
