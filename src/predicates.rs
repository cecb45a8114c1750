use std::io;
use std::path::Path;

use regex::Regex;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::helpers::read;

/// Lightweight classification of a filesystem path's kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// The path does not exist.
    NotFound,
    /// The path exists and is a directory.
    Directory,
    /// The path exists and is a regular file.
    File,
    /// The path exists but is neither a regular file nor a directory
    /// (for example: socket, FIFO, dangling symlink).
    Other,
}

impl PathKind {
    /// Classify `path` and return its `PathKind`.
    pub fn of(path: impl AsRef<Path>) -> Self {
        let p = path.as_ref();
        if !p.exists() {
            PathKind::NotFound
        } else if p.is_dir() {
            PathKind::Directory
        } else if p.is_file() {
            PathKind::File
        } else {
            PathKind::Other
        }
    }
}

/// Return `true` if `path` exists.
pub fn exists(path: impl AsRef<Path>) -> bool {
    PathKind::of(path) != PathKind::NotFound
}

/// Return `true` if `path` exists and is a regular file.
pub fn is_file(path: impl AsRef<Path>) -> bool {
    PathKind::of(path) == PathKind::File
}

/// Return `true` if `path` exists and is a directory.
pub fn is_dir(path: impl AsRef<Path>) -> bool {
    PathKind::of(path) == PathKind::Directory
}

/// Return `true` if `path` exists and its permissions mark it executable
/// for the current process.
#[cfg(unix)]
pub fn is_executable(path: impl AsRef<Path>) -> bool {
    use std::os::unix::fs::PermissionsExt;
    match std::fs::metadata(path.as_ref()) {
        Ok(md) => md.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}

/// Always `false` on platforms without Unix permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: impl AsRef<Path>) -> bool {
    false
}

/// Return `true` if the file's full text content equals `expected`.
///
/// Reading the file may fail (missing, unreadable); that error propagates.
pub fn has_content(path: impl AsRef<Path>, expected: &str) -> Result<bool> {
    Ok(read(path)? == expected)
}

/// Return `true` if the file's full text content matches `pattern`.
pub fn has_content_matching(path: impl AsRef<Path>, pattern: &Regex) -> Result<bool> {
    Ok(pattern.is_match(&read(path)?))
}

/// Check that the file's content equals `expected`, failing with a message
/// that shows both the actual and the expected text.
pub fn verify_content(path: impl AsRef<Path>, expected: &str) -> Result<()> {
    let p = path.as_ref();
    let actual = read(p)?;
    if actual == expected {
        Ok(())
    } else {
        Err(Error::ContentMismatch {
            path: p.to_path_buf(),
            expected: expected.to_string(),
            actual,
        })
    }
}

/// Check that the file's content matches `pattern`, failing with a message
/// that shows the pattern and the actual text.
pub fn verify_content_matches(path: impl AsRef<Path>, pattern: &Regex) -> Result<()> {
    let p = path.as_ref();
    let actual = read(p)?;
    if pattern.is_match(&actual) {
        Ok(())
    } else {
        Err(Error::PatternMismatch {
            path: p.to_path_buf(),
            pattern: pattern.as_str().to_string(),
            actual,
        })
    }
}

/// List every regular file under `dir`, recursively, including hidden
/// entries. Each path is relative to `dir`, uses forward-slash separators,
/// and the result is sorted.
pub fn entries(dir: impl AsRef<Path>) -> Result<Vec<String>> {
    let dir = dir.as_ref();
    let mut files = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(dir)
            .expect("walked path is under its root");
        let name = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        files.push(name);
    }
    files.sort();
    Ok(files)
}

/// Return `true` if `dir` contains exactly the files named in `expected`
/// (order-independent; paths relative, forward-slash separated).
pub fn has_entries(dir: impl AsRef<Path>, expected: &[&str]) -> Result<bool> {
    let mut want: Vec<String> = expected.iter().map(|s| s.to_string()).collect();
    want.sort();
    Ok(entries(dir)? == want)
}

/// Check that `dir` contains exactly the files named in `expected`,
/// failing with a message that lists both the full expected and actual
/// relative-path sets.
pub fn verify_entries(dir: impl AsRef<Path>, expected: &[&str]) -> Result<()> {
    let d = dir.as_ref();
    let mut want: Vec<String> = expected.iter().map(|s| s.to_string()).collect();
    want.sort();
    let actual = entries(d)?;
    if actual == want {
        Ok(())
    } else {
        Err(Error::EntryMismatch {
            dir: d.to_path_buf(),
            expected: want,
            actual,
        })
    }
}
