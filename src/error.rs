use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the filesystem helpers and assertion checks.
///
/// I/O failures are wrapped as-is and never retried. The mismatch variants
/// are expected control flow for a hosting test framework: their `Display`
/// output is the failure message shown to the test author, so each carries
/// the data needed to diagnose the difference.
#[derive(Error, Debug)]
pub enum Error {
    /// Wrapper for underlying IO errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A file's text content did not equal the expected literal value.
    #[error("content mismatch for `{path}`: expected {expected:?}, got {actual:?}")]
    ContentMismatch {
        path: PathBuf,
        expected: String,
        actual: String,
    },

    /// A file's text content did not match the expected pattern.
    #[error("content of `{path}` does not match /{pattern}/: got {actual:?}")]
    PatternMismatch {
        path: PathBuf,
        pattern: String,
        actual: String,
    },

    /// A directory did not contain exactly the expected set of files.
    #[error("entry mismatch for `{dir}`: expected {expected:?}, got {actual:?}")]
    EntryMismatch {
        dir: PathBuf,
        expected: Vec<String>,
        actual: Vec<String>,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
