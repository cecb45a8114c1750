use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::Result;
use crate::helpers;

/// A fresh, exclusively-owned working directory for one test.
///
/// Relative paths handed to the methods resolve against the workspace
/// root. The directory starts empty and is removed when the workspace is
/// dropped, regardless of test outcome, so tests cannot leak filesystem
/// state into one another.
#[derive(Debug)]
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Allocate a fresh empty working directory.
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir()?;
        tracing::debug!(root = %dir.path().display(), "allocated test workspace");
        Ok(Self { dir })
    }

    /// Absolute path of the workspace root.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Resolve `rel` against the workspace root.
    pub fn path(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.dir.path().join(rel)
    }

    /// [`crate::helpers::mkdir`] against the workspace root.
    pub fn mkdir(&self, rel: impl AsRef<Path>) -> Result<()> {
        helpers::mkdir(self.path(rel))
    }

    /// [`crate::helpers::write`] against the workspace root.
    pub fn write(&self, rel: impl AsRef<Path>, content: &str) -> Result<()> {
        helpers::write(self.path(rel), content)
    }

    /// [`crate::helpers::touch`] against the workspace root.
    pub fn touch(&self, rel: impl AsRef<Path>) -> Result<()> {
        helpers::touch(self.path(rel))
    }

    /// [`crate::helpers::read`] against the workspace root.
    pub fn read(&self, rel: impl AsRef<Path>) -> Result<String> {
        helpers::read(self.path(rel))
    }
}
