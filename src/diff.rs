use std::path::{Path, PathBuf};
use std::process::Command;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Result;

/// Path patterns excluded from every comparison: version-control metadata,
/// OS metadata, dependency directories, compiled artifacts, and lock/log
/// files. Matched by basename glob at any depth, per `diff -x` semantics.
pub const DEFAULT_EXCLUDES: &[&str] = &[
    ".git",
    ".hg",
    ".svn",
    ".DS_Store",
    "Thumbs.db",
    "node_modules",
    "target",
    "*.o",
    "*.pyc",
    "*.class",
    "*.lock",
    "*.log",
];

/// Per-file banner lines the tool echoes before each file pair, e.g.
/// `diff -u -r -N before/f.txt after/f.txt`. Body lines always start with
/// a marker character (space, `-`, `+`, `@`, `\`), so anchoring on `diff `
/// cannot hit diff content.
static BANNER_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^diff .*\n").expect("banner regex"));

/// `---`/`+++` header lines carry a tab plus the file's recorded
/// modification timestamp. Stripping the suffix keeps output byte-identical
/// across machines and clocks.
static HEADER_TIMESTAMP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(---|\+\+\+) (.*?)\t.*$").expect("header regex"));

/// Pass-through execution options for a comparison.
///
/// Caller-supplied exclusion patterns are applied after (never instead of)
/// [`DEFAULT_EXCLUDES`]. `current_dir` is forwarded to the subprocess so
/// relative comparison paths resolve against it.
#[derive(Debug, Clone, Default)]
pub struct DiffOptions {
    exclude: Vec<String>,
    current_dir: Option<PathBuf>,
}

impl DiffOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one exclusion pattern on top of the default set.
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude.push(pattern.into());
        self
    }

    /// Resolve relative comparison paths against `dir` instead of the
    /// caller's working directory.
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }
}

/// Compare two paths (each a file or a directory tree) and return
/// normalized unified-diff text describing their differences.
///
/// Identical inputs produce an empty string. Extra `exclude` patterns are
/// merged with [`DEFAULT_EXCLUDES`].
pub fn diff(
    before: impl AsRef<Path>,
    after: impl AsRef<Path>,
    exclude: &[&str],
) -> Result<String> {
    let mut options = DiffOptions::new();
    for pattern in exclude {
        options = options.exclude(*pattern);
    }
    diff_with(before, after, &options)
}

/// [`diff`] with full pass-through execution options.
///
/// Invokes the system line-diff utility requesting unified output (`-u`),
/// recursive directory comparison (`-r`), and missing-counterpart-as-empty
/// semantics (`-N`), so a path present on only one side shows up as a
/// "new file" diff rather than failing the comparison.
///
/// The return value is the combined stdout/stderr text with two
/// normalizations applied: the per-file banner lines are stripped, and the
/// modification-timestamp suffix on each `---`/`+++` header is removed.
/// The tool's exit status is intentionally ignored — a nonzero
/// "differences found" status is the normal case, and a misbehaving tool
/// degrades to whatever text it wrote. A spawn failure (tool not
/// installed) propagates as an I/O error.
pub fn diff_with(
    before: impl AsRef<Path>,
    after: impl AsRef<Path>,
    options: &DiffOptions,
) -> Result<String> {
    let mut cmd = Command::new("diff");
    cmd.arg("-u").arg("-r").arg("-N");
    for pattern in DEFAULT_EXCLUDES
        .iter()
        .copied()
        .chain(options.exclude.iter().map(String::as_str))
    {
        cmd.arg("-x").arg(pattern);
    }
    cmd.arg(before.as_ref()).arg(after.as_ref());
    // Pin the tool's message locale so output text does not vary by machine.
    cmd.env("LC_ALL", "C");
    if let Some(dir) = &options.current_dir {
        cmd.current_dir(dir);
    }

    tracing::debug!(?cmd, "running line-diff utility");
    let output = cmd.output()?;

    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));
    Ok(normalize(&text))
}

/// Apply the two output transformations, in order: drop banner lines, then
/// strip header timestamps.
fn normalize(raw: &str) -> String {
    let stripped = BANNER_LINE.replace_all(raw, "");
    HEADER_TIMESTAMP
        .replace_all(&stripped, "${1} ${2}")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_banner_lines() {
        let raw = "diff -u -r -N before/f.txt after/f.txt\n\
                   --- before/f.txt\n\
                   +++ after/f.txt\n\
                   @@ -1 +1 @@\n\
                   -old\n\
                   +new\n";
        let clean = normalize(raw);
        assert!(!clean.contains("diff -u"));
        assert!(clean.starts_with("--- before/f.txt\n"));
    }

    #[test]
    fn normalize_strips_header_timestamps() {
        let raw = "--- before/f.txt\t2024-01-02 03:04:05.000000000 +0000\n\
                   +++ after/f.txt\t2024-01-02 03:04:06.000000000 +0000\n\
                   @@ -1 +1 @@\n\
                   -old\n\
                   +new\n";
        let clean = normalize(raw);
        assert!(clean.starts_with("--- before/f.txt\n+++ after/f.txt\n"));
        assert!(!clean.contains('\t'));
    }

    #[test]
    fn normalize_leaves_body_lines_alone() {
        // A context line that happens to start with "diff " carries a
        // leading space marker and must survive normalization.
        let raw = "--- a\n+++ b\n@@ -1,2 +1,2 @@\n diff tool output\n-x\n+y\n";
        assert_eq!(normalize(raw), raw);
    }

    #[test]
    fn default_excludes_cover_the_usual_noise() {
        for pattern in [".git", ".DS_Store", "node_modules", "*.lock"] {
            assert!(DEFAULT_EXCLUDES.contains(&pattern), "missing {pattern}");
        }
    }
}
