use std::io;
use std::path::Path;

use crate::diff::{diff_with, DiffOptions};
use crate::error::Result;
use crate::helpers;

/// Snapshot `path` before and after running `action`, then return a
/// normalized unified diff of the two snapshots.
///
/// `path` may be a single file or a directory tree; `action` is an
/// arbitrary unit of work whose side effects are neither inspected nor
/// constrained. Extra `exclude` patterns are merged with the default
/// exclusion set.
///
/// Both snapshots live under a private scratch root with the stable names
/// `before/<basename>` and `after/<basename>`, and the comparison runs
/// with the scratch root as its working directory, so diff headers read as
/// stable relative names instead of leaking absolute temp paths.
///
/// The scratch root is removed on every exit path. If `action` fails, its
/// error propagates unchanged and no diff is computed.
pub fn record_changes<P, F>(path: P, exclude: &[&str], action: F) -> Result<String>
where
    P: AsRef<Path>,
    F: FnOnce() -> Result<()>,
{
    let path = path.as_ref();
    let basename = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("path has no final component: {}", path.display()),
        )
    })?;

    // RAII scratch root: removed when this binding drops, whether we
    // return normally, propagate an error, or unwind out of `action`.
    let scratch = tempfile::tempdir()?;
    tracing::debug!(scratch = %scratch.path().display(), "recording changes");

    let before = scratch.path().join("before").join(basename);
    let after = scratch.path().join("after").join(basename);

    helpers::snapshot(path, &before)?;
    action()?;
    helpers::snapshot(path, &after)?;

    let mut options = DiffOptions::new().current_dir(scratch.path());
    for pattern in exclude {
        options = options.exclude(*pattern);
    }
    diff_with("before", "after", &options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::helpers::{read, write};
    use tempfile::tempdir;

    #[test]
    fn no_op_action_yields_empty_diff() {
        let td = tempdir().expect("tempdir");
        let dir = td.path().join("project");
        write(dir.join("file.txt"), "stable").expect("write");

        let out = record_changes(&dir, &[], || Ok(())).expect("record");
        assert_eq!(out, "");
    }

    #[test]
    fn action_error_propagates_unchanged() {
        let td = tempdir().expect("tempdir");
        let dir = td.path().join("project");
        write(dir.join("file.txt"), "stable").expect("write");

        let err = record_changes(&dir, &[], || {
            Err(Error::Io(io::Error::other("action exploded")))
        })
        .expect_err("must fail");
        assert!(err.to_string().contains("action exploded"));
        // The target itself is untouched by the recorder.
        assert_eq!(read(dir.join("file.txt")).expect("read"), "stable");
    }

    #[test]
    fn headers_use_stable_relative_names() {
        let td = tempdir().expect("tempdir");
        let dir = td.path().join("example");
        write(dir.join("file.txt"), "hello").expect("write");

        let out = record_changes(&dir, &[], || write(dir.join("file.txt"), "goodbye"))
            .expect("record");
        assert!(out.contains("--- before/example/file.txt\n"), "got:\n{out}");
        assert!(out.contains("+++ after/example/file.txt\n"), "got:\n{out}");
        // No absolute scratch path may leak into the output.
        assert!(!out.contains(td.path().to_str().expect("utf8 temp path")));
    }

    #[test]
    fn rejects_path_without_final_component() {
        assert!(record_changes("/", &[], || Ok(())).is_err());
    }
}
