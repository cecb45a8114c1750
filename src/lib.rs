//! Test-support helpers for asserting facts about files and directories:
//! fixture creation, file-tree diffing, change recording across a test
//! action, and matcher-style predicates.
//!
//! Tree comparison shells out to the system line-diff utility and
//! normalizes its output (banner lines and header timestamps stripped) so
//! results are byte-identical across machines and clocks. Everything else
//! is a thin, synchronous layer over the filesystem.
//!
//! ```
//! use fscheck::{predicates, record_changes, Workspace};
//!
//! let ws = Workspace::new().unwrap();
//! ws.write("example/file.txt", "hello").unwrap();
//!
//! let diff = record_changes(ws.path("example"), &[], || {
//!     ws.write("example/file.txt", "goodbye")
//! })
//! .unwrap();
//! assert!(diff.contains("-hello"));
//! assert!(diff.contains("+goodbye"));
//!
//! assert!(predicates::is_file(ws.path("example/file.txt")));
//! ```

pub mod diff;
pub mod error;
pub mod helpers;
pub mod predicates;
pub mod record;
pub mod workspace;

pub use crate::diff::{diff, diff_with, DiffOptions, DEFAULT_EXCLUDES};
pub use crate::error::{Error, Result};
pub use crate::helpers::{mkdir, read, touch, write};
pub use crate::record::record_changes;
pub use crate::workspace::Workspace;
