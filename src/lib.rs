//! Byte-exact unified diff rendering.
//!
//! Turns an in-memory diff model ([`FileDiff`] values holding [`Hunk`]s) into
//! the unified diff text read by `patch`, `git apply` and friends.
//!
//! # Examples
//!
//! ```
//! use unidiff_print::{FileDiff, Hunk, print_file_diff};
//!
//! let diff = FileDiff {
//!     orig_name: "a.txt".to_string(),
//!     new_name: "b.txt".to_string(),
//!     hunks: vec![Hunk {
//!         orig_start_line: 1,
//!         orig_lines: 2,
//!         new_start_line: 1,
//!         new_lines: 3,
//!         section: String::new(),
//!         body: b" foo\n-bar\n+baz\n+qux\n".to_vec(),
//!     }],
//!     ..Default::default()
//! };
//!
//! let out = print_file_diff(&diff).unwrap();
//! assert_eq!(
//!     out,
//!     b"--- a.txt\n+++ b.txt\n@@ -1,2 +1,3 @@\n foo\n-bar\n+baz\n+qux\n"
//! );
//! ```

use error_set::error_set;

mod diff;
pub mod parse;

pub use diff::{
    Diff, FileDiff, Hunk, NO_NEWLINE_MARKER, RenderError, TIMESTAMP_FORMAT, print_file_diff,
    print_hunks, print_multi_file_diff, write_file_diff, write_hunks, write_multi_file_diff,
};
pub use parse::ParseError;

error_set! {
    /// Top-level error for unidiff-print operations
    UnidiffError := {
        ParseError(ParseError),
        RenderError(RenderError),
    }
}

/// Parse a unified diff and render it back in canonical form.
///
/// Canonical form writes both line counts in every hunk header, drops empty
/// timestamps, and writes timestamps in [`TIMESTAMP_FORMAT`].
///
/// # Examples
///
/// ```
/// let out = unidiff_print::normalize(b"--- a\n+++ b\n@@ -1 +1 @@\n-x\n+y\n", false).unwrap();
/// assert_eq!(out, b"--- a\n+++ b\n@@ -1,1 +1,1 @@\n-x\n+y\n");
/// ```
pub fn normalize(input: &[u8], strip_timestamps: bool) -> Result<Vec<u8>, UnidiffError> {
    let mut files = parse::parse_multi_file_diff(input)?;
    if strip_timestamps {
        for file_diff in &mut files {
            file_diff.clear_timestamps();
        }
    }
    Ok(print_multi_file_diff(&files)?)
}
