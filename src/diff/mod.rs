//! In-memory unified diff model and its byte-exact renderer.
//!
//! Rendering is layered top-down: [`write_multi_file_diff`] renders each
//! [`FileDiff`] through [`write_file_diff`], which hands the file's hunks to
//! [`write_hunks`]. Every layer takes its input by shared reference, so the
//! model is never modified while it is being rendered.

use error_set::error_set;

pub mod file;
pub mod full;
pub mod hunk;

pub use file::{FileDiff, TIMESTAMP_FORMAT, print_file_diff, write_file_diff};
pub use full::{Diff, print_multi_file_diff, write_multi_file_diff};
pub use hunk::{Hunk, NO_NEWLINE_MARKER, print_hunks, write_hunks};

error_set! {
    /// Errors from rendering a diff into an output sink
    RenderError := {
        /// The output sink rejected a write
        #[display("Failed to write diff output: {message}")]
        WriteFailed { message: String },
    }
}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        RenderError::WriteFailed {
            message: err.to_string(),
        }
    }
}
