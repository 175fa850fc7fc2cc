use super::RenderError;
use super::hunk::{Hunk, write_hunks};
use chrono::{DateTime, FixedOffset};
use std::io::Write;

/// Layout of the timestamp that may follow a file name in a `---`/`+++` line.
///
/// Renders as `2002-02-21 23:30:39.942229878 -0800`. Other tools read this
/// layout back, so it never varies.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.9f %z";

/// All changes to a single file.
///
/// Extended headers (`diff --git ...`, `index ...`, mode and rename lines)
/// are kept verbatim and rendered before the `---`/`+++` lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileDiff {
    /// Name shown on the `---` line
    pub orig_name: String,
    /// Modification time of the original file, if known
    pub orig_time: Option<DateTime<FixedOffset>>,
    /// Name shown on the `+++` line
    pub new_name: String,
    /// Modification time of the new file, if known
    pub new_time: Option<DateTime<FixedOffset>>,
    /// Header lines preceding `---`, without their trailing newline
    pub extended: Vec<String>,
    /// All hunks for this file
    pub hunks: Vec<Hunk>,
}

impl FileDiff {
    /// Drop both timestamps so the `---`/`+++` lines carry names only
    pub fn clear_timestamps(&mut self) {
        self.orig_time = None;
        self.new_time = None;
    }

    /// Render the complete block for this file into `w`.
    ///
    /// File names are written as-is; names containing tabs, newlines or
    /// other control characters are not escaped.
    pub fn write_to<W: Write>(&self, w: &mut W) -> Result<(), RenderError> {
        for header in &self.extended {
            writeln!(w, "{}", header)?;
        }

        write_file_header(w, "--- ", &self.orig_name, self.orig_time.as_ref())?;
        write_file_header(w, "+++ ", &self.new_name, self.new_time.as_ref())?;

        write_hunks(w, &self.hunks)
    }
}

fn write_file_header<W: Write>(
    w: &mut W,
    prefix: &str,
    name: &str,
    timestamp: Option<&DateTime<FixedOffset>>,
) -> Result<(), RenderError> {
    write!(w, "{}{}", prefix, name)?;
    if let Some(ts) = timestamp {
        write!(w, "\t{}", ts.format(TIMESTAMP_FORMAT))?;
    }
    w.write_all(b"\n")?;
    Ok(())
}

/// Render one file diff into `w`.
pub fn write_file_diff<W: Write>(w: &mut W, diff: &FileDiff) -> Result<(), RenderError> {
    diff.write_to(w)
}

/// Render one file diff into a freshly allocated buffer.
pub fn print_file_diff(diff: &FileDiff) -> Result<Vec<u8>, RenderError> {
    let mut buf = Vec::new();
    write_file_diff(&mut buf, diff)?;
    Ok(buf)
}
