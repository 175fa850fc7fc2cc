use super::RenderError;
use std::io::Write;

/// Marker line emitted after a hunk body whose last line has no trailing newline.
pub const NO_NEWLINE_MARKER: &str = "\\ No newline at end of file\n";

/// A contiguous block of changed lines within one file.
///
/// `body` holds the literal diff lines, each prefixed with ` `, `+` or `-`
/// and terminated by `\n`, except possibly the last one. Line counts are
/// carried as given and never checked against the body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hunk {
    /// First line covered in the original file (1-based)
    pub orig_start_line: u32,
    /// Number of original lines covered
    pub orig_lines: u32,
    /// First line covered in the new file (1-based)
    pub new_start_line: u32,
    /// Number of new lines covered
    pub new_lines: u32,
    /// Context label shown after the header, empty when absent
    pub section: String,
    /// Raw diff lines
    pub body: Vec<u8>,
}

impl Hunk {
    /// Whether the body's final line lacks its trailing newline
    pub fn missing_final_newline(&self) -> bool {
        self.body.last().is_some_and(|&b| b != b'\n')
    }

    /// Render this hunk's header line and body into `w`.
    ///
    /// When [`missing_final_newline`](Self::missing_final_newline) holds, the
    /// final line is terminated and followed by [`NO_NEWLINE_MARKER`] in the
    /// output only; the hunk itself is left untouched.
    pub fn write_to<W: Write>(&self, w: &mut W) -> Result<(), RenderError> {
        write!(
            w,
            "@@ -{},{} +{},{} @@",
            self.orig_start_line, self.orig_lines, self.new_start_line, self.new_lines
        )?;
        if !self.section.is_empty() {
            write!(w, " {}", self.section)?;
        }
        w.write_all(b"\n")?;

        w.write_all(&self.body)?;
        if self.missing_final_newline() {
            w.write_all(b"\n")?;
            w.write_all(NO_NEWLINE_MARKER.as_bytes())?;
        }

        Ok(())
    }
}

/// Render hunks into `w` in order, stopping at the first failed write.
pub fn write_hunks<W: Write>(w: &mut W, hunks: &[Hunk]) -> Result<(), RenderError> {
    for hunk in hunks {
        log::trace!(
            "rendering hunk -{},{} +{},{}",
            hunk.orig_start_line,
            hunk.orig_lines,
            hunk.new_start_line,
            hunk.new_lines
        );
        hunk.write_to(w)?;
    }
    Ok(())
}

/// Render hunks into a freshly allocated buffer.
pub fn print_hunks(hunks: &[Hunk]) -> Result<Vec<u8>, RenderError> {
    let mut buf = Vec::new();
    write_hunks(&mut buf, hunks)?;
    Ok(buf)
}
