use super::RenderError;
use super::file::{FileDiff, write_file_diff};
use std::io::Write;

/// A complete diff containing changes for multiple files
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diff {
    pub files: Vec<FileDiff>,
}

impl Diff {
    /// Render every file block into `w`, back to back.
    pub fn write_to<W: Write>(&self, w: &mut W) -> Result<(), RenderError> {
        write_multi_file_diff(w, &self.files)
    }

    /// Render every file block into a freshly allocated buffer.
    pub fn to_bytes(&self) -> Result<Vec<u8>, RenderError> {
        print_multi_file_diff(&self.files)
    }
}

impl From<Vec<FileDiff>> for Diff {
    fn from(files: Vec<FileDiff>) -> Self {
        Diff { files }
    }
}

/// Render file diffs into `w` in order with no separator between them.
///
/// Stops at the first failed write. Bytes already accepted by `w` are not
/// rolled back.
pub fn write_multi_file_diff<W: Write>(w: &mut W, files: &[FileDiff]) -> Result<(), RenderError> {
    log::debug!("rendering {} file diffs", files.len());
    for file_diff in files {
        write_file_diff(w, file_diff)?;
    }
    Ok(())
}

/// Render file diffs into a freshly allocated buffer.
pub fn print_multi_file_diff(files: &[FileDiff]) -> Result<Vec<u8>, RenderError> {
    let mut buf = Vec::new();
    write_multi_file_diff(&mut buf, files)?;
    Ok(buf)
}
