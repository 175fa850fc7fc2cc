//! Parsing unified diff text into [`FileDiff`] and [`Hunk`] values.
//!
//! The parser is the inverse of the renderer in [`crate::diff`]: for any
//! well-formed model, parsing its rendering yields the same model.
//!
//! # Layout
//!
//! - Lines before `--- ` are extended headers, kept verbatim.
//! - `--- NAME[\tTIMESTAMP]` must be followed by `+++ NAME[\tTIMESTAMP]`.
//! - Each hunk starts with `@@ -A[,B] +C[,D] @@[ SECTION]`; an omitted count
//!   means one line.
//! - Hunk bodies are read by their line counts, so content such as a
//!   removed `-- x` line is never mistaken for a file header.
//! - A `\ No newline at end of file` marker ending the body is dropped along
//!   with the newline before it; the renderer adds both back.
//!
//! # Examples
//!
//! ```
//! use unidiff_print::parse::parse_file_diff;
//!
//! let diff = parse_file_diff(b"--- a.txt\n+++ b.txt\n@@ -1 +1,2 @@ main\n-a\n+b\n+c\n").unwrap();
//! assert_eq!(diff.orig_name, "a.txt");
//! assert_eq!(diff.new_name, "b.txt");
//! assert_eq!(diff.hunks[0].orig_lines, 1);
//! assert_eq!(diff.hunks[0].new_lines, 2);
//! assert_eq!(diff.hunks[0].section, "main");
//! assert_eq!(diff.hunks[0].body, b"-a\n+b\n+c\n");
//! ```

use crate::diff::{FileDiff, Hunk, NO_NEWLINE_MARKER};
use chrono::{DateTime, FixedOffset, NaiveDateTime};
use error_set::error_set;
use nom::{
    IResult, Parser,
    bytes::complete::tag,
    character::complete::u32 as number,
    combinator::{opt, rest},
    sequence::preceded,
};

error_set! {
    /// Errors from parsing unified diff text
    ParseError := {
        /// Line starting a hunk is not a valid `@@ -A,B +C,D @@` header
        #[display("line {line}: malformed hunk header '{text}'")]
        InvalidHunkHeader { line: usize, text: String },
        /// Text after the tab in a `---`/`+++` line is not a timestamp
        #[display("line {line}: invalid timestamp '{text}'")]
        InvalidTimestamp { line: usize, text: String },
        /// A `---` line was not followed by a `+++` line
        #[display("line {line}: expected '+++ ' after '--- '")]
        MissingNewFileHeader { line: usize },
        /// Body line does not fit the hunk's remaining line counts
        #[display("line {line}: unexpected hunk line '{text}'")]
        UnexpectedHunkLine { line: usize, text: String },
        /// Input ended before the hunk's line counts were satisfied
        #[display("line {line}: hunk ends before its line counts are satisfied")]
        TruncatedHunk { line: usize },
        /// Header or file name line is not valid UTF-8
        #[display("line {line}: header is not valid UTF-8")]
        InvalidUtf8 { line: usize },
        /// No `---`/`+++` lines and no git header to take names from
        #[display("line {line}: expected a file header")]
        MissingFileHeader { line: usize },
        /// Content remains after a single file diff
        #[display("line {line}: unexpected content after file diff")]
        TrailingContent { line: usize },
    }
}

/// Cursor over newline-terminated lines that keeps the terminators.
struct Lines<'a> {
    input: &'a [u8],
    pos: usize,
    /// 1-based number of the line returned by `peek`
    line: usize,
}

impl<'a> Lines<'a> {
    fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
        }
    }

    fn peek(&self) -> Option<&'a [u8]> {
        let remaining = &self.input[self.pos..];
        if remaining.is_empty() {
            return None;
        }
        let end = remaining
            .iter()
            .position(|&b| b == b'\n')
            .map_or(remaining.len(), |i| i + 1);
        Some(&remaining[..end])
    }

    fn advance(&mut self) -> Option<&'a [u8]> {
        let line = self.peek()?;
        self.pos += line.len();
        self.line += 1;
        Some(line)
    }

    fn remaining(&self) -> &'a [u8] {
        &self.input[self.pos..]
    }

    fn is_empty(&self) -> bool {
        self.pos >= self.input.len()
    }
}

fn strip_newline(line: &[u8]) -> &[u8] {
    line.strip_suffix(b"\n").unwrap_or(line)
}

fn header_text(line: &[u8], line_no: usize) -> Result<&str, ParseError> {
    std::str::from_utf8(strip_newline(line)).map_err(|_| ParseError::InvalidUtf8 { line: line_no })
}

/// Parse a range like `136,4` or `137` into (start, count)
fn range(input: &str) -> IResult<&str, (u32, u32)> {
    (number, opt(preceded(tag(","), number)))
        .map(|(start, count)| (start, count.unwrap_or(1)))
        .parse(input)
}

/// Parse `@@ -A,B +C,D @@ SECTION` into a hunk with an empty body
fn hunk_header(input: &str) -> IResult<&str, Hunk> {
    (
        preceded(tag("@@ -"), range),
        preceded(tag(" +"), range),
        preceded(tag(" @@"), opt(preceded(tag(" "), rest))),
    )
        .map(
            |((orig_start_line, orig_lines), (new_start_line, new_lines), section)| Hunk {
                orig_start_line,
                orig_lines,
                new_start_line,
                new_lines,
                section: section.unwrap_or_default().to_string(),
                body: Vec::new(),
            },
        )
        .parse(input)
}

/// Drop a final no-newline marker and the newline that precedes it
fn strip_final_marker(body: &[u8]) -> &[u8] {
    let marker = NO_NEWLINE_MARKER.as_bytes();
    body.strip_suffix(marker)
        .or_else(|| body.strip_suffix(strip_newline(marker)))
        .and_then(|before| before.strip_suffix(b"\n"))
        .unwrap_or(body)
}

fn parse_hunk(lines: &mut Lines<'_>) -> Result<Hunk, ParseError> {
    let header_line = lines.line;
    let header = lines.advance().unwrap_or_default();
    let text = header_text(header, header_line)?;

    let mut hunk = match hunk_header(text) {
        Ok(("", hunk)) => hunk,
        _ => {
            return Err(ParseError::InvalidHunkHeader {
                line: header_line,
                text: text.to_string(),
            });
        }
    };

    let start = lines.pos;
    let (mut orig_left, mut new_left) = (hunk.orig_lines, hunk.new_lines);
    while orig_left > 0 || new_left > 0 {
        let line_no = lines.line;
        let Some(line) = lines.peek() else {
            return Err(ParseError::TruncatedHunk { line: line_no });
        };

        let fits = match line[0] {
            b' ' | b'\n' if orig_left > 0 && new_left > 0 => {
                orig_left -= 1;
                new_left -= 1;
                true
            }
            b'-' if orig_left > 0 => {
                orig_left -= 1;
                true
            }
            b'+' if new_left > 0 => {
                new_left -= 1;
                true
            }
            b'\\' => true,
            _ => false,
        };
        if !fits {
            return Err(ParseError::UnexpectedHunkLine {
                line: line_no,
                text: String::from_utf8_lossy(strip_newline(line)).into_owned(),
            });
        }
        lines.advance();
    }

    // Markers for the final line follow once the counts are used up
    while lines.peek().is_some_and(|line| line.starts_with(b"\\")) {
        lines.advance();
    }

    hunk.body = strip_final_marker(&lines.input[start..lines.pos]).to_vec();
    log::trace!(
        "parsed hunk -{},{} +{},{} ({} body bytes)",
        hunk.orig_start_line,
        hunk.orig_lines,
        hunk.new_start_line,
        hunk.new_lines,
        hunk.body.len()
    );
    Ok(hunk)
}

/// Parse the consecutive hunks at the cursor
fn parse_hunk_run(lines: &mut Lines<'_>) -> Result<Vec<Hunk>, ParseError> {
    let mut hunks = Vec::new();
    while lines.peek().is_some_and(|line| line.starts_with(b"@@ ")) {
        hunks.push(parse_hunk(lines)?);
    }
    Ok(hunks)
}

fn parse_timestamp(text: &str, line: usize) -> Result<DateTime<FixedOffset>, ParseError> {
    let text = text.trim_end();
    DateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f %z")
        .or_else(|_| {
            NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f")
                .map(|naive| naive.and_utc().fixed_offset())
        })
        .map_err(|_| ParseError::InvalidTimestamp {
            line,
            text: text.to_string(),
        })
}

/// Split the text after `--- `/`+++ ` into name and optional timestamp
fn file_name_and_time(
    text: &str,
    line: usize,
) -> Result<(String, Option<DateTime<FixedOffset>>), ParseError> {
    match text.split_once('\t') {
        Some((name, ts)) if !ts.trim().is_empty() => {
            Ok((name.to_string(), Some(parse_timestamp(ts, line)?)))
        }
        Some((name, _)) => Ok((name.to_string(), None)),
        None => Ok((text.to_string(), None)),
    }
}

/// Derive file names from git headers when a diff has no `---`/`+++` lines.
///
/// Covers mode-only changes, empty new or deleted files, pure renames, and
/// binary files, all of which git reports with extended headers alone.
fn names_from_git_headers(extended: &[String]) -> Option<(String, String)> {
    let (mut orig, mut new) = extended.iter().find_map(|header| {
        let paths = header.strip_prefix("diff --git ")?;
        let (a, b) = paths.split_once(" b/")?;
        Some((a.to_string(), format!("b/{b}")))
    })?;

    for header in extended {
        if let Some(from) = header.strip_prefix("rename from ") {
            orig = format!("a/{from}");
        } else if let Some(to) = header.strip_prefix("rename to ") {
            new = format!("b/{to}");
        } else if header.starts_with("new file mode ") {
            orig = "/dev/null".to_string();
        } else if header.starts_with("deleted file mode ") {
            new = "/dev/null".to_string();
        }
    }

    Some((orig, new))
}

fn parse_file(lines: &mut Lines<'_>) -> Result<FileDiff, ParseError> {
    let mut extended = Vec::new();
    while let Some(line) = lines.peek() {
        if line.starts_with(b"--- ") || (line.starts_with(b"diff ") && !extended.is_empty()) {
            break;
        }
        extended.push(header_text(line, lines.line)?.to_string());
        lines.advance();
    }

    let Some(orig_line) = lines.peek().filter(|line| line.starts_with(b"--- ")) else {
        let (orig_name, new_name) = names_from_git_headers(&extended)
            .ok_or(ParseError::MissingFileHeader { line: lines.line })?;
        log::debug!("file diff {orig_name} -> {new_name} has no ---/+++ lines");
        return Ok(FileDiff {
            orig_name,
            new_name,
            extended,
            ..Default::default()
        });
    };

    let line_no = lines.line;
    let text = header_text(orig_line, line_no)?;
    let (orig_name, orig_time) = file_name_and_time(&text[4..], line_no)?;
    lines.advance();

    let line_no = lines.line;
    let new_line = lines
        .peek()
        .filter(|line| line.starts_with(b"+++ "))
        .ok_or(ParseError::MissingNewFileHeader { line: line_no })?;
    let text = header_text(new_line, line_no)?;
    let (new_name, new_time) = file_name_and_time(&text[4..], line_no)?;
    lines.advance();

    Ok(FileDiff {
        orig_name,
        orig_time,
        new_name,
        new_time,
        extended,
        hunks: parse_hunk_run(lines)?,
    })
}

/// Parse a sequence of hunks with nothing before or after them.
///
/// # Errors
///
/// Returns [`ParseError`] if any line outside a hunk body is not a hunk
/// header, or a body does not match its header's line counts.
pub fn parse_hunks(input: &[u8]) -> Result<Vec<Hunk>, ParseError> {
    let mut lines = Lines::new(input);
    let hunks = parse_hunk_run(&mut lines)?;
    if let Some(line) = lines.peek() {
        return Err(ParseError::InvalidHunkHeader {
            line: lines.line,
            text: String::from_utf8_lossy(strip_newline(line)).into_owned(),
        });
    }
    Ok(hunks)
}

/// Parse exactly one file diff.
///
/// # Errors
///
/// Returns [`ParseError`] if the input is not a single well-formed file
/// diff; [`ParseError::TrailingContent`] if a second file follows.
pub fn parse_file_diff(input: &[u8]) -> Result<FileDiff, ParseError> {
    let mut lines = Lines::new(input);
    let file_diff = parse_file(&mut lines)?;
    if !lines.is_empty() {
        return Err(ParseError::TrailingContent { line: lines.line });
    }
    Ok(file_diff)
}

/// Parse every file diff in the input, in order.
///
/// Trailing whitespace-only lines are ignored.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered; no partial result is kept.
pub fn parse_multi_file_diff(input: &[u8]) -> Result<Vec<FileDiff>, ParseError> {
    let mut lines = Lines::new(input);
    let mut files = Vec::new();
    while !lines.remaining().iter().all(u8::is_ascii_whitespace) {
        files.push(parse_file(&mut lines)?);
    }
    log::debug!("parsed {} file diffs", files.len());
    Ok(files)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::diff::{print_file_diff, print_multi_file_diff};
    use similar_asserts::assert_eq;

    #[test]
    fn parse_single_file() {
        let diff = parse_file_diff(b"--- a.txt\n+++ b.txt\n@@ -1,2 +1,3 @@\n foo\n-bar\n+baz\n+qux\n")
            .unwrap();
        assert_eq!(diff.orig_name, "a.txt");
        assert_eq!(diff.new_name, "b.txt");
        assert_eq!(diff.orig_time, None);
        assert_eq!(diff.new_time, None);
        assert!(diff.extended.is_empty());
        assert_eq!(diff.hunks.len(), 1);
        assert_eq!(diff.hunks[0].orig_start_line, 1);
        assert_eq!(diff.hunks[0].orig_lines, 2);
        assert_eq!(diff.hunks[0].new_start_line, 1);
        assert_eq!(diff.hunks[0].new_lines, 3);
        assert_eq!(diff.hunks[0].section, "");
        assert_eq!(diff.hunks[0].body, b" foo\n-bar\n+baz\n+qux\n".to_vec());
    }

    #[test]
    fn parse_git_diff_with_extended_headers() {
        let text = r#"diff --git a/flake.nix b/flake.nix
index abc1234..def5678 100644
--- a/flake.nix
+++ b/flake.nix
@@ -136,0 +137 @@ outputs = { self }:
+      debug = true;
"#;
        let diff = parse_file_diff(text.as_bytes()).unwrap();
        assert_eq!(
            diff.extended,
            vec!["diff --git a/flake.nix b/flake.nix", "index abc1234..def5678 100644"]
        );
        assert_eq!(diff.orig_name, "a/flake.nix");
        assert_eq!(diff.new_name, "b/flake.nix");
        assert_eq!(diff.hunks[0].orig_start_line, 136);
        assert_eq!(diff.hunks[0].orig_lines, 0);
        assert_eq!(diff.hunks[0].new_start_line, 137);
        assert_eq!(diff.hunks[0].new_lines, 1);
        assert_eq!(diff.hunks[0].section, "outputs = { self }:");
    }

    #[test]
    fn parse_timestamps() {
        let text = "--- lao\t2002-02-21 23:30:39.942229878 -0800\n\
                    +++ tzu\t2002-02-21 23:30:50 +0000\n";
        let diff = parse_file_diff(text.as_bytes()).unwrap();

        let orig = diff.orig_time.unwrap();
        assert_eq!(orig.offset().utc_minus_local(), 8 * 3600);
        assert_eq!(orig.timestamp_subsec_nanos(), 942_229_878);
        assert_eq!(
            diff.new_time.unwrap().to_rfc3339(),
            "2002-02-21T23:30:50+00:00"
        );
    }

    #[test]
    fn parse_timestamp_without_offset_as_utc() {
        let diff = parse_file_diff(b"--- a\t2020-05-06 07:08:09.5\n+++ b\n").unwrap();
        let orig = diff.orig_time.unwrap();
        assert_eq!(orig.offset().local_minus_utc(), 0);
        assert_eq!(orig.timestamp_subsec_millis(), 500);
        assert_eq!(orig.timestamp(), 1_588_748_889);
    }

    #[test]
    fn parse_empty_timestamp_after_tab() {
        let diff = parse_file_diff(b"--- a/with space\t\n+++ b/with space\t\n").unwrap();
        assert_eq!(diff.orig_name, "a/with space");
        assert_eq!(diff.orig_time, None);
    }

    #[test]
    fn parse_invalid_timestamp() {
        let err = parse_file_diff(b"--- a\tyesterday\n+++ b\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidTimestamp { line: 1, .. }));
    }

    #[test]
    fn parse_missing_new_file_header() {
        let err = parse_file_diff(b"--- a\n@@ -1 +1 @@\n-a\n+b\n").unwrap_err();
        assert!(matches!(err, ParseError::MissingNewFileHeader { line: 2 }));
    }

    #[test]
    fn parse_missing_file_header() {
        let err = parse_file_diff(b"just some text\n").unwrap_err();
        assert!(matches!(err, ParseError::MissingFileHeader { line: 2 }));
    }

    #[test]
    fn parse_header_like_content_by_counts() {
        // A removed "-- x" line renders as "--- x" and must stay in the body
        let text = "--- a\n+++ b\n@@ -1,2 +1,1 @@\n--- x\n-+++ y\n++ z\n";
        let diff = parse_file_diff(text.as_bytes()).unwrap();
        assert_eq!(diff.hunks.len(), 1);
        assert_eq!(diff.hunks[0].body, b"--- x\n-+++ y\n++ z\n".to_vec());
    }

    #[test]
    fn parse_strips_final_marker() {
        let text = "--- a\n+++ b\n@@ -1 +1 @@\n-old\n+new\n\\ No newline at end of file\n";
        let diff = parse_file_diff(text.as_bytes()).unwrap();
        assert_eq!(diff.hunks[0].body, b"-old\n+new".to_vec());
        assert_eq!(print_file_diff(&diff).unwrap().len(), text.len() + 4);
    }

    #[test]
    fn parse_keeps_mid_body_marker() {
        let text = "--- a\n+++ b\n@@ -1,1 +1,1 @@\n-old\n\\ No newline at end of file\n+new\n";
        let diff = parse_file_diff(text.as_bytes()).unwrap();
        assert_eq!(
            diff.hunks[0].body,
            b"-old\n\\ No newline at end of file\n+new\n".to_vec()
        );
        assert_eq!(print_file_diff(&diff).unwrap(), text.as_bytes());
    }

    #[test]
    fn parse_marker_without_trailing_newline() {
        let text = "--- a\n+++ b\n@@ -1,1 +1,1 @@\n-old\n+new\n\\ No newline at end of file";
        let diff = parse_file_diff(text.as_bytes()).unwrap();
        assert_eq!(diff.hunks[0].body, b"-old\n+new".to_vec());
    }

    #[test]
    fn parse_both_sides_missing_newline() {
        let text = "--- a\n+++ b\n@@ -1,1 +1,1 @@\n-old\n\\ No newline at end of file\n+new\n\\ No newline at end of file\n";
        let diff = parse_file_diff(text.as_bytes()).unwrap();
        assert_eq!(
            diff.hunks[0].body,
            b"-old\n\\ No newline at end of file\n+new".to_vec()
        );
        assert_eq!(print_file_diff(&diff).unwrap(), text.as_bytes());
    }

    #[test]
    fn parse_truncated_hunk() {
        let err = parse_file_diff(b"--- a\n+++ b\n@@ -1,3 +1,3 @@\n a\n b\n").unwrap_err();
        assert!(matches!(err, ParseError::TruncatedHunk { line: 6 }));
    }

    #[test]
    fn parse_line_exceeding_counts() {
        let err = parse_file_diff(b"--- a\n+++ b\n@@ -1,1 +1,0 @@\n+x\n").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedHunkLine { line: 4, .. }));
    }

    #[test]
    fn parse_malformed_hunk_header() {
        for header in ["@@ -1,2 @@", "@@ -a +1 @@", "@@ -1 +1 @@@", "@@ -1 +1"] {
            let text = format!("{header}\n");
            let err = parse_hunks(text.as_bytes()).unwrap_err();
            assert!(
                matches!(err, ParseError::InvalidHunkHeader { line: 1, .. }),
                "{header}: {err:?}"
            );
        }
    }

    #[test]
    fn parse_hunks_only() {
        let hunks = parse_hunks(b"@@ -1 +1 @@\n-a\n+b\n@@ -10,2 +10,2 @@ fn f()\n x\n-y\n+z\n").unwrap();
        assert_eq!(hunks.len(), 2);
        assert_eq!(hunks[1].orig_start_line, 10);
        assert_eq!(hunks[1].section, "fn f()");
        assert_eq!(hunks[1].body, b" x\n-y\n+z\n".to_vec());
    }

    #[test]
    fn parse_hunks_rejects_non_hunk_line() {
        let err = parse_hunks(b"@@ -1 +1 @@\n-a\n+b\nnot a hunk\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidHunkHeader { line: 4, .. }));
    }

    #[test]
    fn parse_empty_line_as_context() {
        let hunks = parse_hunks(b"@@ -1,2 +1,2 @@\n\n-a\n+b\n").unwrap();
        assert_eq!(hunks[0].body, b"\n-a\n+b\n".to_vec());
    }

    #[test]
    fn parse_trailing_content_in_single_file() {
        let text = "--- a\n+++ b\n@@ -1 +1 @@\n-a\n+b\n--- c\n+++ d\n";
        let err = parse_file_diff(text.as_bytes()).unwrap_err();
        assert!(matches!(err, ParseError::TrailingContent { line: 6 }));
    }

    #[test]
    fn parse_multiple_files() {
        let text = r#"diff --git a/one.rs b/one.rs
index 1111111..2222222 100644
--- a/one.rs
+++ b/one.rs
@@ -1,1 +1,1 @@
-fn one() {}
+fn one() -> u8 { 1 }
diff --git a/two.rs b/two.rs
index 3333333..4444444 100644
--- a/two.rs
+++ b/two.rs
@@ -5,0 +6,1 @@ mod tests {
+    // two
"#;
        let files = parse_multi_file_diff(text.as_bytes()).unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].new_name, "b/one.rs");
        assert_eq!(files[1].new_name, "b/two.rs");
        assert_eq!(files[1].hunks[0].section, "mod tests {");
        assert_eq!(print_multi_file_diff(&files).unwrap(), text.as_bytes());
    }

    #[test]
    fn parse_multiple_plain_diffs_without_git_headers() {
        let text = "--- a\n+++ b\n@@ -1,1 +1,1 @@\n-x\n+y\n--- c\n+++ d\n@@ -2,1 +2,1 @@\n-z\n+w\n";
        let files = parse_multi_file_diff(text.as_bytes()).unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[1].orig_name, "c");
        assert!(files[1].extended.is_empty());
    }

    #[test]
    fn parse_empty_input() {
        assert!(parse_multi_file_diff(b"").unwrap().is_empty());
        assert!(parse_multi_file_diff(b"\n\n").unwrap().is_empty());
        assert!(parse_hunks(b"").unwrap().is_empty());
    }

    #[test]
    fn parse_mode_change_without_hunks() {
        let text = r#"diff --git a/run.sh b/run.sh
old mode 100644
new mode 100755
diff --git a/lib.rs b/lib.rs
index 1111111..2222222 100644
--- a/lib.rs
+++ b/lib.rs
@@ -1 +1 @@
-a
+b
"#;
        let files = parse_multi_file_diff(text.as_bytes()).unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].orig_name, "a/run.sh");
        assert_eq!(files[0].new_name, "b/run.sh");
        assert_eq!(
            files[0].extended,
            vec!["diff --git a/run.sh b/run.sh", "old mode 100644", "new mode 100755"]
        );
        assert!(files[0].hunks.is_empty());
        assert_eq!(files[1].new_name, "b/lib.rs");
    }

    #[test]
    fn parse_git_headers_for_new_deleted_and_renamed() {
        let text = r#"diff --git a/empty b/empty
new file mode 100644
index 0000000..e69de29
diff --git a/gone b/gone
deleted file mode 100644
index e69de29..0000000
diff --git a/old name b/new name
similarity index 100%
rename from old name
rename to new name
"#;
        let files = parse_multi_file_diff(text.as_bytes()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|f| (f.orig_name.as_str(), f.new_name.as_str()))
            .collect();
        assert_eq!(
            names,
            vec![
                ("/dev/null", "b/empty"),
                ("a/gone", "/dev/null"),
                ("a/old name", "b/new name"),
            ]
        );
    }

    #[test]
    fn parse_non_utf8_body() {
        let mut text = b"--- a\n+++ b\n@@ -1 +1 @@\n-".to_vec();
        text.extend_from_slice(&[0xff, b'\n', b'+', 0xfe, b'\n']);
        let diff = parse_file_diff(&text).unwrap();
        assert_eq!(diff.hunks[0].body, vec![b'-', 0xff, b'\n', b'+', 0xfe, b'\n']);
    }

    #[test]
    fn parse_non_utf8_file_name() {
        let err = parse_file_diff(b"--- \xff\n+++ b\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidUtf8 { line: 1 }));
    }
}
