use once_cell::sync::OnceCell;
use tracing::trace;

use crate::error::SourceError;
use crate::span::FileSpan;

/// An immutable unit of source text plus an optional origin (file path or
/// URL, used only for diagnostics).
///
/// The line-start table is the one piece of mutable state a `SourceFile`
/// owns, and it is write-once: `OnceCell` gives us the "compute on first
/// query, never again" lifecycle the text itself already has, without
/// requiring `&mut self` on every lookup.
#[derive(Debug)]
pub struct SourceFile {
    contents: String,
    origin: Option<String>,
    line_starts: OnceCell<Vec<usize>>,
}

impl SourceFile {
    /// Create a new source file from its full contents.
    pub fn new(contents: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
            origin: None,
            line_starts: OnceCell::new(),
        }
    }

    /// Create a new source file, recording where it came from (a path or
    /// URL). Used only to label diagnostics; never parsed.
    pub fn with_origin(contents: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
            origin: Some(origin.into()),
            line_starts: OnceCell::new(),
        }
    }

    /// The full source text.
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// The origin label, if one was given at construction.
    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    /// Number of code units (bytes) in the source text.
    pub fn length(&self) -> usize {
        self.contents.len()
    }

    fn line_starts(&self) -> &[usize] {
        self.line_starts.get_or_init(|| {
            let starts = build_line_starts(&self.contents);
            trace!(count = starts.len(), "built line-start table");
            starts
        })
    }

    /// Build a span covering `[start, end)` of this file.
    pub fn span(&self, start: usize, end: usize) -> Result<FileSpan<'_>, SourceError> {
        if start > self.length() {
            return Err(SourceError::OutOfRange {
                offset: start as i64,
                length: self.length(),
            });
        }
        if end > self.length() {
            return Err(SourceError::OutOfRange {
                offset: end as i64,
                length: self.length(),
            });
        }
        if end < start {
            return Err(SourceError::EndBeforeStart { start, end });
        }
        Ok(FileSpan::new(self, start, self.contents[start..end].to_string()))
    }

    /// A span covering the entire file.
    pub fn full_span(&self) -> FileSpan<'_> {
        self.span(0, self.length())
            .expect("[0, length) is always a valid span")
    }

    fn check_offset(&self, offset: usize) -> Result<(), SourceError> {
        if offset > self.length() {
            Err(SourceError::OutOfRange {
                offset: offset as i64,
                length: self.length(),
            })
        } else {
            Ok(())
        }
    }

    /// The (0-based) line containing `offset`. Line 0 is the first line of
    /// the file; `offset` must be at most `length()` (one past end is a
    /// legal query point, matching span endpoints).
    pub fn compute_line(&self, offset: usize) -> Result<usize, SourceError> {
        self.check_offset(offset)?;
        let starts = self.line_starts();
        Ok(starts.partition_point(|&start| start <= offset))
    }

    /// The number of code units between `offset` and the start of its line.
    pub fn compute_column(&self, offset: usize) -> Result<usize, SourceError> {
        self.check_offset(offset)?;
        let line = self.compute_line(offset)?;
        if line == 0 {
            return Ok(offset);
        }
        let starts = self.line_starts();
        Ok(offset - starts[line - 1])
    }
}

/// Single left-to-right pass recording the offset one past every line
/// terminator. `CR+LF` counts as a single terminator, recorded at the `LF`;
/// a bare `CR` (not followed by `LF`) terminates its line on its own.
fn build_line_starts(text: &str) -> Vec<usize> {
    let bytes = text.as_bytes();
    let mut starts = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => starts.push(i + 1),
            b'\r' if bytes.get(i + 1) != Some(&b'\n') => starts.push(i + 1),
            _ => {}
        }
        i += 1;
    }
    starts
}
