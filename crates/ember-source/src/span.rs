use std::fmt;

use serde::{Deserialize, Serialize};

use crate::source_file::SourceFile;

/// Shared contract for the two span flavors below: a contiguous slice of
/// some source text, plus the (line, column) of its first character.
///
/// `StringSpan` and `FileSpan` both implement this so that tokens, comments,
/// and AST nodes can be written against one trait regardless of which
/// flavor produced a given span.
pub trait Span: fmt::Debug {
    /// The literal text this span covers.
    fn text(&self) -> &str;

    /// The starting offset (code units) into the owning source.
    fn offset(&self) -> usize;

    /// 0-based line of the first character.
    fn line(&self) -> usize;

    /// Code units between the first character and the start of its line.
    fn column(&self) -> usize;

    /// `text().len()`.
    fn length(&self) -> usize {
        self.text().len()
    }

    /// Whether `text` contains a line terminator.
    fn is_multi_line(&self) -> bool {
        self.text().contains('\n') || self.text().contains('\r')
    }

    /// `(line, text)` for each logical line covered by this span.
    ///
    /// Precondition: callers should check [`is_multi_line`](Span::is_multi_line)
    /// first; a single-line span still returns a correct one-element result.
    fn lines(&self) -> Vec<(usize, &str)> {
        let base_line = self.line();
        split_into_lines(self.text())
            .into_iter()
            .enumerate()
            .map(|(i, text)| (base_line + i, text))
            .collect()
    }
}

/// A span that owns its text outright, with (offset, line, column)
/// precomputed at construction. Used by AST nodes, which may legitimately
/// outlive the `Scanner`/`Lexer` invocation (and thus the borrow) that
/// produced the text they cover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringSpan {
    offset: usize,
    line: usize,
    column: usize,
    text: String,
}

impl StringSpan {
    pub fn new(offset: usize, line: usize, column: usize, text: impl Into<String>) -> Self {
        Self {
            offset,
            line,
            column,
            text: text.into(),
        }
    }
}

impl Span for StringSpan {
    fn text(&self) -> &str {
        &self.text
    }

    fn offset(&self) -> usize {
        self.offset
    }

    fn line(&self) -> usize {
        self.line
    }

    fn column(&self) -> usize {
        self.column
    }
}

/// A span that borrows its owning `SourceFile` and computes (line, column)
/// lazily on demand, rather than duplicating the file's line-start table.
/// `text` is still stored directly to avoid re-slicing the file on every
/// access.
#[derive(Clone, PartialEq)]
pub struct FileSpan<'f> {
    file: &'f SourceFile,
    offset: usize,
    text: String,
}

impl<'f> FileSpan<'f> {
    pub(crate) fn new(file: &'f SourceFile, offset: usize, text: String) -> Self {
        Self { file, offset, text }
    }

    /// The file this span was cut from.
    pub fn file(&self) -> &'f SourceFile {
        self.file
    }
}

impl fmt::Debug for FileSpan<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileSpan")
            .field("offset", &self.offset)
            .field("text", &self.text)
            .finish()
    }
}

impl Span for FileSpan<'_> {
    fn text(&self) -> &str {
        &self.text
    }

    fn offset(&self) -> usize {
        self.offset
    }

    fn line(&self) -> usize {
        self.file
            .compute_line(self.offset)
            .expect("FileSpan offsets are validated against their file at construction")
    }

    fn column(&self) -> usize {
        self.file
            .compute_column(self.offset)
            .expect("FileSpan offsets are validated against their file at construction")
    }
}

/// Splits `text` into logical lines using the same terminator rules as the
/// source file's line-start table (`CR+LF` is one terminator; a bare `CR`
/// terminates on its own), so a multi-line span's `lines()` agrees with the
/// file it was cut from.
fn split_into_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut result = Vec::new();
    let mut line_start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                result.push(&text[line_start..i]);
                line_start = i + 1;
            }
            b'\r' if bytes.get(i + 1) != Some(&b'\n') => {
                result.push(&text[line_start..i]);
                line_start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    result.push(&text[line_start..]);
    result
}
