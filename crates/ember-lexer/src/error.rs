use thiserror::Error;

/// A lexical diagnostic: an unexpected character or an unterminated string.
///
/// `line`/`column` are 0-based, matching `SourceFile::compute_line`/
/// `compute_column`. The `Display` impl matches the user-visible message
/// format the language's default reporter has always used:
/// `<message> "<span-text>" at <line>:<column>`.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message} \"{text}\" at {line}:{column}")]
pub struct LexError {
    pub message: String,
    pub text: String,
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}
