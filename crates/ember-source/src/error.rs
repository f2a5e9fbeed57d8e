use thiserror::Error;

/// Range errors: the offending call asked `SourceFile`/`Scanner` for a
/// position outside the text it owns. These are programming errors, not
/// recoverable source-level diagnostics, so they are modeled as a `Result`
/// the caller is expected to propagate with `?` rather than as something a
/// lexical error reporter ever sees.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceError {
    #[error("offset {offset} is out of range for a source of length {length}")]
    OutOfRange { offset: i64, length: usize },

    #[error("span end {end} precedes start {start}")]
    EndBeforeStart { start: usize, end: usize },
}
