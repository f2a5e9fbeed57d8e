//! # Ember Source
//!
//! Source file, span, and scanner primitives shared by the rest of the
//! Ember compiler front-end.
//!
//! Design decisions:
//! - ASCII-only classification; no locale, no Unicode identifier classes
//! - The line-start table is built once, lazily, and never invalidated
//!   (`SourceFile`'s contents are immutable for its whole lifetime)
//! - Two span flavors share one `Span` trait: `StringSpan` owns its text,
//!   `FileSpan` borrows a `SourceFile` and computes (line, column) lazily

mod classify;
mod error;
mod scanner;
mod source_file;
mod span;

pub use classify::{
    is_digit, is_hexadecimal, is_identifier, is_identifier_start, is_letter, is_white_space,
};
pub use error::SourceError;
pub use scanner::Scanner;
pub use source_file::SourceFile;
pub use span::{FileSpan, Span, StringSpan};
