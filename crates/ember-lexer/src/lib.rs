//! # Ember Lexer
//!
//! Tokenizer for the Ember expression/statement language.
//! Converts a [`SourceFile`](ember_source::SourceFile) into a stream of
//! typed tokens with attached leading comments.
//!
//! Design decisions:
//! - Hand-written (not generated) maximal-munch lexer
//! - `TokenKind` carries no payload; `Token::lexeme` is the single source
//!   of truth for a token's text
//! - Comments are buffered and attached to the next significant token
//!   rather than emitted as tokens the parser must filter out
//! - Two of the number scanner's historical quirks (the `e`/`E` branch and
//!   the `.` branch) are preserved rather than silently fixed: `12e3` lexes
//!   as `Number("12")` then `Identifier("e3")`, and `1.5` lexes as three
//!   tokens, `Number("1")`, `Period`, `Number("5")`

mod error;
mod lexer;
mod token;

pub use error::LexError;
pub use lexer::{panicking_reporter, tokenize, tokenize_collecting, tokenize_with, Lexer};
pub use token::{Comment, Token, TokenKind};
