use ember_source::{is_digit, is_hexadecimal, is_identifier, is_identifier_start, is_white_space};
use ember_source::{Scanner, SourceFile, Span};
use tracing::{debug, trace};

use crate::error::LexError;
use crate::token::{keyword_kind, Comment, Token, TokenKind};

/// Consumes a [`Scanner`] over a [`SourceFile`] and produces a token stream
/// terminated by a synthetic `Eof` token.
///
/// `anchor` marks the scanner position at the *start* of the token
/// currently being built; it is distinct from `scanner.position()`, the
/// live cursor, which may run ahead of it while disambiguating a
/// multi-character operator.
pub struct Lexer<'src, 'rep> {
    file: &'src SourceFile,
    scanner: Scanner<'src>,
    anchor: usize,
    last_comments: Vec<Comment>,
    on_error: &'rep mut dyn FnMut(LexError),
}

impl<'src, 'rep> Lexer<'src, 'rep> {
    pub fn new(file: &'src SourceFile, on_error: &'rep mut dyn FnMut(LexError)) -> Self {
        Self {
            file,
            scanner: Scanner::new(file.contents()),
            anchor: 0,
            last_comments: Vec::new(),
            on_error,
        }
    }

    /// Tokenize the entire source, ending in `Eof`.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while self.scanner.has_next() {
            if let Some(token) = self.scan_token() {
                tokens.push(token);
            }
        }
        tokens.push(self.make_eof());
        tokens
    }

    fn scan_token(&mut self) -> Option<Token> {
        self.anchor = self.scanner.position();
        let c = self.scanner.advance()?;

        if is_white_space(c) {
            self.anchor = self.scanner.position();
            return None;
        }

        let kind = match c {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '{' => TokenKind::LeftCurly,
            '}' => TokenKind::RightCurly,
            '.' => TokenKind::Period,
            '+' => self.scan_plus(),
            '-' => self.scan_minus(),
            '*' => self.scan_star(),
            '%' => self.scan_percent(),
            '=' => self.scan_equal(),
            '<' => self.scan_less(),
            '>' => self.scan_greater(),
            '!' => self.scan_bang(),
            '/' => return self.scan_slash(),
            '|' => {
                if self.scanner.match_char('|') {
                    TokenKind::LogicalOr
                } else {
                    TokenKind::Or
                }
            }
            '&' => {
                if self.scanner.match_char('&') {
                    TokenKind::LogicalAnd
                } else {
                    TokenKind::And
                }
            }
            '~' => TokenKind::Negate,
            '^' => TokenKind::LogicalXor,
            '\'' => return Some(self.scan_string()),
            c if is_digit(c) => return Some(self.scan_number(c)),
            c if is_identifier_start(c) => return Some(self.scan_identifier()),
            _ => {
                self.report_error(format!("unexpected character '{c}'"));
                return None;
            }
        };

        Some(self.create_token(kind, None))
    }

    fn scan_plus(&mut self) -> TokenKind {
        if self.scanner.match_char('=') {
            TokenKind::PlusBy
        } else if self.scanner.match_char('+') {
            TokenKind::Increment
        } else {
            TokenKind::Plus
        }
    }

    fn scan_minus(&mut self) -> TokenKind {
        if self.scanner.match_char('>') {
            TokenKind::Arrow
        } else if self.scanner.match_char('=') {
            TokenKind::MinusBy
        } else if self.scanner.match_char('-') {
            TokenKind::Decrement
        } else {
            TokenKind::Minus
        }
    }

    fn scan_star(&mut self) -> TokenKind {
        if self.scanner.match_char('=') {
            TokenKind::StarBy
        } else {
            TokenKind::Star
        }
    }

    fn scan_percent(&mut self) -> TokenKind {
        if self.scanner.match_char('=') {
            TokenKind::ModulusBy
        } else {
            TokenKind::Modulus
        }
    }

    /// Two-level: first match `=`, then optionally a second `=` for the
    /// three-character form.
    fn scan_equal(&mut self) -> TokenKind {
        if self.scanner.match_char('=') {
            if self.scanner.match_char('=') {
                TokenKind::Identical
            } else {
                TokenKind::Equals
            }
        } else {
            TokenKind::Assign
        }
    }

    fn scan_less(&mut self) -> TokenKind {
        if self.scanner.match_char('=') {
            TokenKind::LessThanOrEqual
        } else if self.scanner.match_char('<') {
            TokenKind::LeftShift
        } else {
            TokenKind::LessThan
        }
    }

    fn scan_greater(&mut self) -> TokenKind {
        if self.scanner.match_char('=') {
            TokenKind::GreaterThanOrEqual
        } else if self.scanner.match_char('>') {
            TokenKind::RightShift
        } else {
            TokenKind::GreaterThan
        }
    }

    /// Two-level, mirroring `scan_equal`.
    fn scan_bang(&mut self) -> TokenKind {
        if self.scanner.match_char('=') {
            if self.scanner.match_char('=') {
                TokenKind::NotIdentical
            } else {
                TokenKind::NotEquals
            }
        } else {
            TokenKind::LogicalNot
        }
    }

    /// `//` opens a line comment, buffered for attachment to the next
    /// token rather than emitted as a token itself. Otherwise `/=` or a
    /// bare `/`.
    fn scan_slash(&mut self) -> Option<Token> {
        if self.scanner.match_char('/') {
            while self.scanner.has_next() && !matches!(self.scanner.peek(0), '\n' | '\r') {
                self.scanner.advance();
            }
            let lexeme = self
                .scanner
                .substring(Some(self.anchor), Some(self.scanner.position()))
                .trim_end()
                .to_string();
            self.last_comments.push(Comment {
                lexeme,
                offset: self.anchor,
            });
            self.anchor = self.scanner.position();
            None
        } else if self.scanner.match_char('=') {
            Some(self.create_token(TokenKind::SlashBy, None))
        } else {
            Some(self.create_token(TokenKind::Slash, None))
        }
    }

    /// Consumes characters until a matching `'` or EOF. The lexeme excludes
    /// the surrounding quotes; no escape processing. An unterminated string
    /// is reported but a (possibly truncated) `String` token is still
    /// emitted, to aid downstream recovery.
    fn scan_string(&mut self) -> Token {
        let content_start = self.scanner.position();
        let mut terminated = false;
        while self.scanner.has_next() {
            if self.scanner.peek(0) == '\'' {
                terminated = true;
                break;
            }
            self.scanner.advance();
        }
        let content = self
            .scanner
            .substring(Some(content_start), Some(self.scanner.position()))
            .to_string();

        if terminated {
            self.scanner.advance();
        } else {
            self.report_error("unterminated string literal".to_string());
        }

        self.create_token(TokenKind::String, Some(content))
    }

    /// `first` is the digit that triggered this call; the cursor is already
    /// past it.
    ///
    /// Two quirks are preserved verbatim rather than silently fixed: the
    /// `e`/`E` branch does not first consume the mantissa digits that led
    /// into it, so `12e3` tokenizes as `Number("12")` then an `Identifier`
    /// for `e3`, while a bare `0e3` is one `Number`; and the `.` branch
    /// never consumes the `.` itself, so `1.5` tokenizes as three tokens
    /// (`Number`, `Period`, `Number`), not one.
    fn scan_number(&mut self, first: char) -> Token {
        if first == '0' && matches!(self.scanner.peek(0), 'x' | 'X') {
            self.scanner.advance();
            while self.scanner.match_pred(is_hexadecimal) {}
        } else if matches!(self.scanner.peek(0), 'e' | 'E') {
            self.scanner.advance();
            while self.scanner.match_pred(is_digit) {}
        } else {
            while self.scanner.match_pred(is_digit) {}
            // Deliberately does not consume a following '.': a later
            // scan_token call emits it as its own Period token.
        }

        self.create_token(TokenKind::Number, None)
    }

    fn scan_identifier(&mut self) -> Token {
        while self.scanner.match_pred(is_identifier) {}
        let lexeme = self
            .scanner
            .substring(Some(self.anchor), Some(self.scanner.position()));
        let kind = keyword_kind(lexeme).unwrap_or(TokenKind::Identifier);
        self.create_token(kind, None)
    }

    /// `content` defaults to the lexeme between the anchor and the current
    /// scanner position. The offset is always the anchor recorded at the
    /// start of this token — the start of the lexeme — regardless of
    /// whether `content` was overridden (e.g. a `String`'s quotes are
    /// excluded from `content` but not from where the token starts).
    fn create_token(&mut self, kind: TokenKind, content: Option<String>) -> Token {
        let start = self.anchor;
        let lexeme = content.unwrap_or_else(|| {
            self.scanner
                .substring(Some(start), Some(self.scanner.position()))
                .to_string()
        });
        let comments = std::mem::take(&mut self.last_comments);
        self.anchor = self.scanner.position();

        debug!(kind = ?kind, lexeme = %lexeme, offset = start, "emitted token");
        Token {
            kind,
            lexeme,
            offset: start,
            comments,
        }
    }

    /// A trailing comment with no following significant token is discarded,
    /// never attached to `Eof`.
    fn make_eof(&mut self) -> Token {
        self.anchor = self.scanner.position();
        self.last_comments.clear();
        Token {
            kind: TokenKind::Eof,
            lexeme: String::new(),
            offset: self.anchor,
            comments: Vec::new(),
        }
    }

    /// Reports a one-character lexical error at the current anchor.
    fn report_error(&mut self, message: String) {
        let offset = self.anchor;
        let end = (offset + 1).min(self.file.length());
        let span = self
            .file
            .span(offset, end)
            .expect("report_error offsets are within the file the lexer is scanning");

        let err = LexError {
            message,
            text: span.text().to_string(),
            line: span.line(),
            column: span.column(),
            offset,
        };
        trace!(%err, "lexical error reported");
        (self.on_error)(err);
    }
}

/// Default error reporter: a lexical error is a programming-visible failure
/// by default, so this reporter raises rather than swallowing it.
pub fn panicking_reporter(err: LexError) {
    panic!("{err}");
}

/// Tokenize `file` with the panicking default reporter.
pub fn tokenize(file: &SourceFile) -> Vec<Token> {
    let mut reporter = panicking_reporter;
    Lexer::new(file, &mut reporter).tokenize()
}

/// Tokenize `file`, collecting lexical errors instead of panicking on the
/// first one: the lexer emits a best-effort token for each error and
/// continues rather than stopping at the first one.
pub fn tokenize_collecting(file: &SourceFile) -> (Vec<Token>, Vec<LexError>) {
    let mut errors = Vec::new();
    let tokens = {
        let mut reporter = |err: LexError| errors.push(err);
        Lexer::new(file, &mut reporter).tokenize()
    };
    (tokens, errors)
}

/// Tokenize `file` with a caller-supplied reporter.
pub fn tokenize_with(file: &SourceFile, on_error: &mut dyn FnMut(LexError)) -> Vec<Token> {
    Lexer::new(file, on_error).tokenize()
}
