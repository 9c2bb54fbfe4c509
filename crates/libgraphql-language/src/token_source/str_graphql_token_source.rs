//! A [`GraphQLTokenSource`](crate::token_source::GraphQLTokenSource) that
//! lexes from a `&str` input.
//!
//! This lexer implements zero-copy lexing: token values borrow directly from
//! the source string using `Cow::Borrowed`. Only string literals containing
//! escape sequences allocate (their decoded value differs from the source
//! text).
//!
//! Tokens are produced lazily, one per call. The first lexical error is
//! terminal: it is returned again by every later call.
//!
//! # Usage
//!
//! ```rust
//! use libgraphql_language::token::GraphQLTokenKind;
//! use libgraphql_language::token_source::StrGraphQLTokenSource;
//!
//! let mut lexer = StrGraphQLTokenSource::new("{ name }");
//! let token = lexer.next_token().unwrap();
//! assert_eq!(token.kind, GraphQLTokenKind::CurlyBraceOpen);
//! let token = lexer.next_token().unwrap();
//! assert_eq!(token.value.as_deref(), Some("name"));
//! ```

use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::GraphQLLexError;
use crate::GraphQLLexErrorKind;
use crate::GraphQLSourceSpan;
use crate::SourcePosition;
use std::borrow::Cow;

const INT_VALUE_SPEC_URL: &str = "https://spec.graphql.org/October2021/#sec-Int-Value";
const STRING_VALUE_SPEC_URL: &str = "https://spec.graphql.org/October2021/#sec-String-Value";

/// A [`GraphQLTokenSource`](crate::token_source::GraphQLTokenSource) that
/// lexes from a `&str` input.
///
/// See module documentation for details.
pub struct StrGraphQLTokenSource<'src> {
    /// The full source text being lexed.
    source: &'src str,

    /// Current byte offset from the start of `source`.
    ///
    /// The remaining text to lex is `&source[curr_byte_offset..]`.
    curr_byte_offset: usize,

    /// Current code point offset from the start of `source`.
    curr_offset: usize,

    /// Current 0-based line number.
    curr_line: usize,

    /// Current code point column (0-based).
    curr_col: usize,

    /// Whether the previous character was `\r`.
    ///
    /// Used to handle `\r\n` as a single newline: when we see `\r`, we set
    /// this flag; if the next character is `\n`, we skip it without
    /// incrementing the line number again.
    last_char_was_cr: bool,

    /// The first error produced, replayed by every later call.
    failure: Option<GraphQLLexError>,

    /// Whether the iterator has yielded its final item (EOF or an error).
    finished: bool,
}

impl<'src> StrGraphQLTokenSource<'src> {
    /// Creates a new token source from a string slice.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            curr_byte_offset: 0,
            curr_offset: 0,
            curr_line: 0,
            curr_col: 0,
            last_char_was_cr: false,
            failure: None,
            finished: false,
        }
    }

    /// Returns the full source text being lexed.
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Scans and returns the next token.
    ///
    /// At end of input this returns an [`Eof`](GraphQLTokenKind::Eof) token
    /// spanning the end position, and keeps doing so on further calls. Once
    /// an error has been returned, every further call returns that same
    /// error.
    pub fn next_token(&mut self) -> Result<GraphQLToken<'src>, GraphQLLexError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        let result = self.lex_token();
        if let Err(error) = &result {
            self.failure = Some(error.clone());
        }
        result
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    /// Returns the remaining source text to be lexed.
    fn remaining(&self) -> &'src str {
        &self.source[self.curr_byte_offset..]
    }

    /// Returns the current source position.
    fn curr_position(&self) -> SourcePosition {
        SourcePosition::new(
            self.curr_offset,
            self.curr_line,
            self.curr_col,
            self.curr_byte_offset,
        )
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Consumes the next character and updates position tracking.
    ///
    /// Returns `None` if at end of input.
    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;

        if ch == '\n' {
            if self.last_char_was_cr {
                // Second half of a \r\n pair: the line was already counted.
                self.last_char_was_cr = false;
            } else {
                self.curr_line += 1;
                self.curr_col = 0;
            }
        } else if ch == '\r' {
            self.curr_line += 1;
            self.curr_col = 0;
            self.last_char_was_cr = true;
        } else {
            self.curr_col += 1;
            self.last_char_was_cr = false;
        }

        self.curr_offset += 1;
        self.curr_byte_offset += ch.len_utf8();
        Some(ch)
    }

    /// Advances over `text`, which must be the next piece of the remaining
    /// input and must not contain line breaks.
    fn advance_within_line(&mut self, text: &str) {
        let char_count = text.chars().count();
        self.curr_byte_offset += text.len();
        self.curr_offset += char_count;
        self.curr_col += char_count;
        self.last_char_was_cr = false;
    }

    /// Creates a `GraphQLSourceSpan` from a start position to the current
    /// position.
    fn make_span(&self, start: SourcePosition) -> GraphQLSourceSpan {
        GraphQLSourceSpan::new(start, self.curr_position())
    }

    // =========================================================================
    // Lexer main loop
    // =========================================================================

    fn lex_token(&mut self) -> Result<GraphQLToken<'src>, GraphQLLexError> {
        self.skip_ignored();

        let start = self.curr_position();
        let Some(ch) = self.peek_char() else {
            return Ok(GraphQLToken::new(GraphQLTokenKind::Eof, self.make_span(start)));
        };

        if let Some(kind) = punctuator_kind(ch) {
            self.consume();
            return Ok(GraphQLToken::new(kind, self.make_span(start)));
        }

        match ch {
            '.' => self.lex_ellipsis(start),
            '"' => self.lex_string(start),
            c if is_name_start(c) => Ok(self.lex_name(start)),
            c if c == '-' || c.is_ascii_digit() => self.lex_number(start),
            // Tab, LF and CR were skipped above.
            c if c < ' ' => {
                self.consume();
                Err(GraphQLLexError::new(
                    GraphQLLexErrorKind::InvalidCharacter(c),
                    self.make_span(start),
                ))
            },
            c => {
                self.consume();
                Err(GraphQLLexError::new(
                    GraphQLLexErrorKind::UnexpectedCharacter(c),
                    self.make_span(start),
                ))
            },
        }
    }

    // =========================================================================
    // Ignored input
    // =========================================================================

    /// Skips byte order marks, whitespace, line terminators, commas, and
    /// comments.
    fn skip_ignored(&mut self) {
        while let Some(ch) = self.peek_char() {
            match ch {
                ' ' | '\t' | '\n' | '\r' | ',' | '\u{FEFF}' => {
                    self.consume();
                },
                '#' => self.skip_comment(),
                _ => break,
            }
        }
    }

    /// Skips a `#` comment up to (not including) the next line terminator.
    fn skip_comment(&mut self) {
        let remaining = self.remaining();
        let comment_len = memchr::memchr2(b'\n', b'\r', remaining.as_bytes())
            .unwrap_or(remaining.len());
        self.advance_within_line(&remaining[..comment_len]);
    }

    // =========================================================================
    // Punctuators and names
    // =========================================================================

    /// Lexes `...`. Any shorter run of dots is an error.
    fn lex_ellipsis(
        &mut self,
        start: SourcePosition,
    ) -> Result<GraphQLToken<'src>, GraphQLLexError> {
        if self.remaining().starts_with("...") {
            self.advance_within_line("...");
            return Ok(GraphQLToken::new(GraphQLTokenKind::Ellipsis, self.make_span(start)));
        }

        if self.remaining().starts_with("..") {
            self.advance_within_line("..");
            return Err(GraphQLLexError::new(
                GraphQLLexErrorKind::UnexpectedCharacter('.'),
                self.make_span(start),
            ).with_help("Add one more `.` to form the spread operator `...`"));
        }

        self.consume();
        Err(GraphQLLexError::new(
            GraphQLLexErrorKind::UnexpectedCharacter('.'),
            self.make_span(start),
        ))
    }

    /// Lexes a name matching `/[_A-Za-z][_0-9A-Za-z]*/`.
    ///
    /// Keywords are not distinguished here; see [`Keyword`](crate::Keyword).
    fn lex_name(&mut self, start: SourcePosition) -> GraphQLToken<'src> {
        let remaining = self.remaining();
        let name_len = remaining
            .find(|ch: char| !is_name_continue(ch))
            .unwrap_or(remaining.len());
        let name = &remaining[..name_len];
        self.advance_within_line(name);

        GraphQLToken::with_value(
            GraphQLTokenKind::Name,
            self.make_span(start),
            Cow::Borrowed(name),
        )
    }

    // =========================================================================
    // Number lexing
    // =========================================================================

    /// Lexes an integer or float literal.
    ///
    /// Handles:
    /// - Optional negative sign: `-`
    /// - Integer part: `0` or `[0-9]+` (no leading zeros)
    /// - Optional fractional part: `.[0-9]+`
    /// - Optional exponent: `[eE][+-]?[0-9]+`
    ///
    /// The token value is the literal text.
    fn lex_number(
        &mut self,
        start: SourcePosition,
    ) -> Result<GraphQLToken<'src>, GraphQLLexError> {
        let num_start = self.curr_byte_offset;
        let mut is_float = false;

        if self.peek_char() == Some('-') {
            self.consume();
        }

        if self.peek_char() == Some('0') {
            self.consume();
            if let Some(ch) = self.peek_char()
                && ch.is_ascii_digit()
            {
                let digit_start = self.curr_position();
                self.consume();
                return Err(GraphQLLexError::new(
                    GraphQLLexErrorKind::UnexpectedDigitAfterZero(ch),
                    self.make_span(digit_start),
                ).with_spec(INT_VALUE_SPEC_URL));
            }
        } else {
            self.lex_digits()?;
        }

        if self.peek_char() == Some('.') {
            is_float = true;
            self.consume();
            self.lex_digits()?;
        }

        if matches!(self.peek_char(), Some('e' | 'E')) {
            is_float = true;
            self.consume();
            if matches!(self.peek_char(), Some('+' | '-')) {
                self.consume();
            }
            self.lex_digits()?;
        }

        let num_text = &self.source[num_start..self.curr_byte_offset];
        let kind = if is_float {
            GraphQLTokenKind::FloatValue
        } else {
            GraphQLTokenKind::IntValue
        };

        Ok(GraphQLToken::with_value(kind, self.make_span(start), Cow::Borrowed(num_text)))
    }

    /// Consumes a non-empty run of ASCII digits.
    fn lex_digits(&mut self) -> Result<(), GraphQLLexError> {
        let start = self.curr_position();
        match self.peek_char() {
            Some(ch) if ch.is_ascii_digit() => (),
            other => {
                self.consume();
                return Err(GraphQLLexError::new(
                    GraphQLLexErrorKind::ExpectedDigit(other),
                    self.make_span(start),
                ));
            },
        }

        let remaining = self.remaining();
        let digits_len = remaining
            .find(|ch: char| !ch.is_ascii_digit())
            .unwrap_or(remaining.len());
        self.advance_within_line(&remaining[..digits_len]);
        Ok(())
    }

    // =========================================================================
    // String lexing
    // =========================================================================

    /// Lexes a single-line string literal.
    ///
    /// Runs of plain characters are borrowed from the source; the value is
    /// only copied into an owned buffer once an escape sequence appears.
    fn lex_string(
        &mut self,
        start: SourcePosition,
    ) -> Result<GraphQLToken<'src>, GraphQLLexError> {
        self.consume(); // opening "

        let mut chunk_start = self.curr_byte_offset;
        let mut decoded: Option<String> = None;

        loop {
            match self.peek_char() {
                None | Some('\n') | Some('\r') => {
                    return Err(GraphQLLexError::new(
                        GraphQLLexErrorKind::UnterminatedString,
                        GraphQLSourceSpan::empty_at(self.curr_position()),
                    ).with_help("Add closing `\"`"));
                },

                Some('"') => {
                    let chunk = &self.source[chunk_start..self.curr_byte_offset];
                    self.consume();
                    let value = match decoded {
                        Some(mut buf) => {
                            buf.push_str(chunk);
                            Cow::Owned(buf)
                        },
                        None => Cow::Borrowed(chunk),
                    };
                    return Ok(GraphQLToken::with_value(
                        GraphQLTokenKind::StringValue,
                        self.make_span(start),
                        value,
                    ));
                },

                Some('\\') => {
                    let chunk = &self.source[chunk_start..self.curr_byte_offset];
                    let escaped = self.lex_escape_sequence()?;
                    let buf = decoded.get_or_insert_with(String::new);
                    buf.push_str(chunk);
                    buf.push(escaped);
                    chunk_start = self.curr_byte_offset;
                },

                Some(ch) if ch < ' ' && ch != '\t' => {
                    let char_start = self.curr_position();
                    self.consume();
                    return Err(GraphQLLexError::new(
                        GraphQLLexErrorKind::InvalidCharacterInString(ch),
                        self.make_span(char_start),
                    ));
                },

                Some(_) => {
                    self.consume();
                },
            }
        }
    }

    /// Lexes one escape sequence (starting at the `\`) and returns the
    /// character it denotes.
    fn lex_escape_sequence(&mut self) -> Result<char, GraphQLLexError> {
        let escape_start = self.curr_position();
        self.consume(); // backslash

        let escaped = match self.peek_char() {
            None => {
                return Err(GraphQLLexError::new(
                    GraphQLLexErrorKind::UnterminatedString,
                    GraphQLSourceSpan::empty_at(self.curr_position()),
                ).with_help("Add closing `\"`"));
            },
            Some('"') => '"',
            Some('/') => '/',
            Some('\\') => '\\',
            Some('n') => '\n',
            Some('r') => '\r',
            Some('t') => '\t',
            Some('u') => {
                self.consume();
                return self.lex_unicode_escape(escape_start);
            },
            Some(other) => {
                self.consume();
                return Err(GraphQLLexError::new(
                    GraphQLLexErrorKind::InvalidEscapeSequence(format!("\\{other}")),
                    self.make_span(escape_start),
                ).with_spec(STRING_VALUE_SPEC_URL));
            },
        };

        self.consume();
        Ok(escaped)
    }

    /// Lexes the four hex digits of a `\uXXXX` escape (the `\u` has already
    /// been consumed).
    ///
    /// Surrogate code points (`\uD800`..`\uDFFF`) do not denote a character
    /// on their own and are rejected.
    fn lex_unicode_escape(
        &mut self,
        escape_start: SourcePosition,
    ) -> Result<char, GraphQLLexError> {
        let remaining = self.remaining();
        let digits_len = remaining
            .char_indices()
            .take(4)
            .take_while(|(_, ch)| !matches!(ch, '"' | '\n' | '\r'))
            .map(|(idx, ch)| idx + ch.len_utf8())
            .last()
            .unwrap_or(0);
        let digits = &remaining[..digits_len];
        self.advance_within_line(digits);

        let decoded = if digits.len() == 4 && digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
            u32::from_str_radix(digits, 16).ok().and_then(char::from_u32)
        } else {
            None
        };

        decoded.ok_or_else(|| {
            GraphQLLexError::new(
                GraphQLLexErrorKind::InvalidEscapeSequence(format!("\\u{digits}")),
                self.make_span(escape_start),
            ).with_spec(STRING_VALUE_SPEC_URL)
        })
    }
}

// =============================================================================
// Iterator implementation
// =============================================================================

impl<'src> Iterator for StrGraphQLTokenSource<'src> {
    type Item = Result<GraphQLToken<'src>, GraphQLLexError>;

    /// Yields tokens up to and including the EOF token or the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.next_token();
        let is_last = match &result {
            Ok(token) => token.kind == GraphQLTokenKind::Eof,
            Err(_) => true,
        };
        if is_last {
            self.finished = true;
        }

        Some(result)
    }
}

// =============================================================================
// Helper functions
// =============================================================================

fn punctuator_kind(ch: char) -> Option<GraphQLTokenKind> {
    Some(match ch {
        '!' => GraphQLTokenKind::Bang,
        '$' => GraphQLTokenKind::Dollar,
        '(' => GraphQLTokenKind::ParenOpen,
        ')' => GraphQLTokenKind::ParenClose,
        ':' => GraphQLTokenKind::Colon,
        '=' => GraphQLTokenKind::Equals,
        '@' => GraphQLTokenKind::At,
        '[' => GraphQLTokenKind::SquareBracketOpen,
        ']' => GraphQLTokenKind::SquareBracketClose,
        '{' => GraphQLTokenKind::CurlyBraceOpen,
        '|' => GraphQLTokenKind::Pipe,
        '}' => GraphQLTokenKind::CurlyBraceClose,
        _ => return None,
    })
}

/// Returns `true` if `ch` can start a GraphQL name.
///
/// <https://spec.graphql.org/October2021/#NameStart>
fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

/// Returns `true` if `ch` can continue a GraphQL name.
///
/// <https://spec.graphql.org/October2021/#NameContinue>
fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}
