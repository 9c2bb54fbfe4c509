use crate::diagnostic;
use crate::GraphQLErrorNote;
use crate::GraphQLErrorNotes;
use crate::GraphQLLexError;
use crate::GraphQLParseErrorKind;
use crate::GraphQLSourceSpan;

/// A parse error with location information and contextual notes.
///
/// The parser stops at the first error; there is no partial result and no
/// recovery.
///
/// Boxed: the error is one pointer wide.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct GraphQLParseError {
    inner: Box<ParseErrorInner>,
}

#[derive(Debug, Clone, PartialEq)]
struct ParseErrorInner {
    /// Its `Display` text is the primary message.
    kind: GraphQLParseErrorKind,
    /// Span of the token that could not be parsed, or of the lexer error.
    span: GraphQLSourceSpan,
    notes: GraphQLErrorNotes,
}

impl GraphQLParseError {
    /// Creates a new parse error with no notes.
    pub fn new(kind: GraphQLParseErrorKind, span: GraphQLSourceSpan) -> Self {
        Self {
            inner: Box::new(ParseErrorInner {
                kind,
                span,
                notes: GraphQLErrorNotes::new(),
            }),
        }
    }

    pub fn message(&self) -> String {
        self.inner.kind.to_string()
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.inner.span
    }

    pub fn kind(&self) -> &GraphQLParseErrorKind {
        &self.inner.kind
    }

    pub fn notes(&self) -> &GraphQLErrorNotes {
        &self.inner.notes
    }

    /// Adds a general note without a span.
    pub fn add_note(&mut self, message: impl Into<String>) {
        self.inner.notes.push(GraphQLErrorNote::general(message));
    }

    /// Adds a general note pointing at a related location.
    pub fn add_note_with_span(&mut self, message: impl Into<String>, span: GraphQLSourceSpan) {
        self.inner.notes.push(GraphQLErrorNote::general(message).at(span));
    }

    /// Adds a help note without a span.
    pub fn add_help(&mut self, message: impl Into<String>) {
        self.inner.notes.push(GraphQLErrorNote::help(message));
    }

    /// Adds a spec reference note.
    pub fn add_spec(&mut self, url: impl Into<String>) {
        self.inner.notes.push(GraphQLErrorNote::spec(url));
    }

    /// Renders a multi-line diagnostic:
    /// ```text
    /// error: expected name, found `}`
    ///   --> <input>:1:9
    ///    |
    ///  1 | { ...on }
    ///    |         ^
    /// ```
    ///
    /// The snippet lines are only present when `source` is given.
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        diagnostic::format_detailed(&self.message(), &self.inner.span, &self.inner.notes, source)
    }

    /// Renders a single line:
    /// ```text
    /// <input>:1:9: error: expected name, found `}`
    /// ```
    pub fn format_oneline(&self) -> String {
        diagnostic::format_oneline(&self.message(), &self.inner.span)
    }
}

impl From<GraphQLLexError> for GraphQLParseError {
    fn from(error: GraphQLLexError) -> Self {
        Self {
            inner: Box::new(ParseErrorInner {
                span: *error.span(),
                notes: error.notes().clone(),
                kind: GraphQLParseErrorKind::LexerError(error),
            }),
        }
    }
}
