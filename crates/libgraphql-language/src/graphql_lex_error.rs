use crate::diagnostic;
use crate::GraphQLErrorNote;
use crate::GraphQLErrorNotes;
use crate::GraphQLLexErrorKind;
use crate::GraphQLSourceSpan;

/// A lexical error with location information and contextual notes.
///
/// Lexical errors are terminal: once a token source has produced one, it
/// keeps returning the same error and never resumes scanning.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct GraphQLLexError {
    /// Categorized error kind. Its `Display` text is the error message.
    kind: GraphQLLexErrorKind,

    /// Where the offending input sits. For missing input (unterminated
    /// strings, missing digits) this is the position where more input was
    /// expected.
    span: GraphQLSourceSpan,

    notes: GraphQLErrorNotes,
}

impl GraphQLLexError {
    pub fn new(kind: GraphQLLexErrorKind, span: GraphQLSourceSpan) -> Self {
        Self {
            kind,
            span,
            notes: GraphQLErrorNotes::new(),
        }
    }

    /// Returns the categorized error kind.
    pub fn kind(&self) -> &GraphQLLexErrorKind {
        &self.kind
    }

    /// Returns the human-readable error message.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }

    pub fn notes(&self) -> &GraphQLErrorNotes {
        &self.notes
    }

    /// Adds a help note without a span.
    pub fn with_help(mut self, message: impl Into<String>) -> Self {
        self.notes.push(GraphQLErrorNote::help(message));
        self
    }

    /// Adds a spec reference note.
    pub fn with_spec(mut self, url: impl Into<String>) -> Self {
        self.notes.push(GraphQLErrorNote::spec(url));
        self
    }

    /// Formats this error as a multi-line diagnostic with a source snippet.
    ///
    /// See [`GraphQLParseError::format_detailed`](crate::GraphQLParseError::format_detailed).
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        diagnostic::format_detailed(&self.message(), &self.span, &self.notes, source)
    }

    /// Formats this error as a single-line summary:
    /// `<input>:LINE:COL: error: MESSAGE`.
    pub fn format_oneline(&self) -> String {
        diagnostic::format_oneline(&self.message(), &self.span)
    }
}
