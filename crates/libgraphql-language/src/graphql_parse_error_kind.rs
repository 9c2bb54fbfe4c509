use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::GraphQLLexError;
use crate::Keyword;

/// Categorizes parse errors for programmatic handling.
///
/// The `Display` text of each variant is the primary message of the
/// enclosing [`GraphQLParseError`](crate::GraphQLParseError).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphQLParseErrorKind {
    /// A token that no grammar rule accepts at this position.
    ///
    /// Examples: a top-level `notanoperation`, the fragment name `on`, a
    /// `null` value, a variable inside a constant value.
    #[error("unexpected {found}")]
    UnexpectedToken { found: GraphQLToken<'static> },

    /// A specific token kind was required but another was found.
    ///
    /// Example: `{ field: {} }` expects a name after `:` but finds `{`.
    #[error("expected {expected}, found {found}")]
    WrongTokenKind {
        expected: GraphQLTokenKind,
        found: GraphQLTokenKind,
    },

    /// A specific keyword was required but some other token was found.
    ///
    /// Example: `fragment Foo Bar { x }` is missing `on`.
    #[error("expected keyword `{expected}`, found {found}")]
    UnexpectedKeyword {
        expected: Keyword,
        found: GraphQLToken<'static>,
    },

    /// Values, selection sets, or type annotations nested deeper than the
    /// configured limit.
    #[error("maximum nesting depth of {limit} exceeded")]
    RecursionLimitExceeded { limit: usize },

    /// The token source failed while the parser was pulling the next token.
    #[error("{}", .0.message())]
    LexerError(GraphQLLexError),
}

impl GraphQLParseErrorKind {
    /// Returns the wrapped lexical error, if this is one.
    pub fn as_lex_error(&self) -> Option<&GraphQLLexError> {
        match self {
            Self::LexerError(error) => Some(error),
            _ => None,
        }
    }
}
