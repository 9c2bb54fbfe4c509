
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::StrGraphQLTokenSource;
use crate::GraphQLLexError;

/// Lexes `source` to completion, panicking on the first error. The trailing
/// EOF token is not included.
pub(super) fn lex_all(source: &str) -> Vec<GraphQLToken<'_>> {
    let mut tokens: Vec<GraphQLToken<'_>> = StrGraphQLTokenSource::new(source)
        .map(|result| match result {
            Ok(token) => token,
            Err(error) => panic!("unexpected lex error: {}", error.format_oneline()),
        })
        .collect();
    assert_eq!(tokens.pop().map(|token| token.kind), Some(GraphQLTokenKind::Eof));
    tokens
}

/// Lexes `source` and returns the kinds of all tokens before EOF.
pub(super) fn lex_kinds(source: &str) -> Vec<GraphQLTokenKind> {
    lex_all(source).into_iter().map(|token| token.kind).collect()
}

/// Lexes exactly one token from `source`.
pub(super) fn lex_one(source: &str) -> GraphQLToken<'_> {
    let mut tokens = lex_all(source);
    assert_eq!(tokens.len(), 1, "expected a single token in {source:?}");
    tokens.remove(0)
}

/// Lexes `source` until the first error and returns it.
pub(super) fn lex_error(source: &str) -> GraphQLLexError {
    for result in StrGraphQLTokenSource::new(source) {
        if let Err(error) = result {
            return error;
        }
    }
    panic!("expected a lex error for {source:?}");
}
