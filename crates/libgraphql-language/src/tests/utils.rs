//! Various test utils.

use crate::ast;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::GraphQLLexError;
use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::GraphQLParser;
use crate::GraphQLParserConfig;
use crate::GraphQLSourceSpan;
use crate::SourcePosition;
use std::borrow::Cow;

/// Creates a mock token with the given kind and a zero-width span at
/// `offset`.
pub fn mock_token(kind: GraphQLTokenKind, offset: usize) -> GraphQLToken<'static> {
    let pos = SourcePosition::new(offset, 0, offset, offset);
    GraphQLToken::new(kind, GraphQLSourceSpan::empty_at(pos))
}

/// Creates a mock Name token with the given name.
pub fn mock_name_token(name: &str, offset: usize) -> GraphQLToken<'static> {
    let mut token = mock_token(GraphQLTokenKind::Name, offset);
    token.value = Some(Cow::Owned(name.to_string()));
    token
}

/// Creates a mock Eof token.
pub fn mock_eof_token(offset: usize) -> GraphQLToken<'static> {
    mock_token(GraphQLTokenKind::Eof, offset)
}

/// A mock token source that produces tokens (or errors) from a Vec.
///
/// Uses `'static` lifetime since mock tokens use owned strings.
pub struct MockTokenSource {
    items: std::vec::IntoIter<Result<GraphQLToken<'static>, GraphQLLexError>>,
}

impl MockTokenSource {
    pub fn new(tokens: Vec<GraphQLToken<'static>>) -> Self {
        Self::from_results(tokens.into_iter().map(Ok).collect())
    }

    pub fn from_results(items: Vec<Result<GraphQLToken<'static>, GraphQLLexError>>) -> Self {
        Self {
            items: items.into_iter(),
        }
    }
}

impl Iterator for MockTokenSource {
    type Item = Result<GraphQLToken<'static>, GraphQLLexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.next()
    }
}

/// Parses `source`, panicking with a readable diagnostic on failure.
pub fn parse_ok(source: &str) -> ast::Document {
    match GraphQLParser::new(source).parse_document() {
        Ok(doc) => doc,
        Err(error) => panic!("failed to parse:\n{}", error.format_detailed(Some(source))),
    }
}

/// Parses `source`, expecting a parse error.
pub fn parse_err(source: &str) -> GraphQLParseError {
    match GraphQLParser::new(source).parse_document() {
        Ok(doc) => panic!("expected a parse error for {source:?}, got {doc:?}"),
        Err(error) => error,
    }
}

/// Parses `source` with a custom recursion limit.
pub fn parse_with_depth(
    source: &str,
    max_recursion_depth: usize,
) -> Result<ast::Document, GraphQLParseError> {
    let config = GraphQLParserConfig { max_recursion_depth };
    GraphQLParser::with_config(source, config).parse_document()
}

/// Asserts that `error` is an unexpected-token error naming `kind` (and,
/// for valued tokens, `value`).
pub fn assert_unexpected_token(
    error: &GraphQLParseError,
    kind: GraphQLTokenKind,
    value: Option<&str>,
) {
    match error.kind() {
        GraphQLParseErrorKind::UnexpectedToken { found } => {
            assert_eq!(found.kind, kind);
            assert_eq!(found.value.as_deref(), value);
        },
        other => panic!("expected UnexpectedToken, got {other:?}"),
    }
}

/// Asserts that `error` is a wrong-token-kind error.
pub fn assert_wrong_token_kind(
    error: &GraphQLParseError,
    expected: GraphQLTokenKind,
    found: GraphQLTokenKind,
) {
    assert_eq!(
        error.kind(),
        &GraphQLParseErrorKind::WrongTokenKind { expected, found },
    );
}

/// The first operation's selection set, for tests on a single operation.
pub fn first_selection_set(doc: &ast::Document) -> &ast::SelectionSet {
    match &doc.definitions[0] {
        ast::Definition::OperationDefinition(op) => &op.selection_set,
        other => panic!("expected an operation, got {other:?}"),
    }
}

/// The first field of the first operation.
pub fn first_field(doc: &ast::Document) -> &ast::Field {
    match &first_selection_set(doc).selections[0] {
        ast::Selection::Field(field) => field,
        other => panic!("expected a field, got {other:?}"),
    }
}

/// The value of the first argument of the first field in `{ f(a: VALUE) }`.
pub fn parse_argument_value(value_source: &str) -> ast::Value {
    let doc = parse_ok(&format!("{{ f(a: {value_source}) }}"));
    first_field(&doc).arguments[0].value.clone()
}

/// The type of the only variable in `query ($v: TYPE) { f }`.
pub fn parse_variable_type(type_source: &str) -> ast::TypeAnnotation {
    let doc = parse_ok(&format!("query ($v: {type_source}) {{ f }}"));
    match &doc.definitions[0] {
        ast::Definition::OperationDefinition(op) => op.variable_definitions[0].var_type.clone(),
        other => panic!("expected an operation, got {other:?}"),
    }
}
