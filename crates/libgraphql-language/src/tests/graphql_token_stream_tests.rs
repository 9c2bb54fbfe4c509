//! Tests for GraphQLTokenStream.

use crate::tests::utils;
use crate::token::GraphQLTokenKind;
use crate::GraphQLLexError;
use crate::GraphQLLexErrorKind;
use crate::GraphQLSourceSpan;
use crate::GraphQLTokenStream;
use crate::SourcePosition;

// =============================================================================
// Basic functionality tests
// =============================================================================

/// Before the first advance the lookahead is a placeholder EOF.
#[test]
fn unprimed_stream_holds_placeholder_eof() {
    let tokens = vec![utils::mock_name_token("type", 0), utils::mock_eof_token(4)];
    let stream = GraphQLTokenStream::new(utils::MockTokenSource::new(tokens));
    assert_eq!(stream.peek().kind, GraphQLTokenKind::Eof);
    assert!(stream.is_at_end());
}

/// Verifies that peek() returns the lookahead token without consuming it.
/// Multiple peeks should return the same token.
#[test]
fn peek_without_consuming() {
    let tokens = vec![
        utils::mock_name_token("type", 0),
        utils::mock_name_token("Query", 5),
        utils::mock_eof_token(10),
    ];
    let mut stream = GraphQLTokenStream::new(utils::MockTokenSource::new(tokens));
    stream.advance().expect("prime");

    let first_peek = stream.peek().clone();
    let second_peek = stream.peek().clone();
    assert_eq!(first_peek, second_peek);
    assert!(first_peek.is_name("type"));

    let consumed = stream.advance().expect("advance");
    assert_eq!(first_peek, consumed);
}

/// Verifies that advance() moves the lookahead forward one token at a time.
#[test]
fn advance_moves_lookahead() {
    let tokens = vec![
        utils::mock_name_token("type", 0),
        utils::mock_name_token("Query", 5),
        utils::mock_eof_token(10),
    ];
    let mut stream = GraphQLTokenStream::new(utils::MockTokenSource::new(tokens));
    stream.advance().expect("prime");

    assert!(stream.advance().expect("type").is_name("type"));
    assert!(stream.peek().is_name("Query"));
    assert!(stream.advance().expect("Query").is_name("Query"));
    assert!(stream.is_at_end());
}

/// Once the source is exhausted the stream keeps producing EOF at the end
/// of the last token.
#[test]
fn exhausted_source_yields_eof() {
    let mut name = utils::mock_name_token("a", 0);
    name.span = GraphQLSourceSpan::new(
        SourcePosition::new(0, 0, 0, 0),
        SourcePosition::new(1, 0, 1, 1),
    );
    let mut stream = GraphQLTokenStream::new(utils::MockTokenSource::new(vec![name]));
    stream.advance().expect("prime");
    stream.advance().expect("a");

    assert!(stream.is_at_end());
    assert_eq!(stream.peek().start(), 1);
    for _ in 0..3 {
        let eof = stream.advance().expect("eof");
        assert_eq!(eof.kind, GraphQLTokenKind::Eof);
        assert_eq!(eof.start(), 1);
    }
}

/// Errors from the source are passed through.
#[test]
fn source_errors_are_returned() {
    let error = GraphQLLexError::new(
        GraphQLLexErrorKind::UnexpectedCharacter('?'),
        GraphQLSourceSpan::default(),
    );
    let items = vec![Ok(utils::mock_name_token("a", 0)), Err(error.clone())];
    let mut stream = GraphQLTokenStream::new(utils::MockTokenSource::from_results(items));
    stream.advance().expect("prime");

    assert_eq!(stream.advance(), Err(error));
    assert!(stream.peek().is_name("a"));
}
