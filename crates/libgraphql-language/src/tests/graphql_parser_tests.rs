//! General tests for `GraphQLParser`: document structure, mixed documents,
//! configuration, and alternative token sources.

use crate::ast;
use crate::tests::utils;
use crate::token::GraphQLTokenKind;
use crate::GraphQLParseErrorKind;
use crate::GraphQLParser;
use crate::GraphQLParserConfig;

fn field(name: &str) -> ast::Selection {
    ast::Selection::Field(ast::Field {
        alias: None,
        arguments: vec![],
        directives: vec![],
        name: ast::Name::new(name),
        selection_set: None,
    })
}

// =============================================================================
// Document structure
// =============================================================================

/// A shorthand query with arguments and a nested selection set produces the
/// expected tree.
#[test]
fn parses_simple_query_ast() {
    let doc = utils::parse_ok("{ node(id: 4) { id, name } }");

    let expected = ast::Document {
        definitions: vec![ast::Definition::OperationDefinition(ast::OperationDefinition {
            directives: vec![],
            name: None,
            operation: ast::OperationType::Query,
            selection_set: ast::SelectionSet {
                selections: vec![ast::Selection::Field(ast::Field {
                    alias: None,
                    arguments: vec![ast::Argument {
                        name: ast::Name::new("id"),
                        value: ast::Value::Int("4".to_string()),
                    }],
                    directives: vec![],
                    name: ast::Name::new("node"),
                    selection_set: Some(ast::SelectionSet {
                        selections: vec![field("id"), field("name")],
                    }),
                })],
            },
            variable_definitions: vec![],
        })],
    };

    assert_eq!(doc, expected);
}

/// Executable and type-system definitions may share one document, in
/// source order.
#[test]
fn parses_mixed_document() {
    let doc = utils::parse_ok(
        "type Query { hero: Character }\n\
         query Hero { hero { name } }\n\
         fragment F on Character { name }\n\
         extend type Query { villain: Character }",
    );
    assert_eq!(doc.definitions.len(), 4);
    assert!(matches!(doc.definitions[0], ast::Definition::TypeDefinition(_)));
    assert!(matches!(doc.definitions[1], ast::Definition::OperationDefinition(_)));
    assert!(matches!(doc.definitions[2], ast::Definition::FragmentDefinition(_)));
    assert!(matches!(doc.definitions[3], ast::Definition::TypeExtension(_)));

    assert_eq!(doc.executable_definitions().count(), 2);
    assert_eq!(doc.schema_definitions().count(), 2);
}

/// Several shorthand queries may appear in one document.
#[test]
fn parses_multiple_shorthand_queries() {
    let doc = utils::parse_ok("{ a } { b }");
    assert_eq!(doc.definitions.len(), 2);
    assert_eq!(doc.operations().count(), 2);
}

/// Commas, comments, and blank lines are insignificant.
#[test]
fn ignores_insignificant_input() {
    let compact = utils::parse_ok("{a,b,c}");
    let spaced = utils::parse_ok("# leading\n{\n  a,,\n  b # trailing\n\n  c\n}\n");
    assert_eq!(compact, spaced);
}

/// Keywords are ordinary names outside of keyword positions.
#[test]
fn keywords_are_valid_names() {
    let doc = utils::parse_ok(
        "query query { query: mutation, fragment, on(type: enum), subscription { input } }",
    );
    let op = doc.operations().next().expect("operation");
    assert_eq!(op.name.as_ref().map(ast::Name::as_str), Some("query"));

    let field = utils::first_field(&doc);
    assert_eq!(field.alias.as_ref().map(ast::Name::as_str), Some("query"));
    assert_eq!(field.name.as_str(), "mutation");

    let doc = utils::parse_ok("type type { on: on, fragment(query: input): extend }");
    assert_eq!(doc.schema_definitions().count(), 1);
}

/// Empty input is not a document.
#[test]
fn rejects_empty_document() {
    for source in ["", "   ", "# just a comment\n", ",,,"] {
        let error = utils::parse_err(source);
        utils::assert_unexpected_token(&error, GraphQLTokenKind::Eof, None);
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// The default configuration allows moderately deep nesting.
#[test]
fn default_config_allows_reasonable_nesting() {
    let source = format!("{{ f(a: {}1{}) }}", "[".repeat(40), "]".repeat(40));
    assert!(utils::parse_ok(&source).definitions.len() == 1);
    assert_eq!(GraphQLParserConfig::default().max_recursion_depth, 64);
}

/// Nesting past the configured limit fails instead of overflowing the
/// stack.
#[test]
fn recursion_limit_is_enforced() {
    let source = format!("{{ f(a: {}1{}) }}", "[".repeat(10), "]".repeat(10));
    // One level for the selection set, eleven for the values.
    assert!(utils::parse_with_depth(&source, 12).is_ok());

    let error = utils::parse_with_depth(&source, 11).expect_err("too deep");
    assert_eq!(error.kind(), &GraphQLParseErrorKind::RecursionLimitExceeded { limit: 11 });
    assert_eq!(error.message(), "maximum nesting depth of 11 exceeded");
}

/// Deeply nested selection sets and list types count against the limit
/// too.
#[test]
fn recursion_limit_covers_selections_and_types() {
    let selections = format!("{}{}", "{ a ".repeat(100), "}".repeat(100));
    let error = utils::parse_err(&selections);
    assert!(matches!(error.kind(), GraphQLParseErrorKind::RecursionLimitExceeded { .. }));

    let types = format!("query ($v: {}Int{}) {{ f }}", "[".repeat(100), "]".repeat(100));
    let error = utils::parse_err(&types);
    assert!(matches!(error.kind(), GraphQLParseErrorKind::RecursionLimitExceeded { .. }));
}

/// Pathologically deep input is rejected rather than crashing.
#[test]
fn very_deep_input_fails_gracefully() {
    let source = format!("{{ f(a: {}) }}", "[".repeat(100_000));
    let error = utils::parse_err(&source);
    assert!(matches!(error.kind(), GraphQLParseErrorKind::RecursionLimitExceeded { limit: 64 }));
}

/// Runs `parse` on a thread with a 2 MiB stack, the default for spawned
/// threads and test threads.
fn on_default_stack<T: Send + 'static>(parse: impl FnOnce() -> T + Send + 'static) -> T {
    std::thread::Builder::new()
        .stack_size(2 * 1024 * 1024)
        .spawn(parse)
        .expect("spawn parser thread")
        .join()
        .expect("parser thread panicked")
}

/// Selection sets nested exactly to the default limit parse without
/// exhausting an ordinary thread stack; one more level is rejected.
#[test]
fn nested_selections_at_the_limit() {
    let limit = GraphQLParserConfig::DEFAULT_MAX_RECURSION_DEPTH;
    let nested = |depth: usize| format!("{}{}", "{ a ".repeat(depth), "}".repeat(depth));

    let at_limit = nested(limit);
    assert!(on_default_stack(move || crate::parse(&at_limit)).is_ok());

    let past_limit = nested(limit + 1);
    let error = on_default_stack(move || crate::parse(&past_limit)).expect_err("too deep");
    assert_eq!(error.kind(), &GraphQLParseErrorKind::RecursionLimitExceeded { limit });
}

/// Values and type annotations nested to the default limit also parse on
/// an ordinary thread stack.
#[test]
fn nested_values_and_types_at_the_limit() {
    let limit = GraphQLParserConfig::DEFAULT_MAX_RECURSION_DEPTH;

    // The enclosing selection set and the innermost `1` take one level each.
    let value_lists = limit - 2;
    let values = format!("{{ f(a: {}1{}) }}", "[".repeat(value_lists), "]".repeat(value_lists));
    assert!(on_default_stack(move || crate::parse(&values)).is_ok());

    // The innermost named type takes one level.
    let type_lists = limit - 1;
    let types = format!("query ($v: {}Int{}) {{ f }}", "[".repeat(type_lists), "]".repeat(type_lists));
    assert!(on_default_stack(move || crate::parse(&types)).is_ok());
}

/// Parse errors are one pointer wide, keeping every `Result` on the
/// descent path small.
#[test]
fn parse_error_is_pointer_sized() {
    assert_eq!(
        std::mem::size_of::<crate::GraphQLParseError>(),
        std::mem::size_of::<usize>(),
    );
}

// =============================================================================
// Token sources
// =============================================================================

/// The parser runs over any token source, not only `&str` input.
#[test]
fn parses_from_mock_token_source() {
    let tokens = vec![
        utils::mock_token(GraphQLTokenKind::CurlyBraceOpen, 0),
        utils::mock_name_token("hello", 2),
        utils::mock_token(GraphQLTokenKind::CurlyBraceClose, 8),
        utils::mock_eof_token(9),
    ];
    let doc = GraphQLParser::from_token_source(utils::MockTokenSource::new(tokens))
        .parse_document()
        .expect("valid token stream");
    assert_eq!(doc, utils::parse_ok("{ hello }"));
}

/// A token source that stops without an EOF token is treated as ended.
#[test]
fn token_source_without_eof() {
    let tokens = vec![
        utils::mock_token(GraphQLTokenKind::CurlyBraceOpen, 0),
        utils::mock_name_token("hello", 2),
        utils::mock_token(GraphQLTokenKind::CurlyBraceClose, 8),
    ];
    let doc = GraphQLParser::from_token_source(utils::MockTokenSource::new(tokens))
        .parse_document()
        .expect("valid token stream");
    assert_eq!(doc.definitions.len(), 1);
}

/// Lex errors surface as parse errors wrapping the lexer's error.
#[test]
fn lex_errors_become_parse_errors() {
    let error = utils::parse_err("{ a ? }");
    let lex_error = error.kind().as_lex_error().expect("lexer error");
    assert_eq!(lex_error.span(), error.span());
    assert_eq!(error.message(), "unexpected character `?`");
    assert_eq!(error.span().start_inclusive.offset(), 4);
}

/// Lex error notes are carried over to the parse error.
#[test]
fn lex_error_notes_are_kept() {
    let error = utils::parse_err("{ ..a }");
    assert_eq!(error.notes().len(), 1);
    assert!(error.notes()[0].message.contains("spread operator"));
}

/// `parse()` is shorthand for a default-configured parser.
#[test]
fn parse_function_matches_parser() {
    let source = "query Q { a }";
    assert_eq!(crate::parse(source), GraphQLParser::new(source).parse_document());
}
