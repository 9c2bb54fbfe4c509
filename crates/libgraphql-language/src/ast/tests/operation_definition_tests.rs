//! Tests for [`crate::ast::OperationDefinition`].

use crate::ast::Definition;
use crate::ast::OperationDefinition;
use crate::tests::utils;

fn only_operation(source: &str) -> OperationDefinition {
    match utils::parse_ok(source).definitions.into_iter().next() {
        Some(Definition::OperationDefinition(op)) => op,
        other => panic!("expected an operation, got {other:?}"),
    }
}

/// Bare selection sets and plain anonymous queries are shorthand.
#[test]
fn shorthand_queries() {
    assert!(only_operation("{ a }").is_query_shorthand());
    assert!(only_operation("query { a }").is_query_shorthand());
}

/// A name, variables, directives, or a non-query type rule out shorthand.
#[test]
fn non_shorthand_operations() {
    assert!(!only_operation("query Q { a }").is_query_shorthand());
    assert!(!only_operation("query ($v: Int) { a }").is_query_shorthand());
    assert!(!only_operation("query @d { a }").is_query_shorthand());
    assert!(!only_operation("mutation { a }").is_query_shorthand());
}
