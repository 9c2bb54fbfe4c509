//! Tests for [`crate::ast::Document`].

use crate::ast::Definition;
use crate::tests::utils;

const MIXED: &str = "\
    query A { a }\n\
    type T { f: Int }\n\
    fragment F on T { f }\n\
    extend type T { g: Int }\n\
    mutation B { b }\n\
    scalar S";

/// `executable_definitions` yields operations and fragments in source
/// order.
#[test]
fn executable_definitions_in_order() {
    let doc = utils::parse_ok(MIXED);
    let kinds: Vec<_> = doc
        .executable_definitions()
        .map(|def| match def {
            Definition::OperationDefinition(op) => format!("op {}", op.operation),
            Definition::FragmentDefinition(frag) => format!("fragment {}", frag.name.as_str()),
            other => panic!("unexpected definition: {other:?}"),
        })
        .collect();
    assert_eq!(kinds, vec!["op query", "fragment F", "op mutation"]);
}

/// `schema_definitions` yields type definitions and extensions.
#[test]
fn schema_definitions_in_order() {
    let doc = utils::parse_ok(MIXED);
    let defs: Vec<_> = doc.schema_definitions().collect();
    assert_eq!(defs.len(), 3);
    assert!(matches!(defs[0], Definition::TypeDefinition(_)));
    assert!(matches!(defs[1], Definition::TypeExtension(_)));
    assert!(matches!(defs[2], Definition::TypeDefinition(_)));
}

/// `operations` skips everything but operation definitions.
#[test]
fn operations_only() {
    let doc = utils::parse_ok(MIXED);
    let names: Vec<_> = doc
        .operations()
        .filter_map(|op| op.name.as_ref().map(|name| name.as_str()))
        .collect();
    assert_eq!(names, vec!["A", "B"]);
}

/// A schema-only document has no executable definitions.
#[test]
fn schema_only_document() {
    let doc = utils::parse_ok("scalar A scalar B");
    assert_eq!(doc.executable_definitions().count(), 0);
    assert_eq!(doc.schema_definitions().count(), 2);
}
