//! Tests for [`crate::ast::Definition`], [`crate::ast::TypeDefinition`], and
//! [`crate::ast::OperationType`].

use crate::Keyword;
use crate::ast::Definition;
use crate::ast::OperationType;
use crate::tests::utils;

/// Only operations and fragments are executable.
#[test]
fn is_executable() {
    let doc = utils::parse_ok(
        "{ a } fragment F on T { a } type T { a: Int } extend type T { b: Int }",
    );
    let executable: Vec<_> = doc.definitions.iter().map(Definition::is_executable).collect();
    assert_eq!(executable, vec![true, true, false, false]);
}

/// `TypeDefinition::name` reports the defined type's name for every kind.
#[test]
fn type_definition_names() {
    let doc = utils::parse_ok(
        "type O { f: Int } interface I { f: Int } union U = O scalar S \
         enum E { A } input In { f: Int }",
    );
    let names: Vec<_> = doc
        .definitions
        .iter()
        .map(|def| match def {
            Definition::TypeDefinition(type_def) => type_def.name().as_str(),
            other => panic!("unexpected definition: {other:?}"),
        })
        .collect();
    assert_eq!(names, vec!["O", "I", "U", "S", "E", "In"]);
}

/// Operation types display as their keyword.
#[test]
fn operation_type_display() {
    assert_eq!(OperationType::Query.to_string(), "query");
    assert_eq!(OperationType::Mutation.to_string(), "mutation");
    assert_eq!(OperationType::Subscription.as_str(), "subscription");
}

/// Only the three operation keywords map to operation types.
#[test]
fn operation_type_from_keyword() {
    assert_eq!(OperationType::from_keyword(Keyword::Query), Some(OperationType::Query));
    assert_eq!(OperationType::from_keyword(Keyword::Mutation), Some(OperationType::Mutation));
    assert_eq!(
        OperationType::from_keyword(Keyword::Subscription),
        Some(OperationType::Subscription),
    );
    assert_eq!(OperationType::from_keyword(Keyword::Fragment), None);
    assert_eq!(OperationType::from_keyword(Keyword::Type), None);
}
