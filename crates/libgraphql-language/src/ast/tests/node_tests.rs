//! Tests for [`crate::ast::Node`] and [`crate::ast::NodeKind`].

use crate::ast::Definition;
use crate::ast::Node;
use crate::ast::NodeKind;
use crate::ast::Selection;
use crate::tests::utils;

/// Wrapper enums hand out the view of the node they wrap.
#[test]
fn wrappers_are_transparent() {
    let doc = utils::parse_ok("{ ...F ... on T { a } } scalar S extend type T { a: Int }");
    let kinds: Vec<_> = doc.definitions.iter().map(|def| def.as_node().kind()).collect();
    assert_eq!(
        kinds,
        vec![
            NodeKind::OperationDefinition,
            NodeKind::ScalarTypeDefinition,
            NodeKind::TypeExtensionDefinition,
        ],
    );

    let selections = &utils::first_selection_set(&doc).selections;
    assert_eq!(selections[0].as_node().kind(), NodeKind::FragmentSpread);
    assert_eq!(selections[1].as_node().kind(), NodeKind::InlineFragment);
    assert!(matches!(
        (&selections[0], selections[0].as_node()),
        (Selection::FragmentSpread(spread), Node::FragmentSpread(viewed))
            if std::ptr::eq(spread, viewed)
    ));
}

/// Views compare by the node they point at.
#[test]
fn views_compare_structurally() {
    let first = utils::parse_ok("scalar S");
    let second = utils::parse_ok("scalar S");
    let (Definition::TypeDefinition(a), Definition::TypeDefinition(b)) =
        (&first.definitions[0], &second.definitions[0])
    else {
        panic!("expected type definitions");
    };
    assert_eq!(a.as_node(), b.as_node());
    assert_eq!(a.as_node().to_source(), "scalar S");
}
