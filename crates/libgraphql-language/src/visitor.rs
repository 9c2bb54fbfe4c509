//! Depth-first traversal over AST nodes.
//!
//! [`visit`] walks a tree in pre-order, invoking an enter callback before a
//! node's children and a leave callback after them. Children are visited in
//! source order. Wrapper enums ([`Definition`](crate::ast::Definition),
//! [`Selection`](crate::ast::Selection),
//! [`TypeDefinition`](crate::ast::TypeDefinition)) are transparent: only the
//! concrete node they wrap is reported.

use crate::ast::AstNode;
use crate::ast::Node;
use crate::ast::TypeAnnotation;
use crate::ast::Value;

/// Walks `root` and every node below it.
///
/// Every node is entered exactly once and left exactly once, and all
/// enter/leave calls for a node's descendants happen between that node's
/// own enter and leave.
///
/// # Example
///
/// ```rust
/// use libgraphql_language::ast::NodeKind;
///
/// let doc = libgraphql_language::parse("{ a b }").unwrap();
/// let mut field_count = 0;
/// libgraphql_language::visit(
///     &doc,
///     |node| if node.kind() == NodeKind::Field { field_count += 1 },
///     |_| {},
/// );
/// assert_eq!(field_count, 2);
/// ```
pub fn visit<'a, TNode: AstNode + ?Sized>(
    root: &'a TNode,
    mut on_enter: impl FnMut(Node<'a>),
    mut on_leave: impl FnMut(Node<'a>),
) {
    walk(root.as_node(), &mut on_enter, &mut on_leave);
}

fn walk<'a>(
    node: Node<'a>,
    on_enter: &mut dyn FnMut(Node<'a>),
    on_leave: &mut dyn FnMut(Node<'a>),
) {
    on_enter(node);
    for_each_child(node, &mut |child| walk(child, on_enter, on_leave));
    on_leave(node);
}

/// Calls `f` with each direct child of `node`, in source order.
fn for_each_child<'a>(node: Node<'a>, f: &mut dyn FnMut(Node<'a>)) {
    fn each<'a, TNode: AstNode + 'a>(
        items: impl IntoIterator<Item = &'a TNode>,
        f: &mut dyn FnMut(Node<'a>),
    ) {
        for item in items {
            f(item.as_node());
        }
    }

    match node {
        Node::Argument(arg) => {
            f(arg.name.as_node());
            f(arg.value.as_node());
        },
        Node::DirectiveAnnotation(directive) => {
            f(directive.name.as_node());
            each(&directive.arguments, f);
        },
        Node::Document(doc) => each(&doc.definitions, f),
        Node::EnumTypeDefinition(def) => {
            f(def.name.as_node());
            each(&def.values, f);
        },
        Node::EnumValueDefinition(def) => f(def.name.as_node()),
        Node::Field(field) => {
            each(&field.alias, f);
            f(field.name.as_node());
            each(&field.arguments, f);
            each(&field.directives, f);
            each(&field.selection_set, f);
        },
        Node::FieldDefinition(def) => {
            f(def.name.as_node());
            each(&def.arguments, f);
            f(def.field_type.as_node());
        },
        Node::FragmentDefinition(def) => {
            f(def.name.as_node());
            f(def.type_condition.as_node());
            each(&def.directives, f);
            f(def.selection_set.as_node());
        },
        Node::FragmentSpread(spread) => {
            f(spread.name.as_node());
            each(&spread.directives, f);
        },
        Node::InlineFragment(fragment) => {
            each(&fragment.type_condition, f);
            each(&fragment.directives, f);
            f(fragment.selection_set.as_node());
        },
        Node::InputObjectTypeDefinition(def) => {
            f(def.name.as_node());
            each(&def.fields, f);
        },
        Node::InputValueDefinition(def) => {
            f(def.name.as_node());
            f(def.value_type.as_node());
            each(&def.default_value, f);
        },
        Node::InterfaceTypeDefinition(def) => {
            f(def.name.as_node());
            each(&def.fields, f);
        },
        Node::Name(_) => {},
        Node::ObjectField(field) => {
            f(field.name.as_node());
            f(field.value.as_node());
        },
        Node::ObjectTypeDefinition(def) => {
            f(def.name.as_node());
            each(&def.interfaces, f);
            each(&def.fields, f);
        },
        Node::OperationDefinition(op) => {
            each(&op.name, f);
            each(&op.variable_definitions, f);
            each(&op.directives, f);
            f(op.selection_set.as_node());
        },
        Node::ScalarTypeDefinition(def) => f(def.name.as_node()),
        Node::SelectionSet(selection_set) => each(&selection_set.selections, f),
        Node::TypeAnnotation(type_annotation) => match type_annotation {
            TypeAnnotation::Named(name) => f(name.as_node()),
            TypeAnnotation::List(inner) | TypeAnnotation::NonNull(inner) => {
                f(inner.as_node())
            },
        },
        Node::TypeExtensionDefinition(ext) => f(ext.definition.as_node()),
        Node::UnionTypeDefinition(def) => {
            f(def.name.as_node());
            each(&def.types, f);
        },
        Node::Value(value) => match value {
            Value::Variable(variable) => f(variable.as_node()),
            Value::List(values) => each(values, f),
            Value::Object(fields) => each(fields, f),
            Value::Int(_)
            | Value::Float(_)
            | Value::String(_)
            | Value::Boolean(_)
            | Value::Enum(_) => {},
        },
        Node::Variable(variable) => f(variable.name.as_node()),
        Node::VariableDefinition(def) => {
            f(def.variable.as_node());
            f(def.var_type.as_node());
            each(&def.default_value, f);
        },
    }
}
