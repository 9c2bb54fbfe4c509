use crate::ast::AstNode;
use crate::ast::DirectiveAnnotation;
use crate::ast::Name;
use crate::ast::Node;
use crate::ast::SelectionSet;
use crate::printer;
use inherent::inherent;

/// An inline fragment: `... on Type @dir { ... }`, with the type condition
/// optional.
///
/// See
/// [Inline Fragments](https://spec.graphql.org/October2021/#sec-Inline-Fragments)
/// in the GraphQL language reference.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InlineFragment {
    pub directives: Vec<DirectiveAnnotation>,
    pub selection_set: SelectionSet,
    pub type_condition: Option<Name>,
}

#[inherent]
impl AstNode for InlineFragment {
    pub fn append_source(&self, sink: &mut String, indent: usize) {
        sink.push_str("...");
        if let Some(type_condition) = &self.type_condition {
            sink.push_str(" on ");
            type_condition.append_source(sink, indent);
        }
        printer::append_directives(sink, indent, &self.directives);
        printer::append_spaced_block(sink, indent, &self.selection_set.selections);
    }

    pub fn as_node(&self) -> Node<'_> {
        Node::InlineFragment(self)
    }
}
