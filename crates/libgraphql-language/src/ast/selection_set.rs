use crate::ast::AstNode;
use crate::ast::Node;
use crate::ast::Selection;
use crate::printer;
use inherent::inherent;

/// A `{ ... }` block of selections. Parsed selection sets are never empty.
///
/// See
/// [Selection Sets](https://spec.graphql.org/October2021/#sec-Selection-Sets)
/// in the GraphQL language reference.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SelectionSet {
    pub selections: Vec<Selection>,
}

#[inherent]
impl AstNode for SelectionSet {
    pub fn append_source(&self, sink: &mut String, indent: usize) {
        printer::append_block(sink, indent, &self.selections);
    }

    pub fn as_node(&self) -> Node<'_> {
        Node::SelectionSet(self)
    }
}
