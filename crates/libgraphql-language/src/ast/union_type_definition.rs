use crate::ast::AstNode;
use crate::ast::Name;
use crate::ast::Node;
use crate::printer;
use inherent::inherent;

/// A union type definition: `union Name = A | B`.
///
/// See
/// [Unions](https://spec.graphql.org/October2021/#sec-Unions)
/// in the GraphQL language reference.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UnionTypeDefinition {
    pub name: Name,
    pub types: Vec<Name>,
}

#[inherent]
impl AstNode for UnionTypeDefinition {
    pub fn append_source(&self, sink: &mut String, indent: usize) {
        sink.push_str("union ");
        self.name.append_source(sink, indent);
        if !self.types.is_empty() {
            sink.push_str(" = ");
            printer::append_joined(sink, indent, &self.types, " | ");
        }
    }

    pub fn as_node(&self) -> Node<'_> {
        Node::UnionTypeDefinition(self)
    }
}
