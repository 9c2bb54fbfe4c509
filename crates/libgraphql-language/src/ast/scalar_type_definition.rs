use crate::ast::AstNode;
use crate::ast::Name;
use crate::ast::Node;
use inherent::inherent;

/// A custom scalar type definition: `scalar Name`.
///
/// See
/// [Scalars](https://spec.graphql.org/October2021/#sec-Scalars)
/// in the GraphQL language reference.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ScalarTypeDefinition {
    pub name: Name,
}

#[inherent]
impl AstNode for ScalarTypeDefinition {
    pub fn append_source(&self, sink: &mut String, indent: usize) {
        sink.push_str("scalar ");
        self.name.append_source(sink, indent);
    }

    pub fn as_node(&self) -> Node<'_> {
        Node::ScalarTypeDefinition(self)
    }
}
