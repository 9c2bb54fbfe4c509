use crate::ast::AstNode;
use crate::ast::EnumValueDefinition;
use crate::ast::Name;
use crate::ast::Node;
use crate::printer;
use inherent::inherent;

/// An enum type definition: `enum Name { A B }`.
///
/// See
/// [Enums](https://spec.graphql.org/October2021/#sec-Enums)
/// in the GraphQL language reference.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumTypeDefinition {
    pub name: Name,
    pub values: Vec<EnumValueDefinition>,
}

#[inherent]
impl AstNode for EnumTypeDefinition {
    pub fn append_source(&self, sink: &mut String, indent: usize) {
        sink.push_str("enum ");
        self.name.append_source(sink, indent);
        printer::append_spaced_block(sink, indent, &self.values);
    }

    pub fn as_node(&self) -> Node<'_> {
        Node::EnumTypeDefinition(self)
    }
}
