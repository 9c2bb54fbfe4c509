use crate::ast::AstNode;
use crate::ast::FieldDefinition;
use crate::ast::Name;
use crate::ast::Node;
use crate::printer;
use inherent::inherent;

/// An interface type definition: `interface Name { field: Type }`.
///
/// See
/// [Interfaces](https://spec.graphql.org/October2021/#sec-Interfaces)
/// in the GraphQL language reference.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InterfaceTypeDefinition {
    pub fields: Vec<FieldDefinition>,
    pub name: Name,
}

#[inherent]
impl AstNode for InterfaceTypeDefinition {
    pub fn append_source(&self, sink: &mut String, indent: usize) {
        sink.push_str("interface ");
        self.name.append_source(sink, indent);
        printer::append_spaced_block(sink, indent, &self.fields);
    }

    pub fn as_node(&self) -> Node<'_> {
        Node::InterfaceTypeDefinition(self)
    }
}
