use crate::ast::AstNode;
use crate::ast::InputValueDefinition;
use crate::ast::Name;
use crate::ast::Node;
use crate::printer;
use inherent::inherent;

/// An input object type definition: `input Name { field: Type = default }`.
///
/// See
/// [Input Objects](https://spec.graphql.org/October2021/#sec-Input-Objects)
/// in the GraphQL language reference.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputObjectTypeDefinition {
    pub fields: Vec<InputValueDefinition>,
    pub name: Name,
}

#[inherent]
impl AstNode for InputObjectTypeDefinition {
    pub fn append_source(&self, sink: &mut String, indent: usize) {
        sink.push_str("input ");
        self.name.append_source(sink, indent);
        printer::append_spaced_block(sink, indent, &self.fields);
    }

    pub fn as_node(&self) -> Node<'_> {
        Node::InputObjectTypeDefinition(self)
    }
}
