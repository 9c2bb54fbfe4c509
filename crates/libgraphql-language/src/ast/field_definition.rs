use crate::ast::AstNode;
use crate::ast::InputValueDefinition;
use crate::ast::Name;
use crate::ast::Node;
use crate::ast::TypeAnnotation;
use crate::printer;
use inherent::inherent;

/// A field of an object or interface type: `name(arg: Type): Type`.
///
/// See
/// [Fields](https://spec.graphql.org/October2021/#FieldDefinition)
/// in the GraphQL language reference.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FieldDefinition {
    pub arguments: Vec<InputValueDefinition>,
    pub field_type: TypeAnnotation,
    pub name: Name,
}

#[inherent]
impl AstNode for FieldDefinition {
    pub fn append_source(&self, sink: &mut String, indent: usize) {
        self.name.append_source(sink, indent);
        printer::append_parenthesized(sink, indent, &self.arguments);
        sink.push_str(": ");
        self.field_type.append_source(sink, indent);
    }

    pub fn as_node(&self) -> Node<'_> {
        Node::FieldDefinition(self)
    }
}
