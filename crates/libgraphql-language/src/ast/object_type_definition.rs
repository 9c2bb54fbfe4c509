use crate::ast::AstNode;
use crate::ast::FieldDefinition;
use crate::ast::Name;
use crate::ast::Node;
use crate::printer;
use inherent::inherent;

/// An object type definition:
/// `type Name implements A, B { field: Type }`.
///
/// See
/// [Objects](https://spec.graphql.org/October2021/#sec-Objects)
/// in the GraphQL language reference.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectTypeDefinition {
    pub fields: Vec<FieldDefinition>,
    pub interfaces: Vec<Name>,
    pub name: Name,
}

#[inherent]
impl AstNode for ObjectTypeDefinition {
    pub fn append_source(&self, sink: &mut String, indent: usize) {
        sink.push_str("type ");
        self.name.append_source(sink, indent);
        if !self.interfaces.is_empty() {
            sink.push_str(" implements ");
            printer::append_joined(sink, indent, &self.interfaces, ", ");
        }
        printer::append_spaced_block(sink, indent, &self.fields);
    }

    pub fn as_node(&self) -> Node<'_> {
        Node::ObjectTypeDefinition(self)
    }
}
