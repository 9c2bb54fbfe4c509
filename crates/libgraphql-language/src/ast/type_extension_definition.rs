use crate::ast::AstNode;
use crate::ast::Node;
use crate::ast::ObjectTypeDefinition;
use inherent::inherent;

/// An object type extension: `extend type Name { ... }`.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct TypeExtensionDefinition {
    pub definition: ObjectTypeDefinition,
}

#[inherent]
impl AstNode for TypeExtensionDefinition {
    pub fn append_source(&self, sink: &mut String, indent: usize) {
        sink.push_str("extend ");
        self.definition.append_source(sink, indent);
    }

    pub fn as_node(&self) -> Node<'_> {
        Node::TypeExtensionDefinition(self)
    }
}
