use crate::ast::AstNode;
use crate::ast::Name;
use crate::ast::Node;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use inherent::inherent;

/// An argument definition or an input object field:
/// `name: Type = default`.
///
/// See
/// [Field Arguments](https://spec.graphql.org/October2021/#InputValueDefinition)
/// in the GraphQL language reference.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputValueDefinition {
    pub default_value: Option<Value>,
    pub name: Name,
    pub value_type: TypeAnnotation,
}

#[inherent]
impl AstNode for InputValueDefinition {
    pub fn append_source(&self, sink: &mut String, indent: usize) {
        self.name.append_source(sink, indent);
        sink.push_str(": ");
        self.value_type.append_source(sink, indent);
        if let Some(default_value) = &self.default_value {
            sink.push_str(" = ");
            default_value.append_source(sink, indent);
        }
    }

    pub fn as_node(&self) -> Node<'_> {
        Node::InputValueDefinition(self)
    }
}
