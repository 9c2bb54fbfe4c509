use crate::ast::AstNode;
use crate::ast::Name;
use crate::ast::Node;
use crate::ast::Value;
use inherent::inherent;

/// A single `name: value` entry of an object value.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ObjectField {
    pub name: Name,
    pub value: Value,
}

#[inherent]
impl AstNode for ObjectField {
    pub fn append_source(&self, sink: &mut String, indent: usize) {
        self.name.append_source(sink, indent);
        sink.push_str(": ");
        self.value.append_source(sink, indent);
    }

    pub fn as_node(&self) -> Node<'_> {
        Node::ObjectField(self)
    }
}
