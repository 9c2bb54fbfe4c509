use crate::ast::AstNode;
use crate::ast::Name;
use crate::ast::Node;
use inherent::inherent;

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumValueDefinition {
    pub name: Name,
}

#[inherent]
impl AstNode for EnumValueDefinition {
    pub fn append_source(&self, sink: &mut String, indent: usize) {
        self.name.append_source(sink, indent);
    }

    pub fn as_node(&self) -> Node<'_> {
        Node::EnumValueDefinition(self)
    }
}
