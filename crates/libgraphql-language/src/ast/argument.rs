use crate::ast::AstNode;
use crate::ast::Name;
use crate::ast::Node;
use crate::ast::Value;
use inherent::inherent;

/// A `name: value` argument passed to a field or directive.
///
/// See
/// [Arguments](https://spec.graphql.org/October2021/#sec-Language.Arguments)
/// in the GraphQL language reference.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Argument {
    pub name: Name,
    pub value: Value,
}

#[inherent]
impl AstNode for Argument {
    pub fn append_source(&self, sink: &mut String, indent: usize) {
        self.name.append_source(sink, indent);
        sink.push_str(": ");
        self.value.append_source(sink, indent);
    }

    pub fn as_node(&self) -> Node<'_> {
        Node::Argument(self)
    }
}
