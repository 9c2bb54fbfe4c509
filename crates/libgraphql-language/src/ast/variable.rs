use crate::ast::AstNode;
use crate::ast::Name;
use crate::ast::Node;
use inherent::inherent;

/// A variable reference: `$name`.
///
/// See
/// [Variables](https://spec.graphql.org/October2021/#sec-Language.Variables)
/// in the GraphQL language reference.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Variable {
    pub name: Name,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
        }
    }
}

#[inherent]
impl AstNode for Variable {
    pub fn append_source(&self, sink: &mut String, indent: usize) {
        sink.push('$');
        self.name.append_source(sink, indent);
    }

    pub fn as_node(&self) -> Node<'_> {
        Node::Variable(self)
    }
}
