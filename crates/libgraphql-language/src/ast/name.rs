use crate::ast::AstNode;
use crate::ast::Node;
use inherent::inherent;

/// A GraphQL identifier.
///
/// See
/// [Names](https://spec.graphql.org/October2021/#sec-Names)
/// in the GraphQL language reference.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Name {
    pub value: String,
}

impl Name {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[inherent]
impl AstNode for Name {
    pub fn append_source(&self, sink: &mut String, _indent: usize) {
        sink.push_str(&self.value);
    }

    pub fn as_node(&self) -> Node<'_> {
        Node::Name(self)
    }
}
