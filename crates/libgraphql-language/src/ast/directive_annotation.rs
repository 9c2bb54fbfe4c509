use crate::ast::Argument;
use crate::ast::AstNode;
use crate::ast::Name;
use crate::ast::Node;
use crate::printer;
use inherent::inherent;

/// A directive annotation applied to a definition or selection:
/// `@name(arg: value)`.
///
/// See
/// [Directives](https://spec.graphql.org/October2021/#sec-Language.Directives)
/// in the GraphQL language reference.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct DirectiveAnnotation {
    pub arguments: Vec<Argument>,
    pub name: Name,
}

#[inherent]
impl AstNode for DirectiveAnnotation {
    pub fn append_source(&self, sink: &mut String, indent: usize) {
        sink.push('@');
        self.name.append_source(sink, indent);
        printer::append_parenthesized(sink, indent, &self.arguments);
    }

    pub fn as_node(&self) -> Node<'_> {
        Node::DirectiveAnnotation(self)
    }
}
