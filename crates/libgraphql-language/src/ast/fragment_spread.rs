use crate::ast::AstNode;
use crate::ast::DirectiveAnnotation;
use crate::ast::Name;
use crate::ast::Node;
use crate::printer;
use inherent::inherent;

/// A named fragment spread: `...FragmentName @dir`.
///
/// The fragment name is never `on`.
///
/// See
/// [Fragments](https://spec.graphql.org/October2021/#sec-Language.Fragments)
/// in the GraphQL language reference.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FragmentSpread {
    pub directives: Vec<DirectiveAnnotation>,
    pub name: Name,
}

#[inherent]
impl AstNode for FragmentSpread {
    pub fn append_source(&self, sink: &mut String, indent: usize) {
        sink.push_str("...");
        self.name.append_source(sink, indent);
        printer::append_directives(sink, indent, &self.directives);
    }

    pub fn as_node(&self) -> Node<'_> {
        Node::FragmentSpread(self)
    }
}
