use crate::ast::AstNode;
use crate::ast::DirectiveAnnotation;
use crate::ast::Name;
use crate::ast::Node;
use crate::ast::SelectionSet;
use crate::printer;
use inherent::inherent;

/// A named fragment definition:
/// `fragment Name on Type @dir { ... }`.
///
/// See
/// [Fragments](https://spec.graphql.org/October2021/#sec-Language.Fragments)
/// in the GraphQL language reference.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FragmentDefinition {
    pub directives: Vec<DirectiveAnnotation>,
    pub name: Name,
    pub selection_set: SelectionSet,
    pub type_condition: Name,
}

#[inherent]
impl AstNode for FragmentDefinition {
    pub fn append_source(&self, sink: &mut String, indent: usize) {
        sink.push_str("fragment ");
        self.name.append_source(sink, indent);
        sink.push_str(" on ");
        self.type_condition.append_source(sink, indent);
        printer::append_directives(sink, indent, &self.directives);
        printer::append_spaced_block(sink, indent, &self.selection_set.selections);
    }

    pub fn as_node(&self) -> Node<'_> {
        Node::FragmentDefinition(self)
    }
}
