use crate::ast::Argument;
use crate::ast::AstNode;
use crate::ast::DirectiveAnnotation;
use crate::ast::Name;
use crate::ast::Node;
use crate::ast::SelectionSet;
use crate::printer;
use inherent::inherent;

/// A field selection within a selection set, optionally
/// aliased, with arguments, directives, and a nested
/// selection set.
///
/// See
/// [Fields](https://spec.graphql.org/October2021/#sec-Language.Fields)
/// in the GraphQL language reference.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Field {
    pub alias: Option<Name>,
    pub arguments: Vec<Argument>,
    pub directives: Vec<DirectiveAnnotation>,
    pub name: Name,
    pub selection_set: Option<SelectionSet>,
}

impl Field {
    /// The key this field's result is reported under: the alias if present,
    /// otherwise the field name.
    pub fn response_key(&self) -> &Name {
        self.alias.as_ref().unwrap_or(&self.name)
    }
}

#[inherent]
impl AstNode for Field {
    pub fn append_source(&self, sink: &mut String, indent: usize) {
        if let Some(alias) = &self.alias {
            alias.append_source(sink, indent);
            sink.push_str(": ");
        }
        self.name.append_source(sink, indent);
        printer::append_parenthesized(sink, indent, &self.arguments);
        printer::append_directives(sink, indent, &self.directives);
        if let Some(selection_set) = &self.selection_set {
            printer::append_spaced_block(sink, indent, &selection_set.selections);
        }
    }

    pub fn as_node(&self) -> Node<'_> {
        Node::Field(self)
    }
}
