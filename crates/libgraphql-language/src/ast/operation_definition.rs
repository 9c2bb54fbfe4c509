use crate::ast::AstNode;
use crate::ast::DirectiveAnnotation;
use crate::ast::Name;
use crate::ast::Node;
use crate::ast::OperationType;
use crate::ast::SelectionSet;
use crate::ast::VariableDefinition;
use crate::printer;
use inherent::inherent;

/// An operation: `query Name($var: Type) @dir { ... }`, or the bare
/// `{ ... }` shorthand for an anonymous query.
///
/// See
/// [Operations](https://spec.graphql.org/October2021/#sec-Language.Operations)
/// in the GraphQL language reference.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct OperationDefinition {
    pub directives: Vec<DirectiveAnnotation>,
    pub name: Option<Name>,
    pub operation: OperationType,
    pub selection_set: SelectionSet,
    pub variable_definitions: Vec<VariableDefinition>,
}

impl OperationDefinition {
    /// Returns `true` if this operation prints as a bare selection set: an
    /// unnamed query without variables or directives.
    pub fn is_query_shorthand(&self) -> bool {
        self.operation == OperationType::Query
            && self.name.is_none()
            && self.variable_definitions.is_empty()
            && self.directives.is_empty()
    }
}

#[inherent]
impl AstNode for OperationDefinition {
    pub fn append_source(&self, sink: &mut String, indent: usize) {
        if self.is_query_shorthand() {
            self.selection_set.append_source(sink, indent);
            return;
        }

        sink.push_str(self.operation.as_str());
        match &self.name {
            Some(name) => {
                sink.push(' ');
                name.append_source(sink, indent);
            },
            None if !self.variable_definitions.is_empty() => sink.push(' '),
            None => (),
        }
        printer::append_parenthesized(sink, indent, &self.variable_definitions);
        printer::append_directives(sink, indent, &self.directives);
        printer::append_spaced_block(sink, indent, &self.selection_set.selections);
    }

    pub fn as_node(&self) -> Node<'_> {
        Node::OperationDefinition(self)
    }
}
