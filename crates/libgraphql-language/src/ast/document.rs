use crate::ast::AstNode;
use crate::ast::Definition;
use crate::ast::Node;
use crate::ast::OperationDefinition;
use crate::printer;
use inherent::inherent;

/// Root node of a parsed GraphQL document.
///
/// A document produced by the parser always holds at least one definition.
///
/// See
/// [Document](https://spec.graphql.org/October2021/#sec-Document)
/// in the GraphQL language reference.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Document {
    pub definitions: Vec<Definition>,
}

impl Document {
    /// Iterates over only the operation and fragment definitions.
    pub fn executable_definitions(&self) -> impl Iterator<Item = &Definition> {
        self.definitions.iter().filter(|def| def.is_executable())
    }

    /// Iterates over only the type definitions and type extensions.
    pub fn schema_definitions(&self) -> impl Iterator<Item = &Definition> {
        self.definitions.iter().filter(|def| !def.is_executable())
    }

    /// Iterates over the operation definitions.
    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::OperationDefinition(op) => Some(op),
            _ => None,
        })
    }
}

#[inherent]
impl AstNode for Document {
    /// Definitions are separated by a blank line and the document ends with
    /// a newline.
    pub fn append_source(&self, sink: &mut String, indent: usize) {
        printer::append_joined(sink, indent, &self.definitions, "\n\n");
        sink.push('\n');
    }

    pub fn as_node(&self) -> Node<'_> {
        Node::Document(self)
    }
}
