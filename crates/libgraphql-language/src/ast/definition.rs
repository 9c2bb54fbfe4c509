use crate::ast::AstNode;
use crate::ast::FragmentDefinition;
use crate::ast::Node;
use crate::ast::OperationDefinition;
use crate::ast::TypeDefinition;
use crate::ast::TypeExtensionDefinition;
use inherent::inherent;

/// A top-level definition in a document.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Definition {
    FragmentDefinition(FragmentDefinition),
    OperationDefinition(OperationDefinition),
    TypeDefinition(TypeDefinition),
    TypeExtension(TypeExtensionDefinition),
}

impl Definition {
    /// Returns `true` for operations and fragments.
    pub fn is_executable(&self) -> bool {
        matches!(self, Self::FragmentDefinition(_) | Self::OperationDefinition(_))
    }
}

#[inherent]
impl AstNode for Definition {
    pub fn append_source(&self, sink: &mut String, indent: usize) {
        match self {
            Self::FragmentDefinition(def) => def.append_source(sink, indent),
            Self::OperationDefinition(def) => def.append_source(sink, indent),
            Self::TypeDefinition(def) => def.append_source(sink, indent),
            Self::TypeExtension(def) => def.append_source(sink, indent),
        }
    }

    pub fn as_node(&self) -> Node<'_> {
        match self {
            Self::FragmentDefinition(def) => def.as_node(),
            Self::OperationDefinition(def) => def.as_node(),
            Self::TypeDefinition(def) => def.as_node(),
            Self::TypeExtension(def) => def.as_node(),
        }
    }
}
