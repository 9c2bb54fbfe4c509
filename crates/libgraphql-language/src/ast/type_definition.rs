use crate::ast::AstNode;
use crate::ast::EnumTypeDefinition;
use crate::ast::InputObjectTypeDefinition;
use crate::ast::InterfaceTypeDefinition;
use crate::ast::Name;
use crate::ast::Node;
use crate::ast::ObjectTypeDefinition;
use crate::ast::ScalarTypeDefinition;
use crate::ast::UnionTypeDefinition;
use inherent::inherent;

/// A type definition in a schema document.
///
/// See
/// [Types](https://spec.graphql.org/October2021/#sec-Types)
/// in the GraphQL language reference.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeDefinition {
    Enum(EnumTypeDefinition),
    InputObject(InputObjectTypeDefinition),
    Interface(InterfaceTypeDefinition),
    Object(ObjectTypeDefinition),
    Scalar(ScalarTypeDefinition),
    Union(UnionTypeDefinition),
}

impl TypeDefinition {
    /// Returns the name of the defined type.
    pub fn name(&self) -> &Name {
        match self {
            Self::Enum(def) => &def.name,
            Self::InputObject(def) => &def.name,
            Self::Interface(def) => &def.name,
            Self::Object(def) => &def.name,
            Self::Scalar(def) => &def.name,
            Self::Union(def) => &def.name,
        }
    }
}

#[inherent]
impl AstNode for TypeDefinition {
    pub fn append_source(&self, sink: &mut String, indent: usize) {
        match self {
            Self::Enum(def) => def.append_source(sink, indent),
            Self::InputObject(def) => def.append_source(sink, indent),
            Self::Interface(def) => def.append_source(sink, indent),
            Self::Object(def) => def.append_source(sink, indent),
            Self::Scalar(def) => def.append_source(sink, indent),
            Self::Union(def) => def.append_source(sink, indent),
        }
    }

    pub fn as_node(&self) -> Node<'_> {
        match self {
            Self::Enum(def) => def.as_node(),
            Self::InputObject(def) => def.as_node(),
            Self::Interface(def) => def.as_node(),
            Self::Object(def) => def.as_node(),
            Self::Scalar(def) => def.as_node(),
            Self::Union(def) => def.as_node(),
        }
    }
}
