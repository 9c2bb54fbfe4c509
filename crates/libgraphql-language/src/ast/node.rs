use crate::ast::Argument;
use crate::ast::AstNode;
use crate::ast::DirectiveAnnotation;
use crate::ast::Document;
use crate::ast::EnumTypeDefinition;
use crate::ast::EnumValueDefinition;
use crate::ast::Field;
use crate::ast::FieldDefinition;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::InputObjectTypeDefinition;
use crate::ast::InputValueDefinition;
use crate::ast::InterfaceTypeDefinition;
use crate::ast::Name;
use crate::ast::ObjectField;
use crate::ast::ObjectTypeDefinition;
use crate::ast::OperationDefinition;
use crate::ast::ScalarTypeDefinition;
use crate::ast::SelectionSet;
use crate::ast::TypeAnnotation;
use crate::ast::TypeExtensionDefinition;
use crate::ast::UnionTypeDefinition;
use crate::ast::Value;
use crate::ast::Variable;
use crate::ast::VariableDefinition;

/// A borrowed view of any concrete AST node.
///
/// This is what traversal callbacks receive. The set of variants is closed,
/// so consumers can `match` exhaustively.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Node<'a> {
    Argument(&'a Argument),
    DirectiveAnnotation(&'a DirectiveAnnotation),
    Document(&'a Document),
    EnumTypeDefinition(&'a EnumTypeDefinition),
    EnumValueDefinition(&'a EnumValueDefinition),
    Field(&'a Field),
    FieldDefinition(&'a FieldDefinition),
    FragmentDefinition(&'a FragmentDefinition),
    FragmentSpread(&'a FragmentSpread),
    InlineFragment(&'a InlineFragment),
    InputObjectTypeDefinition(&'a InputObjectTypeDefinition),
    InputValueDefinition(&'a InputValueDefinition),
    InterfaceTypeDefinition(&'a InterfaceTypeDefinition),
    Name(&'a Name),
    ObjectField(&'a ObjectField),
    ObjectTypeDefinition(&'a ObjectTypeDefinition),
    OperationDefinition(&'a OperationDefinition),
    ScalarTypeDefinition(&'a ScalarTypeDefinition),
    SelectionSet(&'a SelectionSet),
    TypeAnnotation(&'a TypeAnnotation),
    TypeExtensionDefinition(&'a TypeExtensionDefinition),
    UnionTypeDefinition(&'a UnionTypeDefinition),
    Value(&'a Value),
    Variable(&'a Variable),
    VariableDefinition(&'a VariableDefinition),
}

/// The kind of a [`Node`], without the borrowed data.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NodeKind {
    Argument,
    DirectiveAnnotation,
    Document,
    EnumTypeDefinition,
    EnumValueDefinition,
    Field,
    FieldDefinition,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    InputObjectTypeDefinition,
    InputValueDefinition,
    InterfaceTypeDefinition,
    Name,
    ObjectField,
    ObjectTypeDefinition,
    OperationDefinition,
    ScalarTypeDefinition,
    SelectionSet,
    TypeAnnotation,
    TypeExtensionDefinition,
    UnionTypeDefinition,
    Value,
    Variable,
    VariableDefinition,
}

impl Node<'_> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Argument(_) => NodeKind::Argument,
            Self::DirectiveAnnotation(_) => NodeKind::DirectiveAnnotation,
            Self::Document(_) => NodeKind::Document,
            Self::EnumTypeDefinition(_) => NodeKind::EnumTypeDefinition,
            Self::EnumValueDefinition(_) => NodeKind::EnumValueDefinition,
            Self::Field(_) => NodeKind::Field,
            Self::FieldDefinition(_) => NodeKind::FieldDefinition,
            Self::FragmentDefinition(_) => NodeKind::FragmentDefinition,
            Self::FragmentSpread(_) => NodeKind::FragmentSpread,
            Self::InlineFragment(_) => NodeKind::InlineFragment,
            Self::InputObjectTypeDefinition(_) => NodeKind::InputObjectTypeDefinition,
            Self::InputValueDefinition(_) => NodeKind::InputValueDefinition,
            Self::InterfaceTypeDefinition(_) => NodeKind::InterfaceTypeDefinition,
            Self::Name(_) => NodeKind::Name,
            Self::ObjectField(_) => NodeKind::ObjectField,
            Self::ObjectTypeDefinition(_) => NodeKind::ObjectTypeDefinition,
            Self::OperationDefinition(_) => NodeKind::OperationDefinition,
            Self::ScalarTypeDefinition(_) => NodeKind::ScalarTypeDefinition,
            Self::SelectionSet(_) => NodeKind::SelectionSet,
            Self::TypeAnnotation(_) => NodeKind::TypeAnnotation,
            Self::TypeExtensionDefinition(_) => NodeKind::TypeExtensionDefinition,
            Self::UnionTypeDefinition(_) => NodeKind::UnionTypeDefinition,
            Self::Value(_) => NodeKind::Value,
            Self::Variable(_) => NodeKind::Variable,
            Self::VariableDefinition(_) => NodeKind::VariableDefinition,
        }
    }

    /// Canonical source text of the viewed node.
    pub fn to_source(&self) -> String {
        match self {
            Self::Argument(node) => node.to_source(),
            Self::DirectiveAnnotation(node) => node.to_source(),
            Self::Document(node) => node.to_source(),
            Self::EnumTypeDefinition(node) => node.to_source(),
            Self::EnumValueDefinition(node) => node.to_source(),
            Self::Field(node) => node.to_source(),
            Self::FieldDefinition(node) => node.to_source(),
            Self::FragmentDefinition(node) => node.to_source(),
            Self::FragmentSpread(node) => node.to_source(),
            Self::InlineFragment(node) => node.to_source(),
            Self::InputObjectTypeDefinition(node) => node.to_source(),
            Self::InputValueDefinition(node) => node.to_source(),
            Self::InterfaceTypeDefinition(node) => node.to_source(),
            Self::Name(node) => node.to_source(),
            Self::ObjectField(node) => node.to_source(),
            Self::ObjectTypeDefinition(node) => node.to_source(),
            Self::OperationDefinition(node) => node.to_source(),
            Self::ScalarTypeDefinition(node) => node.to_source(),
            Self::SelectionSet(node) => node.to_source(),
            Self::TypeAnnotation(node) => node.to_source(),
            Self::TypeExtensionDefinition(node) => node.to_source(),
            Self::UnionTypeDefinition(node) => node.to_source(),
            Self::Value(node) => node.to_source(),
            Self::Variable(node) => node.to_source(),
            Self::VariableDefinition(node) => node.to_source(),
        }
    }
}
