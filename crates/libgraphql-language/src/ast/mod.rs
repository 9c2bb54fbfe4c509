//! AST types for representing parsed GraphQL documents.
//!
//! Nodes own their data (names and literals are `String`s), are immutable
//! once built, and compare structurally: two trees are equal when their
//! shapes and contents are equal, regardless of where in some source text
//! they came from. Nodes carry no source positions.
//!
//! Every node implements [`AstNode`], which provides canonical printing
//! ([`AstNode::append_source`]) and a borrowed [`Node`] view for
//! [traversal](crate::visit).
//!
//! # Example
//!
//! ```rust
//! use libgraphql_language::ast::Definition;
//!
//! let doc = libgraphql_language::parse("type Query { hello: String }").unwrap();
//! assert!(matches!(doc.definitions[0], Definition::TypeDefinition(_)));
//! ```

mod argument;
mod ast_node;
mod definition;
mod directive_annotation;
mod document;
mod enum_type_definition;
mod enum_value_definition;
mod field;
mod field_definition;
mod fragment_definition;
mod fragment_spread;
mod inline_fragment;
mod input_object_type_definition;
mod input_value_definition;
mod interface_type_definition;
mod name;
mod node;
mod object_field;
mod object_type_definition;
mod operation_definition;
mod operation_type;
mod scalar_type_definition;
mod selection;
mod selection_set;
mod type_annotation;
mod type_definition;
mod type_extension_definition;
mod union_type_definition;
mod value;
mod variable;
mod variable_definition;

pub use argument::Argument;
pub use ast_node::AstNode;
pub use definition::Definition;
pub use directive_annotation::DirectiveAnnotation;
pub use document::Document;
pub use enum_type_definition::EnumTypeDefinition;
pub use enum_value_definition::EnumValueDefinition;
pub use field::Field;
pub use field_definition::FieldDefinition;
pub use fragment_definition::FragmentDefinition;
pub use fragment_spread::FragmentSpread;
pub use inline_fragment::InlineFragment;
pub use input_object_type_definition::InputObjectTypeDefinition;
pub use input_value_definition::InputValueDefinition;
pub use interface_type_definition::InterfaceTypeDefinition;
pub use name::Name;
pub use node::Node;
pub use node::NodeKind;
pub use object_field::ObjectField;
pub use object_type_definition::ObjectTypeDefinition;
pub use operation_definition::OperationDefinition;
pub use operation_type::OperationType;
pub use scalar_type_definition::ScalarTypeDefinition;
pub use selection::Selection;
pub use selection_set::SelectionSet;
pub use type_annotation::TypeAnnotation;
pub use type_definition::TypeDefinition;
pub use type_extension_definition::TypeExtensionDefinition;
pub use union_type_definition::UnionTypeDefinition;
pub use value::Value;
pub use variable::Variable;
pub use variable_definition::VariableDefinition;

#[cfg(test)]
mod tests;
