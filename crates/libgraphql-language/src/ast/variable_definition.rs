use crate::ast::AstNode;
use crate::ast::Node;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::ast::Variable;
use inherent::inherent;

/// A variable declared by an operation: `$name: Type = default`.
///
/// The default value, if any, is constant (contains no variables).
///
/// See
/// [Variables](https://spec.graphql.org/October2021/#VariableDefinition)
/// in the GraphQL language reference.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct VariableDefinition {
    pub default_value: Option<Value>,
    pub var_type: TypeAnnotation,
    pub variable: Variable,
}

#[inherent]
impl AstNode for VariableDefinition {
    pub fn append_source(&self, sink: &mut String, indent: usize) {
        self.variable.append_source(sink, indent);
        sink.push_str(": ");
        self.var_type.append_source(sink, indent);
        if let Some(default_value) = &self.default_value {
            sink.push_str(" = ");
            default_value.append_source(sink, indent);
        }
    }

    pub fn as_node(&self) -> Node<'_> {
        Node::VariableDefinition(self)
    }
}
