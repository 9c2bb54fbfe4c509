use crate::ast::AstNode;
use crate::ast::Node;
use crate::ast::ObjectField;
use crate::ast::Variable;
use crate::printer;
use inherent::inherent;

/// An input value.
///
/// Numeric literals keep their exact source text; converting them to
/// machine numbers is left to consumers. There is deliberately no null
/// value.
///
/// See
/// [Input Values](https://spec.graphql.org/October2021/#sec-Input-Values)
/// in the GraphQL language reference.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Value {
    Variable(Variable),
    Int(String),
    Float(String),
    /// The decoded string contents (quotes removed, escapes resolved).
    String(String),
    Boolean(bool),
    Enum(String),
    List(Vec<Value>),
    Object(Vec<ObjectField>),
}

impl Value {
    /// Returns `true` if no variable appears anywhere inside this value.
    pub fn is_const(&self) -> bool {
        match self {
            Self::Variable(_) => false,
            Self::List(values) => values.iter().all(Value::is_const),
            Self::Object(fields) => fields.iter().all(|field| field.value.is_const()),
            Self::Int(_)
            | Self::Float(_)
            | Self::String(_)
            | Self::Boolean(_)
            | Self::Enum(_) => true,
        }
    }
}

#[inherent]
impl AstNode for Value {
    pub fn append_source(&self, sink: &mut String, indent: usize) {
        match self {
            Self::Variable(variable) => variable.append_source(sink, indent),
            Self::Int(text) | Self::Float(text) | Self::Enum(text) => sink.push_str(text),
            Self::String(value) => printer::append_string_literal(sink, value),
            Self::Boolean(value) => sink.push_str(if *value { "true" } else { "false" }),
            Self::List(values) => {
                sink.push('[');
                printer::append_joined(sink, indent, values, ", ");
                sink.push(']');
            },
            Self::Object(fields) => {
                sink.push('{');
                printer::append_joined(sink, indent, fields, ", ");
                sink.push('}');
            },
        }
    }

    pub fn as_node(&self) -> Node<'_> {
        Node::Value(self)
    }
}
