use crate::ast::AstNode;
use crate::ast::Name;
use crate::ast::Node;
use inherent::inherent;

/// A type reference, as used by variable, field, and argument definitions.
///
/// The parser consumes at most one `!` per type position, so it never
/// produces a `NonNull` directly wrapping another `NonNull`.
///
/// See
/// [Type References](https://spec.graphql.org/October2021/#sec-Type-References)
/// in the GraphQL language reference.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeAnnotation {
    Named(Name),
    List(Box<TypeAnnotation>),
    NonNull(Box<TypeAnnotation>),
}

impl TypeAnnotation {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(Name::new(name))
    }

    pub fn list(inner: TypeAnnotation) -> Self {
        Self::List(Box::new(inner))
    }

    pub fn non_null(inner: TypeAnnotation) -> Self {
        Self::NonNull(Box::new(inner))
    }

    /// The named type at the core of any list/non-null wrapping.
    pub fn innermost_name(&self) -> &Name {
        match self {
            Self::Named(name) => name,
            Self::List(inner) | Self::NonNull(inner) => inner.innermost_name(),
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }
}

#[inherent]
impl AstNode for TypeAnnotation {
    pub fn append_source(&self, sink: &mut String, indent: usize) {
        match self {
            Self::Named(name) => name.append_source(sink, indent),
            Self::List(inner) => {
                sink.push('[');
                inner.append_source(sink, indent);
                sink.push(']');
            },
            Self::NonNull(inner) => {
                inner.append_source(sink, indent);
                sink.push('!');
            },
        }
    }

    pub fn as_node(&self) -> Node<'_> {
        Node::TypeAnnotation(self)
    }
}
