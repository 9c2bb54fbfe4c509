use crate::ast::AstNode;
use crate::ast::Field;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::Node;
use inherent::inherent;

/// A single selection within a selection set.
///
/// See
/// [Selection Sets](https://spec.graphql.org/October2021/#sec-Selection-Sets)
/// in the GraphQL language reference.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}

#[inherent]
impl AstNode for Selection {
    pub fn append_source(&self, sink: &mut String, indent: usize) {
        match self {
            Self::Field(field) => field.append_source(sink, indent),
            Self::FragmentSpread(spread) => spread.append_source(sink, indent),
            Self::InlineFragment(inline) => inline.append_source(sink, indent),
        }
    }

    pub fn as_node(&self) -> Node<'_> {
        match self {
            Self::Field(field) => field.as_node(),
            Self::FragmentSpread(spread) => spread.as_node(),
            Self::InlineFragment(inline) => inline.as_node(),
        }
    }
}
