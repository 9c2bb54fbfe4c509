use crate::GraphQLErrorNoteKind;
use crate::GraphQLSourceSpan;
use crate::SmallVec;

/// A secondary line attached to a lex or parse error: background, a
/// suggested fix, or a link into the GraphQL reference.
///
/// Displays as `KIND: MESSAGE`, for example `help: Add one more .`
#[derive(Debug, Clone, PartialEq)]
pub struct GraphQLErrorNote {
    pub kind: GraphQLErrorNoteKind,
    pub message: String,
    /// A related location, rendered with its own snippet when the source
    /// text is available.
    pub span: Option<GraphQLSourceSpan>,
}

impl GraphQLErrorNote {
    fn new(kind: GraphQLErrorNoteKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            span: None,
        }
    }

    pub fn general(message: impl Into<String>) -> Self {
        Self::new(GraphQLErrorNoteKind::General, message)
    }

    pub fn help(message: impl Into<String>) -> Self {
        Self::new(GraphQLErrorNoteKind::Help, message)
    }

    /// A note whose message is a URL into the GraphQL reference.
    pub fn spec(url: impl Into<String>) -> Self {
        Self::new(GraphQLErrorNoteKind::Spec, url)
    }

    /// Points this note at `span`.
    pub fn at(mut self, span: GraphQLSourceSpan) -> Self {
        self.span = Some(span);
        self
    }
}

impl std::fmt::Display for GraphQLErrorNote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind.label(), self.message)
    }
}

/// Most errors carry at most two notes.
pub type GraphQLErrorNotes = SmallVec<[GraphQLErrorNote; 2]>;
