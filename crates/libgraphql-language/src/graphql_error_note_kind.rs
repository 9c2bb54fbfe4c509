/// The kind of an error note (determines how the note is rendered).
///
/// Notes provide additional context beyond the primary error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphQLErrorNoteKind {
    /// General context or explanation about the error.
    ///
    /// Rendered as `= note: ...`.
    General,

    /// Actionable suggestion for fixing the error.
    ///
    /// Rendered as `= help: ...`.
    /// Example: "Add closing `\"`"
    Help,

    /// Reference to the GraphQL specification.
    ///
    /// Rendered as `= spec: ...`.
    Spec,
}

impl GraphQLErrorNoteKind {
    /// The prefix used when rendering a note of this kind.
    pub fn label(&self) -> &'static str {
        match self {
            Self::General => "note",
            Self::Help => "help",
            Self::Spec => "spec",
        }
    }
}
