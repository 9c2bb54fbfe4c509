/// The kind of a lexical token.
///
/// Kinds are payload-free; the decoded text of names, numbers, and strings
/// lives in [`GraphQLToken::value`](crate::token::GraphQLToken::value) so the
/// parser can compare kinds cheaply and report "expected X, found Y" errors
/// without cloning token text.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum GraphQLTokenKind {
    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `!`
    Bang,
    /// `$`
    Dollar,
    /// `(`
    ParenOpen,
    /// `)`
    ParenClose,
    /// `...`
    Ellipsis,
    /// `:`
    Colon,
    /// `=`
    Equals,
    /// `@`
    At,
    /// `[`
    SquareBracketOpen,
    /// `]`
    SquareBracketClose,
    /// `{`
    CurlyBraceOpen,
    /// `|`
    Pipe,
    /// `}`
    CurlyBraceClose,

    // =========================================================================
    // Literals
    // =========================================================================
    /// An identifier matching `[_A-Za-z][_0-9A-Za-z]*`.
    Name,
    /// An integer literal such as `0`, `-12`, `345`.
    IntValue,
    /// A float literal such as `1.5`, `-0.1`, `123e-4`.
    FloatValue,
    /// A quoted string literal.
    StringValue,

    // =========================================================================
    // End of input
    // =========================================================================
    Eof,
}

impl GraphQLTokenKind {
    /// The source text of a punctuator, or `None` for literal kinds and
    /// [`Eof`](Self::Eof).
    pub fn punctuator_str(&self) -> Option<&'static str> {
        Some(match self {
            Self::Bang => "!",
            Self::Dollar => "$",
            Self::ParenOpen => "(",
            Self::ParenClose => ")",
            Self::Ellipsis => "...",
            Self::Colon => ":",
            Self::Equals => "=",
            Self::At => "@",
            Self::SquareBracketOpen => "[",
            Self::SquareBracketClose => "]",
            Self::CurlyBraceOpen => "{",
            Self::Pipe => "|",
            Self::CurlyBraceClose => "}",
            Self::Name
            | Self::IntValue
            | Self::FloatValue
            | Self::StringValue
            | Self::Eof => return None,
        })
    }

    /// Returns `true` if this is a punctuator.
    pub fn is_punctuator(&self) -> bool {
        self.punctuator_str().is_some()
    }

    /// Returns `true` for kinds whose tokens carry a value.
    pub fn has_value(&self) -> bool {
        matches!(
            self,
            Self::Name | Self::IntValue | Self::FloatValue | Self::StringValue,
        )
    }
}

impl std::fmt::Display for GraphQLTokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(punctuator) = self.punctuator_str() {
            return write!(f, "`{punctuator}`");
        }
        f.write_str(match self {
            Self::Name => "name",
            Self::IntValue => "int",
            Self::FloatValue => "float",
            Self::StringValue => "string",
            _ => "<EOF>",
        })
    }
}
