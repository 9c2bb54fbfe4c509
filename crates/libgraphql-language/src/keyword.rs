/// Identifiers with special meaning at particular grammar positions.
///
/// Keywords are *soft*: the lexer always produces plain
/// [`Name`](crate::token::GraphQLTokenKind::Name) tokens, and the parser only
/// consults this table where the grammar allows a keyword. Everywhere else
/// (field names, argument names, type names, ...) these are ordinary
/// identifiers.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Keyword {
    On,
    Fragment,
    True,
    False,
    Null,
    Implements,
    Type,
    Interface,
    Union,
    Scalar,
    Enum,
    Input,
    Extend,
    Query,
    Mutation,
    Subscription,
}

const KEYWORD_TABLE: [(&str, Keyword); 16] = [
    ("on", Keyword::On),
    ("fragment", Keyword::Fragment),
    ("true", Keyword::True),
    ("false", Keyword::False),
    ("null", Keyword::Null),
    ("implements", Keyword::Implements),
    ("type", Keyword::Type),
    ("interface", Keyword::Interface),
    ("union", Keyword::Union),
    ("scalar", Keyword::Scalar),
    ("enum", Keyword::Enum),
    ("input", Keyword::Input),
    ("extend", Keyword::Extend),
    ("query", Keyword::Query),
    ("mutation", Keyword::Mutation),
    ("subscription", Keyword::Subscription),
];

/// Keywords that may begin a top-level definition.
const DEFINITION_KEYWORDS: [Keyword; 11] = [
    Keyword::Query,
    Keyword::Mutation,
    Keyword::Subscription,
    Keyword::Fragment,
    Keyword::Type,
    Keyword::Interface,
    Keyword::Union,
    Keyword::Scalar,
    Keyword::Enum,
    Keyword::Input,
    Keyword::Extend,
];

impl Keyword {
    /// Looks up the keyword spelled `name`, if any.
    pub fn from_name(name: &str) -> Option<Self> {
        KEYWORD_TABLE
            .iter()
            .find(|(text, _)| *text == name)
            .map(|(_, keyword)| *keyword)
    }

    /// Looks up `name` among the keywords that start a top-level
    /// definition.
    pub fn definition_keyword(name: &str) -> Option<Self> {
        Self::from_name(name).filter(|keyword| DEFINITION_KEYWORDS.contains(keyword))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Fragment => "fragment",
            Self::True => "true",
            Self::False => "false",
            Self::Null => "null",
            Self::Implements => "implements",
            Self::Type => "type",
            Self::Interface => "interface",
            Self::Union => "union",
            Self::Scalar => "scalar",
            Self::Enum => "enum",
            Self::Input => "input",
            Self::Extend => "extend",
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        }
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
