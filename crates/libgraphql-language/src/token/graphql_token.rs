use crate::token::GraphQLTokenKind;
use crate::GraphQLSourceSpan;
use std::borrow::Cow;

/// A GraphQL token with location (span) information and, for names,
/// numbers and strings, its value.
///
/// - Names and numbers carry their literal source text.
/// - Strings carry their decoded contents (quotes removed, escapes
///   resolved). The value borrows from the source unless an escape sequence
///   forced a decoded copy.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphQLToken<'src> {
    pub kind: GraphQLTokenKind,

    /// The source location span of this token. Offsets are code point
    /// counts; see [`SourcePosition`](crate::SourcePosition).
    pub span: GraphQLSourceSpan,

    pub value: Option<Cow<'src, str>>,
}

impl<'src> GraphQLToken<'src> {
    /// Convenience constructor for a token without a value (punctuators and
    /// EOF).
    pub fn new(kind: GraphQLTokenKind, span: GraphQLSourceSpan) -> Self {
        Self {
            kind,
            span,
            value: None,
        }
    }

    /// Constructor for a token that carries a value.
    pub fn with_value(
        kind: GraphQLTokenKind,
        span: GraphQLSourceSpan,
        value: impl Into<Cow<'src, str>>,
    ) -> Self {
        Self {
            kind,
            span,
            value: Some(value.into()),
        }
    }

    /// Code point offset of the first character of this token.
    pub fn start(&self) -> usize {
        self.span.start_inclusive.offset()
    }

    /// Code point offset just past the last character of this token.
    pub fn end(&self) -> usize {
        self.span.end_exclusive.offset()
    }

    /// The token's value, or `""` for tokens that carry none.
    pub fn value_str(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }

    /// Returns `true` if this is a [`Name`](GraphQLTokenKind::Name) token
    /// spelled exactly `name`.
    pub fn is_name(&self, name: &str) -> bool {
        self.kind == GraphQLTokenKind::Name && self.value.as_deref() == Some(name)
    }

    /// Detaches this token from the source lifetime.
    pub fn into_owned(self) -> GraphQLToken<'static> {
        GraphQLToken {
            kind: self.kind,
            span: self.span,
            value: self.value.map(|value| Cow::Owned(value.into_owned())),
        }
    }
}

impl std::fmt::Display for GraphQLToken<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.kind, self.value.as_deref()) {
            (GraphQLTokenKind::Name, Some(name)) => write!(f, "name `{name}`"),
            (GraphQLTokenKind::IntValue, Some(text)) => write!(f, "int `{text}`"),
            (GraphQLTokenKind::FloatValue, Some(text)) => write!(f, "float `{text}`"),
            (GraphQLTokenKind::StringValue, Some(text)) => write!(f, "string {text:?}"),
            (kind, _) => write!(f, "{kind}"),
        }
    }
}
