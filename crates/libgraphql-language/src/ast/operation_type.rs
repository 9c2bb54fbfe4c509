use crate::Keyword;

/// The kind of an operation.
///
/// See
/// [Operations](https://spec.graphql.org/October2021/#OperationType)
/// in the GraphQL language reference.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

impl OperationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        }
    }

    pub fn from_keyword(keyword: Keyword) -> Option<Self> {
        match keyword {
            Keyword::Query => Some(Self::Query),
            Keyword::Mutation => Some(Self::Mutation),
            Keyword::Subscription => Some(Self::Subscription),
            _ => None,
        }
    }
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
