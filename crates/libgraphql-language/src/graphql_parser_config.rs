/// Tunables for [`GraphQLParser`](crate::GraphQLParser).
///
/// Deserializable so that embedding tools can load it from their own
/// configuration files; missing fields take their default values.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct GraphQLParserConfig {
    /// Maximum nesting depth of values, selection sets, and type annotations
    /// combined. Deeper input fails with
    /// [`RecursionLimitExceeded`](crate::GraphQLParseErrorKind::RecursionLimitExceeded)
    /// instead of exhausting the stack.
    pub max_recursion_depth: usize,
}

impl GraphQLParserConfig {
    pub const DEFAULT_MAX_RECURSION_DEPTH: usize = 64;
}

impl Default for GraphQLParserConfig {
    fn default() -> Self {
        Self {
            max_recursion_depth: Self::DEFAULT_MAX_RECURSION_DEPTH,
        }
    }
}
