//! A GraphQL language front-end: lexing, parsing, a typed AST, traversal,
//! and canonical printing.
//!
//! A single document may mix executable definitions (queries, mutations,
//! subscriptions, fragments) with type-system definitions (object,
//! interface, union, scalar, enum, and input object types, plus type
//! extensions).
//!
//! ```rust
//! use libgraphql_language::ast::AstNode;
//!
//! let doc = libgraphql_language::parse("query Hero { hero { name } }").unwrap();
//! assert_eq!(
//!     doc.to_source(),
//!     "query Hero {\n  hero {\n    name\n  }\n}\n",
//! );
//! ```
//!
//! The [`token_source::GraphQLTokenSource`] trait decouples the parser from
//! where its tokens come from; [`token_source::StrGraphQLTokenSource`] lexes
//! a `&str` without copying names or escape-free strings.

pub mod ast;
mod diagnostic;
mod graphql_error_note;
mod graphql_error_note_kind;
mod graphql_lex_error;
mod graphql_lex_error_kind;
mod graphql_parse_error;
mod graphql_parse_error_kind;
mod graphql_parser;
mod graphql_parser_config;
mod graphql_source_span;
mod graphql_token_stream;
mod keyword;
mod printer;
mod source_position;
pub mod token;
pub mod token_source;
mod visitor;

pub use graphql_error_note::GraphQLErrorNote;
pub use graphql_error_note::GraphQLErrorNotes;
pub use graphql_error_note_kind::GraphQLErrorNoteKind;
pub use graphql_lex_error::GraphQLLexError;
pub use graphql_lex_error_kind::GraphQLLexErrorKind;
pub use graphql_parse_error::GraphQLParseError;
pub use graphql_parse_error_kind::GraphQLParseErrorKind;
pub use graphql_parser::GraphQLParser;
pub use graphql_parser_config::GraphQLParserConfig;
pub use graphql_source_span::GraphQLSourceSpan;
pub use graphql_token_stream::GraphQLTokenStream;
pub use keyword::Keyword;
pub use printer::print;
pub use smallvec::smallvec;
pub use smallvec::SmallVec;
pub use source_position::SourcePosition;
pub use visitor::visit;

/// Parses `source` as a GraphQL document with the default configuration.
///
/// Shorthand for `GraphQLParser::new(source).parse_document()`.
pub fn parse(source: &str) -> Result<ast::Document, GraphQLParseError> {
    GraphQLParser::new(source).parse_document()
}

#[cfg(test)]
mod tests;
