use crate::token::GraphQLToken;
use crate::GraphQLLexError;

/// Marker trait for [`GraphQLToken`] lexers (iterators that generate
/// [`GraphQLToken`]s or a terminal [`GraphQLLexError`]).
///
/// This trait lets the parser run over different sources of tokens. For
/// example: [`StrGraphQLTokenSource`](crate::token_source::StrGraphQLTokenSource)
/// lexes a `&str`, while tests feed the parser pre-built token vectors.
///
/// Implementors define an [`Iterator`] that produces tokens one at a time.
/// Lookahead is handled by [`GraphQLTokenStream`](crate::GraphQLTokenStream).
///
/// Lexers are responsible for:
/// - Skipping ignored input (whitespace, commas, comments, byte order marks)
/// - Yielding a final token with
///   [`GraphQLTokenKind::Eof`](crate::token::GraphQLTokenKind::Eof); a source
///   that simply stops is treated as if it had yielded one
/// - Yielding `Err` at most once and then stopping
///
/// # Lifetime Parameter
///
/// The `'src` lifetime represents the source text that tokens are lexed from.
/// For string-based lexers, this enables zero-copy lexing where token values
/// borrow directly from the input. Sources that must allocate use
/// `'static`.
pub trait GraphQLTokenSource<'src>:
    Iterator<Item = Result<GraphQLToken<'src>, GraphQLLexError>>
{
}

impl<'src, T> GraphQLTokenSource<'src> for T where
    T: Iterator<Item = Result<GraphQLToken<'src>, GraphQLLexError>>
{
}
