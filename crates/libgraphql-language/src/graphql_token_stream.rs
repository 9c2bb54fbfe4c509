//! One-token lookahead over a [`GraphQLTokenSource`].

use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::token_source::GraphQLTokenSource;
use crate::GraphQLLexError;
use crate::GraphQLSourceSpan;

/// One-token lookahead over a [`GraphQLTokenSource`].
///
/// The stream always holds exactly one current token. Before the first
/// [`advance()`](Self::advance) that token is a zero-width placeholder
/// [`Eof`](GraphQLTokenKind::Eof) at the start of input; callers prime the
/// stream by advancing once.
///
/// If the underlying source stops without yielding an EOF token, the stream
/// fabricates one positioned at the end of the last token it saw, so the
/// parser never has to special-case an exhausted iterator.
///
/// # Type Parameters
///
/// * `'src` - The lifetime of the source text that tokens are lexed from.
/// * `TTokenSource` - The underlying token source.
pub struct GraphQLTokenStream<'src, TTokenSource: GraphQLTokenSource<'src>> {
    token_source: TTokenSource,
    current: GraphQLToken<'src>,
}

impl<'src, TTokenSource: GraphQLTokenSource<'src>> GraphQLTokenStream<'src, TTokenSource> {
    /// Creates a new, unprimed token stream from a token source.
    pub fn new(token_source: TTokenSource) -> Self {
        Self {
            token_source,
            current: GraphQLToken::new(GraphQLTokenKind::Eof, GraphQLSourceSpan::default()),
        }
    }

    /// Pulls the next token into the lookahead slot and returns the token
    /// that was there before.
    ///
    /// Errors from the token source are returned as-is; the lookahead slot
    /// is left unchanged in that case.
    pub fn advance(&mut self) -> Result<GraphQLToken<'src>, GraphQLLexError> {
        let next = match self.token_source.next() {
            Some(result) => result?,
            None => GraphQLToken::new(
                GraphQLTokenKind::Eof,
                GraphQLSourceSpan::empty_at(self.current.span.end_exclusive),
            ),
        };
        Ok(std::mem::replace(&mut self.current, next))
    }

    /// The current lookahead token.
    #[inline]
    pub fn peek(&self) -> &GraphQLToken<'src> {
        &self.current
    }

    /// Returns `true` if the lookahead token is EOF.
    pub fn is_at_end(&self) -> bool {
        self.current.kind == GraphQLTokenKind::Eof
    }
}
