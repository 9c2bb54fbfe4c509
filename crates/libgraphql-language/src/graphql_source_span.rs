use crate::SourcePosition;

/// Represents a span of source text from start to end position.
///
/// The span is a half-open interval: `[start_inclusive, end_exclusive)`.
/// - `start_inclusive`: Position of the first character of the source text
/// - `end_exclusive`: Position immediately after the last character
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct GraphQLSourceSpan {
    pub start_inclusive: SourcePosition,
    pub end_exclusive: SourcePosition,
}

impl GraphQLSourceSpan {
    pub fn new(start: SourcePosition, end: SourcePosition) -> Self {
        Self {
            start_inclusive: start,
            end_exclusive: end,
        }
    }

    /// A zero-width span at `position`.
    pub fn empty_at(position: SourcePosition) -> Self {
        Self::new(position, position)
    }

    /// Number of code points covered by this span.
    pub fn len(&self) -> usize {
        self.end_exclusive.offset() - self.start_inclusive.offset()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The covered text, sliced from `source` by byte offsets.
    ///
    /// Returns `None` if the span does not fit `source`.
    pub fn source_slice<'src>(&self, source: &'src str) -> Option<&'src str> {
        source.get(
            self.start_inclusive.byte_offset()..self.end_exclusive.byte_offset(),
        )
    }
}
