/// A location within GraphQL source text.
///
/// This is a pure data struct with no mutation methods. Token sources are
/// responsible for computing position values as they scan input.
///
/// # Indexing Convention
///
/// **All position values are 0-based:**
/// - `offset`: code point (`char`) count from the start of the document
/// - `line`: 0 = first line of the document
/// - `col`: code point count within the current line
/// - `byte_offset`: UTF-8 byte offset within the whole document
///
/// `offset` is the position reported on tokens. `byte_offset` exists so that
/// callers holding the original `&str` can slice it without re-counting
/// characters.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct SourcePosition {
    /// Code point offset from start of document.
    offset: usize,

    /// Line number (0-based: first line is 0)
    line: usize,

    /// Code point count within current line (0-based: first position is 0)
    col: usize,

    /// byte offset from start of document (0-based: first byte is 0)
    byte_offset: usize,
}

impl SourcePosition {
    /// Create a new SourcePosition.
    ///
    /// # Arguments
    /// - `offset`: 0-based code point offset from document start
    /// - `line`: 0-based line number (0 = first line)
    /// - `col`: 0-based code point count within current line
    /// - `byte_offset`: 0-based byte offset from document start
    pub fn new(
        offset: usize,
        line: usize,
        col: usize,
        byte_offset: usize,
    ) -> Self {
        Self {
            offset,
            line,
            col,
            byte_offset,
        }
    }

    /// Returns the 0-based code point offset from document start.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 0-based code point count within the current line.
    ///
    /// Both 'a' (1 byte) and '🎉' (4 bytes) add 1 to this count.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Returns the 0-based byte offset from document start.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }
}
