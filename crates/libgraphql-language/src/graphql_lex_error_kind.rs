/// Categorizes lexical errors for programmatic handling.
///
/// Each variant carries the offending input so tools can build their own
/// messages. The `Display` text is the message used by
/// [`GraphQLLexError`](crate::GraphQLLexError).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphQLLexErrorKind {
    /// A character that cannot start any token, such as `?` or a lone `.`.
    #[error("unexpected character {}", describe_char(.0))]
    UnexpectedCharacter(char),

    /// A control character (below U+0020, other than tab, line feed, and
    /// carriage return) outside of a string.
    #[error("invalid character {}", describe_char(.0))]
    InvalidCharacter(char),

    /// A control character other than tab inside a string literal.
    #[error("invalid character within string: {}", describe_char(.0))]
    InvalidCharacterInString(char),

    /// An escape sequence other than `\" \/ \\ \n \r \t` or `\uXXXX`.
    ///
    /// Carries the escape as written, e.g. `\z` or `\u12`.
    #[error("invalid escape sequence `{0}`")]
    InvalidEscapeSequence(String),

    /// A line break or the end of input was reached before the closing `"`.
    #[error("unterminated string")]
    UnterminatedString,

    /// A digit directly after a leading `0` (e.g. `00`, `-01`).
    #[error("invalid number, unexpected digit after 0: `{0}`")]
    UnexpectedDigitAfterZero(char),

    /// A required digit run is missing: after `-`, after `.`, or after an
    /// exponent marker. `None` means the input ended.
    #[error("invalid number, expected digit but got {}", describe_optional_char(.0))]
    ExpectedDigit(Option<char>),
}

/// Returns a human-readable description of a character for error messages.
///
/// Printable characters are shown in backticks; invisible and control
/// characters include their code point and, when well known, their name.
pub(crate) fn describe_char(ch: &char) -> String {
    let ch = *ch;
    if ch.is_control() || (ch.is_whitespace() && ch != ' ') || unicode_char_name(ch).is_some() {
        match unicode_char_name(ch) {
            Some(name) => format!("U+{:04X} ({name})", ch as u32),
            None => format!("U+{:04X}", ch as u32),
        }
    } else {
        format!("`{ch}`")
    }
}

fn describe_optional_char(ch: &Option<char>) -> String {
    match ch {
        Some(ch) => describe_char(ch),
        None => "<EOF>".to_string(),
    }
}

/// Names of the invisible characters most likely to sneak into a document.
fn unicode_char_name(ch: char) -> Option<&'static str> {
    match ch {
        '\u{0000}' => Some("NULL"),
        '\u{0007}' => Some("BELL"),
        '\u{0008}' => Some("BACKSPACE"),
        '\u{0009}' => Some("HORIZONTAL TAB"),
        '\u{000A}' => Some("LINE FEED"),
        '\u{000B}' => Some("VERTICAL TAB"),
        '\u{000C}' => Some("FORM FEED"),
        '\u{000D}' => Some("CARRIAGE RETURN"),
        '\u{001B}' => Some("ESCAPE"),
        '\u{007F}' => Some("DELETE"),
        '\u{0085}' => Some("NEXT LINE"),
        '\u{00A0}' => Some("NO-BREAK SPACE"),
        '\u{200B}' => Some("ZERO WIDTH SPACE"),
        '\u{200C}' => Some("ZERO WIDTH NON-JOINER"),
        '\u{200D}' => Some("ZERO WIDTH JOINER"),
        '\u{2028}' => Some("LINE SEPARATOR"),
        '\u{2029}' => Some("PARAGRAPH SEPARATOR"),
        '\u{FEFF}' => Some("BYTE ORDER MARK"),
        _ => None,
    }
}
