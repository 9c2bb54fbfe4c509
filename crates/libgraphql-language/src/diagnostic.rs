//! Rendering shared by [`GraphQLLexError`](crate::GraphQLLexError) and
//! [`GraphQLParseError`](crate::GraphQLParseError).

use crate::GraphQLErrorNotes;
use crate::GraphQLSourceSpan;

/// Label used in place of a file name. Sources are always in-memory text.
const SOURCE_LABEL: &str = "<input>";

/// `<input>:LINE:COL: error: MESSAGE` with 1-based line and column.
pub(crate) fn format_oneline(message: &str, span: &GraphQLSourceSpan) -> String {
    let line = span.start_inclusive.line() + 1;
    let column = span.start_inclusive.col() + 1;
    format!("{SOURCE_LABEL}:{line}:{column}: error: {message}")
}

/// Produces output like:
/// ```text
/// error: unterminated string
///   --> <input>:1:16
///    |
///  1 | { f(arg: "abc }
///    |                ^
///    = help: Add closing `"`
/// ```
///
/// When `source` is `None`, the snippet is omitted but line/column info is
/// still shown.
pub(crate) fn format_detailed(
    message: &str,
    span: &GraphQLSourceSpan,
    notes: &GraphQLErrorNotes,
    source: Option<&str>,
) -> String {
    let mut output = String::new();

    output.push_str("error: ");
    output.push_str(message);
    output.push('\n');

    let line = span.start_inclusive.line() + 1;
    let column = span.start_inclusive.col() + 1;
    output.push_str(&format!("  --> {SOURCE_LABEL}:{line}:{column}\n"));

    if let Some(src) = source
        && let Some(snippet) = format_source_snippet(src, span)
    {
        output.push_str(&snippet);
    }

    for note in notes {
        output.push_str(&format!("   = {note}\n"));
        if let (Some(note_span), Some(src)) = (&note.span, source)
            && let Some(snippet) = format_note_snippet(src, note_span)
        {
            output.push_str(&snippet);
        }
    }

    output
}

/// Returns the text of the 0-based line `line_num`, splitting on `\n`,
/// `\r\n` and lone `\r` the same way the lexer counts lines.
fn source_line(source: &str, line_num: usize) -> Option<&str> {
    let mut rest = source;
    let mut current = 0;
    loop {
        let end = rest.find(['\n', '\r']).unwrap_or(rest.len());
        if current == line_num {
            return Some(&rest[..end]);
        }
        if end == rest.len() {
            return None;
        }
        let break_len = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + break_len..];
        current += 1;
    }
}

fn format_source_snippet(source: &str, span: &GraphQLSourceSpan) -> Option<String> {
    let line_num = span.start_inclusive.line();
    let line_content = source_line(source, line_num)?;
    let display_line_num = line_num + 1;
    let line_num_width = display_line_num.to_string().len().max(2);

    let mut output = String::new();
    output.push_str(&format!("{:>width$} |\n", "", width = line_num_width));
    output.push_str(&format!(
        "{display_line_num:>line_num_width$} | {line_content}\n"
    ));

    // Multi-line spans are underlined up to the end of the first line.
    let col_start = span.start_inclusive.col();
    let col_end = if span.end_exclusive.line() == line_num {
        span.end_exclusive.col()
    } else {
        line_content.chars().count()
    };
    let underline_len = col_end.saturating_sub(col_start).max(1);

    output.push_str(&format!(
        "{:>width$} | {:>padding$}{}\n",
        "",
        "",
        "^".repeat(underline_len),
        width = line_num_width,
        padding = col_start
    ));

    Some(output)
}

fn format_note_snippet(source: &str, span: &GraphQLSourceSpan) -> Option<String> {
    let line_num = span.start_inclusive.line();
    let line_content = source_line(source, line_num)?;
    let display_line_num = line_num + 1;
    let line_num_width = display_line_num.to_string().len().max(2);

    let mut output = String::new();
    output.push_str(&format!(
        "     {display_line_num:>line_num_width$} | {line_content}\n"
    ));
    output.push_str(&format!(
        "     {:>width$} | {:>padding$}-\n",
        "",
        "",
        width = line_num_width,
        padding = span.start_inclusive.col()
    ));

    Some(output)
}
