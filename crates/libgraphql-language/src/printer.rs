//! Canonical pretty-printing of AST nodes.
//!
//! Each node's [`AstNode::append_source`] owns its own layout; this module
//! holds the entry point and the layout helpers they share:
//!
//! - two-space indentation per `{ }` nesting level
//! - block forms (`{\n member\n}`) omitted entirely when empty
//! - inline forms (`(a: 1, b: 2)`) comma-separated, omitted entirely when
//!   empty
//! - string values re-escaped so their decoded contents round-trip

use crate::ast::AstNode;
use crate::ast::DirectiveAnnotation;

const INDENT: &str = "  ";

/// Prints `node` in canonical form.
///
/// Total over every node kind. For parser-produced trees,
/// `parse(&print(&doc))` yields a tree equal to `doc`.
///
/// ```rust
/// let doc = libgraphql_language::parse("query { a , b }").unwrap();
/// assert_eq!(libgraphql_language::print(&doc), "{\n  a\n  b\n}\n");
/// ```
pub fn print<TNode: AstNode + ?Sized>(node: &TNode) -> String {
    node.to_source()
}

pub(crate) fn append_indent(sink: &mut String, level: usize) {
    for _ in 0..level {
        sink.push_str(INDENT);
    }
}

/// Appends `{`, one member per line one level deeper than `indent`, then
/// `}` at `indent`. Appends nothing when `items` is empty.
pub(crate) fn append_block<TNode: AstNode>(sink: &mut String, indent: usize, items: &[TNode]) {
    if items.is_empty() {
        return;
    }
    sink.push('{');
    for item in items {
        sink.push('\n');
        append_indent(sink, indent + 1);
        item.append_source(sink, indent + 1);
    }
    sink.push('\n');
    append_indent(sink, indent);
    sink.push('}');
}

/// Like [`append_block`], preceded by a single space.
pub(crate) fn append_spaced_block<TNode: AstNode>(
    sink: &mut String,
    indent: usize,
    items: &[TNode],
) {
    if !items.is_empty() {
        sink.push(' ');
        append_block(sink, indent, items);
    }
}

/// Appends `items` separated by `separator`.
pub(crate) fn append_joined<TNode: AstNode>(
    sink: &mut String,
    indent: usize,
    items: &[TNode],
    separator: &str,
) {
    for (idx, item) in items.iter().enumerate() {
        if idx > 0 {
            sink.push_str(separator);
        }
        item.append_source(sink, indent);
    }
}

/// Appends `(item, item)`; appends nothing when `items` is empty.
pub(crate) fn append_parenthesized<TNode: AstNode>(
    sink: &mut String,
    indent: usize,
    items: &[TNode],
) {
    if items.is_empty() {
        return;
    }
    sink.push('(');
    append_joined(sink, indent, items, ", ");
    sink.push(')');
}

/// Appends ` @a @b(x: 1)`.
pub(crate) fn append_directives(
    sink: &mut String,
    indent: usize,
    directives: &[DirectiveAnnotation],
) {
    for directive in directives {
        sink.push(' ');
        directive.append_source(sink, indent);
    }
}

/// Appends `value` as a quoted string literal.
///
/// `"`, `\`, and the control characters are escaped; everything else
/// (including non-ASCII text) is written as-is.
pub(crate) fn append_string_literal(sink: &mut String, value: &str) {
    sink.push('"');
    for ch in value.chars() {
        match ch {
            '"' => sink.push_str("\\\""),
            '\\' => sink.push_str("\\\\"),
            '\n' => sink.push_str("\\n"),
            '\r' => sink.push_str("\\r"),
            '\t' => sink.push_str("\\t"),
            c if c < ' ' => sink.push_str(&format!("\\u{:04X}", c as u32)),
            c => sink.push(c),
        }
    }
    sink.push('"');
}
