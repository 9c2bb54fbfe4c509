use crate::ast::Node;

/// Trait implemented by all AST node types.
///
/// All AST node types implement this trait via `#[inherent] impl AstNode`,
/// giving each node both inherent methods (no trait import needed) and a
/// trait bound for generic utilities such as [`print`](crate::print) and
/// [`visit`](crate::visit).
pub trait AstNode {
    /// Append this node's canonical source text to `sink`.
    ///
    /// `indent` is the nesting level of the line this node starts on; block
    /// members (`{ ... }`) are written one level deeper and the closing brace
    /// back at `indent`. The node itself does not write leading indentation.
    fn append_source(&self, sink: &mut String, indent: usize);

    /// A borrowed, type-erased view of this node.
    ///
    /// Wrapper enums (`Definition`, `Selection`, `TypeDefinition`) return
    /// the view of the node they wrap.
    fn as_node(&self) -> Node<'_>;

    /// Return this node's canonical source text.
    ///
    /// Convenience wrapper around [`append_source`](AstNode::append_source).
    fn to_source(&self) -> String {
        let mut s = String::new();
        self.append_source(&mut s, 0);
        s
    }
}
