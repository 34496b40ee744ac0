//! Capabilities shared by every syntax tree node.

use std::fmt;

/// A node of the syntax tree.
///
/// `Display` is the node's reconstruction: source-equivalent text in which
/// every prefix and infix expression is fully parenthesized. Render with
/// `to_string()` to accumulate the whole subtree into a single buffer.
pub trait Node: fmt::Display {
    /// The literal text of the token that introduced this node.
    fn token_literal(&self) -> &str;
}

/// Renders an optional child, writing nothing when it is absent.
pub(crate) struct Slot<'a, T>(pub(crate) Option<&'a T>);

impl<T: fmt::Display> fmt::Display for Slot<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(node) => fmt::Display::fmt(node, f),
            None => Ok(()),
        }
    }
}
