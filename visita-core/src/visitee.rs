//! Visitee: nodes that present themselves to a visitor.

use crate::{node::Node, visitor::Visitor};

/// A node that can hand itself to a visitor without the caller knowing its
/// concrete type.
///
/// Implemented for every [`Node`], trait objects included.
///
/// ```rust,ignore
/// let node: &dyn Node = &Dog;
/// assert_eq!(node.accept(&Sounds), Sounds.visit(node, ()));
/// ```
pub trait Visitee {
    /// Returns `visitor.visit(self, ())`.
    fn accept<R, V>(&self, visitor: &V) -> R
    where
        V: Visitor<(), R> + ?Sized;
}

impl<T: Node + ?Sized> Visitee for T {
    fn accept<R, V>(&self, visitor: &V) -> R
    where
        V: Visitor<(), R> + ?Sized,
    {
        visitor.visit(self.as_node(), ())
    }
}
