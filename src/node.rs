use std::fmt::{self, Display};

use crate::point::Point;

/// A point and its links inside a [`Ring`](crate::Ring).
#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    /// The point being represented by this node.
    pub(crate) point: Point<T>,
    /// The index of the node following this one.
    pub(crate) next: usize,
    /// The index of the node previous to this one.
    pub(crate) previous: usize,
}

impl<T> Node<T> {
    /// Swaps the roles of the links of this node.
    pub(crate) fn flip(&mut self) {
        std::mem::swap(&mut self.next, &mut self.previous);
    }
}

/// A read-only view of a node in a closed [`Ring`](crate::Ring), for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeView<'a, T> {
    /// The position of the node in traversal order, starting at the entry node.
    pub position: usize,
    /// The point held by the node.
    pub point: &'a Point<T>,
    /// The point held by the node previous to this one.
    pub previous: &'a Point<T>,
    /// The point held by the node following this one.
    pub next: &'a Point<T>,
}

impl<T> Display for NodeView<'_, T>
where
    T: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Node(position={}, point={}, previous={}, next={})",
            self.position, self.point, self.previous, self.next
        )
    }
}
