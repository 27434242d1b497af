use std::{
    fmt::{self, Display},
    iter::FusedIterator,
};

use crate::{Ring, RingError, node::NodeView, point::Point};

/// An iterator over the points of a [`Ring`], in traversal order from its entry node.
#[derive(Debug, Clone)]
pub struct Points<'a, T> {
    ring: &'a Ring<T>,
    next: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Points<'a, T> {
    type Item = &'a Point<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let node = &self.ring.nodes[self.next?];
        self.next = Some(node.next);
        self.remaining -= 1;
        Some(&node.point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Points<'_, T> {}
impl<T> FusedIterator for Points<'_, T> {}

/// An iterator over the [`NodeView`]s of a closed [`Ring`], in traversal order.
#[derive(Debug, Clone)]
pub struct Nodes<'a, T> {
    ring: &'a Ring<T>,
    next: Option<usize>,
    position: usize,
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = NodeView<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.ring.nodes.len() {
            return None;
        }

        let nodes = &self.ring.nodes;
        let node = &nodes[self.next?];
        let view = NodeView {
            position: self.position,
            point: &node.point,
            previous: &nodes[node.previous].point,
            next: &nodes[node.next].point,
        };

        self.next = Some(node.next);
        self.position += 1;
        Some(view)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.ring.nodes.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Nodes<'_, T> {}

/// A human-readable rendering of a closed [`Ring`].
#[derive(Debug)]
pub struct RingDisplay<'a, T> {
    ring: &'a Ring<T>,
}

impl<T> Display for RingDisplay<'_, T>
where
    T: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Ring(")?;
        writeln!(f, "\tnodes=[")?;
        for node in self.ring.node_views() {
            writeln!(f, "\t\t{node},")?;
        }

        writeln!(f, "\t]")?;
        write!(f, ")")
    }
}

impl<'a, T> IntoIterator for &'a Ring<T> {
    type Item = &'a Point<T>;
    type IntoIter = Points<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.points()
    }
}

impl<T> Ring<T> {
    /// Returns an ordered iterator over all the points of the ring, starting at the entry node.
    ///
    /// Unlike [`Ring::nodes`], this is available on open rings as well.
    pub fn points(&self) -> Points<'_, T> {
        Points {
            ring: self,
            next: self.entry,
            remaining: self.nodes.len(),
        }
    }

    /// Returns an ordered iterator over the nodes of the ring, for diagnostics.
    pub fn nodes(&self) -> Result<Nodes<'_, T>, RingError> {
        if !self.closed {
            return Err(RingError::NotClosed);
        }

        Ok(self.node_views())
    }

    /// Returns a printable rendering of the ring.
    pub fn display(&self) -> Result<RingDisplay<'_, T>, RingError> {
        if !self.closed {
            return Err(RingError::NotClosed);
        }

        Ok(RingDisplay { ring: self })
    }

    fn node_views(&self) -> Nodes<'_, T> {
        Nodes {
            ring: self,
            next: self.entry,
            position: 0,
        }
    }
}
