use num_traits::Float;

use crate::{Ring, point::Point};

use super::MIN_POINTS;

/// The node of a collinear triple that lies between the other two.
enum Redundant {
    Previous,
    Current,
    Next,
}

impl<T> Ring<T>
where
    T: Float,
{
    /// Removes every point lying on the straight line between its neighbors, until none is left
    /// or the ring is down to three points. Returns the amount of removed points.
    pub fn remove_collinear_points(&mut self) -> usize {
        let Some(mut current) = self.entry else {
            return 0;
        };

        let mut removed = 0;
        // Amount of consecutive nodes checked since the last removal.
        let mut unchanged = 0;

        while self.nodes.len() > MIN_POINTS && unchanged < self.nodes.len() {
            let Some(redundant) = self.redundant(current) else {
                current = self.nodes[current].next;
                unchanged += 1;
                continue;
            };

            let target = match redundant {
                Redundant::Previous => self.nodes[current].previous,
                Redundant::Current => current,
                Redundant::Next => self.nodes[current].next,
            };

            tracing::trace!(index = target, "removing collinear point");
            let Some(previous) = self.detach(target) else {
                break;
            };

            current = previous;
            removed += 1;
            unchanged = 0;
        }

        tracing::debug!(removed, points = self.nodes.len(), "collinear points removed");
        removed
    }

    /// Returns which node of the triple centered at the given index is redundant, if the triple
    /// is collinear.
    fn redundant(&self, index: usize) -> Option<Redundant> {
        let node = &self.nodes[index];
        let previous = &self.nodes[node.previous].point;
        let current = &node.point;
        let next = &self.nodes[node.next].point;

        if !Point::is_collinear_within(previous, current, next, &self.tolerance) {
            return None;
        }

        Some(if current.is_between(previous, next) {
            Redundant::Current
        } else if next.is_between(previous, current) {
            Redundant::Next
        } else {
            Redundant::Previous
        })
    }
}
