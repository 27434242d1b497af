use num_traits::Float;

use crate::{IsClose, Ring, Tolerance, point::Point};

impl<T> PartialEq for Ring<T>
where
    T: PartialEq,
{
    /// Two rings are equal if, and only if, they hold the same points in the same cyclic order,
    /// regardless of their entry node. Orientation is significant.
    fn eq(&self, other: &Self) -> bool {
        self.is_rotation_of(other, |a, b| a == b)
    }
}

impl<T> IsClose for Ring<T>
where
    T: Float,
{
    type Scalar = T;

    /// Like [`PartialEq`], but comparing points given a tolerance.
    fn is_close(&self, rhs: &Self, tolerance: &Tolerance<T>) -> bool {
        self.is_rotation_of(rhs, |a, b| a.is_close(b, tolerance))
    }
}

impl<T> Ring<T> {
    /// Returns true if, and only if, rotating the entry node of other makes both rings hold
    /// the same sequence of points, given the equality function.
    fn is_rotation_of<F>(&self, other: &Self, eq: F) -> bool
    where
        F: Fn(&Point<T>, &Point<T>) -> bool,
    {
        if self.nodes.len() != other.nodes.len() {
            return false;
        }

        let Some(first) = self.points().next() else {
            return true;
        };

        // Every node of other holding the entry point of self is a candidate starting point.
        other
            .indexes()
            .filter(|&candidate| eq(first, &other.nodes[candidate].point))
            .any(|candidate| {
                let theirs = std::iter::successors(Some(candidate), |&index| {
                    Some(other.nodes[index].next)
                })
                .map(|index| &other.nodes[index].point);

                self.points().zip(theirs).all(|(a, b)| eq(a, b))
            })
    }
}
