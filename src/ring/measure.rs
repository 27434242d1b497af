use num_traits::Float;

use crate::{Ring, determinant::Determinant};

/// The direction in which a [`Ring`] winds around its interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
}

impl<T> Ring<T>
where
    T: Float,
{
    /// Returns the signed area enclosed by the ring, if closed.
    ///
    /// The area is positive for counter-clockwise rings and negative for clockwise ones.
    pub fn area(&self) -> Option<T> {
        if !self.closed {
            return None;
        }

        let twice = self
            .points()
            .zip(self.points().cycle().skip(1))
            .fold(T::zero(), |area, (from, to)| {
                area + from.x * to.y - to.x * from.y
            });

        Some(twice / (T::one() + T::one()))
    }

    /// Returns the orientation of the ring, if closed and not degenerate.
    pub fn orientation(&self) -> Option<Orientation> {
        let area = self.area()?;
        if area.is_zero() || area.is_nan() {
            return None;
        }

        Some(if area.is_sign_positive() {
            Orientation::CounterClockwise
        } else {
            Orientation::Clockwise
        })
    }

    /// Returns true if, and only if, every turn of the closed ring goes in the same direction.
    ///
    /// Collinear points do not break convexity. Returns [`None`] if the ring is open.
    pub fn is_convex(&self) -> Option<bool> {
        if !self.closed {
            return None;
        }

        let (left, right) = self.indexes().fold((false, false), |(left, right), index| {
            let node = &self.nodes[index];
            let determinant = Determinant::from([
                &self.nodes[node.previous].point,
                &node.point,
                &self.nodes[node.next].point,
            ]);

            (
                left || determinant.is_positive(),
                right || determinant.is_negative(),
            )
        });

        Some(!(left && right))
    }
}
