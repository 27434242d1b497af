use std::ops::{Mul, Sub};

use num_traits::Float;

use crate::{IsClose, Tolerance, point::Point};

/// The scalar value representing the determinant between two vectors.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct Determinant<T>(T);

impl<T> From<[&Point<T>; 3]> for Determinant<T>
where
    T: Copy + Sub<Output = T> + Mul<Output = T>,
{
    /// Being `A`, `B` and `C` the given [`Point`]s, returns the determinant of the direction
    /// vectors `AB` and `AC`.
    fn from([a, b, c]: [&Point<T>; 3]) -> Self {
        Self((b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x))
    }
}

impl<T> Determinant<T>
where
    T: Float,
{
    /// Returns `true` if `self` is equal to the additive identity.
    pub(crate) fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns `true` if `self` is close enough to zero given a tolerance.
    pub(crate) fn is_close_to_zero(&self, tolerance: &Tolerance<T>) -> bool {
        self.0.is_close(&T::zero(), tolerance)
    }

    /// Returns true if the number is positive and false if the number is zero or negative.
    pub(crate) fn is_positive(&self) -> bool {
        self.0 > T::zero()
    }

    /// Returns true if the number is negative and false if the number is zero or positive.
    pub(crate) fn is_negative(&self) -> bool {
        self.0 < T::zero()
    }
}
