use std::fmt::{self, Display};

use num_traits::Float;

use crate::{IsClose, Tolerance, determinant::Determinant};

/// A point in the plain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point<T = f64> {
    /// The horizontal coordinate of the point.
    pub x: T,
    /// The vertical coordinate of the point.
    pub y: T,
}

impl<T> From<[T; 2]> for Point<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Self { x, y }
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T> Display for Point<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<T> IsClose for Point<T>
where
    T: Float,
{
    type Scalar = T;

    fn is_close(&self, rhs: &Self, tolerance: &Tolerance<T>) -> bool {
        self.x.is_close(&rhs.x, tolerance) && self.y.is_close(&rhs.y, tolerance)
    }
}

impl<T> Point<T>
where
    T: Float,
{
    /// Returns true if, and only if, the three given points lie on a common straight line.
    ///
    /// Repeated points are always collinear with any third one.
    pub fn is_collinear(a: &Self, b: &Self, c: &Self) -> bool {
        Determinant::from([a, b, c]).is_zero()
    }

    /// Like [`Point::is_collinear`], but accepting a cross product close enough to zero.
    pub fn is_collinear_within(a: &Self, b: &Self, c: &Self, tolerance: &Tolerance<T>) -> bool {
        Determinant::from([a, b, c]).is_close_to_zero(tolerance)
    }

    /// Being self collinear with `from` and `to`, returns true if, and only if, self lies on the
    /// segment delimited by them, endpoints included.
    pub(crate) fn is_between(&self, from: &Self, to: &Self) -> bool {
        (self.x - from.x) * (to.x - self.x) + (self.y - from.y) * (to.y - self.y) >= T::zero()
    }
}

/// A constructor macro for the [`Point`].
#[macro_export]
macro_rules! point {
    ($x:expr, $y:expr) => {
        $crate::Point { x: $x, y: $y }
    };
}
