//! Closed polygonal chains of points, built point by point and simplified for meshing.

mod determinant;
mod error;
mod figures;
mod node;
mod point;
mod ring;
mod tolerance;

pub mod io;

pub use self::error::RingError;
pub use self::figures::{Figure, Figures};
pub use self::node::NodeView;
pub use self::point::Point;
pub use self::ring::{Nodes, Orientation, Points, Ring, RingDisplay};
pub use self::tolerance::{IsClose, Positive, Tolerance};
