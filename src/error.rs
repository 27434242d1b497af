/// The reasons a [`Ring`](crate::Ring) operation can fail.
///
/// A failing operation always leaves the ring as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RingError {
    /// The ring is closed and no longer accepts new points.
    #[error("the ring is closed and does not accept new points")]
    Closed,
    /// The ring was closed already.
    #[error("the ring is already closed")]
    AlreadyClosed,
    /// The operation requires the ring to be closed.
    #[error("the ring is not closed")]
    NotClosed,
    /// The anchor point does not exist in the ring.
    #[error("the point does not exist in the ring")]
    PointNotFound,
    /// A ring requires at least three points to be closed.
    #[error("a ring requires at least 3 points, got {0}")]
    InsufficientPoints(usize),
}
