mod equality;
mod iter;
mod measure;
mod simplify;

use num_traits::Float;

pub use self::iter::{Nodes, Points, RingDisplay};
pub use self::measure::Orientation;

use crate::{IsClose, RingError, Tolerance, node::Node, point::Point};

/// The minimum amount of points a ring requires to be closed.
pub(crate) const MIN_POINTS: usize = 3;

/// A closed polygonal chain of points.
///
/// Nodes live in a dense arena and link each other by index. The entry node is the anchor from
/// which every traversal starts.
///
/// A ring has no internal synchronization: mutating it from more than one thread at a time must
/// be prevented by the caller.
#[derive(Debug, Clone)]
pub struct Ring<T = f64> {
    /// The arena of nodes of the ring.
    nodes: Vec<Node<T>>,
    /// The index of the node every traversal starts from, if any.
    entry: Option<usize>,
    /// Whether the ring accepts new points or not.
    closed: bool,
    /// The tolerance used when looking for points and collinear nodes.
    tolerance: Tolerance<T>,
}

impl<T> Default for Ring<T>
where
    T: Default,
{
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            entry: None,
            closed: false,
            tolerance: Tolerance::default(),
        }
    }
}

impl<T, P> TryFrom<Vec<P>> for Ring<T>
where
    T: Float + Default,
    P: Into<Point<T>>,
{
    type Error = RingError;

    /// Returns the closed ring made of the given points, in order.
    fn try_from(points: Vec<P>) -> Result<Self, Self::Error> {
        let mut ring = Self::new();
        for point in points {
            ring.add_point(point.into())?;
        }

        ring.close()?;
        Ok(ring)
    }
}

impl<T> Ring<T>
where
    T: Default,
{
    /// Returns a new empty and open ring.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T> Ring<T> {
    /// Returns self with the given tolerance for point lookup and collinearity.
    pub fn with_tolerance(mut self, tolerance: Tolerance<T>) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Returns the tolerance of the ring.
    pub fn tolerance(&self) -> &Tolerance<T> {
        &self.tolerance
    }

    /// Returns the amount of points in the ring.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if, and only if, the ring has no points.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns true if, and only if, the ring has been closed.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Returns the point at the given position in traversal order, if any.
    pub fn get(&self, position: usize) -> Option<&Point<T>> {
        self.points().nth(position)
    }

    /// Marks the ring as final, so no more points can be inserted in it.
    pub fn close(&mut self) -> Result<(), RingError> {
        if self.closed {
            return Err(RingError::AlreadyClosed);
        }

        if self.nodes.len() < MIN_POINTS {
            return Err(RingError::InsufficientPoints(self.nodes.len()));
        }

        self.closed = true;
        tracing::debug!(points = self.nodes.len(), "ring closed");
        Ok(())
    }

    /// Moves the entry node the given amount of steps forward.
    ///
    /// The resulting ring is equal to the original one.
    pub fn rotate(&mut self, steps: usize) {
        let Some(mut entry) = self.entry else {
            return;
        };

        for _ in 0..steps % self.nodes.len() {
            entry = self.nodes[entry].next;
        }

        self.entry = Some(entry);
    }

    /// Flips the orientation of the ring, keeping the same entry node.
    pub fn reverse(&mut self) {
        self.nodes.iter_mut().for_each(Node::flip);
    }

    /// Pushes a new node between the given ones.
    fn attach(&mut self, point: Point<T>, previous: usize, next: usize) {
        let index = self.nodes.len();
        self.nodes.push(Node {
            point,
            next,
            previous,
        });

        self.nodes[previous].next = index;
        self.nodes[next].previous = index;
    }

    /// Unlinks the node at the given index and drops it from the arena.
    ///
    /// The last node of the arena is moved into the released index. Returns the index the
    /// previous node of the removed one has after the removal, or [`None`] if the given node is
    /// the only one in the ring, in which case nothing is removed.
    fn detach(&mut self, index: usize) -> Option<usize> {
        if self.nodes.len() <= 1 {
            return None;
        }

        let (previous, next) = (self.nodes[index].previous, self.nodes[index].next);
        self.nodes[previous].next = next;
        self.nodes[next].previous = previous;

        if self.entry == Some(index) {
            self.entry = Some(next);
        }

        let last = self.nodes.len() - 1;
        self.nodes.swap_remove(index);
        if index == last {
            return Some(previous);
        }

        let moved = &mut self.nodes[index];
        if moved.previous == last {
            moved.previous = index;
        }

        if moved.next == last {
            moved.next = index;
        }

        let (before, after) = (moved.previous, moved.next);
        self.nodes[before].next = index;
        self.nodes[after].previous = index;

        if self.entry == Some(last) {
            self.entry = Some(index);
        }

        Some(if previous == last { index } else { previous })
    }

    /// Returns an iterator over the indexes of the nodes in traversal order.
    fn indexes(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(self.entry, |&index| Some(self.nodes[index].next))
            .take(self.nodes.len())
    }
}

impl<T> Ring<T>
where
    T: Float,
{
    /// Appends the given point right before the entry node.
    pub fn add_point(&mut self, point: Point<T>) -> Result<(), RingError> {
        if self.closed {
            return Err(RingError::Closed);
        }

        match self.entry {
            Some(entry) => self.attach(point, self.nodes[entry].previous, entry),
            None => {
                self.nodes.push(Node {
                    point,
                    next: 0,
                    previous: 0,
                });

                self.entry = Some(0);
            }
        }

        Ok(())
    }

    /// Inserts the given point right after the first node holding the `after` point.
    pub fn insert_point(&mut self, point: Point<T>, after: &Point<T>) -> Result<(), RingError> {
        if self.closed {
            return Err(RingError::Closed);
        }

        let previous = self.locate(after).ok_or(RingError::PointNotFound)?;
        self.attach(point, previous, self.nodes[previous].next);
        Ok(())
    }

    /// Returns the position, in traversal order, of the first node holding the given point.
    pub fn find_point(&self, point: &Point<T>) -> Option<usize> {
        self.points()
            .position(|candidate| candidate.is_close(point, &self.tolerance))
    }

    /// Returns true if, and only if, the given point exists in the ring.
    pub fn contains(&self, point: &Point<T>) -> bool {
        self.find_point(point).is_some()
    }

    /// Returns the index of the first node holding the given point, in traversal order.
    fn locate(&self, point: &Point<T>) -> Option<usize> {
        self.indexes()
            .find(|&index| self.nodes[index].point.is_close(point, &self.tolerance))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Point, Ring, RingError, Tolerance, point};

    /// Returns true if, and only if, the links of every node in the ring are consistent.
    pub(crate) fn is_circular<T>(ring: &Ring<T>) -> bool {
        if ring.nodes.is_empty() {
            return ring.entry.is_none();
        }

        let links = ring.nodes.iter().enumerate().all(|(index, node)| {
            ring.nodes[node.next].previous == index && ring.nodes[node.previous].next == index
        });

        let visited = ring.indexes().collect::<std::collections::BTreeSet<_>>().len();
        links && ring.entry.is_some() && visited == ring.nodes.len()
    }

    pub(crate) fn open_ring(points: &[[f64; 2]]) -> Ring {
        let mut ring = Ring::new();
        for &point in points {
            ring.add_point(point.into()).unwrap();
        }

        ring
    }

    #[test]
    fn ring_add_point() {
        struct Test {
            name: &'static str,
            points: Vec<[f64; 2]>,
            want: Vec<Point>,
        }

        vec![
            Test {
                name: "empty ring",
                points: vec![],
                want: vec![],
            },
            Test {
                name: "single point",
                points: vec![[1., 1.]],
                want: vec![point!(1., 1.)],
            },
            Test {
                name: "several points",
                points: vec![[0., 0.], [1., 0.], [1., 2.], [0., 2.]],
                want: vec![point!(0., 0.), point!(1., 0.), point!(1., 2.), point!(0., 2.)],
            },
            Test {
                name: "repeated points",
                points: vec![[0., 0.], [0., 0.], [1., 1.]],
                want: vec![point!(0., 0.), point!(0., 0.), point!(1., 1.)],
            },
        ]
        .into_iter()
        .for_each(|test| {
            let ring = open_ring(&test.points);
            let got = ring.points().copied().collect::<Vec<_>>();

            assert_eq!(got, test.want, "{}", test.name);
            assert_eq!(ring.len(), test.want.len(), "{}", test.name);
            assert!(is_circular(&ring), "{}", test.name);
        });
    }

    #[test]
    fn single_node_is_self_loop() {
        let ring = open_ring(&[[3., 4.]]);

        assert_eq!(ring.nodes[0].next, 0);
        assert_eq!(ring.nodes[0].previous, 0);
    }

    #[test]
    fn ring_insert_point() {
        struct Test {
            name: &'static str,
            points: Vec<[f64; 2]>,
            point: Point,
            after: Point,
            want: Result<Vec<Point>, RingError>,
        }

        vec![
            Test {
                name: "after the entry point",
                points: vec![[0., 0.], [1., 0.], [0., 1.]],
                point: point!(-1., -1.),
                after: point!(0., 0.),
                want: Ok(vec![
                    point!(0., 0.),
                    point!(-1., -1.),
                    point!(1., 0.),
                    point!(0., 1.),
                ]),
            },
            Test {
                name: "after the last point",
                points: vec![[0., 0.], [1., 0.], [0., 1.]],
                point: point!(-1., -1.),
                after: point!(0., 1.),
                want: Ok(vec![
                    point!(0., 0.),
                    point!(1., 0.),
                    point!(0., 1.),
                    point!(-1., -1.),
                ]),
            },
            Test {
                name: "after the first of repeated points",
                points: vec![[0., 0.], [1., 0.], [0., 0.]],
                point: point!(5., 5.),
                after: point!(0., 0.),
                want: Ok(vec![
                    point!(0., 0.),
                    point!(5., 5.),
                    point!(1., 0.),
                    point!(0., 0.),
                ]),
            },
            Test {
                name: "missing anchor",
                points: vec![[0., 0.], [1., 0.], [0., 1.]],
                point: point!(5., 5.),
                after: point!(9., 9.),
                want: Err(RingError::PointNotFound),
            },
            Test {
                name: "empty ring",
                points: vec![],
                point: point!(5., 5.),
                after: point!(0., 0.),
                want: Err(RingError::PointNotFound),
            },
        ]
        .into_iter()
        .for_each(|test| {
            let mut ring = open_ring(&test.points);
            let got = ring
                .insert_point(test.point, &test.after)
                .map(|_| ring.points().copied().collect::<Vec<_>>());

            assert_eq!(got, test.want, "{}", test.name);
            assert!(is_circular(&ring), "{}", test.name);
        });
    }

    #[test]
    fn ring_close() {
        struct Test {
            name: &'static str,
            points: Vec<[f64; 2]>,
            closed: bool,
            want: Result<(), RingError>,
        }

        vec![
            Test {
                name: "triangle",
                points: vec![[0., 0.], [1., 0.], [0., 1.]],
                closed: false,
                want: Ok(()),
            },
            Test {
                name: "two points",
                points: vec![[0., 0.], [1., 0.]],
                closed: false,
                want: Err(RingError::InsufficientPoints(2)),
            },
            Test {
                name: "empty ring",
                points: vec![],
                closed: false,
                want: Err(RingError::InsufficientPoints(0)),
            },
            Test {
                name: "already closed",
                points: vec![[0., 0.], [1., 0.], [0., 1.]],
                closed: true,
                want: Err(RingError::AlreadyClosed),
            },
        ]
        .into_iter()
        .for_each(|test| {
            let mut ring = open_ring(&test.points);
            if test.closed {
                ring.close().unwrap();
            }

            let got = ring.close();
            assert_eq!(got, test.want, "{}", test.name);
            assert_eq!(ring.len(), test.points.len(), "{}", test.name);
            assert_eq!(
                ring.is_closed(),
                test.closed || test.want.is_ok(),
                "{}",
                test.name
            );
        });
    }

    #[test]
    fn closed_ring_rejects_points() {
        let mut ring = Ring::try_from(vec![[0., 0.], [1., 0.], [1., 1.]]).unwrap();

        assert_eq!(ring.add_point(point!(2., 2.)), Err(RingError::Closed));
        assert_eq!(
            ring.insert_point(point!(2., 2.), &point!(0., 0.)),
            Err(RingError::Closed)
        );
        assert_eq!(ring.len(), 3);
    }

    #[test]
    fn ring_find_point() {
        struct Test {
            name: &'static str,
            points: Vec<[f64; 2]>,
            point: Point,
            want: Option<usize>,
        }

        vec![
            Test {
                name: "missing point",
                points: vec![[0., 0.], [1., 0.], [1., 2.], [0., 2.]],
                point: point!(0., 1.),
                want: None,
            },
            Test {
                name: "existing point",
                points: vec![[0., 0.], [2., 2.], [0., 1.], [-2., 2.]],
                point: point!(0., 1.),
                want: Some(2),
            },
            Test {
                name: "first of repeated points",
                points: vec![[0., 0.], [0., 1.], [0., 1.]],
                point: point!(0., 1.),
                want: Some(1),
            },
            Test {
                name: "empty ring",
                points: vec![],
                point: point!(0., 1.),
                want: None,
            },
        ]
        .into_iter()
        .for_each(|test| {
            let got = open_ring(&test.points).find_point(&test.point);
            assert_eq!(got, test.want, "{}", test.name);
        });
    }

    #[test]
    fn find_point_within_tolerance() {
        let ring = open_ring(&[[0., 0.], [1., 0.], [1., 1.]]);
        let point = point!(1. + 1e-12, 1.);

        assert_eq!(ring.find_point(&point), None);
        assert_eq!(
            ring.with_tolerance(Tolerance::absolute(1e-10))
                .find_point(&point),
            Some(2)
        );
    }

    #[test]
    fn ring_rotate() {
        let mut ring = Ring::try_from(vec![[0., 0.], [1., 0.], [1., 1.]]).unwrap();

        ring.rotate(4);
        assert_eq!(ring.get(0), Some(&point!(1., 0.)));
        assert_eq!(ring.get(2), Some(&point!(0., 0.)));
        assert_eq!(ring.get(3), None);
    }

    #[test]
    fn ring_reverse() {
        struct Test {
            name: &'static str,
            points: Vec<[f64; 2]>,
            want: Vec<Point>,
        }

        vec![
            Test {
                name: "empty ring",
                points: vec![],
                want: vec![],
            },
            Test {
                name: "single point",
                points: vec![[1., 1.]],
                want: vec![point!(1., 1.)],
            },
            Test {
                name: "square",
                points: vec![[0., 0.], [1., 0.], [1., 1.], [0., 1.]],
                want: vec![point!(0., 0.), point!(0., 1.), point!(1., 1.), point!(1., 0.)],
            },
        ]
        .into_iter()
        .for_each(|test| {
            let mut ring = open_ring(&test.points);
            ring.reverse();

            let got = ring.points().copied().collect::<Vec<_>>();
            assert_eq!(got, test.want, "{}", test.name);
            assert!(is_circular(&ring), "{}", test.name);
        });
    }

    #[test]
    fn add_point_after_reverse() {
        let mut ring = open_ring(&[[0., 0.], [1., 0.], [1., 1.]]);
        ring.reverse();
        ring.add_point(point!(2., 2.)).unwrap();

        let got = ring.points().copied().collect::<Vec<_>>();
        let want = vec![point!(0., 0.), point!(1., 1.), point!(1., 0.), point!(2., 2.)];
        assert_eq!(got, want);
    }

    #[test]
    fn ring_detach() {
        let mut ring = open_ring(&[[0., 0.], [1., 0.], [2., 0.], [3., 0.]]);

        // removing the entry node moves the entry forward.
        assert_eq!(ring.detach(0), Some(0));
        assert!(is_circular(&ring));
        assert_eq!(
            ring.points().copied().collect::<Vec<_>>(),
            vec![point!(1., 0.), point!(2., 0.), point!(3., 0.)]
        );

        let mut single = open_ring(&[[0., 0.]]);
        assert_eq!(single.detach(0), None);
        assert_eq!(single.len(), 1);
    }

    #[derive(Debug, Clone)]
    enum Operation {
        Add(Point),
        Insert(Point, usize),
        Reverse,
        Rotate(usize),
        RemoveCollinear,
        Detach(usize),
    }

    /// Small integer coordinates, so collinear and repeated points show up often.
    fn coordinates() -> impl Strategy<Value = Point> {
        (-4i32..=4, -4i32..=4).prop_map(|(x, y)| point!(x as f64, y as f64))
    }

    fn operation() -> impl Strategy<Value = Operation> {
        prop_oneof![
            4 => coordinates().prop_map(Operation::Add),
            2 => (coordinates(), any::<usize>())
                .prop_map(|(point, position)| Operation::Insert(point, position)),
            1 => Just(Operation::Reverse),
            1 => any::<usize>().prop_map(Operation::Rotate),
            1 => Just(Operation::RemoveCollinear),
            1 => any::<usize>().prop_map(Operation::Detach),
        ]
    }

    proptest! {
        #[test]
        fn operations_keep_the_ring_circular(
            operations in prop::collection::vec(operation(), 0..64)
        ) {
            let mut ring = Ring::new();
            let mut want: Vec<Point> = Vec::new();

            for operation in operations {
                match operation {
                    Operation::Add(point) => {
                        ring.add_point(point).unwrap();
                        want.push(point);
                    }
                    Operation::Insert(point, position) => {
                        if want.is_empty() {
                            prop_assert_eq!(
                                ring.insert_point(point, &point),
                                Err(RingError::PointNotFound)
                            );
                        } else {
                            let after = want[position % want.len()];
                            ring.insert_point(point, &after).unwrap();

                            let anchor = want.iter().position(|candidate| *candidate == after).unwrap();
                            want.insert(anchor + 1, point);
                        }
                    }
                    Operation::Reverse => {
                        ring.reverse();
                        if !want.is_empty() {
                            want[1..].reverse();
                        }
                    }
                    Operation::Rotate(steps) => {
                        ring.rotate(steps);
                        if !want.is_empty() {
                            let len = want.len();
                            want.rotate_left(steps % len);
                        }
                    }
                    Operation::RemoveCollinear => {
                        let removed = ring.remove_collinear_points();
                        prop_assert_eq!(ring.len() + removed, want.len());

                        want = ring.points().copied().collect();
                        let len = want.len();
                        if len > 3 {
                            prop_assert!((0..len).all(|index| !Point::is_collinear(
                                &want[(index + len - 1) % len],
                                &want[index],
                                &want[(index + 1) % len],
                            )));
                        }
                    }
                    Operation::Detach(index) => {
                        if want.len() > 1 {
                            let index = index % want.len();
                            let position = ring.indexes().position(|candidate| candidate == index).unwrap();
                            let next = ring.nodes[ring.nodes[index].next].point;

                            let previous = ring.detach(index).unwrap();
                            prop_assert_eq!(ring.nodes[ring.nodes[previous].next].point, next);
                            want.remove(position);
                        }
                    }
                }

                prop_assert!(is_circular(&ring));
                prop_assert_eq!(ring.points().copied().collect::<Vec<_>>(), want.clone());
            }
        }
    }
}
