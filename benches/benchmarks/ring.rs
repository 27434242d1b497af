use criterion::{BatchSize, Criterion, criterion_group};
use rand::Rng;
use ringmesh::{Point, Ring};

type Sample = [[f64; 2]; 1000];

fn random_ring() -> Ring {
    let mut rng = rand::rng();

    Ring::try_from(rng.random::<Sample>().to_vec()).unwrap_or_default()
}

/// Returns a ring whose points lie on the boundary of a square, with many collinear points on
/// each side.
fn collinear_ring(side: usize) -> Ring {
    let mut ring = Ring::new();
    let side = side as f64;

    let corners = [[0., 0.], [side, 0.], [side, side], [0., side]];
    let directions = [[1., 0.], [0., 1.], [-1., 0.], [0., -1.]];
    for ([x, y], [dx, dy]) in corners.into_iter().zip(directions) {
        for step in 0..side as usize {
            let step = step as f64;
            ring.add_point(Point::from([x + dx * step, y + dy * step])).unwrap();
        }
    }

    ring
}

pub fn large_rings(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("large rings");

    group.bench_function("remove collinear points", |b| {
        b.iter_batched(
            || collinear_ring(250),
            |mut ring| {
                ring.remove_collinear_points();
            },
            BatchSize::LargeInput,
        )
    });

    group.bench_function("equality", |b| {
        b.iter_batched(
            || {
                let ring = random_ring();
                let mut rotated = ring.clone();
                rotated.rotate(ring.len() / 2);
                [ring, rotated]
            },
            |[ring, rotated]| ring == rotated,
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, large_rings);
