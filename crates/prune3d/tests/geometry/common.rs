use prune3d::math::{Point, Real, Vector};
use prune3d::partitioning::Bvh;
use prune3d::query::pairwise_pruning_indices;
use prune3d::shape::Triangle;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

pub fn face1() -> Triangle {
    Triangle::new(
        Point::new(0.0, 0.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
        Point::new(1.0, 1.0, 0.0),
    )
}

pub fn face2() -> Triangle {
    Triangle::new(
        Point::new(1.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 1.0),
        Point::new(0.0, 1.0, 0.0),
    )
}

pub fn face3() -> Triangle {
    Triangle::new(
        Point::new(0.5, 0.0, 0.0),
        Point::new(0.5, 0.0, 1.0),
        Point::new(0.0, 1.0, 0.0),
    )
}

pub fn translated(triangle: Triangle, x: Real, y: Real, z: Real) -> Triangle {
    triangle.translated(&Vector::new(x, y, z))
}

/// Generates `len` random triangles, each contained in its own cell of a 6x6x6 grid of unit
/// cells (shifted by `shift`), and no wider than 0.4 along each axis.
///
/// Since two triangles always lie in distinct cells, the oct split makes progress on any
/// subset of the result.
pub fn random_lattice_mesh(rng: &mut StdRng, len: usize, shift: Real) -> Vec<Triangle> {
    assert!(len <= 216);

    let mut cells: Vec<_> = (0..6)
        .flat_map(|i| (0..6).flat_map(move |j| (0..6).map(move |k| (i, j, k))))
        .collect();
    cells.shuffle(rng);

    cells[..len]
        .iter()
        .map(|&(i, j, k)| {
            let corner = Point::new(i as Real, j as Real, k as Real) + Vector::repeat(shift);
            let mut vertex =
                || corner + Vector::from_fn(|_, _| rng.gen_range(0.0..=0.4));
            Triangle::new(vertex(), vertex(), vertex())
        })
        .collect()
}

/// Every pair of triangles whose AABBs strictly intersect, by exhaustive search.
pub fn brute_force_pairs(mesh1: &[Triangle], mesh2: &[Triangle]) -> Vec<(u32, u32)> {
    let mut result = Vec::new();

    for (i, t1) in mesh1.iter().enumerate() {
        for (j, t2) in mesh2.iter().enumerate() {
            if t1.local_aabb().intersects(&t2.local_aabb()) {
                result.push((i as u32, j as u32));
            }
        }
    }

    result
}

/// The pairs found by the BVTT traversal, sorted.
pub fn sorted_pairs(bvh1: &Bvh, bvh2: &Bvh) -> Vec<(u32, u32)> {
    let mut result = pairwise_pruning_indices(bvh1, bvh2);
    result.sort_unstable();
    result
}
