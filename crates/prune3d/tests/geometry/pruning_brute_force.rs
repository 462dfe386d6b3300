use crate::common::{brute_force_pairs, random_lattice_mesh, sorted_pairs};
use prune3d::partitioning::{Bvh, BvhBuildStrategy};
use prune3d::query::pairwise_pruning;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn pruning_matches_brute_force() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..50 {
        let len1 = rng.gen_range(1..=80);
        let len2 = rng.gen_range(1..=80);
        let mesh1 = random_lattice_mesh(&mut rng, len1, 0.0);
        let mesh2 = random_lattice_mesh(&mut rng, len2, 0.2);
        let expected = brute_force_pairs(&mesh1, &mesh2);

        for strategy in [BvhBuildStrategy::OctSplit, BvhBuildStrategy::Median] {
            let bvh1 = Bvh::from_triangles(strategy, &mesh1).unwrap();
            let bvh2 = Bvh::from_triangles(strategy, &mesh2).unwrap();

            // No duplicates: the sorted output has the same length as the raw one.
            let pairs = sorted_pairs(&bvh1, &bvh2);
            assert_eq!(pairwise_pruning(&bvh1, &bvh2).len(), pairs.len());
            assert_eq!(pairs, expected, "{:?}", strategy);
        }
    }
}

#[test]
fn pruning_shifted_meshes_never_overlap() {
    let mut rng = StdRng::seed_from_u64(7);

    // A shift of 0.5 moves every triangle of the second mesh to [i + 0.5, i + 0.9], which
    // never overlaps the [i, i + 0.4] range of the first one.
    let mesh1 = random_lattice_mesh(&mut rng, 100, 0.0);
    let mesh2 = random_lattice_mesh(&mut rng, 100, 0.5);

    let bvh1 = Bvh::new(&mesh1).unwrap();
    let bvh2 = Bvh::new(&mesh2).unwrap();

    assert!(bvh1.root_aabb().intersects(bvh2.root_aabb()));
    assert!(pairwise_pruning(&bvh1, &bvh2).is_empty());
}
