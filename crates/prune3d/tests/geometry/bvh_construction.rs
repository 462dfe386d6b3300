use crate::common::{face1, face2, face3, random_lattice_mesh, translated};
use prune3d::bounding_volume::Aabb;
use prune3d::math::Point;
use prune3d::partitioning::{Bvh, BvhBuildError, BvhBuildStrategy, BvhNode, NaiveOctSplit};
use prune3d::shape::Triangle;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn five_faces() -> Vec<Triangle> {
    vec![
        translated(face1(), 0.0, 3.0, 0.0),
        translated(face1(), 0.0, -2.0, 0.0),
        face2(),
        translated(face1(), 0.0, 0.0, 3.0),
        face3(),
    ]
}

fn assert_contains_subtree_vertices(node: &BvhNode) {
    let aabb = node.aabb();

    for child in node.children() {
        assert!(aabb.contains(child.aabb()));
        assert_contains_subtree_vertices(child);
    }

    if let Some(face) = node.face() {
        for vertex in face.triangle.vertices() {
            assert!(aabb.contains_local_point(&vertex));
        }
    }
}

#[test]
fn bvh_leaf_per_face() {
    let mesh = five_faces();
    let bvh = Bvh::from_triangles(NaiveOctSplit, &mesh).unwrap();

    assert_eq!(bvh.leaf_count(), 5);
    bvh.assert_well_formed();

    let mut seen = [0; 5];
    for face in bvh.leaves(|_| true) {
        seen[face.index as usize] += 1;
        assert_eq!(face.triangle, &mesh[face.index as usize]);
    }
    assert_eq!(seen, [1; 5]);

    assert_contains_subtree_vertices(bvh.root());
    assert_eq!(Some(*bvh.root_aabb()), Aabb::from_triangles(&mesh));
}

#[test]
fn bvh_root_aabb_encloses_mesh() {
    let mesh = five_faces();
    let bvh = Bvh::new(&mesh).unwrap();

    assert_eq!(
        *bvh.root_aabb(),
        Aabb::new(Point::new(0.0, -2.0, 0.0), Point::new(1.0, 4.0, 4.0))
    );
}

#[test]
fn bvh_random_meshes_are_well_formed() {
    let mut rng = StdRng::seed_from_u64(0);

    for len in [1, 2, 3, 7, 8, 9, 50, 216] {
        let mesh = random_lattice_mesh(&mut rng, len, 0.0);

        for strategy in [BvhBuildStrategy::OctSplit, BvhBuildStrategy::Median] {
            let bvh = Bvh::from_triangles(strategy, &mesh).unwrap();
            bvh.assert_well_formed();
            assert_eq!(bvh.leaf_count() as usize, len);
            assert_contains_subtree_vertices(bvh.root());
        }
    }
}

#[test]
fn bvh_empty_mesh() {
    let mesh: Vec<Triangle> = Vec::new();
    assert_eq!(
        Bvh::from_triangles(NaiveOctSplit, &mesh).err(),
        Some(BvhBuildError::InvalidInput)
    );
    assert_eq!(Bvh::new(&mesh).err(), Some(BvhBuildError::InvalidInput));
}

#[test]
fn bvh_degenerate_triangles() {
    // Zero-area triangles are accepted, and give flat or point-like leaf AABBs.
    let point = Triangle::new(
        Point::new(2.0, 2.0, 2.0),
        Point::new(2.0, 2.0, 2.0),
        Point::new(2.0, 2.0, 2.0),
    );
    let segment = Triangle::new(
        Point::new(0.0, 0.0, 0.0),
        Point::new(0.5, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
    );
    let mesh = [point, segment];

    let bvh = Bvh::new(&mesh).unwrap();
    bvh.assert_well_formed();
    assert_eq!(bvh.leaf_count(), 2);
}
