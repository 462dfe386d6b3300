use crate::partitioning::{Bvh, FaceRef};
use alloc::vec::Vec;

/// A pair of triangles, one from each mesh, whose AABBs strictly intersect.
///
/// The first element belongs to the mesh of the first BVH given to [`pairwise_pruning`].
pub type CandidatePair<'a, 'b> = (FaceRef<'a>, FaceRef<'b>);

/// Finds every pair of triangles of `bvh1` and `bvh2` whose AABBs strictly intersect.
///
/// Each such pair is returned exactly once, the triangle from `bvh1` first. The order of
/// the pairs follows the breadth-first traversal of both trees and is not otherwise
/// specified. The result is empty if the root AABBs of the two trees don’t intersect.
///
/// Swapping the arguments yields the same pairs with their elements swapped.
///
/// Both trees are only read, so they can be pruned against any number of other trees.
pub fn pairwise_pruning<'a, 'b>(bvh1: &Bvh<'a>, bvh2: &Bvh<'b>) -> Vec<CandidatePair<'a, 'b>> {
    let mut result = Vec::new();
    bvh1.traverse_bvtt(bvh2, |face1, face2| result.push((face1, face2)));

    log::trace!(
        "Pruned {} x {} triangles down to {} candidate pairs.",
        bvh1.leaf_count(),
        bvh2.leaf_count(),
        result.len()
    );

    result
}

/// Same as [`pairwise_pruning`] but returns the indices of the triangles in their mesh
/// instead of references to them.
pub fn pairwise_pruning_indices(bvh1: &Bvh, bvh2: &Bvh) -> Vec<(u32, u32)> {
    let mut result = Vec::new();
    bvh1.traverse_bvtt(bvh2, |face1, face2| result.push((face1.index, face2.index)));
    result
}
