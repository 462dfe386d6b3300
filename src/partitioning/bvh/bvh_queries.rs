use super::{Bvh, BvhNode, FaceRef};
use crate::bounding_volume::Aabb;

impl<'a> Bvh<'a> {
    /// Iterates through all the leaves with an AABB strictly intersecting the given `aabb`.
    ///
    /// Subtrees whose AABB doesn’t intersect `aabb` are skipped, with the same strict test as
    /// [`Bvh::traverse_bvtt`]: touching boxes don’t intersect.
    pub fn intersect_aabb<'t>(
        &'t self,
        aabb: &'t Aabb,
    ) -> impl Iterator<Item = FaceRef<'a>> + 't {
        self.leaves(move |node: &BvhNode<'a>| node.aabb().intersects(aabb))
    }
}
