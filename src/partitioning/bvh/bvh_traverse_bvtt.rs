use super::{Bvh, BvhNode, FaceRef};
use alloc::vec::Vec;

impl<'a> Bvh<'a> {
    /// Traverses the Bounding Volume Test Tree of this tree against `other`.
    ///
    /// The closure `f` is called on each pair of leaves, one from `self` and one from `other`,
    /// whose AABBs strictly intersect. Each such pair is reported exactly once.
    ///
    /// The traversal is breadth-first. Starting from the pair of roots, each level replaces
    /// every pair of nodes by the pairs of their children (a leaf standing for itself), and
    /// only keeps the pairs with intersecting AABBs. Subtrees whose AABBs don’t intersect
    /// are never visited.
    pub fn traverse_bvtt<'b>(&self, other: &Bvh<'b>, mut f: impl FnMut(FaceRef<'a>, FaceRef<'b>)) {
        if !self.root.aabb().intersects(other.root.aabb()) {
            log::debug!("The root AABBs are disjoint, skipping the traversal.");
            return;
        }

        // A leaf descends into itself, so a pair of leaves is emitted as soon as it is visited
        // and never pushed again.
        let mut curr: Vec<(&BvhNode<'a>, &BvhNode<'b>)> = alloc::vec![(&self.root, &other.root)];
        let mut next = Vec::new();
        let mut num_levels = 0;

        while !curr.is_empty() {
            num_levels += 1;

            for (node1, node2) in curr.drain(..) {
                for child1 in node1.descend() {
                    for child2 in node2.descend() {
                        if !child1.aabb().intersects(child2.aabb()) {
                            continue;
                        }

                        match (child1.face(), child2.face()) {
                            (Some(face1), Some(face2)) => f(face1, face2),
                            _ => next.push((child1, child2)),
                        }
                    }
                }
            }

            core::mem::swap(&mut curr, &mut next);
        }

        log::trace!("BVTT traversal completed in {} levels.", num_levels);
    }
}
