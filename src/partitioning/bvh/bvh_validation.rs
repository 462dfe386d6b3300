use super::{Bvh, BvhNode};
use alloc::vec;

impl Bvh<'_> {
    /// Panics if the tree isn’t well-formed.
    ///
    /// The tree is well-formed if it is topologically correct (internal nodes have children,
    /// and every triangle of the mesh is referenced by exactly one leaf) and geometrically
    /// correct (the AABB of a parent contains the ones of its children, and the AABB of a
    /// leaf is the one of its triangle).
    ///
    /// This is mostly a utility for debugging.
    pub fn assert_well_formed(&self) {
        let leaf_count = self.leaf_count();
        let mut visited = vec![false; leaf_count as usize];
        let calculated_leaf_count = self.assert_well_formed_recurse(&self.root, &mut visited);

        assert_eq!(calculated_leaf_count, leaf_count);
        assert!(visited.iter().all(|v| *v));
    }

    fn assert_well_formed_recurse(&self, node: &BvhNode<'_>, visited: &mut [bool]) -> u32 {
        match node {
            BvhNode::Leaf { aabb, face } => {
                let id = face.index as usize;
                assert!(id < visited.len(), "Face index {} out of bounds.", id);
                assert!(!visited[id], "Face {} referenced twice.", id);
                visited[id] = true;
                assert_eq!(*aabb, face.triangle.local_aabb());
                1
            }
            BvhNode::Interior { aabb, children } => {
                assert!(!children.is_empty(), "Internal node without children.");

                let mut calculated_leaf_count = 0;
                for child in children {
                    assert!(aabb.contains(child.aabb()));
                    calculated_leaf_count += self.assert_well_formed_recurse(child, visited);
                }

                assert_eq!(node.leaf_count(), calculated_leaf_count);
                calculated_leaf_count
            }
        }
    }
}
