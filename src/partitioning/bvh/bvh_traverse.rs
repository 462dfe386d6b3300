use super::{Bvh, BvhNode, FaceRef};
use smallvec::SmallVec;

const TRAVERSAL_STACK_SIZE: usize = 32;

/// Depth-first iterator through the leaves of a [`Bvh`].
///
/// Created by [`Bvh::leaves`].
pub struct Leaves<'t, 'a, Check: Fn(&BvhNode<'a>) -> bool> {
    stack: SmallVec<[&'t BvhNode<'a>; TRAVERSAL_STACK_SIZE]>,
    check: Check,
}

impl<'t, 'a, Check: Fn(&BvhNode<'a>) -> bool> Leaves<'t, 'a, Check> {
    fn new(tree: &'t Bvh<'a>, check: Check) -> Self {
        let mut stack = SmallVec::new();

        if check(&tree.root) {
            stack.push(&tree.root);
        }

        Leaves { stack, check }
    }
}

impl<'t, 'a, Check: Fn(&BvhNode<'a>) -> bool> Iterator for Leaves<'t, 'a, Check> {
    type Item = FaceRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node = self.stack.pop()?;

            match node {
                BvhNode::Leaf { face, .. } => return Some(*face),
                BvhNode::Interior { children, .. } => {
                    // Reversed so the first child is popped first.
                    for child in children.iter().rev() {
                        if (self.check)(child) {
                            self.stack.push(child);
                        }
                    }
                }
            }
        }
    }
}

impl<'a> Bvh<'a> {
    /// Iterates through the leaves, in depth-first order.
    ///
    /// The `check_node` closure is called on every node before visiting it. If it returns
    /// `false`, the node and all its descendants are skipped. This is useful for pruning whole
    /// sub-trees based on a geometric predicate on the node’s AABB. Pass `|_| true` to visit
    /// every leaf.
    ///
    /// Siblings are visited in the order the partitioning policy produced them.
    pub fn leaves<F: Fn(&BvhNode<'a>) -> bool>(&self, check_node: F) -> Leaves<'_, 'a, F> {
        Leaves::new(self, check_node)
    }
}
