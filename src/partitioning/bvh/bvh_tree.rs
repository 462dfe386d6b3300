use crate::bounding_volume::Aabb;
use crate::shape::Triangle;
use alloc::vec::Vec;
use core::slice;

/// A non-owning reference to one triangle of the mesh a [`Bvh`] was built from.
///
/// `index` is the position of `triangle` in the slice given to [`Bvh::from_triangles`], so
/// that callers can look up any per-face data they keep alongside the mesh.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FaceRef<'a> {
    /// Index of the triangle in the mesh slice.
    pub index: u32,
    /// The triangle itself.
    pub triangle: &'a Triangle,
}

impl<'a> FaceRef<'a> {
    /// Creates a reference to the `index`-th triangle of a mesh.
    #[inline]
    pub fn new(index: u32, triangle: &'a Triangle) -> Self {
        Self { index, triangle }
    }
}

/// A node (internal or leaf) of a [`Bvh`].
///
/// The AABB of a node tightly encloses every vertex of every triangle of its subtree.
#[derive(Clone, Debug)]
pub enum BvhNode<'a> {
    /// A leaf, referencing exactly one triangle.
    Leaf {
        /// The AABB of the triangle.
        aabb: Aabb,
        /// The triangle referenced by this leaf.
        face: FaceRef<'a>,
    },
    /// An internal node with at least one child.
    Interior {
        /// The AABB of every triangle contained by this subtree.
        aabb: Aabb,
        /// The children of this node, in the order given by the partitioning policy.
        children: Vec<BvhNode<'a>>,
    },
}

impl<'a> BvhNode<'a> {
    /// This node’s AABB.
    #[inline]
    pub fn aabb(&self) -> &Aabb {
        match self {
            BvhNode::Leaf { aabb, .. } | BvhNode::Interior { aabb, .. } => aabb,
        }
    }

    /// Is this node a leaf?
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, BvhNode::Leaf { .. })
    }

    /// The children of this node.
    ///
    /// This is empty if and only if the node is a leaf.
    #[inline]
    pub fn children(&self) -> &[BvhNode<'a>] {
        match self {
            BvhNode::Leaf { .. } => &[],
            BvhNode::Interior { children, .. } => children,
        }
    }

    /// If this node is a leaf, the triangle it references.
    #[inline]
    pub fn face(&self) -> Option<FaceRef<'a>> {
        match self {
            BvhNode::Leaf { face, .. } => Some(*face),
            BvhNode::Interior { .. } => None,
        }
    }

    /// The nodes this node is replaced by when descending one level during a simultaneous
    /// traversal: its children if it is internal, or itself if it is a leaf.
    #[inline]
    pub(super) fn descend(&self) -> &[BvhNode<'a>] {
        match self {
            BvhNode::Leaf { .. } => slice::from_ref(self),
            BvhNode::Interior { children, .. } => children,
        }
    }

    /// The number of leaves of the subtree rooted at this node.
    pub fn leaf_count(&self) -> u32 {
        match self {
            BvhNode::Leaf { .. } => 1,
            BvhNode::Interior { children, .. } => children.iter().map(Self::leaf_count).sum(),
        }
    }

    /// The number of nodes (internal and leaves) of the subtree rooted at this node.
    pub fn node_count(&self) -> u32 {
        1 + self.children().iter().map(Self::node_count).sum::<u32>()
    }

    /// The depth of the subtree rooted at this node. A single leaf has a depth of 1.
    pub fn subtree_depth(&self) -> u32 {
        1 + self
            .children()
            .iter()
            .map(Self::subtree_depth)
            .max()
            .unwrap_or(0)
    }
}

/// A Bounding Volume Hierarchy over the triangles of a mesh.
///
/// The tree is built once, top-down, by [`Bvh::from_triangles`], and is immutable
/// afterward. Its leaves borrow the triangles from the mesh slice it was built from, so
/// the lifetime `'a` guarantees the BVH never outlives that mesh.
#[derive(Clone, Debug)]
pub struct Bvh<'a> {
    pub(super) root: BvhNode<'a>,
}

impl<'a> Bvh<'a> {
    /// The root of this tree.
    #[inline]
    pub fn root(&self) -> &BvhNode<'a> {
        &self.root
    }

    /// The AABB bounding everything contained by this BVH.
    #[inline]
    pub fn root_aabb(&self) -> &Aabb {
        self.root.aabb()
    }

    /// The number of leaves of this tree, i.e., the number of triangles it was built from.
    pub fn leaf_count(&self) -> u32 {
        self.root.leaf_count()
    }

    /// The number of nodes of this tree.
    pub fn node_count(&self) -> u32 {
        self.root.node_count()
    }

    /// The depth of this tree. A tree with a single leaf has a depth of 1.
    pub fn subtree_depth(&self) -> u32 {
        self.root.subtree_depth()
    }
}
