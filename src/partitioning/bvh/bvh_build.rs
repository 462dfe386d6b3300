use super::bvh_partition::{BvhBuildStrategy, Partition, PartitioningPolicy};
use super::{Bvh, BvhNode, FaceRef};
use crate::bounding_volume::Aabb;
use crate::shape::Triangle;
use alloc::vec::Vec;

/// Error that can be generated while building a [`Bvh`].
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum BvhBuildError {
    /// The triangle slice is empty, or too large to be indexed with `u32`, or its vertex
    /// coordinates are NaN along some axis.
    #[error("cannot build a bvh from an empty or non-finite set of triangles")]
    InvalidInput,
    /// The partitioning policy did not split a set of `len` faces into smaller groups.
    #[error("the partitioning policy did not split a set of {len} faces")]
    NonProgressingPartition {
        /// The number of faces the policy was asked to split.
        len: usize,
    },
    /// The partitioning policy returned sub-ranges that are empty, overlapping, out of
    /// bounds, or that do not cover the `len` faces it was given.
    #[error("the partitioning policy returned invalid sub-ranges for a set of {len} faces")]
    InvalidPartition {
        /// The number of faces the policy was asked to split.
        len: usize,
    },
}

impl<'a> Bvh<'a> {
    /// Builds a BVH over `triangles` with the default [`BvhBuildStrategy`].
    pub fn new(triangles: &'a [Triangle]) -> Result<Self, BvhBuildError> {
        Self::from_triangles(BvhBuildStrategy::default(), triangles)
    }

    /// Builds a BVH over `triangles`, splitting the faces with the given partitioning policy.
    ///
    /// The tree is built top-down: the AABB of every node is computed from all the triangles
    /// of its subtree, a node with a single triangle becomes a leaf, and any other node is
    /// split by `policy` and gets one child per returned sub-range. Leaves reference the
    /// triangles by their position in `triangles`.
    ///
    /// The build is deterministic: the same triangles in the same order with the same policy
    /// always result in the same tree.
    ///
    /// # Errors
    ///
    /// - [`BvhBuildError::InvalidInput`] if `triangles` is empty.
    /// - [`BvhBuildError::NonProgressingPartition`] if `policy` fails to split a node with
    ///   more than one triangle. [`NaiveOctSplit`](super::NaiveOctSplit) does so when all
    ///   the centroids of a node lie in the same octant.
    /// - [`BvhBuildError::InvalidPartition`] if `policy` returns sub-ranges that don’t
    ///   partition its input.
    pub fn from_triangles<P>(policy: P, triangles: &'a [Triangle]) -> Result<Self, BvhBuildError>
    where
        P: PartitioningPolicy,
    {
        if triangles.is_empty() || u32::try_from(triangles.len()).is_err() {
            log::debug!(
                "Refusing to build a BVH from {} triangles.",
                triangles.len()
            );
            return Err(BvhBuildError::InvalidInput);
        }

        let mut faces: Vec<_> = triangles
            .iter()
            .enumerate()
            .map(|(i, triangle)| FaceRef::new(i as u32, triangle))
            .collect();

        let root = build_subtree(&policy, &mut faces)?;
        let result = Bvh { root };

        log::trace!(
            "Built a BVH over {} triangles: {} nodes, depth {}.",
            triangles.len(),
            result.node_count(),
            result.subtree_depth()
        );

        Ok(result)
    }
}

fn build_subtree<'a, P: PartitioningPolicy>(
    policy: &P,
    faces: &mut [FaceRef<'a>],
) -> Result<BvhNode<'a>, BvhBuildError> {
    let aabb = Aabb::from_triangles(faces.iter().map(|face| face.triangle)).ok_or_else(|| {
        log::debug!("Cannot compute the AABB of {} triangles.", faces.len());
        BvhBuildError::InvalidInput
    })?;

    if let [face] = &*faces {
        return Ok(BvhNode::Leaf { aabb, face: *face });
    }

    let ranges = policy.partition(faces, &aabb);
    validate_partition(&ranges, faces.len())?;

    let mut children = Vec::with_capacity(ranges.len());
    for range in ranges {
        children.push(build_subtree(policy, &mut faces[range])?);
    }

    Ok(BvhNode::Interior { aabb, children })
}

/// Checks that `ranges` are non-empty, contiguous, increasing, and cover `0..len` while
/// containing at least two elements.
fn validate_partition(ranges: &Partition, len: usize) -> Result<(), BvhBuildError> {
    if ranges.is_empty() || ranges.as_slice() == [0..len] {
        log::debug!("The partitioning policy failed to split {} faces.", len);
        return Err(BvhBuildError::NonProgressingPartition { len });
    }

    let mut expected_start = 0;
    for range in ranges {
        if range.start != expected_start || range.end <= range.start || range.end > len {
            log::debug!(
                "Invalid sub-range {:?} returned when splitting {} faces.",
                range,
                len
            );
            return Err(BvhBuildError::InvalidPartition { len });
        }
        expected_start = range.end;
    }

    if expected_start != len {
        log::debug!(
            "The sub-ranges returned when splitting {} faces only cover 0..{}.",
            len,
            expected_start
        );
        return Err(BvhBuildError::InvalidPartition { len });
    }

    Ok(())
}
