use super::FaceRef;
use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use alloc::vec::Vec;
use core::ops::Range;
use ordered_float::OrderedFloat;
use smallvec::SmallVec;

/// The sub-ranges returned by a [`PartitioningPolicy`].
///
/// Eight inline slots fit the output of [`NaiveOctSplit`] without allocating.
pub type Partition = SmallVec<[Range<usize>; 8]>;

/// A strategy for splitting a set of triangles into spatial groups while building a
/// [`Bvh`](super::Bvh) top-down.
///
/// Given the faces of a node (with at least two elements) and their AABB, the policy
/// reorders `faces` in place and returns the ranges of `faces` forming each child of the
/// node. The returned ranges must be non-empty, contiguous, in increasing order, and must
/// cover `faces` exactly. A policy must also make progress: returning a single range
/// spanning all of `faces` is rejected by the builder.
///
/// Any function or closure with the signature `Fn(&mut [FaceRef], &Aabb) -> Partition` is a
/// policy.
pub trait PartitioningPolicy {
    /// Splits `faces` into sub-ranges. See the trait documentation for the contract.
    fn partition(&self, faces: &mut [FaceRef<'_>], aabb: &Aabb) -> Partition;
}

impl<F> PartitioningPolicy for F
where
    F: Fn(&mut [FaceRef<'_>], &Aabb) -> Partition,
{
    #[inline]
    fn partition(&self, faces: &mut [FaceRef<'_>], aabb: &Aabb) -> Partition {
        self(faces, aabb)
    }
}

/// Splits the faces into up to eight octants around the center of their AABB.
///
/// The faces are partitioned by comparing their centroid against the AABB center, first
/// along `x`, then each half along `y`, then each quarter along `z`. A face is on the
/// "low" side of an axis only if its centroid coordinate is strictly smaller than the
/// center's. Octants are returned in the order `(x, y, z)` = `(low, low, low)`,
/// `(low, low, high)`, `(low, high, low)`, … `(high, high, high)`, and empty octants are
/// skipped.
///
/// Every partition step is stable: faces falling in the same octant keep their relative
/// order.
///
/// All the faces having their centroid in the same octant is not an error for this policy,
/// but a [`Bvh`](super::Bvh) build will then fail with
/// [`BvhBuildError::NonProgressingPartition`](super::BvhBuildError::NonProgressingPartition).
/// This happens with coincident centroids, or with a large triangle whose AABB dwarfs the
/// others'. Use [`MedianSplit`] for such inputs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NaiveOctSplit;

impl PartitioningPolicy for NaiveOctSplit {
    fn partition(&self, faces: &mut [FaceRef<'_>], aabb: &Aabb) -> Partition {
        let midpoint = aabb.center();
        let len = faces.len();

        // cuts[i]..cuts[i + 1] is the i-th octant.
        let mut cuts = [0; 9];
        cuts[8] = len;

        cuts[4] = partition_by_coord(&mut faces[..], 0, &midpoint);

        cuts[2] = partition_by_coord(&mut faces[..cuts[4]], 1, &midpoint);
        cuts[6] = cuts[4] + partition_by_coord(&mut faces[cuts[4]..], 1, &midpoint);

        cuts[1] = partition_by_coord(&mut faces[..cuts[2]], 2, &midpoint);
        cuts[3] = cuts[2] + partition_by_coord(&mut faces[cuts[2]..cuts[4]], 2, &midpoint);
        cuts[5] = cuts[4] + partition_by_coord(&mut faces[cuts[4]..cuts[6]], 2, &midpoint);
        cuts[7] = cuts[6] + partition_by_coord(&mut faces[cuts[6]..], 2, &midpoint);

        cuts.windows(2)
            .filter(|w| w[0] != w[1])
            .map(|w| w[0]..w[1])
            .collect()
    }
}

/// Stable partition of `faces` so that the faces with a centroid strictly below
/// `midpoint[axis]` come first.
///
/// Returns the number of such faces.
fn partition_by_coord(faces: &mut [FaceRef<'_>], axis: usize, midpoint: &Point<Real>) -> usize {
    stable_partition(faces, |face| face.triangle.center()[axis] < midpoint[axis])
}

fn stable_partition<'a>(
    faces: &mut [FaceRef<'a>],
    mut is_low: impl FnMut(&FaceRef<'a>) -> bool,
) -> usize {
    let (low, high): (Vec<FaceRef<'a>>, Vec<FaceRef<'a>>) =
        faces.iter().copied().partition(|face| is_low(face));
    let num_low = low.len();

    for (dst, src) in faces.iter_mut().zip(low.into_iter().chain(high)) {
        *dst = src;
    }

    num_low
}

/// Splits the faces in two halves of equal size along the longest axis of their AABB.
///
/// The faces are sorted (stable sort) by the coordinate of their centroid along that axis,
/// then split in the middle. This always makes progress, so it accepts any input.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MedianSplit;

impl PartitioningPolicy for MedianSplit {
    fn partition(&self, faces: &mut [FaceRef<'_>], aabb: &Aabb) -> Partition {
        let axis = aabb.longest_axis();
        faces.sort_by_key(|face| OrderedFloat(face.triangle.center()[axis]));

        let mid = faces.len() / 2;
        smallvec::smallvec![0..mid, mid..faces.len()]
    }
}

/// The strategy for one-time build of the tree.
///
/// For general-purpose usage [`BvhBuildStrategy::OctSplit`] is the default. If the mesh
/// contains triangles with coincident centroids, [`BvhBuildStrategy::Median`] is
/// recommended.
#[derive(Default, Clone, Debug, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum BvhBuildStrategy {
    /// The tree is built with [`NaiveOctSplit`].
    #[default]
    OctSplit,
    /// The tree is built with [`MedianSplit`].
    Median,
}

impl PartitioningPolicy for BvhBuildStrategy {
    fn partition(&self, faces: &mut [FaceRef<'_>], aabb: &Aabb) -> Partition {
        match self {
            BvhBuildStrategy::OctSplit => NaiveOctSplit.partition(faces, aabb),
            BvhBuildStrategy::Median => MedianSplit.partition(faces, aabb),
        }
    }
}
