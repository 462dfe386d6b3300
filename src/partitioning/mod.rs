//! Spatial partitioning tools.

pub use self::bvh::{
    Bvh, BvhBuildError, BvhBuildStrategy, BvhNode, FaceRef, Leaves, MedianSplit, NaiveOctSplit,
    Partition, PartitioningPolicy,
};

mod bvh;
