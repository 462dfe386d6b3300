pub use bvh_build::BvhBuildError;
pub use bvh_partition::{
    BvhBuildStrategy, MedianSplit, NaiveOctSplit, Partition, PartitioningPolicy,
};
pub use bvh_traverse::Leaves;
pub use bvh_tree::{Bvh, BvhNode, FaceRef};

mod bvh_build;
mod bvh_partition;
mod bvh_queries;
mod bvh_traverse;
mod bvh_traverse_bvtt;
mod bvh_tree;
mod bvh_validation;
