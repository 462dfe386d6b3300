//! Non-persistent geometric queries.
//!
//! The main entry point is [`pairwise_pruning()`], the broad phase
//! between two triangle meshes: it returns every pair of triangles whose AABBs overlap, given
//! one [`Bvh`](crate::partitioning::Bvh) per mesh. Any pair it doesn’t return is guaranteed
//! to be disjoint, so an exact triangle-triangle test only needs to run on its output.

pub use self::pairwise_pruning::{pairwise_pruning, pairwise_pruning_indices, CandidatePair};

mod pairwise_pruning;
