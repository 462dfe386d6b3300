/*!
prune3d
=======

**prune3d** is a broad-phase filter for triangle meshes written with the rust
programming language.

Given two triangle meshes, it builds one bounding volume hierarchy per mesh and
traverses both simultaneously to find every pair of triangles whose bounding boxes
overlap. These candidate pairs are what an exact (narrow-phase) triangle-triangle
intersection test needs to look at; every other pair is guaranteed to be disjoint.

```
use prune3d::math::Point;
use prune3d::partitioning::{Bvh, NaiveOctSplit};
use prune3d::query::pairwise_pruning;
use prune3d::shape::Triangle;

let mesh1 = [Triangle::new(
    Point::new(0.0, 0.0, 0.0),
    Point::new(0.0, 0.0, 1.0),
    Point::new(1.0, 1.0, 0.0),
)];
let mesh2 = [Triangle::new(
    Point::new(1.0, 0.0, 0.0),
    Point::new(1.0, 0.0, 1.0),
    Point::new(0.0, 1.0, 0.0),
)];

let bvh1 = Bvh::from_triangles(NaiveOctSplit, &mesh1)?;
let bvh2 = Bvh::from_triangles(NaiveOctSplit, &mesh2)?;
let candidates = pairwise_pruning(&bvh1, &bvh2);

assert_eq!(candidates.len(), 1);
assert_eq!(candidates[0].0.triangle, &mesh1[0]);
assert_eq!(candidates[0].1.triangle, &mesh2[0]);
# Ok::<(), prune3d::partitioning::BvhBuildError>(())
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod partitioning;
pub mod query;
pub mod shape;

/// Aliases for the mathematical types used throughout this crate.
pub mod math {
    pub use na::{Point3, Vector3};

    /// The scalar type used throughout this crate.
    pub use f64 as Real;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;
}
