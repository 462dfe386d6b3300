//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, Vector, DIM};
use crate::shape::Triangle;

/// An Axis-Aligned Bounding Box (AABB).
///
/// An AABB is defined by its minimum and maximum corners. Its edges are always
/// parallel to the coordinate axes, which makes it very cheap to compute, merge,
/// and test for overlap.
///
/// # Invariant
///
/// `mins[i] <= maxs[i]` on every axis once the AABB has been computed from at least
/// one point. The only exception is [`Aabb::new_invalid`], the sentinel used to seed
/// a min/max scan.
///
/// # Example
///
/// ```
/// use prune3d::bounding_volume::Aabb;
/// use prune3d::math::Point;
///
/// let a = Aabb::new(Point::new(0.0, 0.0, 0.0), Point::new(1.0, 1.0, 1.0));
/// let b = Aabb::new(Point::new(0.5, 0.5, 0.5), Point::new(2.0, 2.0, 2.0));
/// let c = Aabb::new(Point::new(1.0, 0.0, 0.0), Point::new(2.0, 1.0, 1.0));
///
/// assert!(a.intersects(&b));
/// // Touching boxes do not intersect.
/// assert!(!a.intersects(&c));
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point<Real>,
    /// The point with maximum coordinates.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB.
    ///
    /// # Arguments:
    ///   * `mins` - position of the point with the smallest coordinates.
    ///   * `maxs` - position of the point with the highest coordinates. Each component of `mins`
    ///     must be smaller than the related components of `maxs`.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid AABB with `mins` components set to `Real::MAX` and `maxs` components
    /// set to `-Real::MAX`.
    ///
    /// This is the seed of a min/max scan: merging anything into it yields that thing's AABB.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Vector::repeat(Real::MAX).into(),
            Vector::repeat(-Real::MAX).into(),
        )
    }

    /// Computes the AABB enclosing every vertex of every triangle yielded by `triangles`.
    ///
    /// The scan is seeded with [`Aabb::new_invalid`]. Returns `None` if `triangles` is empty,
    /// or if the seeds were never overwritten (which can only happen if every coordinate
    /// on some axis is NaN).
    pub fn from_triangles<'a, I>(triangles: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Triangle>,
    {
        let mut result = Self::new_invalid();
        let mut empty = true;

        for triangle in triangles {
            empty = false;

            for vertex in triangle.vertices() {
                for i in 0..DIM {
                    if result.maxs[i] < vertex[i] {
                        result.maxs[i] = vertex[i];
                    }
                    if result.mins[i] > vertex[i] {
                        result.mins[i] = vertex[i];
                    }
                }
            }
        }

        if empty || !result.is_valid() {
            return None;
        }

        Some(result)
    }

    /// The center of this AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The half extents of this AABB.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        self.extents() * 0.5
    }

    /// The extents of this AABB.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// The index of the axis along which this AABB is the widest.
    ///
    /// Ties are resolved toward the smallest axis index.
    #[inline]
    pub fn longest_axis(&self) -> usize {
        self.extents().imax()
    }

    /// Does this AABB satisfy `mins[i] <= maxs[i]` on every axis?
    #[inline]
    pub fn is_valid(&self) -> bool {
        na::partial_le(&self.mins, &self.maxs)
    }

    /// Checks if this AABB strictly overlaps `other`.
    ///
    /// On every axis `i`, `self.mins[i] < other.maxs[i]` and `self.maxs[i] > other.mins[i]`
    /// must hold. AABBs that only touch along a face, an edge or a corner are **not**
    /// considered intersecting. In particular, an AABB with zero thickness along some axis
    /// never intersects another AABB whose boundary lies exactly at that coordinate.
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        na::partial_lt(&self.mins, &other.maxs) && na::partial_gt(&self.maxs, &other.mins)
    }

    /// Checks if this AABB fully encloses `other` (boundaries included).
    #[inline]
    pub fn contains(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.mins) && na::partial_ge(&self.maxs, &other.maxs)
    }

    /// Checks if `point` lies inside of this AABB (boundaries included).
    #[inline]
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        na::partial_le(&self.mins, point) && na::partial_ge(&self.maxs, point)
    }

    /// Merges `other` into this AABB.
    #[inline]
    pub fn merge(&mut self, other: &Aabb) {
        self.mins = self.mins.inf(&other.mins);
        self.maxs = self.maxs.sup(&other.maxs);
    }

    /// The smallest AABB enclosing both `self` and `other`.
    #[inline]
    pub fn merged(&self, other: &Aabb) -> Aabb {
        Aabb {
            mins: self.mins.inf(&other.mins),
            maxs: self.maxs.sup(&other.maxs),
        }
    }
}
