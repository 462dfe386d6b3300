//! Definition of the triangle shape.

use crate::math::{Point, Real, Vector};

/// A triangle shape.
///
/// This is the primitive stored at the leaves of a [`Bvh`](crate::partitioning::Bvh): one
/// face of a triangle mesh. The vertex order carries no meaning here (no normal is derived
/// from it).
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

impl From<[Point<Real>; 3]> for Triangle {
    fn from(arr: [Point<Real>; 3]) -> Self {
        Triangle::new(arr[0], arr[1], arr[2])
    }
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// The three vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 3] {
        [self.a, self.b, self.c]
    }

    /// The geometric center (centroid) of this triangle: the mean of its three vertices.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        let denom: Real = 1.0 / 3.0;
        self.a * denom + self.b.coords * denom + self.c.coords * denom
    }

    /// Returns a new triangle with every vertex translated by `shift`.
    #[inline]
    pub fn translated(&self, shift: &Vector<Real>) -> Self {
        Triangle::new(self.a + shift, self.b + shift, self.c + shift)
    }

    /// Is this triangle degenerate, i.e., are its three vertices collinear?
    ///
    /// Degenerate triangles are accepted everywhere in this crate; this is only
    /// informative.
    #[inline]
    pub fn is_affinely_dependent(&self) -> bool {
        (self.b - self.a).cross(&(self.c - self.a)) == Vector::zeros()
    }
}
