//! Traits for support mapping based shapes.

use crate::math::{Isometry, Point, Real, Vector};

/// Trait implemented by convex shapes representable by a support mapping
/// function.
///
/// The support function of a convex shape returns the point of the shape
/// that is the farthest in a given direction. This is the only geometric
/// information the GJK and EPA algorithms need, which is why any type
/// implementing this trait can be fed to the collision pipeline.
///
/// The direction passed to the support function does not need to be
/// normalized, but it must not be zero.
pub trait SupportMap {
    /// The point of this shape the farthest in the direction `dir`,
    /// expressed in the local frame of the shape.
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real>;

    /// The point of this shape the farthest in the direction `dir`, with
    /// the shape positioned by `m`.
    fn support_point(&self, m: &Isometry<Real>, dir: &Vector<Real>) -> Point<Real> {
        let local_dir = m.inverse_transform_vector(dir);
        m * self.local_support_point(&local_dir)
    }
}
