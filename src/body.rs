//! The capability the collision pipeline consumes from rigid bodies.

use crate::math::{Isometry, Point, Real, Vector};
use crate::shape::SupportMap;

/// A convex body, as seen by the narrow phase.
///
/// The pipeline never inspects a body's geometry directly: all it needs is
/// the world-space support function, the body's position, a way back into
/// the body's local frame for the contact points, and the two material
/// scalars combined into the contact output.
pub trait Body {
    /// The point of this body the farthest in the world-space direction
    /// `dir`. The direction does not need to be normalized, but it must not
    /// be zero.
    fn support_point(&self, dir: &Vector<Real>) -> Point<Real>;

    /// The world-space position of this body's origin.
    fn position(&self) -> Point<Real>;

    /// Transforms a world-space point into this body's local frame.
    fn point_to_local(&self, point: &Point<Real>) -> Point<Real>;

    /// The coefficient of restitution of this body.
    fn restitution(&self) -> Real;

    /// The friction coefficient of this body.
    fn friction(&self) -> Real;
}

/// A [`Body`] made of a support-mapped shape positioned by an isometry.
#[derive(Clone, Debug)]
pub struct Collider<S> {
    /// The convex shape of this collider.
    pub shape: S,
    /// The position of the shape in world space.
    pub position: Isometry<Real>,
    /// The coefficient of restitution of this collider.
    pub restitution: Real,
    /// The friction coefficient of this collider.
    pub friction: Real,
}

impl<S: SupportMap> Collider<S> {
    /// Creates a collider with zero restitution and friction.
    pub fn new(shape: S, position: Isometry<Real>) -> Self {
        Collider {
            shape,
            position,
            restitution: 0.0,
            friction: 0.0,
        }
    }

    /// Sets the coefficient of restitution.
    pub fn with_restitution(mut self, restitution: Real) -> Self {
        self.restitution = restitution;
        self
    }

    /// Sets the friction coefficient.
    pub fn with_friction(mut self, friction: Real) -> Self {
        self.friction = friction;
        self
    }
}

impl<S: SupportMap> Body for Collider<S> {
    #[inline]
    fn support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        self.shape.support_point(&self.position, dir)
    }

    #[inline]
    fn position(&self) -> Point<Real> {
        Point::from(self.position.translation.vector)
    }

    #[inline]
    fn point_to_local(&self, point: &Point<Real>) -> Point<Real> {
        self.position.inverse_transform_point(point)
    }

    #[inline]
    fn restitution(&self) -> Real {
        self.restitution
    }

    #[inline]
    fn friction(&self) -> Real {
        self.friction
    }
}
