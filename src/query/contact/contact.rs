use crate::math::{Point, Real, UnitVector};

/// Geometric and material description of a contact between two convex
/// bodies.
///
/// The contact describes the single deepest penetration point of the pair:
/// the direction to push the bodies apart, how far they overlap, and where
/// the contact happened, both in world space and in each body's local
/// frame. The material coefficients are the averages of the two bodies'.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct ContactDetails {
    /// The unit contact normal, pointing from the first body toward the
    /// second when that direction is well-defined.
    pub normal: UnitVector<Real>,
    /// The contact point, in world space.
    pub point: Point<Real>,
    /// The contact point expressed in the first body's local frame.
    pub local_point1: Point<Real>,
    /// The contact point expressed in the second body's local frame.
    pub local_point2: Point<Real>,
    /// How deep the bodies overlap along the normal. Always non-negative.
    pub penetration_depth: Real,
    /// The combined coefficient of restitution.
    pub restitution: Real,
    /// The combined friction coefficient.
    pub friction: Real,
}
