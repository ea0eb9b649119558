use crate::body::Body;
use crate::math::{Point, Real, Vector};
use crate::pool::{SupportPointId, SupportPointPool};

/// A point of the Minkowski difference of two bodies.
///
/// The Minkowski difference (also called Configuration-Space Obstacle) of
/// two solids is the set of all differences of one point of the first solid
/// and one point of the second. Each of its points therefore remembers the
/// two world-space *witness* points it was built from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SupportPoint {
    /// The point on the Minkowski difference. Equal to
    /// `self.witness1 - self.witness2`.
    pub point: Point<Real>,
    /// The witness point on the first body.
    pub witness1: Point<Real>,
    /// The witness point on the second body.
    pub witness2: Point<Real>,
}

impl SupportPoint {
    /// Initializes a support point with `witness1 - witness2`.
    pub fn new(witness1: Point<Real>, witness2: Point<Real>) -> Self {
        SupportPoint {
            point: Point::from(witness1 - witness2),
            witness1,
            witness2,
        }
    }

    /// A support point with all components set to zero.
    pub fn origin() -> Self {
        SupportPoint::new(Point::origin(), Point::origin())
    }

    /// Computes the support point of the Minkowski difference of `g1` and
    /// `g2` toward the direction `dir`.
    pub fn from_bodies<G1, G2>(g1: &G1, g2: &G2, dir: &Vector<Real>) -> Self
    where
        G1: ?Sized + Body,
        G2: ?Sized + Body,
    {
        let w1 = g1.support_point(dir);
        let w2 = g2.support_point(&-dir);

        SupportPoint::new(w1, w2)
    }
}

/// Computes the support point of the Minkowski difference of `g1` and `g2`
/// toward `dir`, and stores it into a fresh pool slot.
///
/// The returned id must eventually be released to `pool` exactly once.
pub fn find_support<G1, G2>(
    g1: &G1,
    g2: &G2,
    dir: &Vector<Real>,
    pool: &mut SupportPointPool,
) -> SupportPointId
where
    G1: ?Sized + Body,
    G2: ?Sized + Body,
{
    pool.acquire(SupportPoint::from_bodies(g1, g2, dir))
}
