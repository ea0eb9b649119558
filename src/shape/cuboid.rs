use crate::math::{Point, Real, Vector, DIM};
use crate::shape::SupportMap;

/// A cuboid shape centered at its local origin.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
#[repr(C)]
pub struct Cuboid {
    /// The cuboid half-extents along each local axis.
    pub half_extents: Vector<Real>,
}

impl Cuboid {
    /// Creates a new cuboid from its half-extents.
    #[inline]
    pub fn new(half_extents: Vector<Real>) -> Cuboid {
        Cuboid { half_extents }
    }
}

impl SupportMap for Cuboid {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Point<Real> {
        let mut res = self.half_extents;

        for i in 0..DIM {
            if dir[i] < 0.0 {
                res[i] = -res[i];
            }
        }

        Point::from(res)
    }
}
