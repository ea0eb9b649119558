//! The Gilbert-Johnson-Keerthi overlap test.

pub use self::simplex::{GJKStatus, Simplex};
pub use self::support_point::{find_support, SupportPoint};

use crate::math::Real;

mod simplex;
mod support_point;

/// The absolute tolerance used by the GJK and EPA algorithms.
pub fn eps_tol() -> Real {
    1.0e-6
}
