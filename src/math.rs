//! Compilation-flag dependent aliases for mathematical types.

/// The scalar type used throughout this crate.
#[cfg(feature = "f64")]
pub type Real = f64;

/// The scalar type used throughout this crate.
#[cfg(all(feature = "f32", not(feature = "f64")))]
pub type Real = f32;

/// The default tolerance used for geometric operations.
pub const DEFAULT_EPSILON: Real = Real::EPSILON;

/// The dimension of the space.
pub const DIM: usize = 3;

/// The point type.
pub type Point<N> = na::Point3<N>;

/// The vector type.
pub type Vector<N> = na::Vector3<N>;

/// The unit vector type.
pub type UnitVector<N> = na::UnitVector3<N>;

/// The transformation matrix type.
pub type Isometry<N> = na::Isometry3<N>;

/// The translation type.
pub type Translation<N> = na::Translation3<N>;
