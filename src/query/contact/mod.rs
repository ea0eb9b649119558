//! Contact computation between convex bodies.

pub use self::contact::ContactDetails;
pub use self::gjk_epa::gjk_epa;

mod contact;
mod gjk_epa;
