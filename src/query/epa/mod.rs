//! Penetration depth refinement using the Expanding Polytope Algorithm.

pub use self::polyhedron::{Face, Polyhedron};

mod polyhedron;
