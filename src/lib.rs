/*!
riposte3d
========

**riposte3d** is a narrow-phase collision-detection library for convex
solids written with the rust programming language.

Given two convex bodies exposing a support mapping, the library decides
whether they overlap and, when they do, produces a single deepest contact:
normal, penetration depth, and the contact point in world space and in each
body's local frame. The overlap test is GJK; the penetration refinement is
EPA.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)]

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod body;
pub mod math;
pub mod pool;
pub mod query;
pub mod shape;
pub mod utils;
