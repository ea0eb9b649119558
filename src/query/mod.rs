//! Non-persistent geometric queries.
//!
//! The entry point is [`gjk_epa`]: given two convex bodies and a support
//! point pool, it either proves the bodies disjoint or produces a
//! [`ContactDetails`] describing their deepest contact.

pub use self::contact::{gjk_epa, ContactDetails};

pub mod contact;
pub mod epa;
pub mod gjk;
