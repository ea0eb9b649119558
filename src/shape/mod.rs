//! Support-mapped convex shapes usable by the collision pipeline.

pub use self::ball::Ball;
pub use self::cuboid::Cuboid;
pub use self::support_map::SupportMap;

mod ball;
mod cuboid;
mod support_map;
