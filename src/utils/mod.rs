//! Various unsorted geometrical operators.

pub use self::ccw_face_normal::ccw_face_normal;
pub use self::triangle::{barycentric_coordinates, project_origin_on_triangle};

mod ccw_face_normal;
mod triangle;
