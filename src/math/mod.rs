pub mod projection;
pub mod transform;
pub mod vec2;

pub use projection::{line_parameter, project_point_line, project_point_segment};
pub use transform::Transform;
pub use vec2::Vec2;

/// Tolerance for float comparisons against zero.
pub const EPSILON: f64 = 1e-10;
