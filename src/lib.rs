//! 2D narrow-phase collision detection: boolean overlap tests and minimum
//! translation vectors between points, circles, capsules, line segments,
//! axis-aligned rectangles and convex polygons.

pub mod math;
pub mod collision;
pub mod shapes;
pub mod common;
pub mod storage;

// Re-export key types for easier use
pub use math::{Transform, Vec2};
pub use shapes::{Capsule, Circle, LineSegment, Point, Polygon, Rect, Shape, ShapeKind};
pub use collision::{check_collision, CollisionError, Manifold, SatOutcome};
pub use common::{FixedTimestep, Timer};
pub use storage::StorageError;
