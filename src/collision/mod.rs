pub mod capsule;
pub mod circle;
pub mod dispatch;
pub mod line;
pub mod manifold;
pub mod polygon;
pub mod rect;
pub mod sat;

// Re-export key types
pub use capsule::*;
pub use circle::*;
pub use dispatch::{check_collision, CollisionError, POINT_CONTACT_RADIUS};
pub use line::*;
pub use manifold::Manifold;
pub use polygon::*;
pub use rect::*;
pub use sat::{separating_axis_test, SatOutcome};
