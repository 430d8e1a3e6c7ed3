//! Axis-aligned rectangle against axis-aligned rectangle.

use crate::math::vec2::Vec2;
use crate::shapes::Rect;
use super::manifold::Manifold;

/// Overlap of the two rectangles' intervals on x and y. Negative means separated.
fn axis_overlaps(rect1: Rect, rect2: Rect) -> Vec2 {
    let (min1, max1) = (rect1.min(), rect1.max());
    let (min2, max2) = (rect2.min(), rect2.max());
    Vec2::new(
        max1.x.min(max2.x) - min1.x.max(min2.x),
        max1.y.min(max2.y) - min1.y.max(min2.y),
    )
}

pub fn check_collision_rect_rect(rect1: Rect, rect2: Rect) -> bool {
    let overlap = axis_overlaps(rect1, rect2);
    overlap.x >= 0.0 && overlap.y >= 0.0
}

/// Resolves `rect1` away from `rect2` along the axis of least penetration.
///
/// Equal penetration on both axes resolves both at once (diagonal MTV).
/// Concentric rectangles resolve towards +x/+y.
pub fn rect_rect_mtv(rect1: Rect, rect2: Rect) -> Option<Manifold> {
    let overlap = axis_overlaps(rect1, rect2);
    if overlap.x < 0.0 || overlap.y < 0.0 {
        return None;
    }

    let sign_x = if rect2.center.x > rect1.center.x { -1.0 } else { 1.0 };
    let sign_y = if rect2.center.y > rect1.center.y { -1.0 } else { 1.0 };

    let manifold = if overlap.x < overlap.y {
        Manifold::new(Vec2::new(sign_x, 0.0), overlap.x)
    } else if overlap.y < overlap.x {
        Manifold::new(Vec2::new(0.0, sign_y), overlap.y)
    } else {
        let mtv = Vec2::new(sign_x * overlap.x, sign_y * overlap.y);
        Manifold::new(mtv.normalize(), mtv.magnitude())
    };
    Some(manifold)
}
