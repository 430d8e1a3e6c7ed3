//! Point, circle and circle/rectangle tests.

use crate::math::vec2::Vec2;
use crate::math::EPSILON;
use crate::shapes::{Circle, Rect};
use super::manifold::Manifold;

/// True when `point` lies inside or on `circle`.
pub fn check_collision_point_circle(point: Vec2, circle: Circle) -> bool {
    point.distance_squared(circle.position) <= circle.radius * circle.radius
}

/// Resolves `point` out of `circle` (a zero-radius circle against a circle).
///
/// A point exactly on the centre has no resolution direction and yields a
/// zero normal.
pub fn point_circle_mtv(point: Vec2, circle: Circle) -> Option<Manifold> {
    if !check_collision_point_circle(point, circle) {
        return None;
    }
    let normal = (point - circle.position).normalize();
    let depth = circle.radius - point.distance(circle.position);
    Some(Manifold::new(normal, depth))
}

/// True when the circles overlap or touch.
pub fn check_collision_circle_circle(circle1: Circle, circle2: Circle) -> bool {
    let radii_sum = circle1.radius + circle2.radius;
    circle1.position.distance_squared(circle2.position) <= radii_sum * radii_sum
}

/// Resolves `circle1` away from `circle2`.
///
/// Concentric circles yield a zero normal.
pub fn circle_circle_mtv(circle1: Circle, circle2: Circle) -> Option<Manifold> {
    let delta = circle1.position - circle2.position;
    let radii_sum = circle1.radius + circle2.radius;
    let center_distance = delta.magnitude();
    if center_distance > radii_sum {
        return None;
    }
    Some(Manifold::new(delta.normalize(), radii_sum - center_distance))
}

/// True when `circle` overlaps or touches `rect`.
pub fn check_collision_circle_rect(circle: Circle, rect: Rect) -> bool {
    let nearest = rect.closest_point(circle.position);
    nearest.distance_squared(circle.position) <= circle.radius * circle.radius
}

/// Resolves `circle` away from `rect`.
///
/// When the centre is inside the rectangle the nearest point coincides with
/// it, so the direction falls back to rectangle centre -> circle centre and
/// the depth is how far the circle must travel that way to just touch the
/// rectangle from outside. A circle exactly on the rectangle centre leaves
/// along the axis with the smaller half extent.
pub fn circle_rect_mtv(circle: Circle, rect: Rect) -> Option<Manifold> {
    let nearest = rect.closest_point(circle.position);
    let delta = circle.position - nearest;
    let distance_sq = delta.magnitude_squared();
    if distance_sq > circle.radius * circle.radius {
        return None;
    }
    if distance_sq > 0.0 {
        return Some(Manifold::new(delta.normalize(), circle.radius - distance_sq.sqrt()));
    }
    Some(centre_inside_rect_mtv(circle, rect))
}

fn centre_inside_rect_mtv(circle: Circle, rect: Rect) -> Manifold {
    let offset = circle.position - rect.center;
    let half = rect.half_extents;
    let normal = if offset.magnitude_squared() > EPSILON * EPSILON {
        offset.normalize()
    } else if half.x <= half.y {
        Vec2::UNIT_X
    } else {
        Vec2::UNIT_Y
    };

    // Exit through the rectangle grown by the radius on every side
    let mut travel = f64::INFINITY;
    for (d, n, h) in [(offset.x, normal.x, half.x), (offset.y, normal.y, half.y)] {
        if n.abs() > EPSILON {
            travel = travel.min((h + circle.radius - d.abs()) / n.abs());
        }
    }

    // Past a corner the grown outline is rounded
    let exit = offset + normal * travel;
    if exit.x.abs() > half.x && exit.y.abs() > half.y {
        let corner = Vec2::new(half.x.copysign(exit.x), half.y.copysign(exit.y));
        let from_corner = offset - corner;
        let b = normal.dot(from_corner);
        let c = from_corner.magnitude_squared() - circle.radius * circle.radius;
        travel = -b + (b * b - c).max(0.0).sqrt();
    }
    Manifold::new(normal, travel)
}
