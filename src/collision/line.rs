//! Line segment queries against circles and capsules.
//!
//! Manifolds from this module displace the line. Pushing a circle to the
//! other side of a line is rarely what a caller wants, so the line is always
//! the first argument.

use crate::math::vec2::Vec2;
use crate::shapes::{Capsule, Circle, LineSegment};
use super::circle::{check_collision_point_circle, point_circle_mtv};
use super::manifold::Manifold;

/// Where a line segment crosses a circle's boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineCircleIntersection {
    None,
    /// Tangent contact, or only one crossing inside the segment.
    One(Vec2),
    /// Both crossings inside the segment, nearest to `line.start` first.
    Two(Vec2, Vec2),
}

impl LineCircleIntersection {
    /// The crossing nearest to the segment start, if any.
    pub fn nearest(&self) -> Option<Vec2> {
        match *self {
            LineCircleIntersection::None => None,
            LineCircleIntersection::One(poi) | LineCircleIntersection::Two(poi, _) => Some(poi),
        }
    }
}

/// True when the segment passes within `circle.radius` of the circle centre.
pub fn check_collision_line_circle(line: LineSegment, circle: Circle) -> bool {
    check_collision_point_circle(line.closest_point(circle.position), circle)
}

/// Resolves the segment away from `circle`.
pub fn line_circle_mtv(line: LineSegment, circle: Circle) -> Option<Manifold> {
    point_circle_mtv(line.closest_point(circle.position), circle)
}

/// Like [`check_collision_line_circle`] but against the infinite line through the segment.
pub fn check_collision_infinite_line_circle(line: LineSegment, circle: Circle) -> bool {
    check_collision_point_circle(line.closest_point_on_line(circle.position), circle)
}

/// Resolves the infinite line through `line` away from `circle`.
pub fn infinite_line_circle_mtv(line: LineSegment, circle: Circle) -> Option<Manifold> {
    point_circle_mtv(line.closest_point_on_line(circle.position), circle)
}

/// Solves `|start + t * (end - start) - center|^2 = r^2` for `t` in `[0, 1]`.
///
/// A zero-length segment never reports an intersection.
pub fn line_circle_intersections(line: LineSegment, circle: Circle) -> LineCircleIntersection {
    let delta = line.direction();
    let to_start = line.start - circle.position;

    let a = delta.magnitude_squared();
    let b = 2.0 * delta.dot(to_start);
    let c = to_start.magnitude_squared() - circle.radius * circle.radius;

    if a <= 0.0 {
        return LineCircleIntersection::None;
    }
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return LineCircleIntersection::None;
    }

    let in_segment = |t: f64| (0.0..=1.0).contains(&t);
    if discriminant == 0.0 {
        let t = -b / (2.0 * a);
        return if in_segment(t) {
            LineCircleIntersection::One(line.point_at(t))
        } else {
            LineCircleIntersection::None
        };
    }

    let root = discriminant.sqrt();
    let t_near = (-b - root) / (2.0 * a);
    let t_far = (-b + root) / (2.0 * a);
    match (in_segment(t_near), in_segment(t_far)) {
        (true, true) => LineCircleIntersection::Two(line.point_at(t_near), line.point_at(t_far)),
        (true, false) => LineCircleIntersection::One(line.point_at(t_near)),
        (false, true) => LineCircleIntersection::One(line.point_at(t_far)),
        (false, false) => LineCircleIntersection::None,
    }
}

/// Point where the segment first enters or leaves the circle, walking from `line.start`.
pub fn nearest_line_circle_intersection(line: LineSegment, circle: Circle) -> Option<Vec2> {
    line_circle_intersections(line, circle).nearest()
}

/// Nearest point on the line to the capsule, and the capsule core point nearest to it.
fn line_capsule_points(line: LineSegment, capsule: Capsule) -> (Vec2, Vec2) {
    let top = capsule.top();
    let bot = capsule.bot();
    let proj_top = line.closest_point(top);
    let proj_bot = line.closest_point(bot);
    let on_line = if top.distance_squared(proj_top) < bot.distance_squared(proj_bot) {
        proj_top
    } else {
        proj_bot
    };
    (on_line, capsule.segment().closest_point(on_line))
}

/// True when the segment touches the capsule.
pub fn check_collision_line_capsule(line: LineSegment, capsule: Capsule) -> bool {
    let (on_line, on_capsule) = line_capsule_points(line, capsule);
    check_collision_point_circle(on_line, Circle::new(on_capsule, capsule.radius))
}

/// Resolves the segment away from `capsule`.
pub fn line_capsule_mtv(line: LineSegment, capsule: Capsule) -> Option<Manifold> {
    let (on_line, on_capsule) = line_capsule_points(line, capsule);
    point_circle_mtv(on_line, Circle::new(on_capsule, capsule.radius))
}
