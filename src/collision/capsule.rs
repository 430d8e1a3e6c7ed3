//! Capsule tests. Every capsule query reduces to a circle query once the
//! nearest points on the capsule cores are known.

use crate::math::vec2::Vec2;
use crate::shapes::{Capsule, Circle, LineSegment};
use super::circle::{
    check_collision_circle_circle, check_collision_point_circle, circle_circle_mtv,
    point_circle_mtv,
};
use super::manifold::Manifold;

/// Approximate nearest points between the cores of two capsules.
///
/// Picks the end of `capsule1` nearest to an end of `capsule2`, projects it
/// onto `capsule2`'s core, then projects that point back onto `capsule1`'s
/// core. One round of alternating projection, not iterated to convergence;
/// see [`closest_points_between_segments`] for the exact answer.
pub fn nearest_circle_points(capsule1: Capsule, capsule2: Capsule) -> (Vec2, Vec2) {
    let top1 = capsule1.top();
    let bot1 = capsule1.bot();
    let top2 = capsule2.top();
    let bot2 = capsule2.bot();

    let candidates = [top2 - top1, bot2 - top1, top2 - bot1, bot2 - bot1];
    let mut min = 0;
    for i in 1..candidates.len() {
        if candidates[i].magnitude_squared() < candidates[min].magnitude_squared() {
            min = i;
        }
    }

    let start = if min < 2 { top1 } else { bot1 };
    let nearest2 = capsule2.segment().closest_point(start);
    let nearest1 = capsule1.segment().closest_point(nearest2);
    (nearest1, nearest2)
}

/// Exact closest points between two segments (clamped parametric solution).
pub fn closest_points_between_segments(segment1: LineSegment, segment2: LineSegment) -> (Vec2, Vec2) {
    const TOLERANCE: f64 = 1e-12;

    let d1 = segment1.direction();
    let d2 = segment2.direction();
    let r = segment1.start - segment2.start;
    let a = d1.magnitude_squared();
    let e = d2.magnitude_squared();
    let f = d2.dot(r);

    let (s, t) = if a <= TOLERANCE && e <= TOLERANCE {
        (0.0, 0.0)
    } else if a <= TOLERANCE {
        (0.0, (f / e).clamp(0.0, 1.0))
    } else {
        let c = d1.dot(r);
        if e <= TOLERANCE {
            ((-c / a).clamp(0.0, 1.0), 0.0)
        } else {
            let b = d1.dot(d2);
            let denom = a * e - b * b;
            // Parallel segments: any s works, start from segment1.start
            let s = if denom > TOLERANCE {
                ((b * f - c * e) / denom).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let t = (b * s + f) / e;
            if t < 0.0 {
                ((-c / a).clamp(0.0, 1.0), 0.0)
            } else if t > 1.0 {
                (((b - c) / a).clamp(0.0, 1.0), 1.0)
            } else {
                (s, t)
            }
        }
    };

    (segment1.point_at(s), segment2.point_at(t))
}

pub fn check_collision_capsule_capsule(capsule1: Capsule, capsule2: Capsule) -> bool {
    let (nearest1, nearest2) = nearest_circle_points(capsule1, capsule2);
    check_collision_circle_circle(
        Circle::new(nearest1, capsule1.radius),
        Circle::new(nearest2, capsule2.radius),
    )
}

/// Resolves `capsule1` away from `capsule2` using [`nearest_circle_points`].
pub fn capsule_capsule_mtv(capsule1: Capsule, capsule2: Capsule) -> Option<Manifold> {
    let (nearest1, nearest2) = nearest_circle_points(capsule1, capsule2);
    circle_circle_mtv(
        Circle::new(nearest1, capsule1.radius),
        Circle::new(nearest2, capsule2.radius),
    )
}

/// Resolves `capsule1` away from `capsule2` using the exact segment solver.
pub fn capsule_capsule_mtv_exact(capsule1: Capsule, capsule2: Capsule) -> Option<Manifold> {
    let (nearest1, nearest2) = closest_points_between_segments(capsule1.segment(), capsule2.segment());
    circle_circle_mtv(
        Circle::new(nearest1, capsule1.radius),
        Circle::new(nearest2, capsule2.radius),
    )
}

fn capsule_circle_at(capsule: Capsule, point: Vec2) -> Circle {
    Circle::new(capsule.segment().closest_point(point), capsule.radius)
}

pub fn check_collision_circle_capsule(circle: Circle, capsule: Capsule) -> bool {
    check_collision_circle_circle(circle, capsule_circle_at(capsule, circle.position))
}

/// Resolves `circle` away from `capsule`.
pub fn circle_capsule_mtv(circle: Circle, capsule: Capsule) -> Option<Manifold> {
    circle_circle_mtv(circle, capsule_circle_at(capsule, circle.position))
}

pub fn check_collision_point_capsule(point: Vec2, capsule: Capsule) -> bool {
    check_collision_point_circle(point, capsule_circle_at(capsule, point))
}

/// Resolves `point` away from `capsule`.
pub fn point_capsule_mtv(point: Vec2, capsule: Capsule) -> Option<Manifold> {
    point_circle_mtv(point, capsule_circle_at(capsule, point))
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-9;

    fn horizontal(x: f64, y: f64, radius: f64, half_length: f64) -> Capsule {
        Capsule::new(Vec2::new(x, y), Vec2::UNIT_X, radius, half_length)
    }

    #[test]
    fn test_nearest_circle_points_parallel() {
        let (n1, n2) = nearest_circle_points(horizontal(0.0, 0.0, 1.0, 5.0), horizontal(0.0, 1.5, 1.0, 5.0));
        assert!((n1 - Vec2::new(5.0, 0.0)).magnitude() < EPSILON);
        assert!((n2 - Vec2::new(5.0, 1.5)).magnitude() < EPSILON);
    }

    #[test]
    fn test_nearest_circle_points_t_junction() {
        let c1 = Capsule::from_endpoints(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), 0.5);
        let c2 = Capsule::from_endpoints(Vec2::new(4.0, 1.0), Vec2::new(4.0, 10.0), 0.5);
        let (n1, n2) = nearest_circle_points(c1, c2);
        assert!((n1 - Vec2::new(4.0, 0.0)).magnitude() < EPSILON);
        assert!((n2 - Vec2::new(4.0, 1.0)).magnitude() < EPSILON);
    }

    #[test]
    fn test_capsule_capsule_parallel_overlap() {
        let c1 = horizontal(0.0, 0.0, 1.0, 5.0);
        let c2 = horizontal(0.0, 1.5, 1.0, 5.0);
        assert!(check_collision_capsule_capsule(c1, c2));
        let m = capsule_capsule_mtv(c1, c2).expect("overlapping");
        assert!((m.normal - Vec2::new(0.0, -1.0)).magnitude() < EPSILON);
        assert!((m.depth - 0.5).abs() < EPSILON);

        assert!(!check_collision_capsule_capsule(c1, horizontal(0.0, 2.5, 1.0, 5.0)));
    }

    #[test]
    fn test_capsule_capsule_crossing() {
        let c1 = horizontal(0.0, 0.0, 0.5, 5.0);
        let c2 = Capsule::new(Vec2::ZERO, Vec2::UNIT_Y, 0.5, 5.0);
        assert!(check_collision_capsule_capsule(c1, c2));
        assert!(capsule_capsule_mtv_exact(c1, c2).is_some());
    }

    #[test]
    fn test_closest_points_between_segments() {
        let s1 = LineSegment::new(Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0));
        let s2 = LineSegment::new(Vec2::new(0.0, 1.0), Vec2::new(3.0, 4.0));
        let (p1, p2) = closest_points_between_segments(s1, s2);
        // s2 starts above s1's interior and heads away
        assert!((p1 - Vec2::new(0.0, 0.0)).magnitude() < EPSILON);
        assert!((p2 - Vec2::new(0.0, 1.0)).magnitude() < EPSILON);

        // Crossing segments meet
        let s3 = LineSegment::new(Vec2::new(0.0, -1.0), Vec2::new(0.0, 1.0));
        let (p1, p2) = closest_points_between_segments(s1, s3);
        assert!(p1.distance(p2) < EPSILON);

        // Degenerate segments are points
        let dot = LineSegment::new(Vec2::new(0.5, 2.0), Vec2::new(0.5, 2.0));
        let (p1, p2) = closest_points_between_segments(s1, dot);
        assert!((p1 - Vec2::new(0.5, 0.0)).magnitude() < EPSILON);
        assert_eq!(p2, Vec2::new(0.5, 2.0));
    }

    #[test]
    fn test_exact_mtv_for_skewed_capsules() {
        let c1 = Capsule::from_endpoints(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), 1.0);
        let c2 = Capsule::from_endpoints(Vec2::new(3.0, 1.5), Vec2::new(8.0, 6.0), 1.0);
        let m = capsule_capsule_mtv_exact(c1, c2).expect("overlapping");
        // Closest pair is (3,0)-(3,1.5)
        assert!((m.normal - Vec2::new(0.0, -1.0)).magnitude() < EPSILON);
        assert!((m.depth - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_circle_capsule() {
        let capsule = horizontal(0.0, 0.0, 1.0, 5.0);
        let circle = Circle::new(Vec2::new(2.0, 1.5), 1.0);
        assert!(check_collision_circle_capsule(circle, capsule));
        let m = circle_capsule_mtv(circle, capsule).expect("overlapping");
        assert!((m.normal - Vec2::UNIT_Y).magnitude() < EPSILON);
        assert!((m.depth - 0.5).abs() < EPSILON);

        // Beyond the end cap
        assert!(!check_collision_circle_capsule(Circle::new(Vec2::new(7.5, 0.0), 0.4), capsule));
        assert!(check_collision_circle_capsule(Circle::new(Vec2::new(7.0, 0.0), 1.0), capsule));
    }

    #[test]
    fn test_point_capsule() {
        let capsule = horizontal(0.0, 0.0, 1.0, 5.0);
        assert!(check_collision_point_capsule(Vec2::new(-5.5, 0.5), capsule));
        assert!(!check_collision_point_capsule(Vec2::new(-6.5, 0.0), capsule));
        let m = point_capsule_mtv(Vec2::new(1.0, -0.25), capsule).expect("inside");
        assert!((m.normal - Vec2::new(0.0, -1.0)).magnitude() < EPSILON);
        assert!((m.depth - 0.75).abs() < EPSILON);
    }

    #[test]
    fn test_zero_length_capsule_matches_circle() {
        let capsule = Capsule::new(Vec2::new(3.0, 4.0), Vec2::UNIT_X, 2.0, 0.0);
        let as_circle = Circle::new(capsule.position, capsule.radius);
        let other = Circle::new(Vec2::new(5.0, 5.5), 1.0);

        assert_eq!(
            circle_capsule_mtv(other, capsule),
            circle_circle_mtv(other, as_circle)
        );
        let other_capsule = horizontal(1.5, 2.0, 1.0, 0.0);
        let expected = circle_circle_mtv(Circle::new(Vec2::new(1.5, 2.0), 1.0), as_circle);
        assert!(expected.is_some());
        assert_eq!(capsule_capsule_mtv(other_capsule, capsule), expected);
    }
}
