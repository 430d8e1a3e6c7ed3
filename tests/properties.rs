use proptest::prelude::*;
use collision_engine::collision::*;
use collision_engine::math::{transform::Transform, vec2::Vec2};
use collision_engine::shapes::{Capsule, Circle, LineSegment, Polygon, Rect};

fn vec2(range: f64) -> impl Strategy<Value = Vec2> {
    (-range..range, -range..range).prop_map(|(x, y)| Vec2::new(x, y))
}

fn circle() -> impl Strategy<Value = Circle> {
    (vec2(50.0), 0.1f64..20.0).prop_map(|(position, radius)| Circle::new(position, radius))
}

fn placed_polygon(sides: usize, radius: f64, translation: Vec2, rotation: f64) -> Polygon {
    let mut polygon = Polygon::regular(sides, radius);
    polygon.update(&Transform::from_translation_rotation(translation, rotation));
    polygon
}

proptest! {
    /// Invariant: circle overlap does not depend on argument order, and the MTVs are opposite.
    #[test]
    fn circle_circle_is_symmetric(a in circle(), b in circle()) {
        prop_assert_eq!(check_collision_circle_circle(a, b), check_collision_circle_circle(b, a));

        match (circle_circle_mtv(a, b), circle_circle_mtv(b, a)) {
            (Some(ab), Some(ba)) => {
                prop_assert!((ab.normal + ba.normal).magnitude() < 1e-9);
                prop_assert!((ab.depth - ba.depth).abs() < 1e-9);
            }
            (None, None) => {}
            other => prop_assert!(false, "asymmetric result {:?}", other),
        }
    }

    /// Invariant: applying the MTV leaves two circles exactly touching.
    #[test]
    fn circle_mtv_resolves_overlap(a in circle(), offset in vec2(20.0), radius in 0.1f64..20.0) {
        let b = Circle::new(a.position + offset, radius);
        let distance = a.position.distance(b.position);
        prop_assume!(distance > 1e-3 && distance < a.radius + b.radius);

        let m = circle_circle_mtv(a, b).expect("overlapping circles");
        let moved = a.translated(m.mtv());
        prop_assert!((moved.position.distance(b.position) - (a.radius + b.radius)).abs() < 1e-6);
    }

    /// Invariant: boundary contact counts as collision with zero depth.
    #[test]
    fn touching_circles_collide(r1 in 1u32..50, r2 in 1u32..50, x in -100i32..100, vertical in any::<bool>()) {
        let (r1, r2) = (r1 as f64, r2 as f64);
        let a = Circle::new(Vec2::new(x as f64, 0.0), r1);
        let offset = if vertical { Vec2::new(0.0, r1 + r2) } else { Vec2::new(r1 + r2, 0.0) };
        let b = Circle::new(a.position + offset, r2);

        prop_assert!(check_collision_circle_circle(a, b));
        let m = circle_circle_mtv(a, b).expect("touching");
        prop_assert_eq!(m.depth, 0.0);
    }

    /// Invariant: a point pushed by its MTV lands on the circle boundary.
    #[test]
    fn point_mtv_reaches_boundary(
        c in circle(),
        angle in 0.0f64..std::f64::consts::TAU,
        fraction in 0.05f64..0.99,
    ) {
        let point = c.position + Vec2::from_angle(angle) * (c.radius * fraction);

        let m = point_circle_mtv(point, c).expect("point inside");
        prop_assert!(((point + m.mtv()).distance(c.position) - c.radius).abs() < 1e-6);
    }

    /// Invariant: a capsule with zero half length behaves as its position circle.
    #[test]
    fn zero_length_capsule_is_a_circle(
        position in vec2(50.0),
        angle in 0.0f64..std::f64::consts::TAU,
        radius in 0.1f64..20.0,
        other in circle(),
        start in vec2(50.0),
        end in vec2(50.0),
    ) {
        let capsule = Capsule::new(position, Vec2::from_angle(angle), radius, 0.0);
        let as_circle = Circle::new(position, radius);
        let other_capsule = Capsule::new(other.position, Vec2::UNIT_Y, other.radius, 0.0);
        let line = LineSegment::new(start, end);

        prop_assert_eq!(circle_capsule_mtv(other, capsule), circle_circle_mtv(other, as_circle));
        prop_assert_eq!(capsule_capsule_mtv(other_capsule, capsule), circle_circle_mtv(other, as_circle));
        prop_assert_eq!(line_capsule_mtv(line, capsule), line_circle_mtv(line, as_circle));
        prop_assert_eq!(
            check_collision_line_capsule(line, capsule),
            check_collision_line_circle(line, as_circle)
        );
    }

    /// Invariant: applying the MTV of equal-sized rects leaves them touching.
    #[test]
    fn rect_mtv_resolves_overlap(
        c1 in vec2(20.0),
        offset in vec2(10.0),
        half_extents in (0.5f64..15.0, 0.5f64..15.0),
    ) {
        let half_extents = Vec2::new(half_extents.0, half_extents.1);
        let r1 = Rect::new(c1, half_extents);
        let r2 = Rect::new(c1 + offset, half_extents);
        prop_assume!(check_collision_rect_rect(r1, r2));

        let m = rect_rect_mtv(r1, r2).expect("overlapping rects");
        let moved = Rect::new(r1.center + m.mtv(), half_extents);
        let remaining = rect_rect_mtv(moved, r2).map(|m| m.depth).unwrap_or(0.0);
        prop_assert!(remaining < 1e-9, "still overlapping by {}", remaining);
    }

    /// Invariant: SAT overlap does not depend on argument order.
    #[test]
    fn polygon_polygon_is_symmetric(
        sides1 in 3usize..9,
        sides2 in 3usize..9,
        t1 in vec2(3.0),
        t2 in vec2(3.0),
        rot1 in 0.0f64..std::f64::consts::TAU,
        rot2 in 0.0f64..std::f64::consts::TAU,
    ) {
        let p1 = placed_polygon(sides1, 1.0, t1, rot1);
        let p2 = placed_polygon(sides2, 1.5, t2, rot2);
        prop_assert_eq!(
            check_collision_polygon_polygon(&p1, &p2),
            check_collision_polygon_polygon(&p2, &p1)
        );
    }

    /// Invariant: containment is stable across repeated queries and holds at the centre.
    #[test]
    fn point_in_polygon_is_idempotent(
        sides in 3usize..12,
        translation in vec2(50.0),
        rotation in 0.0f64..std::f64::consts::TAU,
        point in vec2(60.0),
    ) {
        let polygon = placed_polygon(sides, 5.0, translation, rotation);
        let first = check_collision_point_polygon(point, &polygon);
        for _ in 0..10 {
            prop_assert_eq!(check_collision_point_polygon(point, &polygon), first);
        }
        prop_assert!(check_collision_point_polygon(translation, &polygon));
        if point.distance(translation) > 5.0 + 1e-6 {
            prop_assert!(!first);
        }
    }
}
