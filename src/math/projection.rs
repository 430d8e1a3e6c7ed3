use super::vec2::Vec2;

/// Parameter `t` of the orthogonal projection of `point` onto the infinite
/// line through `a` and `b`, such that the projection is `a + (b - a) * t`.
///
/// Returns 0.0 when `a == b`.
pub fn line_parameter(a: Vec2, b: Vec2, point: Vec2) -> f64 {
    let ab = b - a;
    let length_sq = ab.magnitude_squared();
    if length_sq < 1e-12 {
        return 0.0;
    }
    (point - a).dot(ab) / length_sq
}

/// Orthogonal projection of `point` onto the infinite line through `a` and `b`.
///
/// Not clamped to the segment. Use [`project_point_segment`] when the
/// segment's endpoints matter.
pub fn project_point_line(a: Vec2, b: Vec2, point: Vec2) -> Vec2 {
    a.lerp(b, line_parameter(a, b, point))
}

/// Point on the segment `[a, b]` closest to `point`.
pub fn project_point_segment(a: Vec2, b: Vec2, point: Vec2) -> Vec2 {
    a.lerp(b, line_parameter(a, b, point).clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_project_point_line_is_unclamped() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        let p = project_point_line(a, b, Vec2::new(15.0, 3.0));
        assert!((p.x - 15.0).abs() < EPSILON);
        assert!(p.y.abs() < EPSILON);
        assert!((line_parameter(a, b, Vec2::new(15.0, 3.0)) - 1.5).abs() < EPSILON);
    }

    #[test]
    fn test_project_point_segment_clamps_to_endpoints() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        assert_eq!(project_point_segment(a, b, Vec2::new(15.0, 3.0)), b);
        assert_eq!(project_point_segment(a, b, Vec2::new(-2.0, -1.0)), a);
        let mid = project_point_segment(a, b, Vec2::new(4.0, 7.0));
        assert!((mid.x - 4.0).abs() < EPSILON);
        assert!(mid.y.abs() < EPSILON);
    }

    #[test]
    fn test_projection_onto_degenerate_segment() {
        let a = Vec2::new(2.0, 2.0);
        assert_eq!(project_point_segment(a, a, Vec2::new(9.0, -1.0)), a);
        assert_eq!(project_point_line(a, a, Vec2::new(9.0, -1.0)), a);
    }
}
