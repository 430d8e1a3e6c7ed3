//! Tests involving convex polygons. All of them read the polygon's cached
//! world-space geometry.

use crate::math::vec2::Vec2;
use crate::shapes::{Circle, Polygon};
use super::manifold::Manifold;
use super::sat::{interval_overlap, orient_axis, project_vertices, separating_axis_test, SatOutcome};

/// Boundary-inclusive containment of `point` in `polygon`.
pub fn check_collision_point_polygon(point: Vec2, polygon: &Polygon) -> bool {
    polygon.contains_point(point)
}

/// Pushes `point` out through the nearest edge of `polygon`.
pub fn point_polygon_mtv(point: Vec2, polygon: &Polygon) -> Option<Manifold> {
    if !polygon.contains_point(point) {
        return None;
    }
    polygon
        .world_vertices()
        .iter()
        .zip(polygon.world_normals())
        .map(|(vertex, normal)| Manifold::new(*normal, -(point - *vertex).dot(*normal)))
        .min_by(|a, b| a.depth.total_cmp(&b.depth))
        .map(|m| Manifold::new(m.normal, m.depth.max(0.0)))
}

/// SAT between `circle` and `polygon`: the polygon's normals plus the axis
/// from the circle centre to the nearest polygon vertex.
fn circle_polygon_sat(circle: Circle, polygon: &Polygon) -> Option<Manifold> {
    let vertices = polygon.world_vertices();

    let nearest_vertex = vertices
        .iter()
        .copied()
        .min_by(|a, b| {
            a.distance_squared(circle.position)
                .total_cmp(&b.distance_squared(circle.position))
        })?;
    let vertex_axis = (nearest_vertex - circle.position).normalize();

    let mut min_overlap = f64::INFINITY;
    let mut mtv_axis = Vec2::ZERO;

    for &axis in polygon.world_normals().iter().chain(std::iter::once(&vertex_axis)) {
        // Centre sitting on a vertex leaves no vertex axis
        if axis.magnitude_squared() < 1e-10 {
            continue;
        }
        let center = circle.position.dot(axis);
        let overlap = interval_overlap(
            (center - circle.radius, center + circle.radius),
            project_vertices(vertices, axis),
        );
        if overlap < 0.0 {
            return None;
        }
        if overlap < min_overlap {
            min_overlap = overlap;
            mtv_axis = axis;
        }
    }

    let normal = orient_axis(
        mtv_axis,
        circle.position - polygon.translation(),
        circle.position - polygon.centroid(),
    );
    Some(Manifold::new(normal, min_overlap))
}

pub fn check_collision_circle_polygon(circle: Circle, polygon: &Polygon) -> bool {
    circle_polygon_sat(circle, polygon).is_some()
}

/// Resolves `circle` away from `polygon`.
pub fn circle_polygon_mtv(circle: Circle, polygon: &Polygon) -> Option<Manifold> {
    circle_polygon_sat(circle, polygon)
}

pub fn check_collision_polygon_polygon(polygon1: &Polygon, polygon2: &Polygon) -> bool {
    separating_axis_test(polygon1, polygon2).is_overlapping()
}

/// Resolves `polygon1` away from `polygon2` along the axis of least overlap.
///
/// The sign comes from the difference of the polygons' translations, or of
/// their centroids when the translations coincide along the axis.
pub fn polygon_polygon_mtv(polygon1: &Polygon, polygon2: &Polygon) -> Option<Manifold> {
    match separating_axis_test(polygon1, polygon2) {
        SatOutcome::Separated { .. } => None,
        SatOutcome::Overlapping { axis, depth, .. } => {
            let normal = orient_axis(
                axis,
                polygon1.translation() - polygon2.translation(),
                polygon1.centroid() - polygon2.centroid(),
            );
            Some(Manifold::new(normal, depth))
        }
    }
}
