//! Separating Axis Theorem for convex polygons.
//!
//! Candidate axes are the world-space edge normals of the first polygon,
//! then those of the second. Both polygons must have been `update`d for
//! their current transform, must be convex, and must wind counter-clockwise.

use crate::math::vec2::Vec2;
use crate::math::EPSILON;
use crate::shapes::Polygon;

/// Outcome of running SAT over every candidate axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SatOutcome {
    /// `axis` separates the polygons. Testing stopped there.
    Separated { axis: Vec2, axes_tested: usize },
    /// No axis separates them. `axis` is the axis of least overlap, not yet
    /// oriented; `depth` is the overlap along it.
    Overlapping { axis: Vec2, depth: f64, axes_tested: usize },
}

impl SatOutcome {
    pub fn is_overlapping(&self) -> bool {
        matches!(self, SatOutcome::Overlapping { .. })
    }

    /// Number of axes projected before the outcome was known.
    pub fn axes_tested(&self) -> usize {
        match *self {
            SatOutcome::Separated { axes_tested, .. } | SatOutcome::Overlapping { axes_tested, .. } => {
                axes_tested
            }
        }
    }
}

/// Projects `vertices` onto `axis` and returns the `(min, max)` interval.
pub fn project_vertices(vertices: &[Vec2], axis: Vec2) -> (f64, f64) {
    vertices.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
        let projection = v.dot(axis);
        (min.min(projection), max.max(projection))
    })
}

/// Length of the intersection of two intervals. Negative when disjoint.
pub fn interval_overlap((min1, max1): (f64, f64), (min2, max2): (f64, f64)) -> f64 {
    max1.min(max2) - min1.max(min2)
}

/// Runs SAT over both polygons' normals, returning at the first separating axis.
pub fn separating_axis_test(polygon1: &Polygon, polygon2: &Polygon) -> SatOutcome {
    let vertices1 = polygon1.world_vertices();
    let vertices2 = polygon2.world_vertices();
    let axes = polygon1.world_normals().iter().chain(polygon2.world_normals());

    let mut min_overlap = f64::INFINITY;
    let mut min_axis = Vec2::ZERO;
    let mut axes_tested = 0;

    for &axis in axes {
        axes_tested += 1;
        let overlap = interval_overlap(
            project_vertices(vertices1, axis),
            project_vertices(vertices2, axis),
        );
        if overlap < 0.0 {
            log::trace!("separating axis {:?} found after {} axes", axis, axes_tested);
            return SatOutcome::Separated { axis, axes_tested };
        }
        if overlap < min_overlap {
            min_overlap = overlap;
            min_axis = axis;
        }
    }

    SatOutcome::Overlapping {
        axis: min_axis,
        depth: min_overlap,
        axes_tested,
    }
}

/// Flips `axis` so it points along `primary`, falling back to `fallback`
/// when `primary` is perpendicular to the axis.
pub(crate) fn orient_axis(axis: Vec2, primary: Vec2, fallback: Vec2) -> Vec2 {
    let along = primary.dot(axis);
    let along = if along.abs() > EPSILON { along } else { fallback.dot(axis) };
    if along < 0.0 {
        -axis
    } else {
        axis
    }
}
