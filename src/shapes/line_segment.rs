use crate::math::projection::{project_point_line, project_point_segment};
use crate::math::vec2::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineSegment {
    pub start: Vec2,
    pub end: Vec2,
}

impl LineSegment {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Calculates the length of the line segment.
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Calculates the squared length of the line segment.
    pub fn length_squared(&self) -> f64 {
        self.start.distance_squared(self.end)
    }

    /// Returns the direction vector of the line segment (from start to end).
    pub fn direction(&self) -> Vec2 {
        self.end - self.start
    }

    /// Point at parameter `t` along the segment (`t` in `[0, 1]` stays on the segment).
    pub fn point_at(&self, t: f64) -> Vec2 {
        self.start.lerp(self.end, t)
    }

    /// Closest point on the segment to `point`.
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        project_point_segment(self.start, self.end, point)
    }

    /// Closest point on the infinite line through the segment.
    pub fn closest_point_on_line(&self, point: Vec2) -> Vec2 {
        project_point_line(self.start, self.end, point)
    }

    /// Returns a copy moved by `offset`.
    pub fn translated(&self, offset: Vec2) -> Self {
        Self::new(self.start + offset, self.end + offset)
    }
}
