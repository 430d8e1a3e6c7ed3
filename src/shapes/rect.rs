use crate::math::vec2::Vec2;
use super::circle::Circle;

/// An axis-aligned rectangle stored as centre and half extents.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl Rect {
    pub fn new(center: Vec2, half_extents: Vec2) -> Self {
        assert!(
            half_extents.x >= 0.0 && half_extents.y >= 0.0,
            "Rect half extents cannot be negative"
        );
        Self { center, half_extents }
    }

    /// Creates a rectangle from two opposite corners, in any order.
    pub fn from_min_max(a: Vec2, b: Vec2) -> Self {
        let min = Vec2::new(a.x.min(b.x), a.y.min(b.y));
        let max = Vec2::new(a.x.max(b.x), a.y.max(b.y));
        Self::new(min.lerp(max, 0.5), (max - min) * 0.5)
    }

    /// Smallest rectangle containing `circle`.
    pub fn from_circle(circle: Circle) -> Self {
        Self::new(circle.position, Vec2::new(circle.radius, circle.radius))
    }

    /// Circle centred on the rectangle whose radius is half the longer side.
    ///
    /// Covers the rectangle only along its longer axis; it is a size proxy,
    /// not a bounding circle.
    pub fn to_circle(self) -> Circle {
        Circle::new(self.center, self.half_extents.x.max(self.half_extents.y))
    }

    pub fn min(&self) -> Vec2 {
        self.center - self.half_extents
    }

    pub fn max(&self) -> Vec2 {
        self.center + self.half_extents
    }

    pub fn width(&self) -> f64 {
        self.half_extents.x * 2.0
    }

    pub fn height(&self) -> f64 {
        self.half_extents.y * 2.0
    }

    /// Nearest point of the rectangle (boundary or interior) to `point`.
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        let min = self.min();
        let max = self.max();
        Vec2::new(point.x.clamp(min.x, max.x), point.y.clamp(min.y, max.y))
    }

    /// Boundary-inclusive containment.
    pub fn contains_point(&self, point: Vec2) -> bool {
        let d = point - self.center;
        d.x.abs() <= self.half_extents.x && d.y.abs() <= self.half_extents.y
    }
}
