use crate::math::vec2::Vec2;
use super::line_segment::LineSegment;

/// A circle swept along a segment: two end circles joined by a rectangle.
///
/// The end circle centres are derived from `position`, `direction` and
/// `half_length` on demand and never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Capsule {
    pub position: Vec2,
    /// Must be unit length.
    pub direction: Vec2,
    pub radius: f64,
    pub half_length: f64,
}

impl Capsule {
    /// Creates a capsule. `direction` is normalized here.
    pub fn new(position: Vec2, direction: Vec2, radius: f64, half_length: f64) -> Self {
        assert!(radius >= 0.0, "Capsule radius cannot be negative");
        assert!(half_length >= 0.0, "Capsule half length cannot be negative");
        Self {
            position,
            direction: direction.normalize(),
            radius,
            half_length,
        }
    }

    /// Capsule whose end circles are centred on `bot` and `top`.
    pub fn from_endpoints(bot: Vec2, top: Vec2, radius: f64) -> Self {
        let axis = top - bot;
        let direction = if axis.magnitude_squared() > 0.0 { axis } else { Vec2::UNIT_X };
        Self::new(bot.lerp(top, 0.5), direction, radius, axis.magnitude() * 0.5)
    }

    /// Centre of the end circle along `+direction`.
    pub fn top(&self) -> Vec2 {
        self.position + self.direction * self.half_length
    }

    /// Centre of the end circle along `-direction`.
    pub fn bot(&self) -> Vec2 {
        self.position - self.direction * self.half_length
    }

    /// The core segment from `bot` to `top`.
    pub fn segment(&self) -> LineSegment {
        LineSegment::new(self.bot(), self.top())
    }

    /// Points the capsule along `rotation` radians from +x.
    pub fn set_rotation(&mut self, rotation: f64) {
        self.direction = Vec2::from_angle(rotation);
    }
}
