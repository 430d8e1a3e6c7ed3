use crate::math::vec2::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    pub position: Vec2,
    pub radius: f64,
}

impl Circle {
    pub fn new(position: Vec2, radius: f64) -> Self {
        assert!(radius >= 0.0, "Circle radius cannot be negative");
        Self { position, radius }
    }

    /// Returns a copy moved by `offset`.
    pub fn translated(self, offset: Vec2) -> Self {
        Self {
            position: self.position + offset,
            ..self
        }
    }
}
