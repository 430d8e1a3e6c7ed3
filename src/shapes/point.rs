use crate::math::vec2::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub position: Vec2,
}

impl Point {
    pub fn new(position: Vec2) -> Self {
        Self { position }
    }
}

impl From<Vec2> for Point {
    fn from(position: Vec2) -> Self {
        Self { position }
    }
}
