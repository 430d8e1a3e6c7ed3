use crate::math::vec2::Vec2;

/// Result of a narrow-phase test between two shapes `A` and `B`.
///
/// `normal` is unit length (or zero for degenerate input) and points the
/// way `A` must move to separate from `B`. `depth` is the penetration along
/// that normal; zero means the shapes are exactly touching.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Manifold {
    pub normal: Vec2,
    pub depth: f64,
}

impl Manifold {
    pub fn new(normal: Vec2, depth: f64) -> Self {
        Self { normal, depth }
    }

    /// Minimum translation vector: displacement that moves `A` out of `B`.
    pub fn mtv(&self) -> Vec2 {
        self.normal * self.depth
    }

    /// The same contact seen from `B`: displaces `B` away from `A`.
    pub fn reversed(self) -> Self {
        Self {
            normal: -self.normal,
            depth: self.depth,
        }
    }
}
