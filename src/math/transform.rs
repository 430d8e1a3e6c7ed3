use super::vec2::Vec2;

/// Rigid transform with uniform scale. Owns no shape; shapes read it in `update`.
///
/// Only uniform scale is representable, so normals can be carried through the
/// rotation alone without an inverse-transpose.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    pub translation: Vec2,
    pub rotation: f64, // Angle in radians
    pub scale: f64,
}

impl Transform {
    /// Creates a new transform.
    pub fn new(translation: Vec2, rotation: f64, scale: f64) -> Self {
        Self { translation, rotation, scale }
    }

    /// Creates an identity transform (no translation, no rotation, unit scale).
    pub fn identity() -> Self {
        Self {
            translation: Vec2::ZERO,
            rotation: 0.0,
            scale: 1.0,
        }
    }

    /// Translation and rotation with unit scale.
    pub fn from_translation_rotation(translation: Vec2, rotation: f64) -> Self {
        Self::new(translation, rotation, 1.0)
    }

    /// Applies the transform to a point: scale, then rotation, then translation.
    pub fn apply(self, point: Vec2) -> Vec2 {
        (point * self.scale).rotate(self.rotation) + self.translation
    }

    /// Carries a direction (edge normal) into world space.
    ///
    /// Rotation only; the result is renormalised to shed floating-point drift.
    pub fn apply_normal(self, normal: Vec2) -> Vec2 {
        normal.rotate(self.rotation).normalize()
    }

    /// Applies the inverse transform (inverse translation, inverse rotation, inverse scale).
    pub fn apply_inverse(self, point: Vec2) -> Vec2 {
        (point - self.translation).rotate(-self.rotation) / self.scale
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;
    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_transform_identity() {
        let t = Transform::identity();
        let p = Vec2::new(5.0, -3.0);
        let tp = t.apply(p);
        assert!((tp.x - p.x).abs() < EPSILON);
        assert!((tp.y - p.y).abs() < EPSILON);
        assert_eq!(Transform::default(), t);
    }

    #[test]
    fn test_transform_apply_translation() {
        let t = Transform::new(Vec2::new(10.0, 5.0), 0.0, 1.0);
        let tp = t.apply(Vec2::new(1.0, 2.0));
        assert!((tp.x - 11.0).abs() < EPSILON);
        assert!((tp.y - 7.0).abs() < EPSILON);
    }

    #[test]
    fn test_transform_apply_rotation_90_deg() {
        let t = Transform::from_translation_rotation(Vec2::ZERO, PI / 2.0);
        let tp = t.apply(Vec2::new(1.0, 0.0));
        assert!(tp.x.abs() < EPSILON);
        assert!((tp.y - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_transform_scale_applies_before_rotation_and_translation() {
        // (1,0) * 2 -> (2,0), rotate 90 -> (0,2), translate -> (10,7)
        let t = Transform::new(Vec2::new(10.0, 5.0), PI / 2.0, 2.0);
        let tp = t.apply(Vec2::new(1.0, 0.0));
        assert!((tp.x - 10.0).abs() < EPSILON);
        assert!((tp.y - 7.0).abs() < EPSILON);
    }

    #[test]
    fn test_transform_normal_ignores_translation_and_scale() {
        let t = Transform::new(Vec2::new(100.0, -40.0), PI / 2.0, 3.0);
        let n = t.apply_normal(Vec2::new(1.0, 0.0));
        assert!(n.x.abs() < EPSILON);
        assert!((n.y - 1.0).abs() < EPSILON);
        assert!((n.magnitude() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_transform_apply_inverse_combined() {
        let t = Transform::new(Vec2::new(10.0, 5.0), PI / 4.0, 1.5);
        let p_local = Vec2::new(1.0, 1.0);
        let p_local_again = t.apply_inverse(t.apply(p_local));
        assert!((p_local_again.x - p_local.x).abs() < EPSILON);
        assert!((p_local_again.y - p_local.y).abs() < EPSILON);
    }
}
