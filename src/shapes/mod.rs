pub mod capsule;
pub mod circle;
pub mod line_segment;
pub mod point;
pub mod polygon;
pub mod rect;

use std::fmt;

use crate::collision::{self, CollisionError, Manifold};
use crate::math::transform::Transform;

pub use capsule::Capsule;
pub use circle::Circle;
pub use line_segment::LineSegment;
pub use point::Point;
pub use polygon::Polygon;
pub use rect::Rect;

/// Any collidable primitive.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    Point(Point),
    Circle(Circle),
    Capsule(Capsule),
    Rect(Rect),
    Polygon(Polygon),
}

/// Payload-free discriminant of [`Shape`], used in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Point,
    Circle,
    Capsule,
    Rect,
    Polygon,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Point => "point",
            ShapeKind::Circle => "circle",
            ShapeKind::Capsule => "capsule",
            ShapeKind::Rect => "rect",
            ShapeKind::Polygon => "polygon",
        };
        f.write_str(name)
    }
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Point(_) => ShapeKind::Point,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Capsule(_) => ShapeKind::Capsule,
            Shape::Rect(_) => ShapeKind::Rect,
            Shape::Polygon(_) => ShapeKind::Polygon,
        }
    }

    /// Moves the shape to `transform`.
    ///
    /// Points, circles and rects take the translation only (rects stay
    /// axis-aligned). Capsules also take their direction from the rotation.
    /// Polygons rebuild their world vertices and normals.
    pub fn update(&mut self, transform: &Transform) {
        match self {
            Shape::Point(point) => point.position = transform.translation,
            Shape::Circle(circle) => circle.position = transform.translation,
            Shape::Rect(rect) => rect.center = transform.translation,
            Shape::Capsule(capsule) => {
                capsule.position = transform.translation;
                capsule.set_rotation(transform.rotation);
            }
            Shape::Polygon(polygon) => polygon.update(transform),
        }
    }

    /// Tests this shape against `other`. The manifold displaces `self` away from `other`.
    pub fn collide(&self, other: &Shape) -> Result<Option<Manifold>, CollisionError> {
        collision::check_collision(self, other)
    }
}

impl From<Point> for Shape {
    fn from(point: Point) -> Self {
        Shape::Point(point)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Capsule> for Shape {
    fn from(capsule: Capsule) -> Self {
        Shape::Capsule(capsule)
    }
}

impl From<Rect> for Shape {
    fn from(rect: Rect) -> Self {
        Shape::Rect(rect)
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Self {
        Shape::Polygon(polygon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec2::Vec2;
    use std::f64::consts::PI;
    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_shape_update_moves_each_variant() {
        let transform = Transform::new(Vec2::new(3.0, 4.0), PI / 2.0, 1.0);

        let mut circle = Shape::from(Circle::new(Vec2::ZERO, 1.0));
        circle.update(&transform);
        assert_eq!(circle, Shape::Circle(Circle::new(Vec2::new(3.0, 4.0), 1.0)));

        let mut capsule = Shape::from(Capsule::new(Vec2::ZERO, Vec2::UNIT_X, 1.0, 2.0));
        capsule.update(&transform);
        match capsule {
            Shape::Capsule(c) => {
                assert_eq!(c.position, Vec2::new(3.0, 4.0));
                assert!(c.direction.x.abs() < EPSILON);
                assert!((c.direction.y - 1.0).abs() < EPSILON);
            }
            other => panic!("expected capsule, got {:?}", other),
        }

        let mut polygon = Shape::from(Polygon::rectangle(1.0, 1.0));
        polygon.update(&transform);
        match polygon {
            Shape::Polygon(p) => assert_eq!(p.translation(), Vec2::new(3.0, 4.0)),
            other => panic!("expected polygon, got {:?}", other),
        }
    }

    #[test]
    fn test_shape_kind_display() {
        assert_eq!(Shape::from(Rect::new(Vec2::ZERO, Vec2::new(1.0, 1.0))).kind(), ShapeKind::Rect);
        assert_eq!(ShapeKind::Capsule.to_string(), "capsule");
    }
}
