//! Pairwise dispatch over [`Shape`].

use thiserror::Error;

use crate::shapes::{Circle, Shape, ShapeKind};
use super::capsule::{capsule_capsule_mtv, circle_capsule_mtv, point_capsule_mtv};
use super::circle::{circle_circle_mtv, circle_rect_mtv, point_circle_mtv};
use super::manifold::Manifold;
use super::polygon::{circle_polygon_mtv, point_polygon_mtv, polygon_polygon_mtv};
use super::rect::rect_rect_mtv;

/// Two points collide when they are within this distance of each other.
pub const POINT_CONTACT_RADIUS: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CollisionError {
    #[error("unsupported shape pair: {first} vs {second}")]
    UnsupportedPair { first: ShapeKind, second: ShapeKind },
}

/// Tests `first` against `second`.
///
/// `Ok(None)` means the shapes are apart. A manifold always displaces `first`
/// away from `second`; pairs that only have a routine for the other argument
/// order are computed that way and reversed.
pub fn check_collision(first: &Shape, second: &Shape) -> Result<Option<Manifold>, CollisionError> {
    let manifold = match (first, second) {
        (Shape::Point(p1), Shape::Point(p2)) => {
            point_circle_mtv(p1.position, Circle::new(p2.position, POINT_CONTACT_RADIUS))
        }

        (Shape::Point(p), Shape::Circle(c)) => point_circle_mtv(p.position, *c),
        (Shape::Circle(c), Shape::Point(p)) => point_circle_mtv(p.position, *c).map(Manifold::reversed),

        (Shape::Point(p), Shape::Capsule(c)) => point_capsule_mtv(p.position, *c),
        (Shape::Capsule(c), Shape::Point(p)) => point_capsule_mtv(p.position, *c).map(Manifold::reversed),

        (Shape::Point(p), Shape::Polygon(poly)) => point_polygon_mtv(p.position, poly),
        (Shape::Polygon(poly), Shape::Point(p)) => point_polygon_mtv(p.position, poly).map(Manifold::reversed),

        (Shape::Circle(c1), Shape::Circle(c2)) => circle_circle_mtv(*c1, *c2),

        (Shape::Circle(c), Shape::Rect(r)) => circle_rect_mtv(*c, *r),
        (Shape::Rect(r), Shape::Circle(c)) => circle_rect_mtv(*c, *r).map(Manifold::reversed),

        (Shape::Circle(c), Shape::Capsule(cap)) => circle_capsule_mtv(*c, *cap),
        (Shape::Capsule(cap), Shape::Circle(c)) => circle_capsule_mtv(*c, *cap).map(Manifold::reversed),

        (Shape::Circle(c), Shape::Polygon(poly)) => circle_polygon_mtv(*c, poly),
        (Shape::Polygon(poly), Shape::Circle(c)) => circle_polygon_mtv(*c, poly).map(Manifold::reversed),

        (Shape::Capsule(c1), Shape::Capsule(c2)) => capsule_capsule_mtv(*c1, *c2),
        (Shape::Rect(r1), Shape::Rect(r2)) => rect_rect_mtv(*r1, *r2),
        (Shape::Polygon(p1), Shape::Polygon(p2)) => polygon_polygon_mtv(p1, p2),

        (Shape::Point(_), Shape::Rect(_))
        | (Shape::Rect(_), Shape::Point(_))
        | (Shape::Capsule(_), Shape::Rect(_))
        | (Shape::Rect(_), Shape::Capsule(_))
        | (Shape::Capsule(_), Shape::Polygon(_))
        | (Shape::Polygon(_), Shape::Capsule(_))
        | (Shape::Rect(_), Shape::Polygon(_))
        | (Shape::Polygon(_), Shape::Rect(_)) => {
            let (first, second) = (first.kind(), second.kind());
            log::debug!("no narrow-phase routine for {} vs {}", first, second);
            return Err(CollisionError::UnsupportedPair { first, second });
        }
    };
    Ok(manifold)
}
