use crate::math::transform::Transform;
use crate::math::vec2::Vec2;
use crate::math::EPSILON;

/// A convex polygon with model-space geometry and a cached world-space copy.
///
/// Vertices are kept counter-clockwise and there is one outward unit normal
/// per edge (edge `i` runs from vertex `i` to vertex `i + 1`). The world copy
/// is only refreshed by [`Polygon::update`]; queries against a polygon whose
/// transform changed since the last update see stale geometry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon {
    model_vertices: Vec<Vec2>,
    model_normals: Vec<Vec2>,
    world_vertices: Vec<Vec2>,
    world_normals: Vec<Vec2>,
    translation: Vec2,
}

impl Polygon {
    /// Creates a new polygon from model-space vertices.
    ///
    /// Clockwise input is reversed so the stored winding is counter-clockwise.
    /// World geometry starts out equal to model geometry (identity transform).
    ///
    /// Panics if fewer than 3 vertices are provided or two consecutive
    /// vertices coincide.
    pub fn new(mut vertices: Vec<Vec2>) -> Self {
        assert!(vertices.len() >= 3, "Polygon must have at least 3 vertices");
        let n = vertices.len();
        assert!(
            (0..n).all(|i| vertices[i].distance_squared(vertices[(i + 1) % n]) > EPSILON * EPSILON),
            "Polygon edges must have non-zero length"
        );
        if signed_area(&vertices) < 0.0 {
            log::debug!("reversing clockwise polygon with {} vertices", vertices.len());
            vertices.reverse();
        }
        let normals = edge_normals(&vertices);
        Self {
            world_vertices: vertices.clone(),
            world_normals: normals.clone(),
            model_vertices: vertices,
            model_normals: normals,
            translation: Vec2::ZERO,
        }
    }

    /// Regular polygon centred on the model origin with the given circumradius.
    ///
    /// The first vertex lies on +x.
    pub fn regular(sides: usize, radius: f64) -> Self {
        assert!(sides >= 3, "Polygon must have at least 3 vertices");
        let step = std::f64::consts::TAU / sides as f64;
        let vertices = (0..sides)
            .map(|i| Vec2::from_angle(step * i as f64) * radius)
            .collect();
        Self::new(vertices)
    }

    /// Axis-aligned box centred on the model origin.
    pub fn rectangle(half_width: f64, half_height: f64) -> Self {
        Self::new(vec![
            Vec2::new(-half_width, -half_height),
            Vec2::new(half_width, -half_height),
            Vec2::new(half_width, half_height),
            Vec2::new(-half_width, half_height),
        ])
    }

    /// Number of vertices (and edges, and normals).
    pub fn count(&self) -> usize {
        self.model_vertices.len()
    }

    pub fn model_vertices(&self) -> &[Vec2] {
        &self.model_vertices
    }

    pub fn model_normals(&self) -> &[Vec2] {
        &self.model_normals
    }

    pub fn world_vertices(&self) -> &[Vec2] {
        &self.world_vertices
    }

    pub fn world_normals(&self) -> &[Vec2] {
        &self.world_normals
    }

    /// World translation recorded by the last `update`.
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    /// Recomputes world vertices and normals from `transform`.
    pub fn update(&mut self, transform: &Transform) {
        for (world, model) in self.world_vertices.iter_mut().zip(&self.model_vertices) {
            *world = transform.apply(*model);
        }
        for (world, model) in self.world_normals.iter_mut().zip(&self.model_normals) {
            *world = transform.apply_normal(*model);
        }
        self.translation = transform.translation;
    }

    /// Area of the world-space polygon (Shoelace formula).
    pub fn area(&self) -> f64 {
        signed_area(&self.world_vertices).abs()
    }

    /// Centroid of the world-space polygon.
    pub fn centroid(&self) -> Vec2 {
        let vertices = &self.world_vertices;
        let origin = vertices[0];
        let mut centroid = Vec2::ZERO;
        let mut signed_area_sum = 0.0;

        for window in vertices[1..].windows(2) {
            let (v2, v3) = (window[0], window[1]);
            let triangle_signed_area = (v2 - origin).cross(v3 - origin) / 2.0;
            signed_area_sum += triangle_signed_area;
            centroid += (origin + v2 + v3) / 3.0 * triangle_signed_area;
        }

        if signed_area_sum.abs() < EPSILON {
            // Collinear vertices: fall back to the vertex average
            let sum = vertices.iter().fold(Vec2::ZERO, |acc, v| acc + *v);
            sum / vertices.len() as f64
        } else {
            centroid / signed_area_sum
        }
    }

    /// Boundary-inclusive containment test against the world-space polygon.
    ///
    /// Only meaningful for convex polygons.
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.world_vertices
            .iter()
            .zip(&self.world_normals)
            .all(|(vertex, normal)| (point - *vertex).dot(*normal) <= EPSILON)
    }

    /// True when every turn along the model outline is counter-clockwise (or straight).
    pub fn is_convex(&self) -> bool {
        let n = self.count();
        (0..n).all(|i| {
            let a = self.model_vertices[i];
            let b = self.model_vertices[(i + 1) % n];
            let c = self.model_vertices[(i + 2) % n];
            (b - a).cross(c - b) >= -EPSILON
        })
    }
}

fn signed_area(vertices: &[Vec2]) -> f64 {
    let n = vertices.len();
    let sum: f64 = (0..n).map(|i| vertices[i].cross(vertices[(i + 1) % n])).sum();
    sum / 2.0
}

/// Outward unit normals of a counter-clockwise outline, one per edge.
fn edge_normals(vertices: &[Vec2]) -> Vec<Vec2> {
    let n = vertices.len();
    (0..n)
        .map(|i| {
            let edge = vertices[(i + 1) % n] - vertices[i];
            // perpendicular() points inside for CCW winding
            (-edge.perpendicular()).normalize()
        })
        .collect()
}
