use clap::ValueEnum;
use collision_engine::collision::{check_collision_point_circle, nearest_line_circle_intersection};
use collision_engine::*;
use std::f64::consts::PI;

const MOVE_SPEED: f64 = 220.0; // pixels per second
const TURN_SPEED: f64 = 2.5; // radians per second
const FOLLOW_RATE: f64 = 8.0; // fraction of the cursor gap closed per second

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SceneKind {
    /// Mouse-driven circle against persisted obstacle circles
    Circles,
    /// WASD capsule against capsules and a circle
    Capsules,
    /// WASD axis-aligned rect against rects and a circle
    Rects,
    /// WASD/QE pentagon against convex polygons and a circle
    Polygons,
    /// Sight lines from the cursor to persisted target points
    #[value(name = "line_of_sight")]
    LineOfSight,
}

impl SceneKind {
    pub fn title(&self) -> &'static str {
        match self {
            SceneKind::Circles => "Circles",
            SceneKind::Capsules => "Capsules",
            SceneKind::Rects => "Rects",
            SceneKind::Polygons => "Polygons",
            SceneKind::LineOfSight => "Line of sight",
        }
    }

    /// Scenes whose obstacles come from, and are saved back to, the obstacles file.
    pub fn edits_obstacles(&self) -> bool {
        matches!(self, SceneKind::Circles | SceneKind::LineOfSight)
    }
}

/// Player controls sampled once per frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct Input {
    /// Unit (or zero) movement direction.
    pub movement: Vec2,
    /// -1, 0 or 1.
    pub turn: f64,
    pub cursor: Vec2,
}

pub struct Body {
    pub shape: Shape,
    pub transform: Transform,
    pub colliding: bool,
}

impl Body {
    fn new(shape: impl Into<Shape>, x: f64, y: f64, rotation: f64) -> Self {
        let mut body = Body {
            shape: shape.into(),
            transform: Transform::from_translation_rotation(Vec2::new(x, y), rotation),
            colliding: false,
        };
        body.place();
        body
    }

    fn place(&mut self) {
        self.shape.update(&self.transform);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SightLine {
    pub start: Vec2,
    pub end: Vec2,
    /// First obstacle boundary crossed walking from `start`.
    pub hit: Option<Vec2>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepSummary {
    pub contacts: usize,
    pub unsupported: usize,
}

pub struct Scene {
    pub kind: SceneKind,
    pub player: Body,
    pub obstacles: Vec<Body>,
    pub targets: Vec<Vec2>,
    pub sight_lines: Vec<SightLine>,
}

impl Scene {
    /// Builds `kind` inside a `bounds`-sized window. `obstacles` and `targets`
    /// are only used by the scenes that edit them.
    pub fn new(kind: SceneKind, bounds: Vec2, obstacles: Vec<Circle>, targets: Vec<Vec2>) -> Self {
        let (w, h) = (bounds.x, bounds.y);
        let (cx, cy) = (w * 0.5, h * 0.5);

        let loaded = |obstacles: Vec<Circle>| {
            obstacles
                .into_iter()
                .map(|c| Body::new(c, c.position.x, c.position.y, 0.0))
                .collect::<Vec<_>>()
        };

        let (player, obstacles) = match kind {
            SceneKind::Circles => (Body::new(Circle::new(Vec2::ZERO, 30.0), cx, cy, 0.0), loaded(obstacles)),
            SceneKind::LineOfSight => (Body::new(Point::default(), cx, cy, 0.0), loaded(obstacles)),
            SceneKind::Capsules => (
                Body::new(Capsule::new(Vec2::ZERO, Vec2::UNIT_X, 20.0, 40.0), cx, cy, 0.0),
                vec![
                    Body::new(Capsule::new(Vec2::ZERO, Vec2::UNIT_X, 18.0, 60.0), w * 0.25, h * 0.3, 0.3),
                    Body::new(Capsule::new(Vec2::ZERO, Vec2::UNIT_X, 18.0, 60.0), w * 0.7, h * 0.25, PI / 2.0),
                    Body::new(Capsule::new(Vec2::ZERO, Vec2::UNIT_X, 18.0, 60.0), w * 0.6, h * 0.75, -0.6),
                    Body::new(Circle::new(Vec2::ZERO, 40.0), w * 0.2, h * 0.75, 0.0),
                ],
            ),
            SceneKind::Rects => (
                Body::new(Rect::new(Vec2::ZERO, Vec2::new(40.0, 25.0)), cx, cy, 0.0),
                vec![
                    Body::new(Rect::new(Vec2::ZERO, Vec2::new(80.0, 30.0)), w * 0.25, h * 0.25, 0.0),
                    Body::new(Rect::new(Vec2::ZERO, Vec2::new(40.0, 90.0)), w * 0.75, h * 0.3, 0.0),
                    Body::new(Rect::new(Vec2::ZERO, Vec2::new(150.0, 20.0)), w * 0.5, h * 0.8, 0.0),
                    Body::new(Circle::new(Vec2::ZERO, 45.0), w * 0.2, h * 0.7, 0.0),
                ],
            ),
            SceneKind::Polygons => (
                Body::new(Polygon::regular(5, 40.0), cx, cy, 0.0),
                vec![
                    Body::new(Polygon::regular(3, 60.0), w * 0.25, h * 0.3, 0.2),
                    Body::new(Polygon::rectangle(50.0, 30.0), w * 0.7, h * 0.3, 0.5),
                    Body::new(Polygon::regular(6, 55.0), w * 0.55, h * 0.75, 0.0),
                    Body::new(Circle::new(Vec2::ZERO, 40.0), w * 0.2, h * 0.75, 0.0),
                ],
            ),
        };

        let mut scene = Scene {
            kind,
            player,
            obstacles,
            targets,
            sight_lines: Vec::new(),
        };
        scene.cast_sight_lines();
        scene
    }

    /// Advances the scene by one fixed step.
    pub fn step(&mut self, input: &Input, dt: f64) -> StepSummary {
        let transform = &mut self.player.transform;
        match self.kind {
            SceneKind::Circles => {
                let gap = input.cursor - transform.translation;
                transform.translation += gap * (FOLLOW_RATE * dt).min(1.0);
            }
            SceneKind::LineOfSight => transform.translation = input.cursor,
            SceneKind::Capsules | SceneKind::Rects | SceneKind::Polygons => {
                transform.translation += input.movement * (MOVE_SPEED * dt);
                transform.rotation += input.turn * TURN_SPEED * dt;
            }
        }
        self.player.place();

        let summary = self.resolve_player();
        if self.kind == SceneKind::LineOfSight {
            self.cast_sight_lines();
        }
        summary
    }

    /// Pushes the player out of every obstacle it overlaps, in order.
    fn resolve_player(&mut self) -> StepSummary {
        let mut summary = StepSummary::default();
        for obstacle in &mut self.obstacles {
            obstacle.colliding = false;
            match self.player.shape.collide(&obstacle.shape) {
                Ok(Some(manifold)) => {
                    obstacle.colliding = true;
                    summary.contacts += 1;
                    self.player.transform.translation += manifold.mtv();
                    self.player.place();
                }
                Ok(None) => {}
                Err(err) => {
                    summary.unsupported += 1;
                    log::warn!("{}", err);
                }
            }
        }
        self.player.colliding = summary.contacts > 0;
        summary
    }

    fn cast_sight_lines(&mut self) {
        if self.kind != SceneKind::LineOfSight {
            return;
        }
        let start = self.player.transform.translation;
        self.sight_lines = self
            .targets
            .iter()
            .map(|&end| {
                let line = LineSegment::new(start, end);
                let hit = self
                    .obstacles
                    .iter()
                    .filter_map(|obstacle| match obstacle.shape {
                        Shape::Circle(circle) => nearest_line_circle_intersection(line, circle),
                        _ => None,
                    })
                    .min_by(|a, b| a.distance_squared(start).total_cmp(&b.distance_squared(start)));
                SightLine { start, end, hit }
            })
            .collect();
    }

    pub fn add_obstacle(&mut self, position: Vec2, radius: f64) {
        let circle = Circle::new(position, radius);
        self.obstacles.push(Body::new(circle, position.x, position.y, 0.0));
    }

    /// Removes every obstacle circle containing `point`. Returns how many went.
    pub fn remove_obstacles_at(&mut self, point: Vec2) -> usize {
        let before = self.obstacles.len();
        self.obstacles.retain(|obstacle| match obstacle.shape {
            Shape::Circle(circle) => !check_collision_point_circle(point, circle),
            _ => true,
        });
        before - self.obstacles.len()
    }

    pub fn add_target(&mut self, point: Vec2) {
        self.targets.push(point);
        self.cast_sight_lines();
    }

    /// Obstacle circles in the form the obstacles file stores them.
    pub fn obstacle_circles(&self) -> Vec<Circle> {
        self.obstacles
            .iter()
            .filter_map(|obstacle| match obstacle.shape {
                Shape::Circle(circle) => Some(circle),
                _ => None,
            })
            .collect()
    }
}

/// Ring of obstacles used when no obstacles file exists yet.
pub fn default_obstacles(bounds: Vec2) -> Vec<Circle> {
    let center = bounds * 0.5;
    let ring = bounds.x.min(bounds.y) * 0.3;
    (0..6)
        .map(|i| {
            let angle = i as f64 * PI / 3.0;
            Circle::new(center + Vec2::from_angle(angle) * ring, 25.0 + 5.0 * i as f64)
        })
        .collect()
}

/// Targets along the window border, used when no points file exists yet.
pub fn default_targets(bounds: Vec2) -> Vec<Vec2> {
    let margin = 40.0;
    vec![
        Vec2::new(margin, margin),
        Vec2::new(bounds.x * 0.5, margin),
        Vec2::new(bounds.x - margin, margin),
        Vec2::new(bounds.x - margin, bounds.y - margin),
        Vec2::new(margin, bounds.y - margin),
    ]
}
