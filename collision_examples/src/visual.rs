use ggez::{Context, GameResult};
use ggez::graphics::{self, Canvas, Color, DrawMode, DrawParam, Mesh, Text};
use ggez::event::{self, EventHandler};
use ggez::input::keyboard::{KeyCode, KeyInput};
use ggez::input::mouse::MouseButton;
use ggez::glam::Vec2 as GVec2;
use collision_engine::storage;
use collision_engine::*;

use crate::scene::{Input, Scene, StepSummary};
use crate::Cli;

const NEW_OBSTACLE_RADIUS: f64 = 30.0;

struct MainState {
    scene: Scene,
    clock: FixedTimestep,
    last_step: StepSummary,
    obstacles_path: std::path::PathBuf,
    points_path: std::path::PathBuf,
}

impl MainState {
    fn new(scene: Scene, cli: &Cli) -> MainState {
        MainState {
            scene,
            clock: FixedTimestep::from_rate(cli.rate),
            last_step: StepSummary::default(),
            obstacles_path: cli.obstacles.clone(),
            points_path: cli.points.clone(),
        }
    }

    fn save(&self) {
        let obstacles = self.scene.obstacle_circles();
        match storage::save_obstacles(&self.obstacles_path, &obstacles) {
            Ok(()) => log::info!("Saved {} obstacles to {}", obstacles.len(), self.obstacles_path.display()),
            Err(e) => log::error!("Could not save obstacles: {}", e),
        }
        match storage::save_points(&self.points_path, &self.scene.targets) {
            Ok(()) => log::info!("Saved {} points to {}", self.scene.targets.len(), self.points_path.display()),
            Err(e) => log::error!("Could not save points: {}", e),
        }
    }
}

fn to_screen(v: Vec2) -> GVec2 {
    GVec2::new(v.x as f32, v.y as f32)
}

fn read_input(ctx: &Context) -> Input {
    let keys = &ctx.keyboard;
    let mut movement = Vec2::ZERO;
    // ggez y is down
    if keys.is_key_pressed(KeyCode::W) {
        movement.y -= 1.0;
    }
    if keys.is_key_pressed(KeyCode::S) {
        movement.y += 1.0;
    }
    if keys.is_key_pressed(KeyCode::A) {
        movement.x -= 1.0;
    }
    if keys.is_key_pressed(KeyCode::D) {
        movement.x += 1.0;
    }

    let mut turn = 0.0;
    if keys.is_key_pressed(KeyCode::Q) {
        turn -= 1.0;
    }
    if keys.is_key_pressed(KeyCode::E) {
        turn += 1.0;
    }

    let cursor = ctx.mouse.position();
    Input {
        movement: movement.normalize(),
        turn,
        cursor: Vec2::new(cursor.x as f64, cursor.y as f64),
    }
}

fn draw_shape(ctx: &mut Context, canvas: &mut Canvas, shape: &Shape, color: Color) -> GameResult {
    let outline = DrawMode::stroke(2.0);
    match shape {
        Shape::Point(point) => {
            let mesh = Mesh::new_circle(ctx, DrawMode::fill(), to_screen(point.position), 4.0, 0.1, color)?;
            canvas.draw(&mesh, DrawParam::new());
        }
        Shape::Circle(circle) => {
            let mesh = Mesh::new_circle(ctx, outline, to_screen(circle.position), circle.radius as f32, 0.1, color)?;
            canvas.draw(&mesh, DrawParam::new());
        }
        Shape::Capsule(capsule) => {
            let side = capsule.direction.perpendicular() * capsule.radius;
            let (top, bot) = (capsule.top(), capsule.bot());
            for end in [top, bot] {
                let cap = Mesh::new_circle(ctx, outline, to_screen(end), capsule.radius as f32, 0.1, color)?;
                canvas.draw(&cap, DrawParam::new());
            }
            for edge in [[bot + side, top + side], [bot - side, top - side]] {
                let line = Mesh::new_line(ctx, &[to_screen(edge[0]), to_screen(edge[1])], 2.0, color)?;
                canvas.draw(&line, DrawParam::new());
            }
        }
        Shape::Rect(rect) => {
            let min = rect.min();
            let bounds = graphics::Rect::new(min.x as f32, min.y as f32, rect.width() as f32, rect.height() as f32);
            let mesh = Mesh::new_rectangle(ctx, outline, bounds, color)?;
            canvas.draw(&mesh, DrawParam::new());
        }
        Shape::Polygon(polygon) => {
            let points: Vec<GVec2> = polygon.world_vertices().iter().map(|v| to_screen(*v)).collect();
            let mesh = Mesh::new_polygon(ctx, outline, &points, color)?;
            canvas.draw(&mesh, DrawParam::new());
        }
    }
    Ok(())
}

impl EventHandler for MainState {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        let input = read_input(ctx);
        let steps = self.clock.advance(ctx.time.delta().as_secs_f64());
        for _ in 0..steps {
            self.last_step = self.scene.step(&input, self.clock.step());
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = graphics::Canvas::from_frame(ctx, Color::BLACK);

        for obstacle in &self.scene.obstacles {
            let color = if obstacle.colliding { Color::RED } else { Color::WHITE };
            draw_shape(ctx, &mut canvas, &obstacle.shape, color)?;
        }
        let player_color = if self.scene.player.colliding { Color::YELLOW } else { Color::GREEN };
        draw_shape(ctx, &mut canvas, &self.scene.player.shape, player_color)?;

        for sight in &self.scene.sight_lines {
            let end = sight.hit.unwrap_or(sight.end);
            let color = if sight.hit.is_some() { Color::RED } else { Color::CYAN };
            let line = Mesh::new_line(ctx, &[to_screen(sight.start), to_screen(end)], 1.5, color)?;
            canvas.draw(&line, DrawParam::new());

            let target = Mesh::new_circle(ctx, DrawMode::fill(), to_screen(sight.end), 5.0, 0.1, Color::CYAN)?;
            canvas.draw(&target, DrawParam::new());
            if let Some(hit) = sight.hit {
                let marker = Mesh::new_circle(ctx, DrawMode::fill(), to_screen(hit), 4.0, 0.1, Color::RED)?;
                canvas.draw(&marker, DrawParam::new());
            }
        }

        let controls = if self.scene.kind.edits_obstacles() {
            "Left click: add obstacle  Right click: remove  T: add target  F5: save"
        } else {
            "WASD: move  Q/E: rotate"
        };
        let hud = format!(
            "{}  |  contacts: {}  |  FPS: {:.0}\n{}",
            self.scene.kind.title(),
            self.last_step.contacts,
            ctx.time.fps(),
            controls
        );
        let mut text = Text::new(hud);
        text.set_scale(16.0);
        canvas.draw(&text, DrawParam::new().dest(GVec2::new(10.0, 10.0)).color(Color::WHITE));

        canvas.finish(ctx)?;
        Ok(())
    }

    fn mouse_button_down_event(&mut self, _ctx: &mut Context, button: MouseButton, x: f32, y: f32) -> GameResult {
        if !self.scene.kind.edits_obstacles() {
            return Ok(());
        }
        let point = Vec2::new(x as f64, y as f64);
        match button {
            MouseButton::Left => self.scene.add_obstacle(point, NEW_OBSTACLE_RADIUS),
            MouseButton::Right => {
                let removed = self.scene.remove_obstacles_at(point);
                log::debug!("removed {} obstacles at {:?}", removed, point);
            }
            _ => {}
        }
        Ok(())
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, _repeated: bool) -> GameResult {
        match input.keycode {
            Some(KeyCode::Escape) => ctx.request_quit(),
            Some(KeyCode::F5) if self.scene.kind.edits_obstacles() => self.save(),
            Some(KeyCode::T) if self.scene.kind.edits_obstacles() => {
                let cursor = ctx.mouse.position();
                self.scene.add_target(Vec2::new(cursor.x as f64, cursor.y as f64));
            }
            _ => {}
        }
        Ok(())
    }
}

pub fn run_visual(scene: Scene, cli: &Cli) -> GameResult {
    let title = format!("Collision Examples: {}", scene.kind.title());
    let cb = ggez::ContextBuilder::new("collision_examples", "author")
        .window_setup(ggez::conf::WindowSetup::default().title(&title))
        .window_mode(ggez::conf::WindowMode::default().dimensions(cli.width, cli.height));

    let (ctx, event_loop) = cb.build()?;
    let state = MainState::new(scene, cli);
    event::run(ctx, event_loop, state)
}
