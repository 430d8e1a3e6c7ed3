use std::io::ErrorKind;
use std::path::PathBuf;

use clap::Parser;
use collision_engine::storage::{self, StorageError};
use collision_engine::*;

mod scene;
mod visual;

use scene::{Input, Scene, SceneKind};

#[derive(Parser, Debug)]
#[command(name = "collision_examples", version, about = "Interactive 2D collision detection scenes")]
pub struct Cli {
    /// Scene to run
    #[arg(value_enum, default_value_t = SceneKind::Circles)]
    pub scene: SceneKind,

    /// Window width in pixels
    #[arg(long, default_value_t = 800.0)]
    pub width: f32,

    /// Window height in pixels
    #[arg(long, default_value_t = 600.0)]
    pub height: f32,

    /// Obstacle circles file (`x y radius` per line)
    #[arg(long, default_value = storage::DEFAULT_OBSTACLES_PATH)]
    pub obstacles: PathBuf,

    /// Sight-line target file (`x y` per line)
    #[arg(long, default_value = storage::DEFAULT_POINTS_PATH)]
    pub points: PathBuf,

    /// Fixed update rate in Hz
    #[arg(long, default_value_t = 60.0)]
    pub rate: f64,

    /// Run this many fixed steps without a window, logging contacts
    #[arg(long)]
    pub headless: Option<usize>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    if cli.rate.is_nan() || cli.rate <= 0.0 {
        log::error!("--rate must be positive, got {}", cli.rate);
        std::process::exit(2);
    }

    let bounds = Vec2::new(cli.width as f64, cli.height as f64);
    let obstacles = load_or_default("obstacles", storage::load_obstacles(&cli.obstacles), || {
        scene::default_obstacles(bounds)
    });
    let targets = load_or_default("points", storage::load_points(&cli.points), || {
        scene::default_targets(bounds)
    });
    let scene = Scene::new(cli.scene, bounds, obstacles, targets);

    log::info!("Running example: {}", cli.scene.title());

    if let Some(frames) = cli.headless {
        run_headless(scene, frames, cli.rate);
        return;
    }

    if let Err(e) = visual::run_visual(scene, &cli) {
        log::error!("Error running visual example: {}", e);
        std::process::exit(1);
    }
}

/// Falls back to `default` when the file is missing or unreadable.
fn load_or_default<T>(what: &str, loaded: Result<Vec<T>, StorageError>, default: impl FnOnce() -> Vec<T>) -> Vec<T> {
    match loaded {
        Ok(items) => items,
        Err(StorageError::Io(e)) if e.kind() == ErrorKind::NotFound => {
            log::info!("No {} file yet, using defaults", what);
            default()
        }
        Err(e) => {
            log::warn!("Could not load {}: {}. Using defaults", what, e);
            default()
        }
    }
}

/// Drives the player right across the scene, with the cursor sweeping the
/// same path, and logs every change in contact count.
fn run_headless(mut scene: Scene, frames: usize, rate: f64) {
    let dt = 1.0 / rate;
    let start = scene.player.transform.translation;
    let mut contacts = 0;

    for frame in 0..frames {
        let input = Input {
            movement: Vec2::UNIT_X,
            turn: 0.5,
            cursor: start + Vec2::new(frame as f64 * 2.0, 0.0),
        };
        let summary = scene.step(&input, dt);
        if summary.contacts != contacts {
            contacts = summary.contacts;
            let position = scene.player.transform.translation;
            log::info!(
                "Frame {}: {} contacts, player at ({:.2}, {:.2})",
                frame,
                contacts,
                position.x,
                position.y
            );
        }
        if summary.unsupported > 0 {
            log::warn!("Frame {}: {} unsupported shape pairs", frame, summary.unsupported);
        }
    }

    let blocked = scene.sight_lines.iter().filter(|line| line.hit.is_some()).count();
    if !scene.sight_lines.is_empty() {
        log::info!("{} of {} sight lines blocked", blocked, scene.sight_lines.len());
    }
    log::info!("Simulation finished.");
}
