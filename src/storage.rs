//! Plain-text persistence for obstacle circles and points.
//!
//! One record per line, fields separated by whitespace: `x y radius` for
//! obstacles and `x y` for points. Blank lines are ignored on load.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::math::vec2::Vec2;
use crate::shapes::Circle;

pub const DEFAULT_OBSTACLES_PATH: &str = "assets/data/obstacles.txt";
pub const DEFAULT_POINTS_PATH: &str = "assets/data/points.txt";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, StorageError>;

pub fn write_obstacles<W: Write>(mut writer: W, obstacles: &[Circle]) -> Result<()> {
    for obstacle in obstacles {
        writeln!(writer, "{} {} {}", obstacle.position.x, obstacle.position.y, obstacle.radius)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn read_obstacles<R: BufRead>(reader: R) -> Result<Vec<Circle>> {
    parse_records(reader, |line, [x, y, radius]: [f64; 3]| {
        if radius < 0.0 {
            return Err(StorageError::Parse {
                line,
                reason: format!("negative radius {}", radius),
            });
        }
        Ok(Circle::new(Vec2::new(x, y), radius))
    })
}

pub fn write_points<W: Write>(mut writer: W, points: &[Vec2]) -> Result<()> {
    for point in points {
        writeln!(writer, "{} {}", point.x, point.y)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn read_points<R: BufRead>(reader: R) -> Result<Vec<Vec2>> {
    parse_records(reader, |_, [x, y]: [f64; 2]| Ok(Vec2::new(x, y)))
}

/// Overwrites `path` with `obstacles`, creating parent directories as needed.
pub fn save_obstacles(path: impl AsRef<Path>, obstacles: &[Circle]) -> Result<()> {
    let path = path.as_ref();
    write_obstacles(create(path)?, obstacles)?;
    log::debug!("saved {} obstacles to {}", obstacles.len(), path.display());
    Ok(())
}

pub fn load_obstacles(path: impl AsRef<Path>) -> Result<Vec<Circle>> {
    let path = path.as_ref();
    let obstacles = read_obstacles(BufReader::new(File::open(path)?))?;
    log::debug!("loaded {} obstacles from {}", obstacles.len(), path.display());
    Ok(obstacles)
}

/// Overwrites `path` with `points`, creating parent directories as needed.
pub fn save_points(path: impl AsRef<Path>, points: &[Vec2]) -> Result<()> {
    let path = path.as_ref();
    write_points(create(path)?, points)?;
    log::debug!("saved {} points to {}", points.len(), path.display());
    Ok(())
}

pub fn load_points(path: impl AsRef<Path>) -> Result<Vec<Vec2>> {
    let path = path.as_ref();
    let points = read_points(BufReader::new(File::open(path)?))?;
    log::debug!("loaded {} points from {}", points.len(), path.display());
    Ok(points)
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(BufWriter::new(File::create(path)?))
}

/// Parses every non-blank line into exactly `N` floats and hands them to `build`.
fn parse_records<R, T, F, const N: usize>(reader: R, mut build: F) -> Result<Vec<T>>
where
    R: BufRead,
    F: FnMut(usize, [f64; N]) -> Result<T>,
{
    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = [0.0f64; N];
        let mut tokens = line.split_whitespace();
        for field in fields.iter_mut() {
            let token = tokens.next().ok_or_else(|| StorageError::Parse {
                line: number,
                reason: format!("expected {} fields", N),
            })?;
            *field = token.parse().map_err(|e| StorageError::Parse {
                line: number,
                reason: format!("invalid number {:?}: {}", token, e),
            })?;
            if !field.is_finite() {
                return Err(StorageError::Parse {
                    line: number,
                    reason: format!("non-finite number {:?}", token),
                });
            }
        }
        if let Some(extra) = tokens.next() {
            return Err(StorageError::Parse {
                line: number,
                reason: format!("unexpected trailing field {:?}", extra),
            });
        }

        log::trace!("line {}: {:?}", number, fields);
        records.push(build(number, fields)?);
    }
    Ok(records)
}
