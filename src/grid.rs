use std::collections::HashSet;

use noise::{NoiseFn, Perlin};
use rand::prelude::*;
use tracing::{debug, warn};

use crate::error::ConfigError;
use crate::types::Position;

/// The square `[0, size) x [0, size)` and the obstacles placed on it.
///
/// Neither the bound nor the obstacle set change once the grid is built.
#[derive(Clone, Debug)]
pub struct Grid {
    size: i32,
    obstacles: HashSet<Position>,
}

impl Grid {
    pub fn new(size: i32, obstacles: impl IntoIterator<Item = Position>) -> Result<Self, ConfigError> {
        if size <= 0 {
            return Err(ConfigError::InvalidGridSize(size));
        }

        let obstacles: HashSet<Position> = obstacles.into_iter().collect();
        let grid = Self { size, obstacles };

        // Harmless but most likely a typo in the configuration
        for obstacle in grid.obstacles.iter().filter(|o| !grid.is_within_grid(**o)) {
            warn!(%obstacle, size, "obstacle lies outside the grid and will never be reached");
        }

        Ok(grid)
    }

    /// Scatters obstacles with Perlin noise: every cell whose noise value exceeds
    /// `threshold` is blocked. `keep_clear` is never blocked so the rover can start there.
    ///
    /// Without a `seed` one is drawn at random.
    pub fn generate(
        size: i32,
        seed: Option<u32>,
        threshold: f64,
        keep_clear: Position,
    ) -> Result<Self, ConfigError> {
        if size <= 0 {
            return Err(ConfigError::InvalidGridSize(size));
        }
        if !(-1.0..=1.0).contains(&threshold) {
            return Err(ConfigError::InvalidThreshold(threshold));
        }

        let seed: u32 = seed.unwrap_or_else(|| rand::thread_rng().r#gen());
        let perlin = Perlin::new(seed);
        let mut obstacles = HashSet::new();

        for y in 0..size {
            for x in 0..size {
                let nx = x as f64 / size as f64;
                let ny = y as f64 / size as f64;
                let value = perlin.get([nx * 4.0, ny * 4.0]);

                let cell = Position::new(x, y);
                if value > threshold && cell != keep_clear {
                    obstacles.insert(cell);
                }
            }
        }

        debug!(seed, size, threshold, count = obstacles.len(), "generated obstacle field");
        Ok(Self { size, obstacles })
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// `0 <= x < size` and `0 <= y < size`.
    pub fn is_within_grid(&self, position: Position) -> bool {
        (0..self.size).contains(&position.x) && (0..self.size).contains(&position.y)
    }

    pub fn is_obstacle(&self, position: Position) -> bool {
        self.obstacles.contains(&position)
    }

    pub fn obstacles(&self) -> impl Iterator<Item = Position> + '_ {
        self.obstacles.iter().copied()
    }

    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }
}
