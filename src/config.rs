use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ConfigError;
use crate::grid::Grid;
use crate::rover::Rover;
use crate::types::{DEFAULT_GRID_SIZE, Orientation, Position};

/// Procedurally generated obstacles, replacing the explicit list when present.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObstacleField {
    /// Perlin seed; a random one is drawn when missing
    #[serde(default)]
    pub seed: Option<u32>,
    /// Cells whose noise value is above this become obstacles
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

fn default_threshold() -> f64 {
    0.3
}

impl Default for ObstacleField {
    fn default() -> Self {
        Self {
            seed: None,
            threshold: default_threshold(),
        }
    }
}

/// Values given on the command line. Each one present replaces the matching
/// configuration field; absent ones leave the configuration alone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigOverrides {
    pub grid_size: Option<i32>,
    pub start_position: Option<Position>,
    pub start_orientation: Option<Orientation>,
    /// Replaces the whole obstacle list when non-empty
    pub obstacles: Vec<Position>,
    /// Turns on generation, keeping any configured seed and threshold
    pub generate: bool,
    pub seed: Option<u32>,
    pub threshold: Option<f64>,
}

/// Construction-time options of a simulation.
///
/// Every field is optional in JSON and falls back to the classic 5x5 scenario:
///
/// ```json
/// {
///   "grid_size": 5,
///   "start_position": { "x": 2, "y": 2 },
///   "start_orientation": "north",
///   "obstacles": [{ "x": 1, "y": 2 }, { "x": 3, "y": 3 }]
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub grid_size: i32,
    pub start_position: Position,
    pub start_orientation: Orientation,
    pub obstacles: Vec<Position>,
    pub generate: Option<ObstacleField>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            start_position: Position::new(2, 2),
            start_orientation: Orientation::North,
            obstacles: vec![Position::new(1, 2), Position::new(3, 3)],
            generate: None,
        }
    }
}

impl SimulationConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(size) = overrides.grid_size {
            self.grid_size = size;
        }
        if let Some(start) = overrides.start_position {
            self.start_position = start;
        }
        if let Some(facing) = overrides.start_orientation {
            self.start_orientation = facing;
        }
        if !overrides.obstacles.is_empty() {
            self.obstacles = overrides.obstacles;
        }
        if overrides.generate {
            let mut field = self.generate.take().unwrap_or_default();
            if overrides.seed.is_some() {
                field.seed = overrides.seed;
            }
            if let Some(threshold) = overrides.threshold {
                field.threshold = threshold;
            }
            self.generate = Some(field);
        }
    }

    /// Builds the grid described by this configuration.
    pub fn build_grid(&self) -> Result<Grid, ConfigError> {
        match &self.generate {
            Some(field) => Grid::generate(
                self.grid_size,
                field.seed,
                field.threshold,
                self.start_position,
            ),
            None => Grid::new(self.grid_size, self.obstacles.iter().copied()),
        }
    }

    /// Checks the start cell against `grid`.
    fn check_start(&self, grid: &Grid) -> Result<(), ConfigError> {
        let start = self.start_position;
        if !grid.is_within_grid(start) {
            return Err(ConfigError::StartOutOfBounds {
                position: start,
                size: grid.size(),
            });
        }
        if grid.is_obstacle(start) {
            return Err(ConfigError::StartOnObstacle(start));
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let grid = self.build_grid()?;
        self.check_start(&grid)
    }

    /// Validates the configuration and places a rover on its grid.
    pub fn build_rover(&self) -> Result<Rover, ConfigError> {
        let grid = self.build_grid()?;
        self.check_start(&grid)?;

        info!(
            size = grid.size(),
            obstacles = grid.obstacle_count(),
            start = %self.start_position,
            facing = %self.start_orientation,
            "rover deployed"
        );
        Ok(Rover::new(grid, self.start_position, self.start_orientation))
    }
}
