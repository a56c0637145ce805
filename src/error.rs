use std::path::PathBuf;

use thiserror::Error;

use crate::types::Position;

/// Errors raised while turning configuration into a ready-to-run rover.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read configuration file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("grid size must be positive, got {0}")]
    InvalidGridSize(i32),
    #[error("start position {position} is outside the {size}x{size} grid")]
    StartOutOfBounds { position: Position, size: i32 },
    #[error("start position {0} is occupied by an obstacle")]
    StartOnObstacle(Position),
    #[error("obstacle threshold must lie in [-1, 1], got {0}")]
    InvalidThreshold(f64),
}

/// Unrecognized session input. Raised by the driver only; the rover never sees it.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid command `{0}`")]
pub struct InvalidCommand(pub String);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("expected an orientation (north, east, south, west), got `{0}`")]
pub struct ParseOrientationError(pub String);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("expected a position as `x,y`, got `{0}`")]
pub struct ParsePositionError(pub String);
