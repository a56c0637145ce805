//! # Snapshot Module
//!
//! Machine-readable view of a running simulation. A [`RoverSnapshot`] is taken from
//! a `&Rover` after each command and written as a single JSON line by the
//! [`JsonRenderer`], so the session can be followed by another program instead of
//! a human.
//!
//! ## Format
//!
//! One JSON object per line, terminated by `\n`:
//!
//! ```json
//! {"grid_size":5,"position":{"x":2,"y":3},"orientation":"north","obstacles":[{"x":1,"y":2},{"x":3,"y":3}],"commands_executed":1}
//! ```

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::display::Renderer;
use crate::rover::Rover;
use crate::types::{Orientation, Position};

/// Serializable copy of everything a renderer may look at.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RoverSnapshot {
    /// Side length of the square grid
    pub grid_size: i32,

    /// Current cell of the rover
    pub position: Position,

    pub orientation: Orientation,

    /// Obstacle cells, sorted by `(x, y)` so equal grids produce equal output
    pub obstacles: Vec<Position>,

    /// Number of commands dispatched so far, blocked moves included
    pub commands_executed: u64,
}

/// Copies the observable state of `rover`.
pub fn create_snapshot(rover: &Rover) -> RoverSnapshot {
    let mut obstacles: Vec<Position> = rover.grid().obstacles().collect();
    obstacles.sort();

    RoverSnapshot {
        grid_size: rover.grid_size(),
        position: rover.position(),
        orientation: rover.orientation(),
        obstacles,
        commands_executed: rover.commands_executed(),
    }
}

/// Writes one [`RoverSnapshot`] per render as a JSON line.
#[derive(Default)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&mut self, rover: &Rover, out: &mut dyn Write) -> io::Result<()> {
        let snapshot = create_snapshot(rover);
        let json = serde_json::to_string(&snapshot)?;

        // NOTE - newline delimits messages
        out.write_all(json.as_bytes())?;
        out.write_all(b"\n")?;
        out.flush()
    }
}
