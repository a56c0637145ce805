use tracing::debug;

use crate::command::{Command, Outcome, RoverState};
use crate::grid::Grid;
use crate::types::{Orientation, Position};

/// Controller owning the rover state and the grid it drives on.
///
/// State changes only through [`Rover::execute`]; everything else is read-only, so a
/// `&Rover` can be handed to a renderer without granting any mutation.
pub struct Rover {
    state: RoverState,
    grid: Grid,
    commands_executed: u64,
}

impl Rover {
    /// The start cell is expected to be free; use
    /// [`SimulationConfig::build_rover`](crate::config::SimulationConfig::build_rover)
    /// for a validated construction.
    pub fn new(grid: Grid, position: Position, orientation: Orientation) -> Self {
        Self {
            state: RoverState {
                position,
                orientation,
            },
            grid,
            commands_executed: 0,
        }
    }

    /// Runs one command to completion.
    pub fn execute(&mut self, command: Command) -> Outcome {
        let (next, outcome) = command.apply(self.state, &self.grid);
        self.state = next;
        self.commands_executed += 1;

        if let Outcome::Blocked(reason) = outcome {
            let target = reason.target();
            debug!(?reason, x = target.x, y = target.y, "forward move refused");
        }
        debug!(
            ?command,
            ?outcome,
            x = next.position.x,
            y = next.position.y,
            facing = %next.orientation,
            "command executed"
        );
        outcome
    }

    pub fn is_within_grid(&self, position: Position) -> bool {
        self.grid.is_within_grid(position)
    }

    pub fn is_obstacle(&self, position: Position) -> bool {
        self.grid.is_obstacle(position)
    }

    pub fn position(&self) -> Position {
        self.state.position
    }

    pub fn orientation(&self) -> Orientation {
        self.state.orientation
    }

    pub fn state(&self) -> RoverState {
        self.state
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_size(&self) -> i32 {
        self.grid.size()
    }

    pub fn commands_executed(&self) -> u64 {
        self.commands_executed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::BlockReason;

    fn classic() -> Rover {
        let grid = Grid::new(5, [Position::new(1, 2), Position::new(3, 3)]).unwrap();
        Rover::new(grid, Position::new(2, 2), Orientation::North)
    }

    #[test]
    fn walks_north_until_the_edge() {
        let mut rover = classic();
        assert!(!rover.execute(Command::MoveForward).is_blocked());
        assert!(!rover.execute(Command::MoveForward).is_blocked());
        assert_eq!(rover.position(), Position::new(2, 4));

        let outcome = rover.execute(Command::MoveForward);
        assert_eq!(outcome, Outcome::Blocked(BlockReason::Boundary(Position::new(2, 5))));
        assert_eq!(rover.position(), Position::new(2, 4));
        assert_eq!(rover.commands_executed(), 3);
    }

    #[test]
    fn obstacle_to_the_west_blocks() {
        let mut rover = classic();
        rover.execute(Command::TurnLeft);
        let outcome = rover.execute(Command::MoveForward);
        assert_eq!(outcome, Outcome::Blocked(BlockReason::Obstacle(Position::new(1, 2))));
        assert_eq!(rover.position(), Position::new(2, 2));
        assert_eq!(rover.orientation(), Orientation::West);
    }

    #[test]
    fn read_accessors_expose_the_grid() {
        let rover = classic();
        assert_eq!(rover.grid_size(), 5);
        assert!(rover.is_obstacle(Position::new(3, 3)));
        assert!(rover.is_within_grid(Position::new(4, 0)));
        assert!(!rover.is_within_grid(Position::new(4, -1)));
    }
}
