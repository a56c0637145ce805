//! # Command Protocol
//!
//! The three atomic transitions a rover accepts. A command never touches the rover
//! directly: [`Command::apply`] computes the complete next [`RoverState`] from the
//! current one, and the controller stores it in a single assignment. A transition
//! therefore either applies in full or not at all.

use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::types::{Orientation, Position};

/// NOTE - Atomic state transitions accepted by the rover
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    MoveForward,
    TurnLeft,
    TurnRight,
}

/// Position and facing of the rover; the whole mutable state of a simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverState {
    pub position: Position,
    pub orientation: Orientation,
}

/// Why a forward move was refused. Carries the cell the rover tried to enter, or its
/// current cell when the next one lies past the integer range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockReason {
    Boundary(Position),
    Obstacle(Position),
}

impl BlockReason {
    pub fn target(self) -> Position {
        match self {
            BlockReason::Boundary(p) | BlockReason::Obstacle(p) => p,
        }
    }
}

/// Observable result of one executed command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Moved { from: Position, to: Position },
    Turned { from: Orientation, to: Orientation },
    Blocked(BlockReason),
}

impl Outcome {
    pub fn is_blocked(&self) -> bool {
        matches!(self, Outcome::Blocked(_))
    }
}

impl Command {
    /// Computes the state that follows `state` on `grid`.
    ///
    /// A blocked move returns `state` unchanged alongside [`Outcome::Blocked`].
    pub fn apply(self, state: RoverState, grid: &Grid) -> (RoverState, Outcome) {
        match self {
            Command::MoveForward => {
                let Some(candidate) = state.position.moved(state.orientation) else {
                    return (state, Outcome::Blocked(BlockReason::Boundary(state.position)));
                };
                if !grid.is_within_grid(candidate) {
                    (state, Outcome::Blocked(BlockReason::Boundary(candidate)))
                } else if grid.is_obstacle(candidate) {
                    (state, Outcome::Blocked(BlockReason::Obstacle(candidate)))
                } else {
                    let next = RoverState {
                        position: candidate,
                        ..state
                    };
                    let outcome = Outcome::Moved {
                        from: state.position,
                        to: candidate,
                    };
                    (next, outcome)
                }
            }
            Command::TurnLeft => Self::rotate(state, state.orientation.turn_left()),
            Command::TurnRight => Self::rotate(state, state.orientation.turn_right()),
        }
    }

    fn rotate(state: RoverState, to: Orientation) -> (RoverState, Outcome) {
        let next = RoverState {
            orientation: to,
            ..state
        };
        (
            next,
            Outcome::Turned {
                from: state.orientation,
                to,
            },
        )
    }
}
