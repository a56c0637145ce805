//! # Rover Types Module
//!
//! This module defines the core value types of the rover simulation: the cardinal
//! [`Orientation`] of the rover and the integer [`Position`] of a grid cell.
//!
//! ## Key Components
//!
//! - **Orientation**: One of the four cardinal facings, rotated in steps of 90°
//! - **Position**: Integer grid coordinate, compared and hashed by value
//! - **DEFAULT_GRID_SIZE**: Side length of the grid used when nothing else is configured
//!
//! Both types are serializable so they can appear in configuration files and snapshots.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ParseOrientationError, ParsePositionError};

/// NOTE - Cardinal facing of the rover, in clockwise order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    North,
    East,
    South,
    West,
}

impl Orientation {
    /// All orientations in clockwise order, starting at North.
    pub const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
    ];

    fn index(self) -> usize {
        match self {
            Orientation::North => 0,
            Orientation::East => 1,
            Orientation::South => 2,
            Orientation::West => 3,
        }
    }

    /// Rotates 90° counter-clockwise.
    pub fn turn_left(self) -> Self {
        Self::ALL[(self.index() + 3) % 4]
    }

    /// Rotates 90° clockwise.
    pub fn turn_right(self) -> Self {
        Self::ALL[(self.index() + 1) % 4]
    }

    /// Step `(dx, dy)` taken by a forward move. North points towards increasing `y`.
    pub fn unit_delta(self) -> (i32, i32) {
        match self {
            Orientation::North => (0, 1),
            Orientation::East => (1, 0),
            Orientation::South => (0, -1),
            Orientation::West => (-1, 0),
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Orientation::North => "↑",
            Orientation::East => "→",
            Orientation::South => "↓",
            Orientation::West => "←",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Orientation::North => "north",
            Orientation::East => "east",
            Orientation::South => "south",
            Orientation::West => "west",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "north" | "n" => Ok(Orientation::North),
            "east" | "e" => Ok(Orientation::East),
            "south" | "s" => Ok(Orientation::South),
            "west" | "w" => Ok(Orientation::West),
            _ => Err(ParseOrientationError(s.to_string())),
        }
    }
}

/// NOTE - Grid coordinate, equal and hashed by value so it can live in the obstacle set
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring cell in front of `orientation`. `self` is left untouched.
    ///
    /// `None` when that cell is not representable (stepping past `i32::MAX` or `i32::MIN`).
    pub fn moved(self, orientation: Orientation) -> Option<Self> {
        let (dx, dy) = orientation.unit_delta();
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl FromStr for Position {
    type Err = ParsePositionError;

    /// Parses `"x,y"`, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePositionError(s.to_string());
        let (x, y) = s.split_once(',').ok_or_else(err)?;
        let x = x.trim().parse().map_err(|_| err())?;
        let y = y.trim().parse().map_err(|_| err())?;
        Ok(Self { x, y })
    }
}

/// NOTE - Grid side length of the classic scenario
pub const DEFAULT_GRID_SIZE: i32 = 5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_left_cycles_counter_clockwise() {
        assert_eq!(Orientation::North.turn_left(), Orientation::West);
        assert_eq!(Orientation::West.turn_left(), Orientation::South);
        assert_eq!(Orientation::South.turn_left(), Orientation::East);
        assert_eq!(Orientation::East.turn_left(), Orientation::North);
    }

    #[test]
    fn turn_right_cycles_clockwise() {
        assert_eq!(Orientation::North.turn_right(), Orientation::East);
        assert_eq!(Orientation::East.turn_right(), Orientation::South);
        assert_eq!(Orientation::South.turn_right(), Orientation::West);
        assert_eq!(Orientation::West.turn_right(), Orientation::North);
    }

    #[test]
    fn moved_follows_delta_table() {
        let p = Position::new(2, 2);
        assert_eq!(p.moved(Orientation::North), Some(Position::new(2, 3)));
        assert_eq!(p.moved(Orientation::East), Some(Position::new(3, 2)));
        assert_eq!(p.moved(Orientation::South), Some(Position::new(2, 1)));
        assert_eq!(p.moved(Orientation::West), Some(Position::new(1, 2)));
        assert_eq!(p, Position::new(2, 2));
    }

    #[test]
    fn moved_stops_at_integer_limits() {
        assert_eq!(Position::new(i32::MAX, 0).moved(Orientation::East), None);
        assert_eq!(Position::new(0, i32::MIN).moved(Orientation::South), None);
        assert_eq!(
            Position::new(i32::MAX, 0).moved(Orientation::West),
            Some(Position::new(i32::MAX - 1, 0))
        );
    }

    #[test]
    fn parses_orientation_names_and_initials() {
        assert_eq!("North".parse::<Orientation>().unwrap(), Orientation::North);
        assert_eq!(" w ".parse::<Orientation>().unwrap(), Orientation::West);
        assert!("up".parse::<Orientation>().is_err());
    }

    #[test]
    fn parses_positions() {
        assert_eq!("1, 2".parse::<Position>().unwrap(), Position::new(1, 2));
        assert_eq!("-1,0".parse::<Position>().unwrap(), Position::new(-1, 0));
        assert!("1;2".parse::<Position>().is_err());
        assert!("a,2".parse::<Position>().is_err());
    }

    #[test]
    fn orientation_serializes_lowercase() {
        let json = serde_json::to_string(&Orientation::East).unwrap();
        assert_eq!(json, "\"east\"");
    }
}
