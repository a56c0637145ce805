use mars_rover::{Command, Grid, Orientation, Position, Rover};
use proptest::prelude::*;

fn orientation() -> impl Strategy<Value = Orientation> {
    prop::sample::select(Orientation::ALL.to_vec())
}

fn command() -> impl Strategy<Value = Command> {
    prop::sample::select(vec![
        Command::MoveForward,
        Command::TurnLeft,
        Command::TurnRight,
    ])
}

proptest! {
    /// Left and right rotations undo each other.
    #[test]
    fn turns_are_inverse(o in orientation()) {
        prop_assert_eq!(o.turn_right().turn_left(), o);
        prop_assert_eq!(o.turn_left().turn_right(), o);
    }

    /// Four quarter turns in either direction are the identity.
    #[test]
    fn four_turns_are_identity(o in orientation()) {
        prop_assert_eq!(o.turn_left().turn_left().turn_left().turn_left(), o);
        prop_assert_eq!(o.turn_right().turn_right().turn_right().turn_right(), o);
    }

    /// A move changes exactly one coordinate by exactly one.
    #[test]
    fn move_is_a_unit_step(x in any::<i32>(), y in any::<i32>(), o in orientation()) {
        let p = Position::new(x, y);
        let (dx, dy) = o.unit_delta();
        match p.moved(o) {
            Some(q) => {
                prop_assert_eq!((q.x as i64 - p.x as i64, q.y as i64 - p.y as i64), (dx as i64, dy as i64));
            }
            None => {
                prop_assert!(x.checked_add(dx).is_none() || y.checked_add(dy).is_none());
            }
        }
    }

    #[test]
    fn boundary_law(size in 1i32..50, x in -60i32..60, y in -60i32..60) {
        let grid = Grid::new(size, []).unwrap();
        let expected = 0 <= x && x < size && 0 <= y && y < size;
        prop_assert_eq!(grid.is_within_grid(Position::new(x, y)), expected);
    }

    /// Retrying a blocked move changes nothing and is blocked again.
    #[test]
    fn blocked_moves_are_idempotent(
        size in 1i32..8,
        obstacles in prop::collection::vec((0i32..8, 0i32..8), 0..12),
        o in orientation(),
    ) {
        let obstacles: Vec<Position> = obstacles.into_iter().map(Position::from).collect();
        let grid = Grid::new(size, obstacles.iter().copied()).unwrap();
        let start = (0..size)
            .flat_map(|y| (0..size).map(move |x| Position::new(x, y)))
            .find(|p| !grid.is_obstacle(*p));
        prop_assume!(start.is_some());

        let mut rover = Rover::new(grid, start.unwrap(), o);
        // drive forward until something stops us
        let first = loop {
            let outcome = rover.execute(Command::MoveForward);
            if outcome.is_blocked() {
                break outcome;
            }
        };
        let state = rover.state();

        let second = rover.execute(Command::MoveForward);
        prop_assert_eq!(first, second);
        prop_assert_eq!(rover.state(), state);
    }

    /// The rover never leaves the grid nor lands on an obstacle.
    #[test]
    fn random_walks_stay_legal(
        obstacles in prop::collection::vec((0i32..6, 0i32..6), 0..10),
        commands in prop::collection::vec(command(), 0..200),
    ) {
        let obstacles: Vec<Position> = obstacles
            .into_iter()
            .map(Position::from)
            .filter(|p| *p != Position::new(0, 0))
            .collect();
        let grid = Grid::new(6, obstacles).unwrap();
        let mut rover = Rover::new(grid, Position::new(0, 0), Orientation::North);

        for command in commands {
            let before = rover.state();
            let outcome = rover.execute(command);
            let after = rover.state();

            prop_assert!(rover.is_within_grid(after.position));
            prop_assert!(!rover.is_obstacle(after.position));
            if outcome.is_blocked() {
                prop_assert_eq!(before, after);
            }
        }
    }
}
