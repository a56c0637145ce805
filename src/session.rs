//! # Session Driver
//!
//! Line-oriented command loop around a [`Rover`]. Reads one token per line, maps it to
//! a [`Command`], executes it, reports blocked moves, and hands the rover to a
//! [`Renderer`]. Input and output are generic so the same loop serves stdin, script
//! files and in-memory tests.

use std::io::{BufRead, Result, Write};
use std::str::FromStr;

use tracing::{info, warn};

use crate::command::{Command, Outcome};
use crate::display::Renderer;
use crate::error::InvalidCommand;
use crate::rover::Rover;

pub const WELCOME: &str = "Welcome to the Mars Rover Simulation!";
pub const HELP: &str = "Commands: move | turn left | turn right | exit";
pub const PROMPT: &str = "Enter command: ";
pub const BLOCKED: &str = "Cannot move forward, obstacle or boundary detected!";
pub const INVALID: &str = "Invalid command. Please try again.";
pub const GOODBYE: &str = "Exiting simulation.";

/// One line of user input, resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    Exit,
}

impl FromStr for Input {
    type Err = InvalidCommand;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "move" => Ok(Input::Command(Command::MoveForward)),
            "turn left" => Ok(Input::Command(Command::TurnLeft)),
            "turn right" => Ok(Input::Command(Command::TurnRight)),
            "exit" => Ok(Input::Exit),
            _ => Err(InvalidCommand(s.trim().to_string())),
        }
    }
}

/// Counters collected over one session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub commands_dispatched: u64,
    pub moves_blocked: u64,
    pub invalid_inputs: u64,
}

pub struct Session<R: Renderer> {
    rover: Rover,
    renderer: R,
    show_prompt: bool,
}

impl<R: Renderer> Session<R> {
    pub fn new(rover: Rover, renderer: R) -> Self {
        Self {
            rover,
            renderer,
            show_prompt: true,
        }
    }

    /// Disables banner, prompt and notices; only the renderer writes to the output.
    pub fn quiet(mut self) -> Self {
        self.show_prompt = false;
        self
    }

    pub fn rover(&self) -> &Rover {
        &self.rover
    }

    /// Dispatches a single command and renders the result.
    pub fn dispatch(&mut self, command: Command, out: &mut dyn Write) -> Result<Outcome> {
        let outcome = self.rover.execute(command);
        if outcome.is_blocked() && self.show_prompt {
            writeln!(out, "{BLOCKED}")?;
        }
        self.renderer.render(&self.rover, out)?;
        Ok(outcome)
    }

    /// Runs until `exit` or end of input.
    pub fn run(&mut self, input: impl BufRead, out: &mut dyn Write) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        info!(
            x = self.rover.position().x,
            y = self.rover.position().y,
            facing = %self.rover.orientation(),
            "session started"
        );

        if self.show_prompt {
            writeln!(out, "{WELCOME}")?;
            writeln!(out, "{HELP}")?;
        }

        let mut lines = input.lines();
        loop {
            if self.show_prompt {
                write!(out, "{PROMPT}")?;
                out.flush()?;
            }

            // NOTE - end of input behaves like `exit`
            let Some(line) = lines.next().transpose()? else {
                if self.show_prompt {
                    writeln!(out)?;
                }
                break;
            };

            match line.parse::<Input>() {
                Ok(Input::Exit) => break,
                Ok(Input::Command(command)) => {
                    let outcome = self.dispatch(command, out)?;
                    summary.commands_dispatched += 1;
                    if outcome.is_blocked() {
                        summary.moves_blocked += 1;
                    }
                }
                Err(err) => {
                    warn!(%err, "rejected input");
                    summary.invalid_inputs += 1;
                    if self.show_prompt {
                        writeln!(out, "{INVALID}")?;
                    }
                }
            }
        }

        if self.show_prompt {
            writeln!(out, "{GOODBYE}")?;
        }
        out.flush()?;

        info!(
            dispatched = summary.commands_dispatched,
            blocked = summary.moves_blocked,
            invalid = summary.invalid_inputs,
            "session ended"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tokens_case_insensitively() {
        assert_eq!("MOVE".parse::<Input>(), Ok(Input::Command(Command::MoveForward)));
        assert_eq!("  Turn Left ".parse::<Input>(), Ok(Input::Command(Command::TurnLeft)));
        assert_eq!("turn right\n".parse::<Input>(), Ok(Input::Command(Command::TurnRight)));
        assert_eq!("Exit".parse::<Input>(), Ok(Input::Exit));
    }

    #[test]
    fn rejects_unknown_and_blank_tokens() {
        assert_eq!("jump".parse::<Input>(), Err(InvalidCommand("jump".to_string())));
        assert!("".parse::<Input>().is_err());
        assert!("turn  left".parse::<Input>().is_err());
    }
}
