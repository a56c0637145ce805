use std::io::{Result, Write};

use crossterm::{
    QueueableCommand,
    style::{Color, Print, ResetColor, SetForegroundColor},
};

use crate::rover::Rover;
use crate::types::Position;

/// Anything that can draw the rover after a command has been dispatched.
///
/// Renderers only get shared access to the rover.
pub trait Renderer {
    fn render(&mut self, rover: &Rover, out: &mut dyn Write) -> Result<()>;
}

/// Text grid, two columns per cell, north at the top.
pub struct TerminalRenderer {
    color: bool,
}

impl TerminalRenderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    fn cell(&self, out: &mut dyn Write, color: Color, text: &str) -> Result<()> {
        if self.color {
            out.queue(SetForegroundColor(color))?;
            out.queue(Print(text))?;
            out.queue(ResetColor)?;
        } else {
            out.queue(Print(text))?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, rover: &Rover, out: &mut dyn Write) -> Result<()> {
        let size = rover.grid_size();

        out.queue(Print("Current Grid State:\n"))?;

        // NOTE - y grows northwards, so the top row is size - 1
        for y in (0..size).rev() {
            for x in 0..size {
                let cell = Position::new(x, y);
                if cell == rover.position() {
                    let glyph = format!("{} ", rover.orientation().glyph());
                    self.cell(out, Color::Yellow, &glyph)?;
                } else if rover.is_obstacle(cell) {
                    self.cell(out, Color::DarkGrey, "██")?;
                } else {
                    self.cell(out, Color::White, "· ")?;
                }
            }
            out.queue(Print("\n"))?;
        }

        out.queue(Print("\n"))?;
        out.flush()?;
        Ok(())
    }
}
