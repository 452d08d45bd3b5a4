//! Line-oriented terminal console.

use crate::delay::ThinkDelay;
use anyhow::{Context, Result};
use compass_tictactoe::{Console, Location, Outcome, Rows, Tally};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Formats rows as `|x|o| |` lines, one per row.
pub fn format_rows(rows: &Rows) -> String {
    rows.iter()
        .map(|row| {
            let cells: String = row.iter().map(|glyph| format!("{}|", glyph)).collect();
            format!("|{}", cells)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Reads moves and answers line by line; draws boards as text.
pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
    delay: ThinkDelay,
    last_rows: Rows,
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    /// Creates a console over the given streams.
    pub fn new(input: R, output: W, clear_screen: bool, delay: ThinkDelay) -> Self {
        Self {
            input,
            output,
            clear_screen,
            delay,
            last_rows: [[' '; 3]; 3],
        }
    }

    /// Returns the output stream.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Prints the session totals and says goodbye.
    #[instrument(skip(self))]
    pub fn farewell(&mut self, tally: &Tally) -> Result<()> {
        writeln!(self.output, "{}", tally)?;
        writeln!(self.output, "Goodbye!")?;
        self.output.flush()?;
        Ok(())
    }

    /// Reads one trimmed line, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from terminal")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn draw(&mut self) -> Result<()> {
        if self.clear_screen {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))
                .context("Failed to clear terminal")?;
        }
        writeln!(self.output, "{}", format_rows(&self.last_rows))?;
        self.output.flush()?;
        Ok(())
    }

    fn hint(&mut self, available: &[Location]) -> Result<()> {
        self.draw()?;
        let options = available
            .iter()
            .map(|location| location.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(self.output, "Try one of these: {}", options)?;
        self.output.flush()?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    type Error = anyhow::Error;

    #[instrument(skip(self))]
    fn request_human_move(&mut self, available: &[Location]) -> Result<Location> {
        writeln!(self.output, "Make your move")?;
        self.output.flush()?;
        loop {
            let Some(line) = self.read_line()? else {
                anyhow::bail!("Input closed while waiting for a move");
            };
            match Location::parse(&line) {
                Ok(location) if available.contains(&location) => {
                    debug!(%location, "Human chose move");
                    return Ok(location);
                }
                _ => {
                    debug!(input = %line, "Rejected move input");
                    self.hint(available)?;
                }
            }
        }
    }

    fn render_board(&mut self, rows: &Rows) -> Result<()> {
        self.last_rows = *rows;
        self.draw()
    }

    #[instrument(skip(self))]
    fn announce_outcome(&mut self, outcome: Outcome) -> Result<()> {
        info!(%outcome, "Announcing outcome");
        writeln!(self.output, "{}", outcome)?;
        self.output.flush()?;
        Ok(())
    }

    #[instrument(skip(self))]
    fn request_replay_decision(&mut self) -> Result<bool> {
        writeln!(self.output, "Play again? (y/n)")?;
        self.output.flush()?;
        loop {
            match self.read_line()?.as_deref() {
                Some("y") => return Ok(true),
                Some("n") => return Ok(false),
                Some(_) => continue,
                None => {
                    debug!("Input closed, treating as no");
                    return Ok(false);
                }
            }
        }
    }

    fn opponent_thinking(&mut self) -> Result<()> {
        self.delay.pause();
        Ok(())
    }

    fn reject_move(&mut self, _location: Location, available: &[Location]) -> Result<()> {
        self.hint(available)
    }
}
