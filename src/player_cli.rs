#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use log::error;
use rand::rngs::SmallRng;

use crate::{
    common::GridError,
    config::ALLOWED_LABELS,
    game::GameStatus,
    grid::{Grid, Move},
    player::Player,
};

const PROMPT: &str = "Move which vehicle? Enter <label>,<direction> (u, d, l, r), \
                      'moves' to list legal moves or 'quit' to stop: ";

/// Interactive player reading `<label>,<direction>` lines.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
}

impl CliPlayer<io::StdinLock<'static>, io::Stdout> {
    /// Player bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, grid: &Grid) -> io::Result<Option<Move>> {
        write!(self.output, "\n{}", grid)?;
        loop {
            write!(self.output, "{}", PROMPT)?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            match line.trim() {
                "q" | "quit" => return Ok(None),
                "moves" => print_legal_moves(&mut self.output, grid)?,
                text => match text.parse::<Move>() {
                    Ok(mv) if ALLOWED_LABELS.contains(&mv.id) => return Ok(Some(mv)),
                    Ok(mv) => writeln!(
                        self.output,
                        "Unknown label {}, choose from {:?}",
                        mv.id, ALLOWED_LABELS
                    )?,
                    Err(e) => writeln!(self.output, "Invalid input: {}", e)?,
                },
            }
        }
    }
}

/// Write one legal move per line, or a note that the board is stuck.
pub fn print_legal_moves<W: Write>(out: &mut W, grid: &Grid) -> io::Result<()> {
    let moves = grid.enumerate_legal_moves();
    if moves.is_empty() {
        return writeln!(out, "No legal moves.");
    }
    for mv in moves {
        writeln!(out, "  {} ({} {})", mv, mv.id, mv.direction)?;
    }
    Ok(())
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn select_move(&mut self, _rng: &mut SmallRng, grid: &Grid) -> Option<Move> {
        match self.prompt(grid) {
            Ok(mv) => mv,
            Err(e) => {
                error!("terminal I/O failed: {}", e);
                None
            }
        }
    }

    fn handle_move_result(
        &mut self,
        mv: Move,
        result: &Result<GameStatus, GridError>,
        grid: &Grid,
    ) {
        let written = match result {
            Ok(GameStatus::Won(id)) => {
                write!(self.output, "\n{}\n{} reached the exit. You won!\n", grid, id)
            }
            Ok(GameStatus::InProgress) => Ok(()),
            Err(e) => writeln!(self.output, "Cannot move {}: {}", mv, e),
        };
        if let Err(e) = written {
            error!("terminal I/O failed: {}", e);
        }
    }
}
