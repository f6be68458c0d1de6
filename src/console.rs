//! Interactive game between the engine and a human at the console.
//!
//! The engine plays Blue and moves first; the human plays Orange. Moves are
//! typed as point names. Completing a new mill removes one opponent piece:
//! the engine picks with its [`CaptureSelector`], the human is prompted until
//! a valid piece is named. The game ends when the board is full.

use std::io::{BufRead, Write};

use crate::board::{Board, Outcome, Player};
use crate::capture::{CaptureSelector, RandomCapture};
use crate::constants::DEFAULT_DEPTH;
use crate::error::{Error, Result};
use crate::point::Point;
use crate::search::Searcher;

/// Read one line, failing with [`Error::InputClosed`] at EOF.
fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(Error::InputClosed);
    }
    Ok(line.trim().to_string())
}

fn format_points(points: &[Point]) -> String {
    let names: Vec<&str> = points.iter().map(|p| p.name()).collect();
    format!("[{}]", names.join(", "))
}

/// Prompts the human for which piece to remove.
pub struct HumanCapture<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> HumanCapture<'a, R, W> {
    pub fn new(input: &'a mut R, output: &'a mut W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> CaptureSelector for HumanCapture<'_, R, W> {
    fn select(&mut self, candidates: &[Point]) -> Result<Point> {
        loop {
            write!(
                self.output,
                "Enter position to remove {}: ",
                format_points(candidates)
            )?;
            self.output.flush()?;
            let line = read_line(self.input)?;
            match line.parse::<Point>() {
                Ok(pt) if candidates.contains(&pt) => return Ok(pt),
                _ => writeln!(self.output, "Invalid selection, try again.")?,
            }
        }
    }
}

/// A console game: engine as Blue, human as Orange.
pub struct ConsoleGame<R, W> {
    input: R,
    output: W,
    board: Board,
    searcher: Searcher,
    depth: u32,
    /// How the engine picks captures
    capture: Box<dyn CaptureSelector>,
    verbose: bool,
}

impl<R: BufRead, W: Write> ConsoleGame<R, W> {
    /// Create a game reading human input from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            board: Board::new(),
            searcher: Searcher::new(Player::Blue),
            depth: DEFAULT_DEPTH,
            capture: Box::new(RandomCapture::new()),
            verbose: false,
        }
    }

    /// Set the engine's search depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Replace the engine's capture strategy.
    pub fn with_capture_selector(mut self, selector: Box<dyn CaptureSelector>) -> Self {
        self.capture = selector;
        self
    }

    /// Enable or disable stderr diagnostics.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self.searcher = Searcher::new(Player::Blue).with_verbose(verbose);
        self
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Play until the board is full and return the outcome.
    pub fn play(&mut self) -> Result<Outcome> {
        let engine = self.searcher.root();
        let mut current = Player::Blue;

        loop {
            writeln!(self.output, "{}", self.board)?;
            writeln!(self.output, "Player {current}, it's your turn.")?;

            let mv = if current == engine {
                let result = self.searcher.best_move(&mut self.board, self.depth);
                let Some(mv) = result.best_move else {
                    return Err(Error::NoLegalMoves);
                };
                writeln!(self.output, "AI chooses: {mv}")?;
                mv
            } else {
                match self.prompt_move()? {
                    Some(mv) => mv,
                    None => {
                        writeln!(self.output, "Invalid move, try again.")?;
                        continue;
                    }
                }
            };

            self.board.apply(mv, current);
            if self.board.forms_mill(mv, current) {
                self.capture_for(current, engine)?;
            }

            if let Some(outcome) = self.board.outcome() {
                writeln!(self.output, "{}", self.board)?;
                match outcome {
                    Outcome::Winner(p) => writeln!(self.output, "Game Over! Winner: {p}")?,
                    Outcome::Draw => writeln!(self.output, "Game Over! Draw.")?,
                }
                return Ok(outcome);
            }

            current = current.opponent();
        }
    }

    /// Ask the human for a placement. `None` if the input is not a legal move.
    fn prompt_move(&mut self) -> Result<Option<Point>> {
        let legal = self.board.legal_moves();
        write!(self.output, "Enter your move {}: ", format_points(&legal))?;
        self.output.flush()?;
        let line = read_line(&mut self.input)?;
        Ok(line.parse::<Point>().ok().filter(|pt| legal.contains(pt)))
    }

    fn capture_for(&mut self, capturing: Player, engine: Player) -> Result<()> {
        writeln!(
            self.output,
            "Mill formed! {capturing}, remove an opponent piece: {}",
            format_points(&self.board.capture_candidates(capturing))
        )?;
        if self.verbose {
            let credited: Vec<usize> = self.board.credited_mills().collect();
            eprintln!("console: {capturing} credited a mill, credited ids {credited:?}");
        }

        let taken = if capturing == engine {
            self.board.resolve_capture(capturing, self.capture.as_mut())?
        } else {
            let mut human = HumanCapture::new(&mut self.input, &mut self.output);
            self.board.resolve_capture(capturing, &mut human)?
        };

        if let Some(pt) = taken {
            writeln!(self.output, "Removed {}'s piece from {pt}", capturing.opponent())?;
        }
        Ok(())
    }
}
