//! Line protocol for playing against an external referee.
//!
//! The referee drives the engine over stdin/stdout, one message per line:
//!
//! 1. The first line assigns the engine's color: `blue` or `orange`.
//! 2. Every following line is either `start` (the engine moves first) or the
//!    point where the opponent just placed, e.g. `D5`.
//! 3. After each such line the engine prints its own placement on a line of
//!    its own and applies it to its board.
//!
//! Opponent input that names an unknown or occupied point is reported on
//! stderr and leaves the board unchanged; the engine still answers. When the
//! board is full the session ends. Captures are not part of this protocol.
//!
//! ## Example
//!
//! ```ignore
//! use morris_rust::referee::RefereeEngine;
//! let mut engine = RefereeEngine::new();
//! engine.run();
//! ```

use std::io::{self, BufRead, Write};

use crate::board::{Board, Player};
use crate::constants::DEFAULT_DEPTH;
use crate::error::Result;
use crate::point::Point;
use crate::search::Searcher;

/// What the engine does in response to one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Color accepted, nothing to send yet
    Ready,
    /// Engine placed here; send it to the referee
    Move(Point),
    /// Board is full, the session is over
    GameOver,
}

/// Referee session state.
pub struct RefereeEngine {
    /// Engine's view of the game
    board: Board,
    /// Searcher for the assigned color, set by the first line
    searcher: Option<Searcher>,
    /// Search depth per move
    depth: u32,
    /// Print search diagnostics to stderr
    verbose: bool,
}

impl Default for RefereeEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RefereeEngine {
    /// Create an engine with the default search depth.
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }

    /// Create an engine searching `depth` plies per move.
    pub fn with_depth(depth: u32) -> Self {
        Self {
            board: Board::new(),
            searcher: None,
            depth,
            verbose: false,
        }
    }

    /// Enable or disable stderr diagnostics.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// The engine's current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Color assigned by the referee, once known.
    pub fn color(&self) -> Option<Player> {
        self.searcher.as_ref().map(Searcher::root)
    }

    /// Run the session on stdin/stdout until EOF or a full board.
    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run the session on the given input and output.
    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match self.execute(line)? {
                Response::Ready => {}
                Response::Move(pt) => {
                    writeln!(output, "{pt}")?;
                    output.flush()?;
                }
                Response::GameOver => break,
            }
        }
        Ok(())
    }

    /// Handle one input line.
    ///
    /// Only an unknown color on the first line is an error.
    pub fn execute(&mut self, line: &str) -> Result<Response> {
        let Some(searcher) = self.searcher.as_mut() else {
            let color: Player = line.parse()?;
            if self.verbose {
                eprintln!("referee: playing {color}");
            }
            self.searcher = Some(Searcher::new(color).with_verbose(self.verbose));
            return Ok(Response::Ready);
        };

        if !line.eq_ignore_ascii_case("start") {
            let opponent = searcher.root().opponent();
            match line.parse::<Point>() {
                Ok(pt) => {
                    if let Err(e) = self.board.try_apply(pt, opponent) {
                        eprintln!("referee: ignoring opponent move: {e}");
                    }
                }
                Err(e) => eprintln!("referee: ignoring opponent move: {e}"),
            }
        }

        let result = searcher.best_move(&mut self.board, self.depth);
        match result.best_move {
            Some(pt) => {
                self.board.apply(pt, searcher.root());
                Ok(Response::Move(pt))
            }
            None => Ok(Response::GameOver),
        }
    }
}
