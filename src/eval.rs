//! Static position evaluation.
//!
//! The score is a weighted sum of three differences between the evaluating
//! side and its opponent: pieces on the board, completed mills, and open
//! mills (two own pieces plus one empty point). Completed mills are counted
//! over the whole catalog, whether or not they were credited.

use crate::board::{Board, Player};
use crate::constants::{WEIGHT_MILL, WEIGHT_OPEN_MILL, WEIGHT_PIECE};
use crate::mills::MILLS;

/// Raw per-side counts behind a score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SideCounts {
    pub pieces: i32,
    pub mills: i32,
    pub open_mills: i32,
}

/// Per-side counts for both players, before weighting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Breakdown {
    pub own: SideCounts,
    pub opp: SideCounts,
}

impl Breakdown {
    /// Weighted score from the `own` side's perspective.
    pub fn score(&self) -> i32 {
        WEIGHT_PIECE * (self.own.pieces - self.opp.pieces)
            + WEIGHT_MILL * (self.own.mills - self.opp.mills)
            + WEIGHT_OPEN_MILL * (self.own.open_mills - self.opp.open_mills)
    }
}

/// Count pieces, completed mills and open mills for `perspective` and its opponent.
pub fn breakdown(board: &Board, perspective: Player) -> Breakdown {
    let opponent = perspective.opponent();
    let mut out = Breakdown {
        own: SideCounts {
            pieces: board.count(perspective) as i32,
            mills: board.completed_mills(perspective).count() as i32,
            ..Default::default()
        },
        opp: SideCounts {
            pieces: board.count(opponent) as i32,
            mills: board.completed_mills(opponent).count() as i32,
            ..Default::default()
        },
    };

    for mill in &MILLS {
        let mut own = 0;
        let mut opp = 0;
        let mut empty = 0;
        for &p in mill {
            match board.get(p) {
                Some(c) if c == perspective => own += 1,
                Some(_) => opp += 1,
                None => empty += 1,
            }
        }
        match (own, opp, empty) {
            (2, _, 1) => out.own.open_mills += 1,
            (_, 2, 1) => out.opp.open_mills += 1,
            _ => {}
        }
    }
    out
}

/// Score `board` from `perspective`'s point of view. Higher is better.
pub fn evaluate(board: &Board, perspective: Player) -> i32 {
    breakdown(board, perspective).score()
}
