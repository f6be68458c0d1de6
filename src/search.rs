//! Depth-bounded minimax search with alpha-beta pruning.
//!
//! The search walks the game tree depth-first on a single mutable [`Board`].
//! Each move is placed through a [`Placement`](crate::board::Placement) guard,
//! so it is rolled back on every exit from the frame, including cutoffs.
//!
//! Scores always come from [`evaluate`] taken from the root player's point of
//! view; maximizing and minimizing frames alternate over that one scale. This
//! is plain minimax, not negamax: scores are never negated between plies.
//!
//! Placements inside the search never resolve captures and never credit
//! mills, so hypothetical lines leave the game's credited mills untouched.
//!
//! # Example
//!
//! ```
//! use morris_rust::board::{Board, Player};
//! use morris_rust::point::Point;
//! use morris_rust::search::Searcher;
//!
//! let mut board = Board::new();
//! board.apply(Point::A1, Player::Orange);
//!
//! let mut searcher = Searcher::new(Player::Blue);
//! let result = searcher.best_move(&mut board, 2);
//! assert!(result.best_move.is_some());
//! ```

use crate::board::{Board, Player};
use crate::constants::INF;
use crate::eval::evaluate;
use crate::point::Point;

/// Outcome of a root search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Chosen point, `None` when the board is full
    pub best_move: Option<Point>,
    /// Score of the chosen move from the searching side's perspective
    pub score: i32,
    /// Nodes visited, leaves included
    pub nodes: u64,
}

/// Alpha-beta searcher for one side.
pub struct Searcher {
    /// Side whose perspective every evaluation takes
    root: Player,
    /// Nodes visited since the last root search started
    nodes: u64,
    /// Print a summary line to stderr after each root search
    verbose: bool,
}

impl Searcher {
    /// Create a searcher that picks moves for `root`.
    pub fn new(root: Player) -> Self {
        Self {
            root,
            nodes: 0,
            verbose: false,
        }
    }

    /// Enable or disable stderr diagnostics.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// The side this searcher plays for.
    pub fn root(&self) -> Player {
        self.root
    }

    /// Nodes visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Minimax value of `board` with `player` to move and `depth` plies left.
    ///
    /// The board is restored before returning.
    pub fn search(
        &mut self,
        board: &mut Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        player: Player,
    ) -> i32 {
        self.nodes += 1;

        if depth == 0 || board.is_terminal() {
            return evaluate(board, self.root);
        }

        let mut best = if maximizing { -INF } else { INF };
        for mv in board.legal_moves() {
            let Some(mut child) = board.place_scoped(mv, player) else {
                continue;
            };
            let score = self.search(
                &mut child,
                depth - 1,
                alpha,
                beta,
                !maximizing,
                player.opponent(),
            );
            drop(child);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                break;
            }
        }
        best
    }

    /// Pick the move for the root side with `depth` plies of lookahead.
    ///
    /// Each candidate is searched with a full window, and the first move
    /// with the strictly highest score wins.
    pub fn best_move(&mut self, board: &mut Board, depth: u32) -> SearchResult {
        self.nodes = 0;

        let mut best_move = None;
        let mut best_score = -INF;
        for mv in board.legal_moves() {
            let Some(mut child) = board.place_scoped(mv, self.root) else {
                continue;
            };
            // `depth` counts this root move, so DEFAULT_DEPTH looks three
            // plies ahead in total
            let score = self.search(
                &mut child,
                depth.saturating_sub(1),
                -INF,
                INF,
                false,
                self.root.opponent(),
            );
            drop(child);

            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
        }

        if self.verbose {
            match best_move {
                Some(mv) => eprintln!(
                    "search: {} plays {mv} score={best_score} depth={depth} nodes={}",
                    self.root, self.nodes
                ),
                None => eprintln!("search: {} has no legal moves", self.root),
            }
        }

        SearchResult {
            best_move,
            score: if best_move.is_some() { best_score } else { evaluate(board, self.root) },
            nodes: self.nodes,
        }
    }
}

/// Best move for `player` on `board`, searching `depth` plies.
///
/// Returns `None` when the board is full.
pub fn best_move(board: &mut Board, player: Player, depth: u32) -> Option<Point> {
    Searcher::new(player).best_move(board, depth).best_move
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_DEPTH;
    use crate::point::Point::*;

    fn fill(board: &mut Board, points: &[Point], player: Player) {
        for &p in points {
            assert!(board.apply(p, player));
        }
    }

    #[test]
    fn test_depth_zero_is_evaluation() {
        let mut board = Board::new();
        fill(&mut board, &[A1, A4], Player::Blue);
        fill(&mut board, &[G7], Player::Orange);
        let before = board.clone();

        let mut searcher = Searcher::new(Player::Blue);
        for maximizing in [true, false] {
            for player in [Player::Blue, Player::Orange] {
                let score = searcher.search(&mut board, 0, -INF, INF, maximizing, player);
                assert_eq!(score, evaluate(&board, Player::Blue));
            }
        }
        assert_eq!(board.occupants(), before.occupants());
    }

    #[test]
    fn test_completes_own_mill() {
        let mut board = Board::new();
        fill(&mut board, &[D1, D2], Player::Blue);
        fill(&mut board, &[G4, F6], Player::Orange);
        let mv = best_move(&mut board, Player::Blue, 1);
        assert_eq!(mv, Some(D3));
    }

    #[test]
    fn test_blocks_opponent_mill() {
        let mut board = Board::new();
        fill(&mut board, &[B2, B4], Player::Orange);
        fill(&mut board, &[G7], Player::Blue);
        let mv = best_move(&mut board, Player::Blue, 2);
        assert_eq!(mv, Some(B6));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut board = Board::new();
        for (i, &p) in Point::ALL.iter().enumerate() {
            let player = if i % 3 == 0 { Player::Orange } else { Player::Blue };
            board.apply(p, player);
        }
        let result = Searcher::new(Player::Blue).best_move(&mut board, DEFAULT_DEPTH);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, evaluate(&board, Player::Blue));
    }

    #[test]
    fn test_search_restores_board() {
        let mut board = Board::new();
        fill(&mut board, &[C3, E4], Player::Orange);
        fill(&mut board, &[D6], Player::Blue);
        let before = board.clone();

        let mut searcher = Searcher::new(Player::Blue);
        searcher.best_move(&mut board, DEFAULT_DEPTH);
        assert_eq!(board.occupants(), before.occupants());
        assert_eq!(board.legal_moves(), before.legal_moves());
        assert!(searcher.nodes() > 0);
    }

    #[test]
    fn test_search_never_credits_mills() {
        let mut board = Board::new();
        fill(&mut board, &[A1, A4], Player::Blue);
        best_move(&mut board, Player::Blue, DEFAULT_DEPTH);
        assert_eq!(board.credited_mills().count(), 0);
    }

    #[test]
    fn test_minimizing_frame_uses_root_perspective() {
        // One empty point left: Orange fills it and closes its own mill.
        let mut board = Board::new();
        for &p in Point::ALL.iter().filter(|&&p| p != G7) {
            let player = if [G1, G4].contains(&p) { Player::Orange } else { Player::Blue };
            board.apply(p, player);
        }
        let mut searcher = Searcher::new(Player::Blue);
        let score = searcher.search(&mut board, 1, -INF, INF, false, Player::Orange);

        board.apply(G7, Player::Orange);
        let expected = evaluate(&board, Player::Blue);
        board.undo(G7);
        assert_eq!(score, expected);
        assert!(score < evaluate(&board, Player::Blue));
    }

    #[test]
    fn test_first_move_wins_ties() {
        // Symmetric empty board: all openings score the same at depth 1
        let mut board = Board::new();
        let mv = best_move(&mut board, Player::Orange, 1);
        assert_eq!(mv, Some(A1));
    }
}
