//! Integration tests for morris-rust
//!
//! Scenario tests for mill crediting, capture selection and search, plus the
//! referee and console adapters driven through in-memory streams.

use std::io::Cursor;

use morris_rust::board::{Board, Outcome, Player};
use morris_rust::capture::{FirstCandidate, RandomCapture};
use morris_rust::console::ConsoleGame;
use morris_rust::constants::{DEFAULT_DEPTH, INF};
use morris_rust::eval::evaluate;
use morris_rust::point::Point::{self, *};
use morris_rust::referee::{RefereeEngine, Response};
use morris_rust::search::{Searcher, best_move};

// =============================================================================
// Helper functions
// =============================================================================

/// Place `player` on each point in turn, asserting every placement succeeds.
fn setpos(board: &mut Board, points: &[Point], player: Player) {
    for &p in points {
        assert!(board.apply(p, player), "{p} should be empty");
    }
}

/// A full board with alternating owners in enumeration order.
fn full_board() -> Board {
    let mut board = Board::new();
    for (i, &p) in Point::ALL.iter().enumerate() {
        let player = if i % 2 == 0 { Player::Blue } else { Player::Orange };
        board.apply(p, player);
    }
    board
}

// =============================================================================
// Mill crediting
// =============================================================================

#[test]
fn test_first_mill_credit() {
    let mut board = Board::new();
    let mut credits = 0;
    for p in [A1, A4, A7] {
        board.apply(p, Player::Blue);
        if board.forms_mill(p, Player::Blue) {
            credits += 1;
        }
    }
    assert_eq!(credits, 1);
}

#[test]
fn test_rebuilt_mill_not_recredited() {
    let mut board = Board::new();
    setpos(&mut board, &[A1, A4, A7], Player::Blue);
    assert!(board.forms_mill(A7, Player::Blue));

    // Orange captures A4, Blue rebuilds the same mill
    assert_eq!(board.remove_piece(A4), Some(Player::Blue));
    board.apply(A4, Player::Blue);
    assert!(!board.forms_mill(A4, Player::Blue));
    assert_eq!(board.credited_mills().count(), 1);
}

#[test]
fn test_second_mill_through_same_point() {
    let mut board = Board::new();
    setpos(&mut board, &[A4, A7, D1, G1], Player::Blue);
    board.apply(A1, Player::Blue);
    // A1 closes two lines at once; each call credits one of them
    assert!(board.forms_mill(A1, Player::Blue));
    assert!(board.forms_mill(A1, Player::Blue));
    assert!(!board.forms_mill(A1, Player::Blue));
}

// =============================================================================
// Capture selection
// =============================================================================

#[test]
fn test_capture_only_loose_piece() {
    let mut board = Board::new();
    // Orange: mill on the E row is complete (three pieces), F2 is loose
    setpos(&mut board, &[E3, E4, E5, F2], Player::Orange);
    for seed in 0..20 {
        let mut b = board.clone();
        let taken = b
            .resolve_capture(Player::Blue, &mut RandomCapture::with_seed(seed))
            .unwrap();
        assert_eq!(taken, Some(F2));
    }
}

#[test]
fn test_capture_from_mill_when_no_loose_piece() {
    let mut board = Board::new();
    setpos(&mut board, &[E3, E4, E5], Player::Orange);
    let taken = board.resolve_capture(Player::Blue, &mut FirstCandidate).unwrap();
    assert_eq!(taken, Some(E3));
    assert_eq!(board.count(Player::Orange), 2);
}

// =============================================================================
// Search
// =============================================================================

#[test]
fn test_full_board_terminal() {
    let mut board = full_board();
    assert!(board.is_terminal());
    assert!(board.legal_moves().is_empty());
    assert_eq!(best_move(&mut board, Player::Blue, DEFAULT_DEPTH), None);
    assert_eq!(best_move(&mut board, Player::Orange, DEFAULT_DEPTH), None);
}

#[test]
fn test_depth_zero_search() {
    let mut board = Board::new();
    setpos(&mut board, &[B2, B4, D6], Player::Orange);
    setpos(&mut board, &[F4], Player::Blue);
    let before = board.clone();

    let mut searcher = Searcher::new(Player::Orange);
    let score = searcher.search(&mut board, 0, -INF, INF, true, Player::Blue);
    assert_eq!(score, evaluate(&board, Player::Orange));
    assert_eq!(board.occupants(), before.occupants());
    assert_eq!(searcher.nodes(), 1);
}

#[test]
fn test_search_on_full_board_evaluates() {
    let mut board = full_board();
    let mut searcher = Searcher::new(Player::Blue);
    let score = searcher.search(&mut board, DEFAULT_DEPTH, -INF, INF, true, Player::Blue);
    assert_eq!(score, evaluate(&board, Player::Blue));
}

#[test]
fn test_orange_takes_winning_mill() {
    let mut board = Board::new();
    setpos(&mut board, &[C5, E5], Player::Orange);
    setpos(&mut board, &[A1, G7], Player::Blue);
    // Blue can answer with two open lines of its own, which still scores
    // below the completed mill
    assert_eq!(best_move(&mut board, Player::Orange, 2), Some(D5));
}

#[test]
fn test_search_is_deterministic() {
    let mut board = Board::new();
    setpos(&mut board, &[D2, F4], Player::Blue);
    setpos(&mut board, &[B4, C3], Player::Orange);
    let first = Searcher::new(Player::Blue).best_move(&mut board, DEFAULT_DEPTH);
    let second = Searcher::new(Player::Blue).best_move(&mut board, DEFAULT_DEPTH);
    assert_eq!(first, second);
}

// =============================================================================
// Referee protocol
// =============================================================================

#[test]
fn test_referee_session() {
    let input = Cursor::new("blue\nstart\nD5\n\nG7\n");
    let mut output = Vec::new();
    let mut engine = RefereeEngine::with_depth(2);
    engine.run_with(input, &mut output).unwrap();

    let text = String::from_utf8(output).unwrap();
    let replies: Vec<Point> = text.lines().map(|l| l.parse().unwrap()).collect();
    assert_eq!(replies.len(), 3);
    for &p in &replies {
        assert_eq!(engine.board().get(p), Some(Player::Blue));
    }
    assert_eq!(engine.board().count(Player::Blue), 3);
    assert_eq!(engine.board().count(Player::Orange), 2);
}

#[test]
fn test_referee_stops_on_full_board() {
    let mut engine = RefereeEngine::with_depth(1);
    engine.execute("orange").unwrap();

    // Feed every point the engine has not taken until the board fills
    for &p in &Point::ALL {
        if engine.board().get(p).is_none() {
            engine.execute(p.name()).unwrap();
        }
    }
    assert!(engine.board().is_terminal());
    assert_eq!(engine.execute("start").unwrap(), Response::GameOver);
}

#[test]
fn test_referee_unknown_color() {
    let input = Cursor::new("green\nstart\n");
    let mut engine = RefereeEngine::new();
    assert!(engine.run_with(input, Vec::new()).is_err());
}

// =============================================================================
// Console game
// =============================================================================

#[test]
fn test_console_game_runs_to_completion() {
    // The human answers every prompt with each point name in turn; invalid
    // or occupied answers are rejected and the next line is tried.
    let script: String = std::iter::repeat_n(Point::ALL, 100)
        .flatten()
        .map(|p| format!("{p}\n"))
        .collect();
    let mut output = Vec::new();
    let outcome = {
        let mut game = ConsoleGame::new(Cursor::new(script), &mut output)
            .with_depth(1)
            .with_capture_selector(Box::new(FirstCandidate));
        let outcome = game.play().unwrap();
        assert!(game.board().is_terminal());
        outcome
    };
    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("AI chooses:"));
    assert!(text.contains("Game Over!"));
    assert!(matches!(outcome, Outcome::Winner(_) | Outcome::Draw));
}

#[test]
fn test_console_game_input_closed() {
    let mut game = ConsoleGame::new(Cursor::new("A1\n"), Vec::new()).with_depth(1);
    assert!(game.play().is_err());
}
