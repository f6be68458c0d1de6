//! Morris-Rust: a placement-phase mill game engine.
//!
//! This crate plays the placement phase of a Nine Men's Morris style game on
//! the standard 24-point board and chooses moves with depth-limited minimax
//! and alpha-beta pruning.
//!
//! ## Modules
//!
//! - [`constants`] - Board counts, evaluation weights, search parameters
//! - [`point`] - The 24 points and their adjacency graph
//! - [`mills`] - The 16-line mill catalog
//! - [`board`] - Board state, mill crediting and captures
//! - [`capture`] - Capture selection strategies
//! - [`eval`] - Static evaluation
//! - [`search`] - Minimax with alpha-beta pruning
//! - [`referee`] - Line protocol for an external referee
//! - [`console`] - Interactive game against a human
//!
//! ## Example
//!
//! ```
//! use morris_rust::board::{Board, Player};
//! use morris_rust::point::Point;
//! use morris_rust::search::best_move;
//!
//! let mut board = Board::new();
//! board.apply(Point::D2, Player::Orange);
//!
//! let reply = best_move(&mut board, Player::Blue, 3).unwrap();
//! board.apply(reply, Player::Blue);
//! println!("{board}");
//! ```

pub mod board;
pub mod capture;
pub mod console;
pub mod constants;
pub mod error;
pub mod eval;
pub mod mills;
pub mod point;
pub mod referee;
pub mod search;
