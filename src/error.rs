//! Error types for the morris engine.

use thiserror::Error;

use crate::point::Point;

/// Errors reported across the engine's public API.
///
/// Expected game conditions on the search path (an occupied point, a full
/// board) are signalled with `bool` / `Option` by the core; this type is what
/// the adapters and the `try_*` wrappers surface.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("illegal move: point {point} is already occupied")]
    IllegalMove { point: Point },

    #[error("unknown point '{input}'")]
    UnknownPoint { input: String },

    #[error("unknown color '{input}' (expected 'blue' or 'orange')")]
    UnknownColor { input: String },

    #[error("no legal moves available")]
    NoLegalMoves,

    #[error("input closed")]
    InputClosed,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;
