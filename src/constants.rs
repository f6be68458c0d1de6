//! Constants for board geometry, evaluation weights, and search parameters.
//!
//! The board is the classic three-square morris layout: 24 points joined by
//! 32 edges, with 16 mills (8 horizontal, 8 vertical).

// =============================================================================
// Board Geometry
// =============================================================================

/// Number of points on the board.
pub const NUM_POINTS: usize = 24;

/// Number of mills in the catalog.
pub const NUM_MILLS: usize = 16;

/// Number of points in a single mill.
pub const MILL_LEN: usize = 3;

// =============================================================================
// Evaluation Weights
// =============================================================================

/// Weight per piece of material difference.
pub const WEIGHT_PIECE: i32 = 1;

/// Weight per completed mill difference.
pub const WEIGHT_MILL: i32 = 10;

/// Weight per open two-of-three mill difference.
pub const WEIGHT_OPEN_MILL: i32 = 3;

// =============================================================================
// Search Parameters
// =============================================================================

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u32 = 3;

/// Bound used as +/- infinity for alpha-beta windows.
///
/// Well outside any reachable evaluation (24 pieces + 16 mills * 10 + 16 * 3).
pub const INF: i32 = 1_000_000;

// =============================================================================
// Piece Symbols
// =============================================================================

/// Symbol for Blue pieces (the side that moves first).
pub const SYMBOL_BLUE: char = 'X';

/// Symbol for Orange pieces.
pub const SYMBOL_ORANGE: char = 'O';

/// Symbol for an empty point.
pub const SYMBOL_EMPTY: char = '.';
