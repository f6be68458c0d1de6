//! The mill catalog: the 16 fixed lines of three points.

use crate::constants::{MILL_LEN, NUM_MILLS};
use crate::point::Point::{self, *};

/// Index of a mill in [`MILLS`].
pub type MillId = usize;

/// Every mill on the board, horizontal lines first, then vertical lines.
pub const MILLS: [[Point; MILL_LEN]; NUM_MILLS] = [
    // Horizontal
    [A1, A4, A7],
    [B2, B4, B6],
    [C3, C4, C5],
    [D1, D2, D3],
    [D5, D6, D7],
    [E3, E4, E5],
    [F2, F4, F6],
    [G1, G4, G7],
    // Vertical
    [A1, D1, G1],
    [B2, D2, F2],
    [C3, D3, E3],
    [A4, B4, C4],
    [E4, F4, G4],
    [C5, D5, E5],
    [B6, D6, F6],
    [A7, D7, G7],
];

/// Ids of the mills that contain `point`. Every point lies on exactly two.
pub fn mills_through(point: Point) -> impl Iterator<Item = MillId> {
    MILLS
        .iter()
        .enumerate()
        .filter(move |(_, mill)| mill.contains(&point))
        .map(|(id, _)| id)
}
