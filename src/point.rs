//! Board points and the adjacency graph.
//!
//! The board consists of three nested squares joined at their midpoints.
//! Points are named by row letter (A at the top, G at the bottom) and column
//! digit (1 at the left, 7 at the right):
//!
//! ```text
//! A1-----------A4-----------A7
//! |            |            |
//! |   B2-------B4-------B6  |
//! |   |        |        |   |
//! |   |   C3---C4---C5  |   |
//! |   |   |         |   |   |
//! D1--D2--D3        D5--D6--D7
//! |   |   |         |   |   |
//! |   |   E3---E4---E5  |   |
//! |   |        |        |   |
//! |   F2-------F4-------F6  |
//! |            |            |
//! G1-----------G4-----------G7
//! ```
//!
//! The adjacency graph is not used by the placement-only rules, but it is
//! part of the board definition and is what a movement phase would consult.

use std::fmt;
use std::str::FromStr;

use crate::constants::NUM_POINTS;
use crate::error::Error;

/// One of the 24 points on the board.
///
/// The declaration order is the fixed enumeration order used everywhere a
/// deterministic iteration is required (move generation, capture candidates).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
#[rustfmt::skip]
pub enum Point {
    A1, A4, A7,
    B2, B4, B6,
    C3, C4, C5,
    D1, D2, D3, D5, D6, D7,
    E3, E4, E5,
    F2, F4, F6,
    G1, G4, G7,
}

use Point::*;

impl Point {
    /// All points in enumeration order.
    pub const ALL: [Point; NUM_POINTS] = [
        A1, A4, A7, B2, B4, B6, C3, C4, C5, D1, D2, D3, D5, D6, D7, E3, E4, E5, F2, F4, F6, G1,
        G4, G7,
    ];

    /// Index of this point in [`Point::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Point at the given index, if it is in range.
    #[inline]
    pub fn from_index(idx: usize) -> Option<Point> {
        Self::ALL.get(idx).copied()
    }

    /// The two-character identifier, e.g. `"D5"`.
    pub fn name(self) -> &'static str {
        const NAMES: [&str; NUM_POINTS] = [
            "A1", "A4", "A7", "B2", "B4", "B6", "C3", "C4", "C5", "D1", "D2", "D3", "D5", "D6",
            "D7", "E3", "E4", "E5", "F2", "F4", "F6", "G1", "G4", "G7",
        ];
        NAMES[self.index()]
    }

    /// Points joined to this one by a single board edge.
    pub fn neighbors(self) -> &'static [Point] {
        match self {
            A1 => &[A4, D1],
            A4 => &[A1, A7, B4],
            A7 => &[A4, D7],
            B2 => &[B4, D2],
            B4 => &[B2, B6, A4, C4],
            B6 => &[B4, D6],
            C3 => &[C4, D3],
            C4 => &[C3, C5, B4],
            C5 => &[C4, D5],
            D1 => &[A1, G1, D2],
            D2 => &[D1, D3, B2, F2],
            D3 => &[D2, C3, E3],
            D5 => &[D6, C5, E5],
            D6 => &[D5, D7, B6, F6],
            D7 => &[D6, A7, G7],
            E3 => &[D3, E4],
            E4 => &[E3, E5, F4],
            E5 => &[E4, D5],
            F2 => &[D2, F4],
            F4 => &[F2, F6, E4, G4],
            F6 => &[F4, D6],
            G1 => &[D1, G4],
            G4 => &[G1, G7, F4],
            G7 => &[G4, D7],
        }
    }

    /// Whether `self` and `other` share a board edge.
    pub fn is_adjacent(self, other: Point) -> bool {
        self.neighbors().contains(&other)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Point {
    type Err = Error;

    /// Parse a point identifier, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Point::ALL
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| Error::UnknownPoint {
                input: trimmed.to_string(),
            })
    }
}
