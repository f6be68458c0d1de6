//! Board state for the placement phase.
//!
//! A [`Board`] maps each of the 24 points to its occupant and records which
//! mills have already been credited this game. The search engine mutates a
//! single board in place and rolls moves back with [`Board::undo`] (or the
//! scoped [`Placement`] guard), so the board is never cloned during search.

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use crate::capture::CaptureSelector;
use crate::constants::{NUM_POINTS, SYMBOL_BLUE, SYMBOL_EMPTY, SYMBOL_ORANGE};
use crate::error::{Error, Result};
use crate::mills::{MILLS, MillId, mills_through};
use crate::point::Point;

/// One of the two sides.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    /// Moves first, drawn as `X`.
    Blue,
    /// Drawn as `O`.
    Orange,
}

impl Player {
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Blue => Player::Orange,
            Player::Orange => Player::Blue,
        }
    }

    /// Single-character board symbol.
    pub fn symbol(self) -> char {
        match self {
            Player::Blue => SYMBOL_BLUE,
            Player::Orange => SYMBOL_ORANGE,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Blue => f.write_str("blue"),
            Player::Orange => f.write_str("orange"),
        }
    }
}

impl FromStr for Player {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("blue") {
            Ok(Player::Blue)
        } else if trimmed.eq_ignore_ascii_case("orange") {
            Ok(Player::Orange)
        } else {
            Err(Error::UnknownColor {
                input: trimmed.to_string(),
            })
        }
    }
}

/// What occupies a point: nothing, or one player's piece.
pub type Occupant = Option<Player>;

/// Result of a finished game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

/// The board: occupant per point plus the set of credited mills.
#[derive(Clone, Debug)]
pub struct Board {
    /// Occupant per point, indexed by [`Point::index`]
    cells: [Occupant; NUM_POINTS],
    /// Bit `i` set when mill `i` has been credited this game
    credited: u16,
    /// Placements still on the board, most recent last
    history: Vec<Point>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self {
            cells: [None; NUM_POINTS],
            credited: 0,
            history: Vec::with_capacity(NUM_POINTS),
        }
    }

    /// Occupant of `point`.
    #[inline]
    pub fn get(&self, point: Point) -> Occupant {
        self.cells[point.index()]
    }

    /// Read-only view of every occupant, in [`Point::ALL`] order.
    pub fn occupants(&self) -> &[Occupant; NUM_POINTS] {
        &self.cells
    }

    /// Number of pieces `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().filter(|&&c| c == Some(player)).count()
    }

    /// Every empty point, in enumeration order.
    pub fn legal_moves(&self) -> Vec<Point> {
        Point::ALL
            .iter()
            .copied()
            .filter(|&p| self.get(p).is_none())
            .collect()
    }

    /// Place a piece for `player` on `point`.
    ///
    /// Returns `false` and leaves the board untouched if the point is occupied.
    pub fn apply(&mut self, point: Point, player: Player) -> bool {
        if self.get(point).is_some() {
            return false;
        }
        self.cells[point.index()] = Some(player);
        self.history.push(point);
        true
    }

    /// Like [`Board::apply`], but reports an occupied point as an error.
    pub fn try_apply(&mut self, point: Point, player: Player) -> Result<()> {
        if self.apply(point, player) {
            Ok(())
        } else {
            Err(Error::IllegalMove { point })
        }
    }

    /// Clear `point`, reverting the most recent placement.
    ///
    /// Credited mills are left as they are.
    pub fn undo(&mut self, point: Point) {
        let last = self.history.pop();
        debug_assert_eq!(
            last,
            Some(point),
            "undo({point}) does not match the most recent placement"
        );
        self.cells[point.index()] = None;
    }

    /// The most recent placement still on the board.
    pub fn last_placement(&self) -> Option<Point> {
        self.history.last().copied()
    }

    /// Place a piece and return a guard that undoes it when dropped.
    ///
    /// Returns `None` if the point is occupied.
    pub fn place_scoped(&mut self, point: Point, player: Player) -> Option<Placement<'_>> {
        if self.apply(point, player) {
            Some(Placement { board: self, point })
        } else {
            None
        }
    }

    /// True when every point is occupied.
    pub fn is_terminal(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Whether mill `id` is fully owned by `player`.
    pub fn owns_mill(&self, id: MillId, player: Player) -> bool {
        MILLS[id].iter().all(|&p| self.get(p) == Some(player))
    }

    /// Ids of the mills `player` currently owns outright, in catalog order.
    ///
    /// Credited or not, every fully owned line is listed.
    pub fn completed_mills(&self, player: Player) -> impl Iterator<Item = MillId> + '_ {
        (0..MILLS.len()).filter(move |&id| self.owns_mill(id, player))
    }

    /// Whether mill `id` has already been credited this game.
    pub fn is_credited(&self, id: MillId) -> bool {
        self.credited & (1 << id) != 0
    }

    /// Ids of all credited mills, in catalog order.
    pub fn credited_mills(&self) -> impl Iterator<Item = MillId> + '_ {
        (0..MILLS.len()).filter(|&id| self.is_credited(id))
    }

    /// Check whether placing at `point` completed a mill not yet credited.
    ///
    /// The first such mill is credited as a side effect, so each mill scores
    /// at most once per game even if it is later broken and rebuilt.
    pub fn forms_mill(&mut self, point: Point, player: Player) -> bool {
        let fresh =
            mills_through(point).find(|&id| self.owns_mill(id, player) && !self.is_credited(id));
        match fresh {
            Some(id) => {
                self.credited |= 1 << id;
                true
            }
            None => false,
        }
    }

    /// Whether the piece on `point` is part of a mill its owner completes.
    ///
    /// Unlike [`Board::forms_mill`] this never credits anything.
    pub fn is_in_completed_mill(&self, point: Point) -> bool {
        match self.get(point) {
            Some(owner) => self
                .completed_mills(owner)
                .any(|id| MILLS[id].contains(&point)),
            None => false,
        }
    }

    /// Opponent pieces `capturing` may remove.
    ///
    /// Pieces outside completed mills are preferred; if every opponent piece
    /// sits in a mill, all of them are candidates.
    pub fn capture_candidates(&self, capturing: Player) -> Vec<Point> {
        let victim = capturing.opponent();
        let owned: Vec<Point> = Point::ALL
            .iter()
            .copied()
            .filter(|&p| self.get(p) == Some(victim))
            .collect();
        let loose: Vec<Point> = owned
            .iter()
            .copied()
            .filter(|&p| !self.is_in_completed_mill(p))
            .collect();
        if loose.is_empty() { owned } else { loose }
    }

    /// Remove one opponent piece after `capturing` credited a mill.
    ///
    /// Asks `selector` until it names a candidate. Returns the cleared point,
    /// or `None` if the opponent has no pieces on the board.
    pub fn resolve_capture(
        &mut self,
        capturing: Player,
        selector: &mut dyn CaptureSelector,
    ) -> Result<Option<Point>> {
        let candidates = self.capture_candidates(capturing);
        if candidates.is_empty() {
            return Ok(None);
        }
        let chosen = loop {
            let pick = selector.select(&candidates)?;
            if candidates.contains(&pick) {
                break pick;
            }
        };
        self.remove_piece(chosen);
        Ok(Some(chosen))
    }

    /// Clear `point` and drop it from the placement history.
    ///
    /// Returns what was there.
    pub fn remove_piece(&mut self, point: Point) -> Occupant {
        if let Some(pos) = self.history.iter().rposition(|&p| p == point) {
            self.history.remove(pos);
        }
        self.cells[point.index()].take()
    }

    /// Result of the game once the board is full: more pieces wins.
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.is_terminal() {
            return None;
        }
        let blue = self.count(Player::Blue);
        let orange = self.count(Player::Orange);
        Some(match blue.cmp(&orange) {
            std::cmp::Ordering::Greater => Outcome::Winner(Player::Blue),
            std::cmp::Ordering::Less => Outcome::Winner(Player::Orange),
            std::cmp::Ordering::Equal => Outcome::Draw,
        })
    }

    fn symbol_at(&self, point: Point) -> char {
        self.get(point).map_or(SYMBOL_EMPTY, Player::symbol)
    }
}

/// A placement that is undone when the guard goes out of scope.
///
/// Derefs to the board so the search can keep exploring below it.
pub struct Placement<'a> {
    board: &'a mut Board,
    point: Point,
}

impl Placement<'_> {
    /// The point this guard placed on.
    pub fn point(&self) -> Point {
        self.point
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.undo(self.point);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Point::*;
        let s = |p| self.symbol_at(p);
        writeln!(f, "{}-----------{}-----------{}", s(A1), s(A4), s(A7))?;
        writeln!(f, "|           |           |")?;
        writeln!(f, "|   {}-------{}-------{}   |", s(B2), s(B4), s(B6))?;
        writeln!(f, "|   |       |       |   |")?;
        writeln!(f, "|   |   {}---{}---{}   |   |", s(C3), s(C4), s(C5))?;
        writeln!(f, "|   |   |       |   |   |")?;
        writeln!(
            f,
            "{}---{}---{}       {}---{}---{}",
            s(D1),
            s(D2),
            s(D3),
            s(D5),
            s(D6),
            s(D7)
        )?;
        writeln!(f, "|   |   |       |   |   |")?;
        writeln!(f, "|   |   {}---{}---{}   |   |", s(E3), s(E4), s(E5))?;
        writeln!(f, "|   |       |       |   |")?;
        writeln!(f, "|   {}-------{}-------{}   |", s(F2), s(F4), s(F6))?;
        writeln!(f, "|           |           |")?;
        writeln!(f, "{}-----------{}-----------{}", s(G1), s(G4), s(G7))
    }
}
