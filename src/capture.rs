//! Capture selection strategies.
//!
//! When a side completes a new mill it removes one opponent piece. Which piece
//! is chosen is up to a [`CaptureSelector`]: the engine side picks at random,
//! a human side is prompted, and tests plug in a fixed choice.

use crate::error::Result;
use crate::point::Point;

/// Chooses which opponent piece to remove after a mill.
pub trait CaptureSelector {
    /// Pick one point from `candidates`, which is never empty.
    ///
    /// Returning a point outside `candidates` is treated as invalid input and
    /// the selector is asked again.
    fn select(&mut self, candidates: &[Point]) -> Result<Point>;
}

/// Uniform random selection. The default strategy for the engine side.
pub struct RandomCapture {
    rng: fastrand::Rng,
}

impl Default for RandomCapture {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomCapture {
    /// Create a selector seeded from the system entropy source.
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// Create a selector with a fixed seed for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl CaptureSelector for RandomCapture {
    fn select(&mut self, candidates: &[Point]) -> Result<Point> {
        Ok(candidates[self.rng.usize(..candidates.len())])
    }
}

/// Always takes the first candidate in enumeration order.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstCandidate;

impl CaptureSelector for FirstCandidate {
    fn select(&mut self, candidates: &[Point]) -> Result<Point> {
        Ok(candidates[0])
    }
}
