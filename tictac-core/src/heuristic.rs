//! Heuristic computer opponent
//!
//! One-ply greedy: take an immediate win, else block the opponent's
//! immediate win, else play a random open cell. The opponent never looks
//! ahead, so double threats (forks) go unseen and it stays beatable.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use crate::board::{Board, Marker};
use crate::lines;

/// Precondition violation: a move was requested on a full board
///
/// Callers are expected to check `Board::is_full` before asking for a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("no moves available: the board is full")]
pub struct NoMovesAvailable;

/// Heuristic opponent with a seedable RNG for the random fallback
pub struct HeuristicAI {
    rng: ChaCha8Rng,
}

impl HeuristicAI {
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Select a position for `marker` from the open cells
    ///
    /// Strict priority: complete an own line, block the opponent's line,
    /// else pick uniformly at random. Randomness only enters the fallback,
    /// so boards with a near-win line are handled deterministically.
    pub fn choose_move(&mut self, board: &Board, marker: Marker) -> Result<u8, NoMovesAvailable> {
        if let Some(position) = lines::completing_move(board, marker) {
            return Ok(position);
        }
        if let Some(position) = lines::blocking_move(board, marker) {
            return Ok(position);
        }
        board
            .empty_positions()
            .choose(&mut self.rng)
            .copied()
            .ok_or(NoMovesAvailable)
    }
}

impl Default for HeuristicAI {
    fn default() -> Self {
        Self::new()
    }
}
