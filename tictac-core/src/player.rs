//! Player identity and move sources
//!
//! A player is a name and a marker plus the capability to produce the next
//! move. Interactive and automated players differ only in the `MoveSource`
//! they are composed with.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::board::{Board, Marker};
use crate::heuristic::{HeuristicAI, NoMovesAvailable};

/// Capability to produce the next move for a board
///
/// Implementations must return a member of `board.empty_positions()`;
/// interactive sources are expected to re-prompt until they can.
pub trait MoveSource {
    fn next_move(&mut self, board: &Board) -> anyhow::Result<u8>;
}

/// Player identity plus its move source
pub struct Player {
    name: String,
    marker: Marker,
    source: Box<dyn MoveSource>,
}

impl Player {
    pub fn new(name: impl Into<String>, marker: Marker, source: Box<dyn MoveSource>) -> Self {
        Self {
            name: name.into(),
            marker,
            source,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The marker never changes after creation
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Ask this player's source for its next move
    pub fn next_move(&mut self, board: &Board) -> anyhow::Result<u8> {
        self.source.next_move(board)
    }
}

/// Automated source backed by the heuristic opponent
pub struct HeuristicSource {
    marker: Marker,
    ai: HeuristicAI,
}

impl HeuristicSource {
    pub fn new(marker: Marker) -> Self {
        Self {
            marker,
            ai: HeuristicAI::new(),
        }
    }

    pub fn with_seed(marker: Marker, seed: u64) -> Self {
        Self {
            marker,
            ai: HeuristicAI::with_seed(seed),
        }
    }
}

impl MoveSource for HeuristicSource {
    fn next_move(&mut self, board: &Board) -> anyhow::Result<u8> {
        Ok(self.ai.choose_move(board, self.marker)?)
    }
}

/// Baseline source that plays a uniformly random open cell
pub struct RandomSource {
    rng: ChaCha8Rng,
}

impl RandomSource {
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
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSource for RandomSource {
    fn next_move(&mut self, board: &Board) -> anyhow::Result<u8> {
        let position = board
            .empty_positions()
            .choose(&mut self.rng)
            .copied()
            .ok_or(NoMovesAvailable)?;
        Ok(position)
    }
}
