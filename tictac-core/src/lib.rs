//! tictac core - board model and computer opponent
//!
//! This crate provides the core logic for tictac:
//! - Board state and win detection over the eight fixed lines
//! - Near-win line queries shared by the win check and the opponent
//! - The heuristic opponent (win, block, else random)
//! - Turn alternation with absorbing terminal states
//! - Player identity with pluggable move sources

pub mod board;
pub mod lines;
pub mod heuristic;
pub mod game;
pub mod player;

// Re-exports for convenient access
pub use board::{Board, InvalidMove, Marker, BOARD_SIZE};
pub use lines::{blocking_move, completing_move, WIN_LINES};
pub use heuristic::{HeuristicAI, NoMovesAvailable};
pub use game::{Game, Outcome, PlayError, Status};
pub use player::{HeuristicSource, MoveSource, Player, RandomSource};
