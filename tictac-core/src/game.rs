//! Turn alternation and terminal detection

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{Board, InvalidMove, Marker};

/// Terminal result of a round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win(Marker),
    Tie,
}

/// Where the round stands
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    AwaitingMove(Marker),
    Terminal(Outcome),
}

/// Rejected play attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PlayError {
    #[error("the round is already over")]
    GameOver,
    #[error(transparent)]
    InvalidMove(#[from] InvalidMove),
}

/// One round: a board plus strict alternation of the two markers
///
/// The game is the sole mutator of its board, so no further coordination is
/// needed around moves.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    first: Marker,
    active: Marker,
    outcome: Option<Outcome>,
}

impl Game {
    /// Start a round with `first` to move
    pub fn new(first: Marker) -> Self {
        Self {
            board: Board::new(),
            first,
            active: first,
            outcome: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Marker that moves next (None once terminal)
    pub fn active_marker(&self) -> Option<Marker> {
        match self.outcome {
            None => Some(self.active),
            Some(_) => None,
        }
    }

    pub fn status(&self) -> Status {
        match self.outcome {
            Some(outcome) => Status::Terminal(outcome),
            None => Status::AwaitingMove(self.active),
        }
    }

    /// Apply the active marker's move, then evaluate win/tie
    ///
    /// Terminal states are absorbing: marks after the round ends are
    /// rejected, as are marks the board itself rejects.
    pub fn play(&mut self, position: u8) -> Result<Status, PlayError> {
        if self.outcome.is_some() {
            return Err(PlayError::GameOver);
        }
        self.board.mark(position, self.active)?;

        if self.board.has_three_in_a_row(self.active) {
            self.outcome = Some(Outcome::Win(self.active));
        } else if self.board.is_full() {
            self.outcome = Some(Outcome::Tie);
        } else {
            self.active = self.active.opponent();
        }
        Ok(self.status())
    }

    /// Fresh board for the next round, same first mover
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.active = self.first;
        self.outcome = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternation() {
        let mut game = Game::new(Marker::X);
        assert_eq!(game.status(), Status::AwaitingMove(Marker::X));

        let status = game.play(5).unwrap();
        assert_eq!(status, Status::AwaitingMove(Marker::O));
        assert_eq!(game.active_marker(), Some(Marker::O));

        let status = game.play(1).unwrap();
        assert_eq!(status, Status::AwaitingMove(Marker::X));
    }

    #[test]
    fn test_win_ends_the_round() {
        let mut game = Game::new(Marker::X);
        for position in [1, 4, 2, 5] {
            game.play(position).unwrap();
        }
        let status = game.play(3).unwrap();
        assert_eq!(status, Status::Terminal(Outcome::Win(Marker::X)));
        assert_eq!(game.active_marker(), None);
    }

    #[test]
    fn test_tie_on_full_board() {
        // X: 1 3 4 8 9, O: 2 5 6 7 -- no line for either side
        let mut game = Game::new(Marker::X);
        for position in [1, 2, 3, 5, 4, 6, 8, 7] {
            assert_eq!(game.play(position).unwrap(), Status::AwaitingMove(game.active_marker().unwrap()));
        }
        let status = game.play(9).unwrap();
        assert_eq!(status, Status::Terminal(Outcome::Tie));
    }

    #[test]
    fn test_terminal_is_absorbing() {
        let mut game = Game::new(Marker::X);
        for position in [1, 4, 2, 5, 3] {
            game.play(position).unwrap();
        }
        assert_eq!(game.play(9), Err(PlayError::GameOver));
    }

    #[test]
    fn test_board_errors_propagate() {
        let mut game = Game::new(Marker::X);
        game.play(5).unwrap();
        assert_eq!(
            game.play(5),
            Err(PlayError::InvalidMove(InvalidMove::Occupied { position: 5 }))
        );
        assert_eq!(
            game.play(10),
            Err(PlayError::InvalidMove(InvalidMove::OutOfRange { position: 10 }))
        );
        // A rejected move does not hand the turn over
        assert_eq!(game.active_marker(), Some(Marker::O));
    }

    #[test]
    fn test_reset_starts_a_fresh_round() {
        let mut game = Game::new(Marker::O);
        for position in [1, 4, 2, 5, 3] {
            game.play(position).unwrap();
        }
        assert_eq!(game.status(), Status::Terminal(Outcome::Win(Marker::O)));

        game.reset();
        assert_eq!(game.status(), Status::AwaitingMove(Marker::O));
        assert_eq!(game.board().empty_positions().len(), 9);
    }
}
