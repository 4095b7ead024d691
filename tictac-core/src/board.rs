//! 3x3 board state and win detection

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::lines;

/// Number of cells on the board
pub const BOARD_SIZE: u8 = 9;

/// Player marker
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    X,
    O,
}

impl Marker {
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Marker::X => write!(f, "X"),
            Marker::O => write!(f, "O"),
        }
    }
}

/// Rejected mark attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InvalidMove {
    #[error("position {position} is outside 1..=9")]
    OutOfRange { position: u8 },
    #[error("position {position} is already occupied")]
    Occupied { position: u8 },
}

/// Board state, cells addressed by position 1..=9 in row-major order
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Marker>; 9],
}

impl Board {
    pub fn new() -> Self {
        Self { cells: [None; 9] }
    }

    /// Cell value at position (None when empty or out of range)
    pub fn get(&self, position: u8) -> Option<Marker> {
        if !(1..=BOARD_SIZE).contains(&position) {
            return None;
        }
        self.cells[(position - 1) as usize]
    }

    /// Place a marker
    ///
    /// Occupied cells are never overwritten; there is no undo.
    pub fn mark(&mut self, position: u8, marker: Marker) -> Result<(), InvalidMove> {
        if !(1..=BOARD_SIZE).contains(&position) {
            return Err(InvalidMove::OutOfRange { position });
        }
        let cell = &mut self.cells[(position - 1) as usize];
        if cell.is_some() {
            return Err(InvalidMove::Occupied { position });
        }
        *cell = Some(marker);
        Ok(())
    }

    /// Unoccupied positions in ascending order
    pub fn empty_positions(&self) -> Vec<u8> {
        (1..=BOARD_SIZE)
            .filter(|&position| self.get(position).is_none())
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// True iff one of the eight winning lines is uniformly `marker`
    pub fn has_three_in_a_row(&self, marker: Marker) -> bool {
        lines::scan(self).any(|line| line.count(Some(marker)) == 3)
    }
}
