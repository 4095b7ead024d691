//! The eight fixed winning lines and near-win queries
//!
//! Win detection and the opponent heuristic both read line contents through
//! [`scan`], so "three in a row" and "two in a row plus an empty cell" are
//! expressed against the same line summaries.

use crate::board::{Board, Marker};

/// Winning position triples: rows, then columns, then diagonals
///
/// The ordering is part of the contract: near-win queries return the first
/// qualifying line in this order.
pub const WIN_LINES: [[u8; 3]; 8] = [
    [1, 2, 3],
    [4, 5, 6],
    [7, 8, 9],
    [1, 4, 7],
    [2, 5, 8],
    [3, 6, 9],
    [1, 5, 9],
    [3, 5, 7],
];

/// Cell values along one winning line
#[derive(Clone, Copy, Debug)]
pub struct Line {
    positions: [u8; 3],
    cells: [Option<Marker>; 3],
}

impl Line {
    /// Count cells holding `value` (pass None to count empties)
    pub fn count(&self, value: Option<Marker>) -> usize {
        self.cells.iter().filter(|&&cell| cell == value).count()
    }

    /// Position of the first empty cell on this line
    pub fn first_empty(&self) -> Option<u8> {
        self.positions
            .iter()
            .zip(self.cells.iter())
            .find(|(_, cell)| cell.is_none())
            .map(|(&position, _)| position)
    }
}

/// Iterate the eight lines in their fixed order
pub fn scan(board: &Board) -> impl Iterator<Item = Line> + '_ {
    WIN_LINES.iter().map(move |&positions| Line {
        positions,
        cells: [
            board.get(positions[0]),
            board.get(positions[1]),
            board.get(positions[2]),
        ],
    })
}

/// Empty position that completes a line where `marker` already has two cells
pub fn completing_move(board: &Board, marker: Marker) -> Option<u8> {
    scan(board)
        .find(|line| line.count(Some(marker)) == 2 && line.count(None) == 1)
        .and_then(|line| line.first_empty())
}

/// Empty position on the first line where the opponent of `marker` has two
/// cells, i.e. the cell `marker` must take to avoid losing next turn
pub fn blocking_move(board: &Board, marker: Marker) -> Option<u8> {
    completing_move(board, marker.opponent())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(u8, Marker)]) -> Board {
        let mut board = Board::new();
        for &(position, marker) in marks {
            board.mark(position, marker).unwrap();
        }
        board
    }

    #[test]
    fn test_completing_move_on_top_row() {
        let board = board_with(&[(1, Marker::X), (2, Marker::X)]);
        assert_eq!(completing_move(&board, Marker::X), Some(3));
        assert_eq!(completing_move(&board, Marker::O), None);
    }

    #[test]
    fn test_completing_move_ignores_blocked_lines() {
        // X X O on the top row: no completion available there
        let board = board_with(&[(1, Marker::X), (2, Marker::X), (3, Marker::O)]);
        assert_eq!(completing_move(&board, Marker::X), None);
    }

    #[test]
    fn test_completing_move_first_line_wins_tie() {
        // X threatens both the middle row (6) and the left column (7);
        // the middle row comes first in the fixed ordering
        let board = board_with(&[
            (4, Marker::X),
            (5, Marker::X),
            (1, Marker::X),
        ]);
        assert_eq!(completing_move(&board, Marker::X), Some(6));
    }

    #[test]
    fn test_blocking_move() {
        // O has 4 and 5; X at 1. X must block at 6.
        let board = board_with(&[(4, Marker::O), (5, Marker::O), (1, Marker::X)]);
        assert_eq!(blocking_move(&board, Marker::X), Some(6));
    }

    #[test]
    fn test_no_near_win_on_open_board() {
        let board = Board::new();
        assert_eq!(completing_move(&board, Marker::X), None);
        assert_eq!(blocking_move(&board, Marker::X), None);
    }

    #[test]
    fn test_scan_covers_all_lines() {
        let board = Board::new();
        assert_eq!(scan(&board).count(), 8);
        for line in scan(&board) {
            assert_eq!(line.count(None), 3);
        }
    }
}
