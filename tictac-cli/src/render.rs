//! Board text rendering
//!
//! Purely observational: reads the board, never mutates it.

use tictac_core::Board;

/// Format the board beside a reference grid of the still-open cell numbers
pub fn format_board(board: &Board) -> String {
    let cell = |position: u8| match board.get(position) {
        Some(marker) => marker.to_string(),
        None => " ".to_string(),
    };
    let reference = |position: u8| match board.get(position) {
        Some(_) => " ".to_string(),
        None => position.to_string(),
    };

    let mut out = String::new();
    out.push_str("                Open Squares\n\n");
    for row in 0..3u8 {
        let p = 1 + row * 3;
        out.push_str(&format!(
            " {} | {} | {}       {} | {} | {} \n",
            cell(p),
            cell(p + 1),
            cell(p + 2),
            reference(p),
            reference(p + 1),
            reference(p + 2),
        ));
        if row < 2 {
            out.push_str("-----------     -----------\n");
        }
    }
    out
}
