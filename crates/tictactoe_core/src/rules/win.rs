//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Cell, Player};
use tracing::instrument;

/// The 8 winning lines as `(row, col)` coordinates, checked in fixed
/// order: the three rows, the three columns, then the two diagonals.
const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if that player holds all three cells of some
/// line, `None` otherwise. A legal board has at most one winning player;
/// on a board with two winning lines the first line in check order wins.
#[instrument]
pub fn winner(board: &Board) -> Option<Player> {
    for [(ar, ac), (br, bc), (cr, cc)] in LINES {
        let cell = board.get(ar, ac);
        if cell != Some(Cell::Empty) && cell == board.get(br, bc) && cell == board.get(cr, cc) {
            if let Some(Cell::Occupied(player)) = cell {
                return Some(player);
            }
        }
    }

    None
}
