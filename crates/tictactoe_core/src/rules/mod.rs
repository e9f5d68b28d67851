//! Game rules for tic-tac-toe.
//!
//! Pure functions over immutable [`Board`] values: applying a validated
//! move and evaluating the outcome. Rules carry no session state, so they
//! can be tested in isolation from turn and score bookkeeping.

mod draw;
mod win;

pub use draw::is_full;
pub use win::winner;

use crate::error::IllegalMove;
use crate::types::{Board, Cell, Outcome, Player, BOARD_SIZE};
use tracing::instrument;

/// Applies a move to the board, returning the resulting board.
///
/// The input board is never mutated; on success the returned board is
/// identical to the input except that the target cell now holds
/// `player`'s mark.
///
/// # Errors
///
/// Returns [`IllegalMove::OutOfRange`] if `row` or `col` falls outside
/// `0..3`, and [`IllegalMove::CellOccupied`] if the target cell already
/// holds a mark.
#[instrument]
pub fn apply_move(
    board: &Board,
    row: usize,
    col: usize,
    player: Player,
) -> Result<Board, IllegalMove> {
    if row >= BOARD_SIZE || col >= BOARD_SIZE {
        return Err(IllegalMove::OutOfRange { row, col });
    }
    if !board.is_empty(row, col) {
        return Err(IllegalMove::CellOccupied { row, col });
    }

    let mut next = *board;
    next.set(row, col, Cell::Occupied(player));
    Ok(next)
}

/// Evaluates the outcome of a board.
///
/// Checks the 8 lines (3 rows, 3 columns, 2 diagonals) for a winner,
/// then falls back to [`Outcome::Draw`] on a full board and
/// [`Outcome::InProgress`] otherwise. Pure and idempotent; safe to call
/// redundantly after any number of moves.
#[instrument]
pub fn outcome(board: &Board) -> Outcome {
    if let Some(player) = winner(board) {
        return Outcome::Won(player);
    }
    if is_full(board) {
        return Outcome::Draw;
    }
    Outcome::InProgress
}
