//! Shot resolution and the defeat check.

use log::debug;

use crate::board::{Board, GuessBoard};
use crate::common::{BoardError, Cell, ShotOutcome};

/// Fire at (row, col) on `board`, recording the outcome on both the target
/// board and the firer's `guesses`.
///
/// A coordinate the firer already knows is rejected with `AlreadyFired` and
/// leaves both boards untouched.
pub fn fire(
    board: &mut Board,
    guesses: &mut GuessBoard,
    row: usize,
    col: usize,
) -> Result<ShotOutcome, BoardError> {
    if !guesses.is_unknown(row, col)? {
        return Err(BoardError::AlreadyFired { row, col });
    }
    let outcome = if board.get(row, col)? == Cell::Ship {
        ShotOutcome::Hit
    } else {
        ShotOutcome::Miss
    };
    board.set(row, col, Cell::from(outcome))?;
    guesses.mark(row, col, outcome)?;
    debug!("shot at ({}, {}): {:?}", row, col, outcome);
    Ok(outcome)
}

/// `true` once no `Ship` cell is left on the board.
pub fn is_defeated(board: &Board) -> bool {
    board.ship_map().is_empty()
}
