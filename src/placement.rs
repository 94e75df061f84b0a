//! Random fleet placement.

use log::debug;
use rand::Rng;

use crate::board::Board;
use crate::common::{BoardError, Cell};
use crate::config::{GRID_SIZE, MAX_PLACEMENT_ATTEMPTS};
use crate::ship::{Orientation, Ship};

/// Put `ship` on the board, marking its cells `Ship`.
///
/// Nothing is written if any of its cells is already occupied.
pub fn place_ship(board: &mut Board, ship: &Ship) -> Result<(), BoardError> {
    if !(board.ship_map() & ship.mask()).is_empty() {
        return Err(BoardError::ShipOverlaps);
    }
    for (r, c) in ship.mask().cells() {
        board.set(r, c, Cell::Ship)?;
    }
    Ok(())
}

/// Sample a position for a ship of `length` that fits the board and
/// overlaps no ship already placed.
///
/// Gives up with `NoValidPlacement` after [`MAX_PLACEMENT_ATTEMPTS`] samples.
pub fn random_placement<R: Rng + ?Sized>(
    board: &Board,
    length: usize,
    rng: &mut R,
) -> Result<Ship, BoardError> {
    if length == 0 || length > GRID_SIZE {
        return Err(BoardError::InvalidShipLength(length));
    }
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let (max_r, max_c) = match orientation {
            Orientation::Horizontal => (GRID_SIZE - 1, GRID_SIZE - length),
            Orientation::Vertical => (GRID_SIZE - length, GRID_SIZE - 1),
        };
        let r = rng.random_range(0..=max_r);
        let c = rng.random_range(0..=max_c);
        let ship = Ship::new(length, orientation, r, c)?;
        if (board.ship_map() & ship.mask()).is_empty() {
            return Ok(ship);
        }
    }
    Err(BoardError::NoValidPlacement {
        length,
        attempts: MAX_PLACEMENT_ATTEMPTS,
    })
}

/// Place one ship per entry of `lengths`, in order.
pub fn place_ships<R: Rng + ?Sized>(
    board: &mut Board,
    lengths: &[usize],
    rng: &mut R,
) -> Result<(), BoardError> {
    for &length in lengths {
        let ship = random_placement(board, length, rng)?;
        place_ship(board, &ship)?;
        debug!(
            "placed ship of length {} at {:?} {:?}",
            length,
            ship.origin(),
            ship.orientation()
        );
    }
    Ok(())
}
