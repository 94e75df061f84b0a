//! Ship footprints on the board grid.

use crate::common::BoardError;
use crate::config::{BB, GRID_SIZE};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Row and column step from one segment to the next.
    fn step(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// A straight run of `length` cells anchored at its top-left segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ship {
    length: usize,
    orientation: Orientation,
    row: usize,
    col: usize,
    mask: BB,
}

impl Ship {
    /// Lay a ship from (`row`, `col`) along `orientation`.
    ///
    /// Fails with `InvalidShipLength` for an empty or over-long ship and with
    /// `OutOfBounds` (naming the first off-board segment) when it does not fit.
    pub fn new(
        length: usize,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Result<Self, BoardError> {
        if length == 0 || length > GRID_SIZE {
            return Err(BoardError::InvalidShipLength(length));
        }
        let (dr, dc) = orientation.step();
        let mut mask = BB::new();
        for i in 0..length {
            mask.set(row + dr * i, col + dc * i)?;
        }
        Ok(Ship {
            length,
            orientation,
            row,
            col,
            mask,
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Anchor segment (row, col).
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Cells covered by the ship.
    pub fn mask(&self) -> BB {
        self.mask
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.mask.get(row, col).unwrap_or(false)
    }
}
