//! Per-side grids: the fleet board a side defends and the guess board it
//! fills in while firing at the opponent.
//!
//! Both are stored as disjoint bitboards, one per non-empty cell state, so a
//! cell's state is whichever layer has its bit set.

use core::fmt;

use crate::common::{BoardError, Cell, ShotOutcome};
use crate::config::{BoardView, BB, GRID_SIZE};

/// A side's own grid: ship segments plus the shots received.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    ships: BB,
    hits: BB,
    misses: BB,
}

impl Board {
    /// An all-`Empty` board.
    pub fn new() -> Self {
        Board {
            ships: BB::new(),
            hits: BB::new(),
            misses: BB::new(),
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        if self.hits.get(row, col)? {
            Ok(Cell::Hit)
        } else if self.misses.get(row, col)? {
            Ok(Cell::Miss)
        } else if self.ships.get(row, col)? {
            Ok(Cell::Ship)
        } else {
            Ok(Cell::Empty)
        }
    }

    /// Overwrite the state of one cell. Only the coordinate is validated.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), BoardError> {
        self.ships.clear(row, col)?;
        self.hits.clear(row, col)?;
        self.misses.clear(row, col)?;
        match cell {
            Cell::Empty => {}
            Cell::Ship => self.ships.set(row, col)?,
            Cell::Hit => self.hits.set(row, col)?,
            Cell::Miss => self.misses.set(row, col)?,
        }
        Ok(())
    }

    /// Unhit ship segments.
    pub fn ship_map(&self) -> BB {
        self.ships
    }

    /// Number of cells still in the `Ship` state.
    pub fn ship_cells(&self) -> usize {
        self.ships.count_ones()
    }

    /// Every cell, indexed `[row][col]`, with ships revealed.
    pub fn view(&self) -> BoardView {
        let mut view = [[Cell::Empty; GRID_SIZE]; GRID_SIZE];
        for (r, c) in self.ships.cells() {
            view[r][c] = Cell::Ship;
        }
        for (r, c) in self.hits.cells() {
            view[r][c] = Cell::Hit;
        }
        for (r, c) in self.misses.cells() {
            view[r][c] = Cell::Miss;
        }
        view
    }
}

/// What one side has learned about the other's board.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct GuessBoard {
    hits: BB,
    misses: BB,
}

impl GuessBoard {
    /// A guess board with every cell unknown.
    pub fn new() -> Self {
        GuessBoard {
            hits: BB::new(),
            misses: BB::new(),
        }
    }

    /// `Empty` for unknown, otherwise `Hit` or `Miss`.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        if self.hits.get(row, col)? {
            Ok(Cell::Hit)
        } else if self.misses.get(row, col)? {
            Ok(Cell::Miss)
        } else {
            Ok(Cell::Empty)
        }
    }

    pub fn is_unknown(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        Ok(self.get(row, col)? == Cell::Empty)
    }

    /// Record the outcome of a shot at (row, col).
    pub fn mark(&mut self, row: usize, col: usize, outcome: ShotOutcome) -> Result<(), BoardError> {
        match outcome {
            ShotOutcome::Hit => {
                self.misses.clear(row, col)?;
                self.hits.set(row, col)?;
            }
            ShotOutcome::Miss => {
                self.hits.clear(row, col)?;
                self.misses.set(row, col)?;
            }
        }
        Ok(())
    }

    pub fn hits(&self) -> BB {
        self.hits
    }

    pub fn misses(&self) -> BB {
        self.misses
    }

    /// Cells not yet fired at.
    pub fn unknown(&self) -> BB {
        !(self.hits | self.misses)
    }

    /// Every cell, indexed `[row][col]`.
    pub fn view(&self) -> BoardView {
        let mut view = [[Cell::Empty; GRID_SIZE]; GRID_SIZE];
        for (r, c) in self.hits.cells() {
            view[r][c] = Cell::Hit;
        }
        for (r, c) in self.misses.cells() {
            view[r][c] = Cell::Miss;
        }
        view
    }
}

fn write_grid(f: &mut fmt::Formatter<'_>, view: &BoardView) -> fmt::Result {
    for (r, row) in view.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            if c > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", cell.glyph())?;
        }
        if r + 1 < GRID_SIZE {
            writeln!(f)?;
        }
    }
    Ok(())
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, &self.view())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        write_grid(f, &self.view())?;
        write!(f, "\n}}")
    }
}

impl fmt::Display for GuessBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, &self.view())
    }
}

impl fmt::Debug for GuessBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "GuessBoard {{")?;
        write_grid(f, &self.view())?;
        write!(f, "\n}}")
    }
}
