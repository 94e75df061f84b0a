//! Shared game vocabulary: cell states, shot outcomes, sides and errors.

use core::fmt;

use crate::bitboard::BitBoardError;

/// State of one cell as rendered to either side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Open water, or an unknown cell on a guess board.
    #[default]
    Empty,
    /// Unhit ship segment.
    Ship,
    Hit,
    Miss,
}

impl Cell {
    /// Single-character glyph used by text renderers.
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Ship => 'S',
            Cell::Hit => 'X',
            Cell::Miss => 'O',
        }
    }
}

/// Result of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    Hit,
    Miss,
}

impl ShotOutcome {
    pub fn is_hit(self) -> bool {
        matches!(self, ShotOutcome::Hit)
    }
}

impl From<ShotOutcome> for Cell {
    fn from(outcome: ShotOutcome) -> Self {
        match outcome {
            ShotOutcome::Hit => Cell::Hit,
            ShotOutcome::Miss => Cell::Miss,
        }
    }
}

/// One of the two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The human at the keyboard.
    Player,
    /// The computer opponent.
    Ai,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => f.write_str("player"),
            Side::Ai => f.write_str("AI"),
        }
    }
}

/// Errors returned by board, placement, shot and targeting operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate outside the board.
    OutOfBounds { row: usize, col: usize },
    /// The firer already knows the outcome at this coordinate.
    AlreadyFired { row: usize, col: usize },
    /// Explicit placement collides with a ship already on the board.
    ShipOverlaps,
    /// Ship length is zero or longer than the board.
    InvalidShipLength(usize),
    /// Random placement gave up after the attempt budget.
    NoValidPlacement { length: usize, attempts: usize },
    /// No unknown cell is left to target.
    BoardExhausted,
    /// Grid storage is too small for the board (not reachable with the built-in size).
    Storage(BitBoardError),
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds { row, col } => BoardError::OutOfBounds { row, col },
            other => BoardError::Storage(other),
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "({}, {}) is off the board", row, col)
            }
            BoardError::AlreadyFired { row, col } => {
                write!(f, "({}, {}) has already been fired at", row, col)
            }
            BoardError::ShipOverlaps => write!(f, "ship overlaps another ship"),
            BoardError::InvalidShipLength(len) => write!(f, "invalid ship length {}", len),
            BoardError::NoValidPlacement { length, attempts } => write!(
                f,
                "no valid placement for ship of length {} after {} attempts",
                length, attempts
            ),
            BoardError::BoardExhausted => write!(f, "no untargeted cells remain"),
            BoardError::Storage(e) => write!(f, "grid storage error: {}", e),
        }
    }
}

/// Errors returned by the turn controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    Board(BoardError),
    /// A human shot arrived while the computer is to move.
    NotPlayerTurn,
    /// The computer was asked to fire while the human is to move.
    NotAiTurn,
    /// The clicked board cannot be fired at by the human.
    NotTargetable(Side),
    /// The game has already been won.
    GameOver { winner: Side },
}

impl GameError {
    /// `true` for errors the presentation should answer by re-prompting.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GameError::Board(BoardError::OutOfBounds { .. })
                | GameError::Board(BoardError::AlreadyFired { .. })
                | GameError::NotPlayerTurn
                | GameError::NotAiTurn
                | GameError::NotTargetable(_)
        )
    }
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Board(e) => fmt::Display::fmt(e, f),
            GameError::NotPlayerTurn => write!(f, "it is not the player's turn"),
            GameError::NotAiTurn => write!(f, "it is not the AI's turn"),
            GameError::NotTargetable(side) => write!(f, "the {} board cannot be targeted", side),
            GameError::GameOver { winner } => write!(f, "game is over, {} won", winner),
        }
    }
}
