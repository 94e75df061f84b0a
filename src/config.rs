/// Rows and columns of every board.
pub const BOARD_SIZE: u8 = 6;
pub const NUM_SHIPS: usize = 2;
/// Fleet placed on each board, in placement order.
pub const SHIP_LENGTHS: [usize; NUM_SHIPS] = [3, 2];

/// Total number of ship segments in the fleet.
pub const TOTAL_SHIP_CELLS: usize = 3 + 2;

/// Random samples tried per ship before placement gives up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// Pause the terminal front end takes before each computer shot.
pub const DEFAULT_AI_DELAY_MS: u64 = 1000;

/// `BOARD_SIZE` as an index bound.
pub const GRID_SIZE: usize = BOARD_SIZE as usize;

/// Occupancy grid sized for the board; 36 cells fit in a `u64`.
pub type BB = crate::bitboard::BitBoard<u64, GRID_SIZE>;

/// Rendered board, indexed `[row][col]`.
pub type BoardView = [[crate::common::Cell; GRID_SIZE]; GRID_SIZE];
