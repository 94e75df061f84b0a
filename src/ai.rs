// Targeting heuristics for the computer opponent.
// Each call re-reads the guess board; nothing is remembered between shots
// except the caller's last-hit flag.

use rand::Rng;

use crate::{board::GuessBoard, common::BoardError, config::GRID_SIZE};

/// Neighbor offsets in probe order: up, down, left, right.
const PROBE_ORDER: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Pick uniformly among cells not yet fired at.
pub fn random_target<R: Rng + ?Sized>(
    guesses: &GuessBoard,
    rng: &mut R,
) -> Result<(usize, usize), BoardError> {
    let open = guesses.unknown();
    let count = open.count_ones();
    if count == 0 {
        return Err(BoardError::BoardExhausted);
    }
    let pick = rng.random_range(0..count);
    open.cells().nth(pick).ok_or(BoardError::BoardExhausted)
}

/// First unknown neighbor of a known hit, if any.
///
/// Hits are visited in row-major order and neighbors in [`PROBE_ORDER`], so
/// the search always works outward from the top-left-most hit that still has
/// an open neighbor rather than from the most recent hit.
pub fn hunt_candidate(guesses: &GuessBoard) -> Option<(usize, usize)> {
    let open = guesses.unknown();
    for (r, c) in guesses.hits().cells() {
        for (dr, dc) in PROBE_ORDER {
            let (Some(nr), Some(nc)) = (r.checked_add_signed(dr), c.checked_add_signed(dc)) else {
                continue;
            };
            if nr < GRID_SIZE && nc < GRID_SIZE && open.get(nr, nc).unwrap_or(false) {
                return Some((nr, nc));
            }
        }
    }
    None
}

/// Hunt around known hits, falling back to [`random_target`].
pub fn hunt_target<R: Rng + ?Sized>(
    guesses: &GuessBoard,
    rng: &mut R,
) -> Result<(usize, usize), BoardError> {
    match hunt_candidate(guesses) {
        Some(cell) => Ok(cell),
        None => random_target(guesses, rng),
    }
}

/// Hunt after a hit, search at random otherwise.
pub fn choose_target<R: Rng + ?Sized>(
    guesses: &GuessBoard,
    last_hit: bool,
    rng: &mut R,
) -> Result<(usize, usize), BoardError> {
    if last_hit {
        hunt_target(guesses, rng)
    } else {
        random_target(guesses, rng)
    }
}
