use crate::{
    ai,
    board::GuessBoard,
    common::{BoardError, ShotOutcome},
};
use rand::Rng;

use crate::player::Player;

/// Computer opponent: hunts around a hit after a hit, searches at random
/// after a miss.
#[derive(Debug, Clone, Default)]
pub struct AiPlayer {
    last_hit: bool,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self { last_hit: false }
    }

    /// Whether the most recent shot by this player was a hit.
    pub fn last_hit(&self) -> bool {
        self.last_hit
    }
}

impl Player for AiPlayer {
    fn select_target<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        guesses: &GuessBoard,
    ) -> Result<(usize, usize), BoardError> {
        ai::choose_target(guesses, self.last_hit, rng)
    }

    fn handle_shot_result(&mut self, _coord: (usize, usize), outcome: ShotOutcome) {
        self.last_hit = outcome.is_hit();
    }
}
