use crate::{
    board::GuessBoard,
    common::{BoardError, ShotOutcome},
};
use rand::Rng;

/// Interface implemented by automated shooters.
pub trait Player {
    /// Choose the next target given what is known about the opponent board.
    fn select_target<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        guesses: &GuessBoard,
    ) -> Result<(usize, usize), BoardError>;

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _coord: (usize, usize), _outcome: ShotOutcome) {}
}
