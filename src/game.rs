//! Turn controller: owns both sides' boards and drives the game through its
//! turn states in response to presentation events.

#[cfg(not(feature = "std"))]
use alloc::boxed::Box;
use core::fmt;

use log::{info, warn};
use rand::Rng;

use crate::{
    board::{Board, GuessBoard},
    common::{BoardError, GameError, ShotOutcome, Side},
    config::{BoardView, SHIP_LENGTHS},
    placement,
    player::Player,
    player_ai::AiPlayer,
    shot,
};

/// Whose move it is, or who has won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    PlayerTurn,
    AiTurn,
    PlayerWon,
    AiWon,
}

impl TurnState {
    /// The winning side in a terminal state.
    pub fn winner(self) -> Option<Side> {
        match self {
            TurnState::PlayerWon => Some(Side::Player),
            TurnState::AiWon => Some(Side::Ai),
            TurnState::PlayerTurn | TurnState::AiTurn => None,
        }
    }

    pub fn is_over(self) -> bool {
        self.winner().is_some()
    }
}

/// One resolved shot and the turn state it left the game in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotReport {
    pub shooter: Side,
    pub row: usize,
    pub col: usize,
    pub outcome: ShotOutcome,
    pub state: TurnState,
}

/// Status line for the shot, as shown to the human.
impl fmt::Display for ShotReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.shooter, self.outcome, self.state) {
            (Side::Player, ShotOutcome::Hit, TurnState::PlayerWon) => write!(f, "Hit! You win!"),
            (Side::Player, ShotOutcome::Hit, _) => write!(f, "Hit! Go again."),
            (Side::Player, ShotOutcome::Miss, _) => write!(f, "Miss! AI's turn."),
            (Side::Ai, ShotOutcome::Hit, TurnState::AiWon) => {
                write!(f, "AI hits at ({},{})! AI wins!", self.row, self.col)
            }
            (Side::Ai, ShotOutcome::Hit, _) => {
                write!(f, "AI hits at ({},{})! AI goes again.", self.row, self.col)
            }
            (Side::Ai, ShotOutcome::Miss, _) => {
                write!(f, "AI misses at ({},{})! Your turn.", self.row, self.col)
            }
        }
    }
}

/// Presentation hooks invoked synchronously by [`Game`].
pub trait GameObserver {
    /// Called after every resolved shot.
    fn on_shot(&mut self, _report: &ShotReport) {}

    /// Called once, when a side wins.
    fn on_game_over(&mut self, _winner: Side) {}
}

/// A single human-vs-computer session.
pub struct Game<R: Rng> {
    player_board: Board,
    ai_board: Board,
    /// Human's knowledge of the AI board.
    player_guesses: GuessBoard,
    /// AI's knowledge of the human board.
    ai_guesses: GuessBoard,
    ai: AiPlayer,
    state: TurnState,
    rng: R,
    observer: Option<Box<dyn GameObserver>>,
}

impl<R: Rng> Game<R> {
    /// Start a game with both fleets placed at random from `rng`.
    ///
    /// Fails only when a fleet cannot be placed, which aborts setup.
    pub fn new(mut rng: R) -> Result<Self, GameError> {
        let (player_board, ai_board) = Self::deal(&mut rng)?;
        Ok(Self::from_boards(player_board, ai_board, rng))
    }

    /// Start a game on prepared boards. The human moves first.
    pub fn from_boards(player_board: Board, ai_board: Board, rng: R) -> Self {
        Game {
            player_board,
            ai_board,
            player_guesses: GuessBoard::new(),
            ai_guesses: GuessBoard::new(),
            ai: AiPlayer::new(),
            state: TurnState::PlayerTurn,
            rng,
            observer: None,
        }
    }

    fn deal(rng: &mut R) -> Result<(Board, Board), BoardError> {
        let mut player_board = Board::new();
        let mut ai_board = Board::new();
        placement::place_ships(&mut player_board, &SHIP_LENGTHS, rng)?;
        placement::place_ships(&mut ai_board, &SHIP_LENGTHS, rng)?;
        Ok((player_board, ai_board))
    }

    /// Register the presentation's hooks, replacing any previous observer.
    pub fn set_observer(&mut self, observer: Box<dyn GameObserver>) {
        self.observer = Some(observer);
    }

    /// Discard the current game and deal fresh fleets. The human moves first.
    pub fn reset(&mut self) -> Result<(), GameError> {
        let (player_board, ai_board) = Self::deal(&mut self.rng)?;
        self.player_board = player_board;
        self.ai_board = ai_board;
        self.player_guesses = GuessBoard::new();
        self.ai_guesses = GuessBoard::new();
        self.ai = AiPlayer::new();
        self.state = TurnState::PlayerTurn;
        info!("game reset");
        Ok(())
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn winner(&self) -> Option<Side> {
        self.state.winner()
    }

    /// The fleet board a side defends.
    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::Player => &self.player_board,
            Side::Ai => &self.ai_board,
        }
    }

    /// What `side` has learned about its opponent's board.
    pub fn guesses(&self, side: Side) -> &GuessBoard {
        match side {
            Side::Player => &self.player_guesses,
            Side::Ai => &self.ai_guesses,
        }
    }

    /// Board as the human should see it: their own fleet in full, or their
    /// shots against the AI with its ships hidden.
    pub fn board_view(&self, side: Side) -> BoardView {
        match side {
            Side::Player => self.player_board.view(),
            Side::Ai => self.player_guesses.view(),
        }
    }

    fn check_live(&self) -> Result<(), GameError> {
        match self.state.winner() {
            Some(winner) => Err(GameError::GameOver { winner }),
            None => Ok(()),
        }
    }

    /// Human fired at `side`'s board. Only the AI board is a valid target.
    ///
    /// A hit keeps the turn, a miss passes it to the AI, and sinking the
    /// last AI ship ends the game.
    pub fn on_cell_clicked(
        &mut self,
        side: Side,
        row: usize,
        col: usize,
    ) -> Result<ShotReport, GameError> {
        self.check_live()?;
        if self.state != TurnState::PlayerTurn {
            warn!("player shot at ({}, {}) rejected: not player's turn", row, col);
            return Err(GameError::NotPlayerTurn);
        }
        if side != Side::Ai {
            return Err(GameError::NotTargetable(side));
        }
        let outcome = shot::fire(&mut self.ai_board, &mut self.player_guesses, row, col)
            .inspect_err(|e| warn!("player shot rejected: {}", e))?;
        self.state = match outcome {
            ShotOutcome::Hit if shot::is_defeated(&self.ai_board) => TurnState::PlayerWon,
            ShotOutcome::Hit => TurnState::PlayerTurn,
            ShotOutcome::Miss => TurnState::AiTurn,
        };
        Ok(self.finish_shot(Side::Player, row, col, outcome))
    }

    /// Let the computer fire once at the human board.
    ///
    /// A hit keeps the turn (the presentation calls again), a miss hands it
    /// back to the human, and sinking the last human ship ends the game.
    pub fn take_ai_turn(&mut self) -> Result<ShotReport, GameError> {
        self.check_live()?;
        if self.state != TurnState::AiTurn {
            return Err(GameError::NotAiTurn);
        }
        let (row, col) = self.ai.select_target(&mut self.rng, &self.ai_guesses)?;
        let outcome = shot::fire(&mut self.player_board, &mut self.ai_guesses, row, col)?;
        self.ai.handle_shot_result((row, col), outcome);
        self.state = match outcome {
            ShotOutcome::Hit if shot::is_defeated(&self.player_board) => TurnState::AiWon,
            ShotOutcome::Hit => TurnState::AiTurn,
            ShotOutcome::Miss => TurnState::PlayerTurn,
        };
        Ok(self.finish_shot(Side::Ai, row, col, outcome))
    }

    fn finish_shot(&mut self, shooter: Side, row: usize, col: usize, outcome: ShotOutcome) -> ShotReport {
        let report = ShotReport {
            shooter,
            row,
            col,
            outcome,
            state: self.state,
        };
        info!("{} fired at ({}, {}): {:?} -> {:?}", shooter, row, col, outcome, self.state);
        if let Some(observer) = self.observer.as_mut() {
            observer.on_shot(&report);
            if let Some(winner) = self.state.winner() {
                observer.on_game_over(winner);
            }
        }
        if let Some(winner) = self.state.winner() {
            info!("game over, {} wins", winner);
        }
        report
    }
}
