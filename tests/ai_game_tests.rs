use broadside::{AiPlayer, Game, Player, Side, TurnState, GRID_SIZE};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Play a whole game with a second AI in the human's seat.
fn play_out(seed: u64) -> (Game<SmallRng>, usize) {
    let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
    let mut game = Game::new(SmallRng::seed_from_u64(seed)).unwrap();
    let mut stand_in = AiPlayer::new();
    let mut shots = 0;
    loop {
        match game.state() {
            TurnState::PlayerTurn => {
                let (r, c) = stand_in
                    .select_target(&mut rng, game.guesses(Side::Player))
                    .unwrap();
                let report = game.on_cell_clicked(Side::Ai, r, c).unwrap();
                stand_in.handle_shot_result((r, c), report.outcome);
            }
            TurnState::AiTurn => {
                game.take_ai_turn().unwrap();
            }
            TurnState::PlayerWon | TurnState::AiWon => break,
        }
        shots += 1;
        if shots > 2 * GRID_SIZE * GRID_SIZE {
            panic!("game took too many shots");
        }
    }
    (game, shots)
}

#[test]
fn test_ai_vs_ai_game_terminates() {
    for seed in [1u64, 7, 123, 9001] {
        let (game, _) = play_out(seed);
        let winner = game.winner().unwrap();
        assert_eq!(game.board(winner.opponent()).ship_cells(), 0);
        assert!(game.board(winner).ship_cells() > 0);
    }
}

#[test]
fn test_seeded_games_replay_identically() {
    let (a, shots_a) = play_out(555);
    let (b, shots_b) = play_out(555);
    assert_eq!(shots_a, shots_b);
    assert_eq!(a.winner(), b.winner());
    assert_eq!(a.guesses(Side::Ai), b.guesses(Side::Ai));
    assert_eq!(a.guesses(Side::Player), b.guesses(Side::Player));
}
