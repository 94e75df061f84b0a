use broadside::{
    choose_target, hunt_candidate, hunt_target, random_target, AiPlayer, BoardError, GuessBoard,
    Player, ShotOutcome, GRID_SIZE,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn is_adjacent((r, c): (usize, usize), (hr, hc): (usize, usize)) -> bool {
    r.abs_diff(hr) + c.abs_diff(hc) == 1
}

#[test]
fn test_hunt_probes_up_down_left_right() {
    let mut guesses = GuessBoard::new();
    guesses.mark(2, 2, ShotOutcome::Hit).unwrap();

    let expected = [(1, 2), (3, 2), (2, 1), (2, 3)];
    for &cell in expected.iter() {
        assert_eq!(hunt_candidate(&guesses), Some(cell));
        guesses.mark(cell.0, cell.1, ShotOutcome::Miss).unwrap();
    }
    assert_eq!(hunt_candidate(&guesses), None);
}

#[test]
fn test_hunt_skips_off_board_neighbors() {
    let mut guesses = GuessBoard::new();
    guesses.mark(0, 0, ShotOutcome::Hit).unwrap();
    assert_eq!(hunt_candidate(&guesses), Some((1, 0)));

    let mut guesses = GuessBoard::new();
    let edge = GRID_SIZE - 1;
    guesses.mark(edge, edge, ShotOutcome::Hit).unwrap();
    assert_eq!(hunt_candidate(&guesses), Some((edge - 1, edge)));
}

#[test]
fn test_hunt_works_from_first_hit_in_scan_order() {
    let mut guesses = GuessBoard::new();
    guesses.mark(4, 4, ShotOutcome::Hit).unwrap();
    guesses.mark(1, 3, ShotOutcome::Hit).unwrap();
    assert_eq!(hunt_candidate(&guesses), Some((0, 3)));
}

#[test]
fn test_hunt_moves_on_when_first_hit_is_boxed_in() {
    let mut guesses = GuessBoard::new();
    guesses.mark(0, 0, ShotOutcome::Hit).unwrap();
    guesses.mark(1, 0, ShotOutcome::Miss).unwrap();
    guesses.mark(0, 1, ShotOutcome::Miss).unwrap();
    guesses.mark(3, 3, ShotOutcome::Hit).unwrap();
    assert_eq!(hunt_candidate(&guesses), Some((2, 3)));
}

#[test]
fn test_hunt_falls_back_to_random() {
    let mut rng = SmallRng::seed_from_u64(9);
    let guesses = GuessBoard::new();
    let (r, c) = hunt_target(&guesses, &mut rng).unwrap();
    assert!(guesses.is_unknown(r, c).unwrap());
}

#[test]
fn test_random_only_picks_unknown_cells() {
    let mut guesses = GuessBoard::new();
    for r in 0..GRID_SIZE {
        for c in 0..GRID_SIZE {
            if (r, c) != (4, 1) {
                guesses.mark(r, c, ShotOutcome::Miss).unwrap();
            }
        }
    }
    let mut rng = SmallRng::seed_from_u64(3);
    for _ in 0..10 {
        assert_eq!(random_target(&guesses, &mut rng).unwrap(), (4, 1));
    }
    guesses.mark(4, 1, ShotOutcome::Miss).unwrap();
    assert_eq!(random_target(&guesses, &mut rng).unwrap_err(), BoardError::BoardExhausted);
    assert_eq!(choose_target(&guesses, true, &mut rng).unwrap_err(), BoardError::BoardExhausted);
}

#[test]
fn test_dispatcher_without_hit_is_random() {
    let mut guesses = GuessBoard::new();
    guesses.mark(2, 2, ShotOutcome::Hit).unwrap();
    let mut rng = SmallRng::seed_from_u64(77);

    let mut far_picks = 0;
    for _ in 0..50 {
        let cell = choose_target(&guesses, false, &mut rng).unwrap();
        assert!(guesses.is_unknown(cell.0, cell.1).unwrap());
        if !is_adjacent(cell, (2, 2)) {
            far_picks += 1;
        }
    }
    assert!(far_picks > 0, "random search should not stick to the hit");

    assert_eq!(choose_target(&guesses, true, &mut rng).unwrap(), (1, 2));
}

#[test]
fn test_dispatcher_matches_random_heuristic() {
    let mut guesses = GuessBoard::new();
    guesses.mark(0, 5, ShotOutcome::Hit).unwrap();
    guesses.mark(3, 3, ShotOutcome::Miss).unwrap();
    let mut a = SmallRng::seed_from_u64(5150);
    let mut b = SmallRng::seed_from_u64(5150);
    for _ in 0..20 {
        assert_eq!(
            choose_target(&guesses, false, &mut a).unwrap(),
            random_target(&guesses, &mut b).unwrap()
        );
    }
}

#[test]
fn test_ai_player_tracks_last_shot() {
    let mut ai = AiPlayer::new();
    let mut rng = SmallRng::seed_from_u64(11);
    let mut guesses = GuessBoard::new();
    assert!(!ai.last_hit());

    guesses.mark(3, 3, ShotOutcome::Hit).unwrap();
    ai.handle_shot_result((3, 3), ShotOutcome::Hit);
    assert!(ai.last_hit());
    assert_eq!(ai.select_target(&mut rng, &guesses).unwrap(), (2, 3));

    ai.handle_shot_result((2, 3), ShotOutcome::Miss);
    assert!(!ai.last_hit());
}
