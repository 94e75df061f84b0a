#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use std::io::Cursor;

    use broadside::{coord_to_string, parse_coord, render_boards, Cell, CliPlayer, GRID_SIZE};

    #[test]
    fn test_parse_coord_accepts_letter_then_row() {
        assert_eq!(parse_coord("A1"), Ok((0, 0)));
        assert_eq!(parse_coord("c4"), Ok((3, 2)));
        assert_eq!(parse_coord(" F6 "), Ok((5, 5)));
    }

    #[test]
    fn test_parse_coord_rejects_bad_input() {
        assert!(parse_coord("").is_err());
        assert!(parse_coord("A").is_err());
        assert!(parse_coord("G1").is_err());
        assert!(parse_coord("A0").is_err());
        assert!(parse_coord("A7").is_err());
        assert!(parse_coord("1A").is_err());
        assert!(parse_coord("Ax").is_err());
    }

    #[test]
    fn test_coord_to_string_inverts_parse() {
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                assert_eq!(parse_coord(&coord_to_string(r, c)), Ok((r, c)));
            }
        }
    }

    #[test]
    fn test_prompt_reprompts_until_valid() {
        let input = Cursor::new("zz\nB9\nb2\n");
        let mut player = CliPlayer::with_input(input);
        assert_eq!(player.prompt_target().unwrap(), Some((1, 1)));
        assert_eq!(player.prompt_target().unwrap(), None);
    }

    #[test]
    fn test_prompt_quit() {
        let mut player = CliPlayer::with_input(Cursor::new("quit\n"));
        assert_eq!(player.prompt_target().unwrap(), None);

        let mut player = CliPlayer::with_input(Cursor::new("y\nno\n"));
        assert!(player.confirm("again?").unwrap());
        assert!(!player.confirm("again?").unwrap());
    }

    #[test]
    fn test_render_boards_shows_both_grids() {
        let mut own = [[Cell::Empty; GRID_SIZE]; GRID_SIZE];
        let mut target = [[Cell::Empty; GRID_SIZE]; GRID_SIZE];
        own[0][0] = Cell::Ship;
        target[0][1] = Cell::Hit;
        target[0][2] = Cell::Miss;
        let text = render_boards(&own, &target);
        let first_row = text.lines().nth(2).unwrap();
        assert!(first_row.starts_with(" 1 S . . . . ."));
        assert!(first_row.ends_with(" 1 . X O . . ."));
        assert!(text.contains("Your Board"));
        assert!(text.contains("AI Board"));
    }
}
