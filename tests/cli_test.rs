#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use std::io::Cursor;

    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use rush_hour::{
        print_legal_moves, Axis, CliPlayer, Coord, Direction, Game, Grid, Move, Outcome, Player,
        Vehicle,
    };

    fn red_car_grid() -> Grid {
        let mut grid = Grid::new();
        grid.add_vehicle(Vehicle::new('R', 2, Coord::new(3, 4), Axis::Horizontal).unwrap())
            .unwrap();
        grid
    }

    fn player(input: &str) -> CliPlayer<Cursor<Vec<u8>>, Vec<u8>> {
        CliPlayer::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_reprompts_until_valid_move() {
        let grid = red_car_grid();
        let mut rng = SmallRng::seed_from_u64(0);
        let mut cli = player("bad\nZ,r\nR,x\nmoves\nr,r\n");
        let mv = cli.select_move(&mut rng, &grid);
        assert_eq!(mv, Some(Move::new('R', Direction::Right)));

        let out = String::from_utf8(cli.into_output()).unwrap();
        assert!(out.contains("_ _ _ _ R R _"));
        assert!(out.contains("Invalid input"));
        assert!(out.contains("Unknown label Z"));
        assert!(out.contains("R,r (R right)"));
        assert!(out.contains("R,l (R left)"));
    }

    #[test]
    fn test_quit_and_eof_end_session() {
        let grid = red_car_grid();
        let mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(player("quit\n").select_move(&mut rng, &grid), None);
        assert_eq!(player("").select_move(&mut rng, &grid), None);
    }

    #[test]
    fn test_session_reports_errors_and_win() {
        let mut game = Game::new(red_car_grid());
        let mut rng = SmallRng::seed_from_u64(0);
        let mut cli = player("R,u\nR,r\n");
        let summary = game.run(&mut cli, &mut rng, None);
        assert_eq!(summary.outcome, Outcome::Won('R'));
        assert_eq!(summary.moves, 1);
        assert_eq!(summary.rejected, 1);

        let out = String::from_utf8(cli.into_output()).unwrap();
        assert!(out.contains("Cannot move R,u: a horizontal vehicle cannot move up"));
        assert!(out.contains("R reached the exit. You won!"));
    }

    #[test]
    fn test_print_legal_moves_on_stuck_board() {
        let mut out = Vec::new();
        print_legal_moves(&mut out, &Grid::new()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No legal moves.\n");
    }
}
