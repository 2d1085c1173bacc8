use seabattle::{
    Board, BoardError, CellState, Orientation, Ship, ShotResult, COORD_MAX, COORD_MIN,
    FLEET_LENGTHS,
};

#[test]
fn test_new_board_is_hidden_and_unplaced() {
    let board = Board::new();
    assert!(!board.is_fleet_alive());
    assert_eq!(board.remaining_lengths(), &FLEET_LENGTHS);
    for column in COORD_MIN..=COORD_MAX {
        for row in COORD_MIN..=COORD_MAX {
            assert_eq!(board.cell(column, row).unwrap().state(), CellState::Hidden);
        }
    }
}

#[test]
fn test_place_marks_cells_and_consumes_length() {
    let mut board = Board::new();
    board
        .place(Ship::new(3, Orientation::Horizontal, 3, 2).unwrap())
        .unwrap();

    for (column, row) in [(3, 2), (4, 2), (5, 2)] {
        assert_eq!(
            board.cell(column, row).unwrap().state(),
            CellState::Undamaged
        );
    }
    assert_eq!(board.remaining_lengths(), &[2, 2, 1, 1, 1, 1]);
    assert!(board.is_fleet_alive());
}

#[test]
fn test_contour_of_corner_ship() {
    let ship = Ship::new(1, Orientation::Horizontal, 1, 1).unwrap();
    let contour = Board::contour(&ship);
    let expected: std::collections::BTreeSet<_> = [(1, 2), (2, 1), (2, 2)].into_iter().collect();
    assert_eq!(contour, expected);
}

#[test]
fn test_contour_excludes_own_cells_and_stays_in_bounds() {
    let ship = Ship::new(3, Orientation::Vertical, 6, 4).unwrap();
    let contour = Board::contour(&ship);
    for coords in ship.cells() {
        assert!(!contour.contains(&coords));
    }
    for &(column, row) in &contour {
        assert!((COORD_MIN..=COORD_MAX).contains(&column));
        assert!((COORD_MIN..=COORD_MAX).contains(&row));
    }
}

#[test]
fn test_diagonal_adjacency_rejected() {
    let mut board = Board::new();
    board
        .place(Ship::new(1, Orientation::Horizontal, 2, 2).unwrap())
        .unwrap();
    assert_eq!(
        board
            .place(Ship::new(1, Orientation::Horizontal, 1, 1).unwrap())
            .unwrap_err(),
        BoardError::TooClose
    );
    // the rejected placement left nothing behind
    assert_eq!(board.fleet().len(), 1);
    assert_eq!(board.cell(1, 1).unwrap().state(), CellState::Hidden);
}

#[test]
fn test_overlap_rejected() {
    let mut board = Board::new();
    board
        .place(Ship::new(3, Orientation::Horizontal, 2, 3).unwrap())
        .unwrap();
    assert_eq!(
        board
            .place(Ship::new(2, Orientation::Vertical, 3, 3).unwrap())
            .unwrap_err(),
        BoardError::TooClose
    );
}

/// A full non-touching layout of the seven-ship fleet.
fn full_fleet() -> [Ship; 7] {
    [
        Ship::new(3, Orientation::Horizontal, 1, 1).unwrap(),
        Ship::new(2, Orientation::Horizontal, 5, 1).unwrap(),
        Ship::new(2, Orientation::Vertical, 1, 3).unwrap(),
        Ship::new(1, Orientation::Horizontal, 3, 3).unwrap(),
        Ship::new(1, Orientation::Horizontal, 5, 3).unwrap(),
        Ship::new(1, Orientation::Horizontal, 1, 6).unwrap(),
        Ship::new(1, Orientation::Horizontal, 3, 5).unwrap(),
    ]
}

#[test]
fn test_fleet_composition_exhausts() {
    let mut board = Board::new();
    for ship in full_fleet() {
        board.place(ship).unwrap();
    }
    assert!(board.remaining_lengths().is_empty());
    assert_eq!(board.fleet().len(), 7);

    // an eighth ship at a clear spot fails on composition, not adjacency
    assert_eq!(
        board
            .place(Ship::new(1, Orientation::Horizontal, 5, 5).unwrap())
            .unwrap_err(),
        BoardError::FleetComplete { length: 1 }
    );
}

#[test]
fn test_shoot_out_of_bounds() {
    let mut board = Board::new();
    assert_eq!(
        board.shoot(0, 3).unwrap_err(),
        BoardError::OutOfBounds { column: 0, row: 3 }
    );
    assert_eq!(
        board.shoot(7, 7).unwrap_err(),
        BoardError::OutOfBounds { column: 7, row: 7 }
    );
}

#[test]
fn test_miss_and_repeat_shot() {
    let mut board = Board::new();
    assert_eq!(board.shoot(4, 4).unwrap(), ShotResult::Miss);
    assert_eq!(board.cell(4, 4).unwrap().state(), CellState::Missed);

    assert_eq!(
        board.shoot(4, 4).unwrap_err(),
        BoardError::RepeatShot { column: 4, row: 4 }
    );
    assert_eq!(board.cell(4, 4).unwrap().state(), CellState::Missed);
}

#[test]
fn test_repeat_shot_on_damaged_cell() {
    let mut board = Board::new();
    board
        .place(Ship::new(2, Orientation::Horizontal, 2, 2).unwrap())
        .unwrap();
    assert_eq!(board.shoot(2, 2).unwrap(), ShotResult::Hit);
    assert_eq!(
        board.shoot(2, 2).unwrap_err(),
        BoardError::RepeatShot { column: 2, row: 2 }
    );
    assert_eq!(board.cell(2, 2).unwrap().state(), CellState::Damaged);
    // the ship took exactly one hit
    assert_eq!(board.fleet()[0].health(), 1);
}

#[test]
fn test_sink_marks_contour_and_prunes_fleet() {
    let mut board = Board::new();
    board
        .place(Ship::new(3, Orientation::Horizontal, 3, 2).unwrap())
        .unwrap();

    assert_eq!(board.shoot(3, 2).unwrap(), ShotResult::Hit);
    assert_eq!(board.fleet()[0].health(), 2);
    assert_eq!(board.shoot(4, 2).unwrap(), ShotResult::Hit);
    assert_eq!(board.fleet()[0].health(), 1);
    assert_eq!(board.shoot(5, 2).unwrap(), ShotResult::Hit);

    // sunk: pruned from the fleet, not retained
    assert!(!board.is_fleet_alive());
    assert!(board.fleet().is_empty());

    // hit cells stay damaged, the whole clipped 8-neighborhood turns missed
    for (column, row) in [(3, 2), (4, 2), (5, 2)] {
        assert_eq!(board.cell(column, row).unwrap().state(), CellState::Damaged);
    }
    for column in 2..=6 {
        for row in 1..=3 {
            if [(3, 2), (4, 2), (5, 2)].contains(&(column, row)) {
                continue;
            }
            assert_eq!(board.cell(column, row).unwrap().state(), CellState::Missed);
        }
    }

    // buffer cells now count as resolved
    assert_eq!(
        board.shoot(3, 1).unwrap_err(),
        BoardError::RepeatShot { column: 3, row: 1 }
    );
}

#[test]
fn test_sink_leaves_other_ships_untouched() {
    let mut board = Board::new();
    board
        .place(Ship::new(2, Orientation::Horizontal, 1, 1).unwrap())
        .unwrap();
    board
        .place(Ship::new(2, Orientation::Horizontal, 4, 4).unwrap())
        .unwrap();

    assert_eq!(board.shoot(1, 1).unwrap(), ShotResult::Hit);
    assert_eq!(board.shoot(2, 1).unwrap(), ShotResult::Hit);

    assert_eq!(board.fleet().len(), 1);
    assert_eq!(board.fleet()[0].health(), 2);
    for (column, row) in [(4, 4), (5, 4)] {
        assert_eq!(
            board.cell(column, row).unwrap().state(),
            CellState::Undamaged
        );
    }
}

#[test]
fn test_shots_resolve_after_earlier_sink() {
    // sinking the first-placed ship reshuffles the fleet internally; later
    // shots must still find their owners
    let mut board = Board::new();
    board
        .place(Ship::new(1, Orientation::Horizontal, 1, 1).unwrap())
        .unwrap();
    board
        .place(Ship::new(1, Orientation::Horizontal, 4, 1).unwrap())
        .unwrap();
    board
        .place(Ship::new(1, Orientation::Horizontal, 1, 4).unwrap())
        .unwrap();

    assert_eq!(board.shoot(1, 1).unwrap(), ShotResult::Hit);
    assert_eq!(board.fleet().len(), 2);

    assert_eq!(board.shoot(4, 1).unwrap(), ShotResult::Hit);
    assert_eq!(board.shoot(1, 4).unwrap(), ShotResult::Hit);
    assert!(!board.is_fleet_alive());
}

#[test]
fn test_random_board_places_full_fleet() {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    let mut rng = SmallRng::seed_from_u64(42);
    let board = Board::generate_random(&mut rng).unwrap();
    assert_eq!(board.fleet().len(), FLEET_LENGTHS.len());
    assert!(board.remaining_lengths().is_empty());

    let occupied: usize = board.fleet().iter().map(|s| s.length() as usize).sum();
    assert_eq!(occupied, FLEET_LENGTHS.iter().map(|&l| l as usize).sum());
}
