use battlegrid::{Board, BoardError, CellState, Coord, Orientation, Ship, ShipSpec};

fn placed(board: &mut Board, length: usize, orientation: Orientation, start: Coord) -> Ship {
    let mut ship = Ship::new("Test", length, orientation).unwrap();
    let range = ship.range_on(board, start).unwrap();
    board.occupy_range(&range).unwrap();
    ship.place(&range).unwrap();
    ship
}

#[test]
fn test_zero_length_rejected() {
    assert_eq!(
        Ship::new("Nothing", 0, Orientation::Horizontal).unwrap_err(),
        BoardError::InvalidLength
    );
    assert!(Ship::from_spec(&ShipSpec::new("Nothing", 0)).is_err());
}

#[test]
fn test_range_on_follows_orientation() {
    let board = Board::new(10, 10).unwrap();
    let mut ship = Ship::new("Submarine", 3, Orientation::Vertical).unwrap();
    let range = ship.range_on(&board, Coord::new(2, 4)).unwrap();
    let coords: Vec<_> = range.iter().map(|c| c.coord()).collect();
    assert_eq!(coords, vec![Coord::new(2, 4), Coord::new(3, 4), Coord::new(4, 4)]);

    ship.set_orientation(Orientation::Horizontal).unwrap();
    let range = ship.range_on(&board, Coord::new(2, 4)).unwrap();
    assert!(range.iter().all(|c| c.row == 2));
}

#[test]
fn test_range_on_passes_board_error_through() {
    let board = Board::new(10, 10).unwrap();
    let ship = Ship::new("Cruiser", 3, Orientation::Vertical).unwrap();
    let err = ship.range_on(&board, Coord::new(8, 0)).unwrap_err();
    assert_eq!(
        err,
        BoardError::RangeOutOfBounds {
            start: Coord::new(8, 0),
            count: 3
        }
    );
}

#[test]
fn test_place_records_position_only() {
    let board = Board::new(10, 10).unwrap();
    let mut ship = Ship::new("Patrol Boat", 2, Orientation::Horizontal).unwrap();
    assert!(!ship.is_placed());
    let range = ship.range_on(&board, Coord::new(5, 5)).unwrap();
    ship.place(&range).unwrap();
    assert!(ship.is_placed());
    assert_eq!(ship.origin(), Some(Coord::new(5, 5)));
    assert_eq!(ship.position(), &[Coord::new(5, 5), Coord::new(5, 6)]);
    // the board is untouched until a player commits the range
    assert_eq!(board.count(CellState::Occupied), 0);

    assert_eq!(ship.place(&range).unwrap_err(), BoardError::ShipAlreadyPlaced);
    assert_eq!(
        ship.set_orientation(Orientation::Vertical).unwrap_err(),
        BoardError::ShipAlreadyPlaced
    );
}

#[test]
fn test_place_rejects_wrong_length() {
    let board = Board::new(10, 10).unwrap();
    let mut ship = Ship::new("Carrier", 5, Orientation::Horizontal).unwrap();
    let short = board
        .cell_range(Orientation::Horizontal, Coord::new(0, 0), 2)
        .unwrap();
    assert_eq!(ship.place(&short).unwrap_err(), BoardError::InvalidLength);
    assert!(!ship.is_placed());
}

#[test]
fn test_record_hit_and_destroyed() {
    let mut board = Board::new(4, 4).unwrap();
    let ship = placed(&mut board, 2, Orientation::Horizontal, Coord::new(1, 1));
    assert!(!ship.is_destroyed(&board));

    board.attack_cell(Coord::new(1, 1)).unwrap();
    assert!(!ship.record_hit(Coord::new(1, 1), &board).unwrap());
    assert_eq!(ship.hits(&board), 1);
    assert!(!ship.is_destroyed(&board));

    board.attack_cell(Coord::new(1, 2)).unwrap();
    assert!(ship.record_hit(Coord::new(1, 2), &board).unwrap());
    assert!(ship.is_destroyed(&board));

    assert_eq!(
        ship.record_hit(Coord::new(0, 0), &board).unwrap_err(),
        BoardError::NotMyCell { row: 0, col: 0 }
    );
}

#[test]
fn test_unplaced_ship_is_not_destroyed() {
    let board = Board::new(4, 4).unwrap();
    let ship = Ship::new("Ghost", 1, Orientation::Horizontal).unwrap();
    assert!(!ship.is_destroyed(&board));
    assert_eq!(ship.hits(&board), 0);
}

#[test]
fn test_orientation_step() {
    let start = Coord::new(3, 3);
    assert_eq!(Orientation::Horizontal.step(start, 2), Some(Coord::new(3, 5)));
    assert_eq!(Orientation::Vertical.step(start, 2), Some(Coord::new(5, 3)));
    assert_eq!(Orientation::Vertical.step(Coord::new(usize::MAX, 0), 1), None);
    assert_eq!(Orientation::Horizontal.flip(), Orientation::Vertical);
}
