use battlefleet::{
    create_empty_grid, Board, CellStatus, Coordinate, CoordinateError, Orientation, VisibleCell,
    BOARD_SIZE, SHIPS,
};

#[test]
fn test_coordinate_display() {
    assert_eq!(Coordinate::new(0, 0).to_string(), "A1");
    assert_eq!(Coordinate::new(9, 9).to_string(), "J10");
    assert_eq!(Coordinate::new(3, 6).to_string(), "D7");
}

#[test]
fn test_off_board_coordinate_display() {
    assert_eq!(Coordinate::new(10, 0).to_string(), "(10, 0)");
    assert_eq!(Coordinate::new(200, 3).to_string(), "(200, 3)");
    assert_eq!(Coordinate::new(0, 10).to_string(), "(0, 10)");
}

#[test]
fn test_coordinate_parse_rejects_signs_and_padding() {
    for input in ["A+3", "b003", "A03", "A-1", "A 3", "A100", "A"] {
        assert_eq!(
            input.parse::<Coordinate>().unwrap_err(),
            CoordinateError::InvalidRow,
            "{} should not parse",
            input
        );
    }
    assert_eq!("b3".parse::<Coordinate>().unwrap(), Coordinate::new(1, 2));
}

#[test]
fn test_coordinate_parse() {
    assert_eq!("A1".parse::<Coordinate>().unwrap(), Coordinate::new(0, 0));
    assert_eq!(" j10 ".parse::<Coordinate>().unwrap(), Coordinate::new(9, 9));
    assert_eq!("".parse::<Coordinate>().unwrap_err(), CoordinateError::Empty);
    assert_eq!(
        "K1".parse::<Coordinate>().unwrap_err(),
        CoordinateError::InvalidColumn('K')
    );
    assert_eq!("A0".parse::<Coordinate>().unwrap_err(), CoordinateError::InvalidRow);
    assert_eq!("A11".parse::<Coordinate>().unwrap_err(), CoordinateError::InvalidRow);
    assert_eq!("Ax".parse::<Coordinate>().unwrap_err(), CoordinateError::InvalidRow);
}

#[test]
fn test_neighbors_clipped_at_edges() {
    let corner: Vec<_> = Coordinate::new(0, 0).neighbors().collect();
    assert_eq!(corner, vec![Coordinate::new(0, 1), Coordinate::new(1, 0)]);

    let mid: Vec<_> = Coordinate::new(4, 4).neighbors().collect();
    assert_eq!(
        mid,
        vec![
            Coordinate::new(4, 3),
            Coordinate::new(4, 5),
            Coordinate::new(3, 4),
            Coordinate::new(5, 4),
        ]
    );
}

#[test]
fn test_empty_grid() {
    let grid = create_empty_grid();
    let n = BOARD_SIZE as usize;
    assert_eq!(grid.rows().count(), n);
    for (y, row) in grid.rows().enumerate() {
        assert_eq!(row.len(), n);
        for (x, cell) in row.iter().enumerate() {
            assert_eq!(cell.coordinate(), Coordinate::new(x, y));
            assert_eq!(cell.status, CellStatus::Empty);
            assert!(cell.ship_id.is_none());
        }
    }
    assert_eq!(grid.count(CellStatus::Empty), n * n);
    assert_eq!(grid.shots_received(), 0);
}

#[test]
fn test_empty_grids_are_independent() {
    let mut a = Board::new();
    let b = Board::new();
    a.fire(Coordinate::new(2, 2)).unwrap();
    assert_eq!(a.grid().status(Coordinate::new(2, 2)), Some(CellStatus::Miss));
    assert_eq!(b.grid().status(Coordinate::new(2, 2)), Some(CellStatus::Empty));
    assert_eq!(create_empty_grid(), *b.grid());
}

#[test]
fn test_out_of_bounds_lookup() {
    let grid = create_empty_grid();
    assert!(grid.get(Coordinate::new(10, 0)).is_none());
    assert!(!grid.is_unfired(Coordinate::new(0, 10)));
}

#[test]
fn test_fog_view_hides_undiscovered_ships() {
    let mut board = Board::new();
    board
        .place(SHIPS[4], Coordinate::new(0, 0), Orientation::Horizontal)
        .unwrap();
    board.fire(Coordinate::new(0, 0)).unwrap();
    board.fire(Coordinate::new(5, 5)).unwrap();

    let fog = board.view(false);
    assert!(!fog.is_revealed());
    assert_eq!(fog.get(Coordinate::new(0, 0)), Some(VisibleCell::Hit));
    assert_eq!(fog.get(Coordinate::new(1, 0)), Some(VisibleCell::Unknown));
    assert_eq!(fog.get(Coordinate::new(5, 5)), Some(VisibleCell::Miss));
    assert_eq!(fog.get(Coordinate::new(9, 9)), Some(VisibleCell::Unknown));

    let open = board.view(true);
    assert_eq!(open.get(Coordinate::new(1, 0)), Some(VisibleCell::Ship));
    assert_eq!(open.get(Coordinate::new(9, 9)), Some(VisibleCell::Water));

    board.fire(Coordinate::new(1, 0)).unwrap();
    let fog = board.view(false);
    assert_eq!(fog.get(Coordinate::new(0, 0)), Some(VisibleCell::Sunk));
    assert_eq!(fog.get(Coordinate::new(1, 0)), Some(VisibleCell::Sunk));
}
