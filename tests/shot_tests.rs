use battlefleet::{
    resolve_shot, Board, BoardError, CellStatus, Coordinate, Fleet, Grid, Orientation, PlacedShip,
    ShotOutcome, SHIPS,
};

fn destroyer_board() -> Board {
    let mut board = Board::new();
    board
        .place(SHIPS[4], Coordinate::new(0, 0), Orientation::Horizontal)
        .unwrap();
    board
}

#[test]
fn test_miss_on_open_water() {
    let mut board = destroyer_board();
    let before = board.fleet().clone();
    assert_eq!(board.fire(Coordinate::new(3, 3)).unwrap(), ShotOutcome::Miss);
    assert_eq!(board.grid().status(Coordinate::new(3, 3)), Some(CellStatus::Miss));
    assert_eq!(board.fleet(), &before);
}

#[test]
fn test_destroyer_hit_then_sunk() {
    let mut board = destroyer_board();
    assert_eq!(board.fire(Coordinate::new(0, 0)).unwrap(), ShotOutcome::Hit);
    assert_eq!(board.grid().status(Coordinate::new(0, 0)), Some(CellStatus::Hit));
    assert_eq!(board.fleet().get("destroyer").unwrap().hits(), 1);

    let outcome = board.fire(Coordinate::new(1, 0)).unwrap();
    // the destroyer is the whole fleet here
    assert_eq!(outcome, ShotOutcome::FleetDestroyed("Destroyer"));
    assert_eq!(outcome.to_string(), "Sunk Destroyer");
    assert_eq!(board.grid().status(Coordinate::new(0, 0)), Some(CellStatus::Sunk));
    assert_eq!(board.grid().status(Coordinate::new(1, 0)), Some(CellStatus::Sunk));
    assert!(board.all_sunk());
}

#[test]
fn test_sunk_without_fleet_destroyed() {
    let mut board = destroyer_board();
    board
        .place(SHIPS[2], Coordinate::new(5, 5), Orientation::Vertical)
        .unwrap();
    board.fire(Coordinate::new(0, 0)).unwrap();
    assert_eq!(
        board.fire(Coordinate::new(1, 0)).unwrap(),
        ShotOutcome::Sunk("Destroyer")
    );
    assert!(!board.all_sunk());
    assert_eq!(board.fleet().afloat(), 1);
}

#[test]
fn test_repeat_shots_rejected() {
    let mut board = destroyer_board();
    board.fire(Coordinate::new(3, 3)).unwrap();
    board.fire(Coordinate::new(0, 0)).unwrap();
    let snapshot = board.clone();

    assert_eq!(
        board.fire(Coordinate::new(3, 3)),
        Err(BoardError::AlreadyFired(Coordinate::new(3, 3)))
    );
    assert_eq!(
        board.fire(Coordinate::new(0, 0)),
        Err(BoardError::AlreadyFired(Coordinate::new(0, 0)))
    );
    assert_eq!(board, snapshot);
}

#[test]
fn test_sunk_cells_cannot_be_fired_again() {
    let mut board = destroyer_board();
    board.fire(Coordinate::new(0, 0)).unwrap();
    board.fire(Coordinate::new(1, 0)).unwrap();
    assert_eq!(
        board.fire(Coordinate::new(1, 0)),
        Err(BoardError::AlreadyFired(Coordinate::new(1, 0)))
    );
}

#[test]
fn test_out_of_bounds_rejected() {
    let mut board = destroyer_board();
    assert_eq!(
        board.fire(Coordinate::new(10, 2)),
        Err(BoardError::OutOfBounds(Coordinate::new(10, 2)))
    );
    assert_eq!(board.grid().shots_received(), 0);
}

#[test]
fn test_unknown_ship_id_rejected_before_write() {
    let board = destroyer_board();
    let mut grid: Grid = board.grid().clone();
    let mut fleet = Fleet::new();
    fleet
        .add(PlacedShip::new(SHIPS[0], Coordinate::new(0, 5), Orientation::Horizontal))
        .unwrap();

    assert_eq!(
        resolve_shot(&mut grid, &mut fleet, Coordinate::new(0, 0)),
        Err(BoardError::UnknownShip(Coordinate::new(0, 0)))
    );
    assert_eq!(&grid, board.grid());
    assert_eq!(fleet.get("carrier").unwrap().hits(), 0);
}

#[test]
fn test_shot_outcome_helpers() {
    assert!(!ShotOutcome::Miss.is_hit());
    assert!(ShotOutcome::Hit.is_hit());
    assert_eq!(ShotOutcome::Sunk("Cruiser").sunk_ship(), Some("Cruiser"));
    assert!(ShotOutcome::FleetDestroyed("Cruiser").fleet_destroyed());
    assert!(!ShotOutcome::Sunk("Cruiser").fleet_destroyed());
    assert_eq!(ShotOutcome::Miss.to_string(), "Shot missed");
    assert_eq!(ShotOutcome::Hit.to_string(), "Hit");
}
