use battlefleet::{Board, BoardError, CellStatus, Coordinate, ShotOutcome, BOARD_SIZE};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

const N: usize = BOARD_SIZE as usize;

/// Random fleet plus a random number of random shots.
fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::random(&mut rng);
    let shots = rng.random_range(0..N * N);
    for _ in 0..shots {
        let target = Coordinate::new(rng.random_range(0..N), rng.random_range(0..N));
        let _ = board.fire(target);
    }
    board
}

fn assert_consistent(board: &Board) -> Result<(), TestCaseError> {
    for ship in board.fleet() {
        let statuses: Vec<_> = ship
            .cells()
            .map(|c| board.grid().status(c).unwrap())
            .collect();
        let damaged = statuses
            .iter()
            .filter(|s| matches!(s, CellStatus::Hit | CellStatus::Sunk))
            .count();
        prop_assert_eq!(damaged, ship.hits());
        if ship.is_sunk() {
            prop_assert!(statuses.iter().all(|s| *s == CellStatus::Sunk));
        } else {
            prop_assert!(statuses.iter().all(|s| *s != CellStatus::Sunk));
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn second_shot_is_rejected_and_changes_nothing(
        seed in any::<u64>(),
        x in 0..N,
        y in 0..N,
    ) {
        let mut board = Board::random(&mut SmallRng::seed_from_u64(seed));
        let target = Coordinate::new(x, y);
        let before = board.clone();
        board.fire(target).unwrap();
        let after = board.clone();
        prop_assert_ne!(&before, &after);
        prop_assert_eq!(board.fire(target), Err(BoardError::AlreadyFired(target)));
        prop_assert_eq!(board, after);
    }

    #[test]
    fn grid_and_fleet_stay_consistent(seed in any::<u64>()) {
        let board = random_board(seed);
        assert_consistent(&board)?;
    }

    #[test]
    fn fleet_destroyed_only_when_every_ship_sinks(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::random(&mut rng);
        let mut cells: Vec<Coordinate> = (0..N * N).map(|i| Coordinate::new(i % N, i / N)).collect();
        // shuffle by swapping
        for i in (1..cells.len()).rev() {
            let j = rng.random_range(0..=i);
            cells.swap(i, j);
        }

        let mut destroyed_seen = false;
        for target in cells {
            let outcome = board.fire(target).unwrap();
            prop_assert_eq!(outcome.fleet_destroyed(), board.all_sunk());
            if let ShotOutcome::FleetDestroyed(_) = outcome {
                destroyed_seen = true;
                break;
            }
        }
        prop_assert!(destroyed_seen);
        assert_consistent(&board)?;
    }
}
