use std::collections::HashSet;

use battlefleet::{
    calculate_ai_move, hunt_candidates, target_candidates, Board, Coordinate, Difficulty,
    Orientation, BOARD_SIZE, SHIPS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

const N: usize = BOARD_SIZE as usize;

fn board_with(ship: usize, origin: Coordinate, orientation: Orientation) -> Board {
    let mut board = Board::new();
    board.place(SHIPS[ship], origin, orientation).unwrap();
    board
}

#[test]
fn test_two_hits_target_line_ends() {
    // battleship covers (4,2)..(4,5)
    let mut board = board_with(1, Coordinate::new(4, 2), Orientation::Vertical);
    board.fire(Coordinate::new(4, 4)).unwrap();
    board.fire(Coordinate::new(4, 5)).unwrap();

    let candidates: HashSet<_> = target_candidates(board.grid()).into_iter().collect();
    let expected: HashSet<_> = [Coordinate::new(4, 3), Coordinate::new(4, 6)].into_iter().collect();
    assert_eq!(candidates, expected);

    let mut seen = HashSet::new();
    for seed in 0..64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let target = calculate_ai_move(board.grid(), Difficulty::Medium, &mut rng).unwrap();
        assert!(expected.contains(&target), "unexpected target {}", target);
        seen.insert(target);
    }
    assert_eq!(seen, expected);
}

#[test]
fn test_adjacent_hits_on_open_water_ends() {
    // two horizontal ships stacked so that (4,4) and (4,5) line up vertically
    let mut board = board_with(0, Coordinate::new(0, 4), Orientation::Horizontal);
    board
        .place(SHIPS[1], Coordinate::new(1, 5), Orientation::Horizontal)
        .unwrap();
    board.fire(Coordinate::new(4, 4)).unwrap();
    board.fire(Coordinate::new(4, 5)).unwrap();

    let mut candidates = target_candidates(board.grid());
    candidates.sort();
    assert_eq!(candidates, vec![Coordinate::new(4, 3), Coordinate::new(4, 6)]);
}

#[test]
fn test_blocked_end_leaves_other_end() {
    let mut board = board_with(1, Coordinate::new(4, 4), Orientation::Vertical);
    board.fire(Coordinate::new(4, 3)).unwrap();
    board.fire(Coordinate::new(4, 4)).unwrap();
    board.fire(Coordinate::new(4, 5)).unwrap();
    assert_eq!(target_candidates(board.grid()), vec![Coordinate::new(4, 6)]);
}

#[test]
fn test_single_hit_targets_neighbors() {
    let mut board = board_with(2, Coordinate::new(5, 5), Orientation::Horizontal);
    board.fire(Coordinate::new(5, 5)).unwrap();
    assert_eq!(
        target_candidates(board.grid()),
        vec![
            Coordinate::new(5, 4),
            Coordinate::new(5, 6),
            Coordinate::new(4, 5),
            Coordinate::new(6, 5),
        ]
    );
}

#[test]
fn test_sunk_ships_are_not_targeted() {
    let mut board = board_with(4, Coordinate::new(0, 0), Orientation::Horizontal);
    board
        .place(SHIPS[0], Coordinate::new(0, 9), Orientation::Horizontal)
        .unwrap();
    board.fire(Coordinate::new(0, 0)).unwrap();
    board.fire(Coordinate::new(1, 0)).unwrap();
    assert!(target_candidates(board.grid()).is_empty());
}

#[test]
fn test_hard_hunts_on_checkerboard() {
    let board = Board::new();
    assert_eq!(hunt_candidates(board.grid(), true).len(), N * N / 2);
    for seed in 0..32 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let target = calculate_ai_move(board.grid(), Difficulty::Hard, &mut rng).unwrap();
        assert_eq!((target.x + target.y) % 2, 0);
    }
}

#[test]
fn test_hard_falls_back_when_parity_exhausted() {
    let mut board = Board::new();
    for y in 0..N {
        for x in 0..N {
            if (x + y) % 2 == 0 {
                board.fire(Coordinate::new(x, y)).unwrap();
            }
        }
    }
    let mut rng = SmallRng::seed_from_u64(3);
    let target = calculate_ai_move(board.grid(), Difficulty::Hard, &mut rng).unwrap();
    assert_eq!((target.x + target.y) % 2, 1);
}

#[test]
fn test_easy_ignores_damage() {
    let mut board = board_with(1, Coordinate::new(4, 2), Orientation::Vertical);
    board.fire(Coordinate::new(4, 4)).unwrap();
    board.fire(Coordinate::new(4, 5)).unwrap();

    let mut seen = HashSet::new();
    for seed in 0..64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let target = calculate_ai_move(board.grid(), Difficulty::Easy, &mut rng).unwrap();
        assert!(board.grid().is_unfired(target));
        seen.insert(target);
    }
    assert!(seen.len() > 2);
}

#[test]
fn test_no_move_on_exhausted_grid() {
    let mut board = Board::new();
    for y in 0..N {
        for x in 0..N {
            board.fire(Coordinate::new(x, y)).unwrap();
        }
    }
    let mut rng = SmallRng::seed_from_u64(1);
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        assert_eq!(calculate_ai_move(board.grid(), difficulty, &mut rng), None);
    }
}

#[test]
fn test_difficulty_parse() {
    assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
    assert_eq!(" easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
    assert!("brutal".parse::<Difficulty>().is_err());
    assert_eq!(Difficulty::default(), Difficulty::Medium);
    assert_eq!(Difficulty::Medium.to_string(), "medium");
}
