use battlefleet::{calculate_ai_move, Board, Difficulty, BOARD_SIZE};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

const N: usize = BOARD_SIZE as usize;

fn difficulty() -> impl Strategy<Value = Difficulty> {
    prop_oneof![
        Just(Difficulty::Easy),
        Just(Difficulty::Medium),
        Just(Difficulty::Hard),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn ai_only_targets_unfired_cells_and_finishes(seed in any::<u64>(), level in difficulty()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::random(&mut rng);
        let mut shots = 0;
        while !board.all_sunk() {
            let target = calculate_ai_move(board.grid(), level, &mut rng);
            prop_assert!(target.is_some());
            let target = target.unwrap();
            prop_assert!(board.grid().is_unfired(target), "{} already fired", target);
            prop_assert!(board.fire(target).is_ok());
            shots += 1;
            prop_assert!(shots <= N * N);
        }
    }

    #[test]
    fn choice_ignores_undiscovered_ships(seed in any::<u64>(), level in difficulty()) {
        // two boards with different fleets but the same (empty) shot history
        let a = Board::random(&mut SmallRng::seed_from_u64(seed));
        let b = Board::random(&mut SmallRng::seed_from_u64(seed.wrapping_add(1)));
        let pick_a = calculate_ai_move(a.grid(), level, &mut SmallRng::seed_from_u64(seed));
        let pick_b = calculate_ai_move(b.grid(), level, &mut SmallRng::seed_from_u64(seed));
        prop_assert_eq!(pick_a, pick_b);
    }
}
