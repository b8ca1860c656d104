use battlefleet::{calculate_ai_move, init_logging, AiOpponent, Difficulty, Match, Phase, Side};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

/// Computer against computer through the regular match controller.
/// Player 1 is driven by the local targeting routine, the AI side by `AiOpponent`.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 || args.len() > 4 {
        eprintln!("Usage: {} <seed1> <seed2> [easy|medium|hard]", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;
    let difficulty = match args.get(3) {
        Some(level) => level.parse::<Difficulty>().map_err(|e| anyhow::anyhow!(e))?,
        None => Difficulty::default(),
    };

    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);

    let mut game = Match::new();
    game.randomize_setup(&mut rng1)?;
    game.start(&mut rng2)?;
    let opponent = AiOpponent::new(difficulty);

    while game.phase() == Phase::Playing {
        match game.turn() {
            Side::Human => {
                let target = calculate_ai_move(game.board(Side::Ai).grid(), difficulty, &mut rng1)
                    .ok_or_else(|| anyhow::anyhow!("player 1 has no targets left"))?;
                game.fire(target)?;
            }
            Side::Ai => {
                opponent.take_turn(&mut game, &mut rng2).await?;
            }
        }
    }

    let winner = match game.winner() {
        Some(Side::Human) => Some("player1"),
        Some(Side::Ai) => Some("player2"),
        None => None,
    };

    let result = json!({
        "difficulty": difficulty.to_string(),
        "player1": {"shots": game.shots_fired(Side::Human), "shipsLeft": game.ships_surviving(Side::Human)},
        "player2": {"shots": game.shots_fired(Side::Ai), "shipsLeft": game.ships_surviving(Side::Ai)},
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
