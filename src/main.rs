use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use battlefleet::{
    init_logging, print_board, print_match, AiOpponent, Coordinate, Difficulty, Match, Phase,
    SaveFile, Settings, Side,
};
use clap::{Parser, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Level {
    Easy,
    Medium,
    Hard,
}

impl From<Level> for Difficulty {
    fn from(level: Level) -> Self {
        match level {
            Level::Easy => Difficulty::Easy,
            Level::Medium => Difficulty::Medium,
            Level::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Parser)]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = Level::Medium)]
        difficulty: Level,
        #[arg(long, env = "BATTLEFLEET_AI_ENDPOINT", help = "Remote decision service URL")]
        ai_endpoint: Option<String>,
        #[arg(long, default_value_t = 5000)]
        ai_timeout_ms: u64,
        #[arg(long, default_value_t = 1000, help = "Pause before the computer fires")]
        delay_ms: u64,
        #[arg(long, help = "Resume from and save to this file")]
        save: Option<PathBuf>,
        #[arg(long, help = "Deploy your fleet at random")]
        random_fleet: bool,
        #[arg(long, help = "Pass the turn after every shot, hit or not")]
        no_bonus_shot: bool,
    },
    /// Delete a saved match.
    Clear {
        #[arg(long)]
        save: PathBuf,
    },
}

enum Command {
    Fire(Coordinate),
    Reset,
    Quit,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            difficulty,
            ai_endpoint,
            ai_timeout_ms,
            delay_ms,
            save,
            random_fleet,
            no_bonus_shot,
        } => {
            let settings = Settings::default()
                .with_difficulty(difficulty.into())
                .with_endpoint(ai_endpoint)
                .with_decision_timeout(Duration::from_millis(ai_timeout_ms))
                .with_ai_delay(Duration::from_millis(delay_ms))
                .with_bonus_shot_on_hit(!no_bonus_shot);
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            let save = save.map(SaveFile::new);
            let game = save.as_ref().map(SaveFile::load).unwrap_or_default();
            play(game, &settings, save.as_ref(), &mut rng, random_fleet).await?;
        }
        Commands::Clear { save } => {
            SaveFile::new(&save).clear()?;
            println!("Removed {}", save.display());
        }
    }
    Ok(())
}

async fn play(
    mut game: Match,
    settings: &Settings,
    save: Option<&SaveFile>,
    rng: &mut SmallRng,
    random_fleet: bool,
) -> anyhow::Result<()> {
    game.set_bonus_shot_on_hit(settings.bonus_shot_on_hit);
    let opponent = AiOpponent::from_settings(settings);
    println!("Computer difficulty: {}", opponent.difficulty());

    loop {
        if let Some(file) = save {
            file.save(&game)?;
        }
        match game.phase() {
            Phase::Setup => {
                deploy(&mut game, rng, random_fleet)?;
                game.start(rng)?;
            }
            Phase::GameOver => {
                announce(&game);
                let answer = prompt("Play again? (y/n): ")?;
                if !matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes") {
                    return Ok(());
                }
                if let Some(file) = save {
                    file.clear()?;
                }
                game.reset();
            }
            Phase::Playing => match game.turn() {
                Side::Human => {
                    print_match(&game, 4);
                    match read_command()? {
                        Command::Fire(target) => {
                            if let Err(e) = game.fire(target) {
                                println!("Cannot fire at {}: {}", target, e);
                            }
                        }
                        Command::Reset => {
                            if let Some(file) = save {
                                file.clear()?;
                            }
                            game.reset();
                        }
                        Command::Quit => return Ok(()),
                    }
                }
                Side::Ai => {
                    println!("ENEMY TARGETING...");
                    if let Some(report) = opponent.take_turn(&mut game, rng).await? {
                        println!("AI fired at {}: {}", report.target, report.outcome);
                    }
                }
            },
        }
    }
}

fn announce(game: &Match) {
    print_match(game, 4);
    match game.winner() {
        Some(Side::Human) => {
            println!("\nVICTORY! Admiral, you've neutralized the enemy fleet.");
        }
        Some(Side::Ai) => {
            println!("\nDEFEAT. Your fleet has been decimated. Better luck next time.");
        }
        None => {}
    }
}

fn prompt(text: &str) -> anyhow::Result<String> {
    print!("{}", text);
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        anyhow::bail!("Input closed");
    }
    Ok(buf.trim().to_string())
}

fn deploy(game: &mut Match, rng: &mut SmallRng, random_fleet: bool) -> anyhow::Result<()> {
    if random_fleet {
        game.randomize_setup(rng)?;
        return Ok(());
    }
    while let Some(ship) = game.current_ship() {
        print_board("FLEET DEPLOYMENT", &game.setup_board().view(true));
        let line = prompt(&format!(
            "Place {} (size {}, {:?}) - enter a cell like A1, 'r' to rotate, 'random' for all: ",
            ship.name(),
            ship.size(),
            game.orientation()
        ))?;
        match line.to_ascii_lowercase().as_str() {
            "r" => game.rotate(),
            "random" => game.randomize_setup(rng)?,
            _ => match line.parse::<Coordinate>() {
                Ok(origin) => {
                    if let Err(e) = game.place_next(origin) {
                        println!("Invalid placement: {}", e);
                    }
                }
                Err(e) => println!("{}", e),
            },
        }
    }
    print_board("FLEET DEPLOYMENT", &game.setup_board().view(true));
    println!("All ships ready!");
    Ok(())
}

fn read_command() -> anyhow::Result<Command> {
    loop {
        let line = prompt("Your target (e.g. B7), 'reset' or 'quit': ")?;
        match line.to_ascii_lowercase().as_str() {
            "quit" | "q" => return Ok(Command::Quit),
            "reset" => return Ok(Command::Reset),
            _ => match line.parse::<Coordinate>() {
                Ok(target) => return Ok(Command::Fire(target)),
                Err(e) => println!("{}", e),
            },
        }
    }
}
