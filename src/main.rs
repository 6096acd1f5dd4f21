#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::path::{Path, PathBuf};

#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use rush_hour::{
    init_logging, print_legal_moves, CliPlayer, Game, Grid, Outcome, Player, RandomPlayer,
    Scenario,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Debug)]
#[cfg(feature = "std")]
enum PlayerType {
    Human,
    Random,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a scenario interactively or let a random player shuffle it.
    Play {
        /// JSON scenario file.
        scenario: PathBuf,
        #[arg(long, value_enum, default_value_t = PlayerType::Human)]
        player: PlayerType,
        #[arg(long, help = "Fix RNG seed for reproducible random play (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Stop after this many committed moves")]
        max_moves: Option<usize>,
    },
    /// List the legal moves of a scenario's starting position.
    Moves {
        scenario: PathBuf,
        #[arg(long, help = "Print the moves as JSON")]
        json: bool,
    },
    /// Print a scenario's starting board and any entries that were dropped.
    Show { scenario: PathBuf },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            scenario,
            player,
            seed,
            max_moves,
        } => {
            let grid = load_grid(&scenario)?;
            let mut rng = if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            let mut player: Box<dyn Player> = match player {
                PlayerType::Human => {
                    println!("Welcome to Rush Hour, this is your board:");
                    Box::new(CliPlayer::stdio())
                }
                PlayerType::Random => Box::new(RandomPlayer::new()),
            };
            let mut game = Game::new(grid);
            let summary = game.run(player.as_mut(), &mut rng, max_moves);
            match summary.outcome {
                Outcome::Won(id) => println!("{} escaped in {} moves.", id, summary.moves),
                Outcome::Quit => println!("Stopped after {} moves.", summary.moves),
                Outcome::MoveLimit => {
                    println!("Move limit reached after {} moves:", summary.moves);
                    print!("{}", game.grid());
                }
            }
        }
        Commands::Moves { scenario, json } => {
            let grid = load_grid(&scenario)?;
            if json {
                let moves = grid.enumerate_legal_moves();
                println!("{}", serde_json::to_string(&moves)?);
            } else {
                print!("{}", grid);
                print_legal_moves(&mut std::io::stdout(), &grid)?;
            }
        }
        Commands::Show { scenario } => {
            let parsed = Scenario::from_path(&scenario)?;
            for (label, reason) in parsed.skipped() {
                println!("skipped {}: {}", label, reason);
            }
            let (grid, rejected) = parsed.build_grid();
            for (id, e) in rejected {
                println!("rejected {}: {}", id, e);
            }
            print!("{}", grid);
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn load_grid(path: &Path) -> anyhow::Result<Grid> {
    let scenario = Scenario::from_path(path)
        .with_context(|| format!("cannot load scenario {}", path.display()))?;
    let (grid, _rejected) = scenario.build_grid();
    Ok(grid)
}
