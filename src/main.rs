use std::io::{self, BufRead, Write};
use std::sync::Arc;

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use seabattle::{
    dispatch, generate_with, init_logging, render, EngineConfig, InMemoryStore, NullSink,
    PlayerId, Reveal, SessionManager,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
enum Commands {
    /// Play a game in the terminal, typing chat commands (start, A1, surrender).
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible boards (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1)]
        player: u64,
        #[arg(long, help = "Show intact ships on the board")]
        reveal: bool,
    },
    /// Print a freshly generated board.
    Generate {
        #[arg(long, help = "Fix RNG seed for reproducible boards (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Print the storage form (10 rows of cell ordinals) as JSON")]
        json: bool,
    },
}

fn config_with(seed: Option<u64>) -> EngineConfig {
    let config = EngineConfig::from_env();
    match seed {
        Some(s) => config.with_seed(s),
        None => config,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            player,
            reveal,
        } => {
            let config = config_with(seed);
            if let Some(s) = config.seed {
                println!("Using fixed seed: {} (boards will be reproducible)", s);
            }
            let manager =
                SessionManager::new(Arc::new(InMemoryStore::new()), Arc::new(NullSink), config);
            let player = PlayerId(player);
            let view = if reveal { Reveal::All } else { Reveal::Hidden };
            println!("Type \"start\" to begin, a coordinate like A1 to fire, \"surrender\" to quit.");

            let stdin = io::stdin();
            loop {
                print!("> ");
                io::stdout().flush()?;
                let mut line = String::new();
                if stdin.lock().read_line(&mut line)? == 0 {
                    break;
                }
                match dispatch(&manager, player, &line).await {
                    Ok(Some(reply)) => println!("{}", reply),
                    Ok(None) => println!("Send \"start\" to play."),
                    Err(e) => {
                        eprintln!("Game error: {}", e);
                        continue;
                    }
                }
                let shown = match manager.active_session(player).await? {
                    Some(session) => Some(session),
                    None => manager.last_finished(player).await?,
                };
                if let Some(session) = shown {
                    print!("{}", render(session.grid(), view));
                    println!("    {}", session.summary());
                }
            }
        }
        Commands::Generate { seed, json } => {
            let config = config_with(seed);
            let mut rng = match config.seed {
                Some(s) => SmallRng::seed_from_u64(s),
                None => {
                    let mut seed_rng = rand::rng();
                    SmallRng::from_rng(&mut seed_rng)
                }
            };
            let grid = generate_with(&mut rng, &config).map_err(|e| anyhow::anyhow!(e))?;
            if json {
                println!("{}", serde_json::to_string(&grid)?);
            } else {
                print!("{}", render(&grid, Reveal::All));
            }
        }
    }
    Ok(())
}
