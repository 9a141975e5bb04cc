use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use minimax_connect_four::ai::{Agent, MinimaxAgent, RandomAgent};
use minimax_connect_four::config::AppConfig;
use minimax_connect_four::game::GameOutcome;
use minimax_connect_four::session::GameSession;

/// Play a headless Connect Four match between two computer players.
#[derive(Parser)]
#[command(
    name = "minimax-connect-four",
    about = "Connect Four with a minimax opponent"
)]
struct Cli {
    /// Agent playing Red: minimax or random
    #[arg(long, default_value = "minimax")]
    red: String,

    /// Agent playing Yellow: minimax or random
    #[arg(long, default_value = "minimax")]
    yellow: String,

    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override search depth in plies
    #[arg(long)]
    depth: Option<usize>,

    /// Seed the agents for a reproducible match
    #[arg(long)]
    seed: Option<u64>,

    /// Only print the final outcome
    #[arg(long)]
    quiet: bool,
}

fn build_agent(kind: &str, config: &AppConfig) -> Result<Box<dyn Agent>> {
    match kind {
        "minimax" => Ok(match config.search.seed {
            Some(seed) => Box::new(MinimaxAgent::with_seed(config.search.depth, seed)),
            None => Box::new(MinimaxAgent::new(config.search.depth)),
        }),
        "random" => Ok(match config.search.seed {
            Some(seed) => Box::new(RandomAgent::with_seed(seed)),
            None => Box::new(RandomAgent::new()),
        }),
        other => bail!("unknown agent '{}' (expected 'minimax' or 'random')", other),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    if let Some(seed) = cli.seed {
        config.search.seed = Some(seed);
    }
    config.validate()?;

    let red = build_agent(&cli.red, &config)?;
    let yellow = build_agent(&cli.yellow, &config)?;

    println!(
        "{} (Red) vs {} (Yellow), search depth {}",
        red.name(),
        yellow.name(),
        config.search.depth
    );

    let mut session = GameSession::new(red, yellow, config.session.starting_player);
    println!("{} moves first", session.state().current_player().name());

    while !session.is_over() {
        let record = session.step()?;

        if !cli.quiet {
            println!("{} plays column {}", record.player.name(), record.column);
            if let Some(decision) = &record.decision {
                let trace: Vec<String> =
                    decision.trace.iter().map(|v| format!("{v:.2}")).collect();
                println!(
                    "  value {:.2}, column trace [{}]",
                    decision.value,
                    trace.join(", ")
                );
            }
            println!("{}", session.state().board());
        }
    }

    match session.state().outcome() {
        Some(GameOutcome::Winner(player)) => println!("{} wins!", player.name()),
        Some(GameOutcome::Draw) => println!("It's a draw!"),
        None => unreachable!("loop exits only on a terminal state"),
    }

    Ok(())
}
