//! Command-line front end: play one game, or a batch, and report it.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sagids::core::{parse_fraction, GameRng};
use sagids::game::{play_from, run_batch, setup, NullObserver, TracingObserver};
use sagids::{EmptyZonePolicy, Fraction, GameConfig, GameStatus};

#[derive(Debug, Parser)]
#[command(name = "sagids", version, about = "Play the sectored grid value game")]
struct Cli {
    /// JSON configuration file; flags override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of markers
    #[arg(long)]
    sectors: Option<usize>,

    /// Regions per sector
    #[arg(long)]
    regions: Option<usize>,

    /// Maximum number of turns
    #[arg(long)]
    turns: Option<u64>,

    /// Winning total, e.g. 3/16
    #[arg(long, value_parser = parse_fraction_arg)]
    goal: Option<Fraction>,

    /// Allowed starting values, e.g. 1/9,2/9,4/9
    #[arg(long, value_delimiter = ',', value_parser = parse_fraction_arg)]
    values: Option<Vec<Fraction>>,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Play this many games and print a summary
    #[arg(long)]
    games: Option<usize>,

    /// Print the marked grid as JSON before playing (single game only)
    #[arg(long, conflicts_with = "games")]
    dump_grid: bool,

    /// Abort when a marker has no legal move instead of passing
    #[arg(long)]
    fail_on_empty_zone: bool,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn parse_fraction_arg(text: &str) -> Result<Fraction, String> {
    parse_fraction(text).ok_or_else(|| format!("not a fraction: {text:?}"))
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                serde_json::from_str::<GameConfig>(&text).with_context(|| format!("parsing {}", path.display()))?
            }
            None => GameConfig::default(),
        };

        if let Some(n) = self.sectors {
            config.n_sectors = n;
        }
        if let Some(n) = self.regions {
            config.n_regions = n;
        }
        if let Some(n) = self.turns {
            config.turn_limit = n;
        }
        if let Some(goal) = self.goal {
            config.goal = goal;
        }
        if let Some(values) = &self.values {
            config.allowed_values = values.clone();
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if self.fail_on_empty_zone {
            config.empty_zone_policy = EmptyZonePolicy::Fail;
        }

        config.validate()?;
        Ok(config)
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.game_config()?;
    info!(
        sectors = config.n_sectors,
        size = config.board_size(),
        goal = %config.goal,
        seed = config.seed,
        "starting"
    );

    match cli.games {
        Some(0) => bail!("--games must be at least 1"),
        Some(games) => {
            let summary = run_batch(&config, games, &mut NullObserver)?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        None => {
            let rng = GameRng::new(config.seed);
            let grid = setup(&config, &rng)?;
            if cli.dump_grid {
                println!("{}", serde_json::to_string_pretty(&grid.snapshot())?);
            }
            let outcome = play_from(grid, &config, &rng, &mut TracingObserver)?;
            report(outcome.status, outcome.move_count());
        }
    }

    Ok(())
}

fn report(status: GameStatus, moves: usize) {
    match status {
        GameStatus::Won { winner, transit } => {
            info!(%winner, %transit, "Game ends after {moves} moves.");
        }
        _ => info!("Game ends after {moves} moves without a winner."),
    }
}
