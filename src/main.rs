use anyhow::Result;
use clap::{Parser, ValueEnum};
use maze_runner::game::GameConfig;
use maze_runner::modes::{PolicyKind, RolloutConfig, RolloutMode};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "maze_runner")]
#[command(version, about = "Grid maze game with a reinforcement-learning step interface")]
struct Cli {
    /// Rules to play by
    #[arg(long, default_value = "agent")]
    variant: Variant,

    /// Policy that picks the moves
    #[arg(long, default_value = "random")]
    policy: Policy,

    /// Number of episodes to play
    #[arg(long, default_value = "10")]
    episodes: usize,

    /// Grid width in cells
    #[arg(long, default_value = "32")]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value = "24")]
    height: usize,

    /// Probability that an interior cell is a wall
    #[arg(long, default_value = "0.3")]
    wall_probability: f64,

    /// Seed for reproducible mazes and policies
    #[arg(long)]
    seed: Option<u64>,

    /// Log progress every N episodes
    #[arg(long, default_value = "10")]
    log_frequency: usize,

    /// JSON game config; replaces the variant, grid and wall flags
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log every episode
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, ValueEnum)]
enum Variant {
    /// Arcade rules: walls end the game, score is the time left
    Human,
    /// Shaped reward with a penalty for illegal moves
    Agent,
}

#[derive(Clone, ValueEnum)]
enum Policy {
    /// Uniformly random direction
    Random,
    /// Step to the neighbour closest to the goal
    Greedy,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    let mut game_config = match &cli.config {
        Some(path) => GameConfig::from_json_file(path)?,
        None => {
            let base = match cli.variant {
                Variant::Human => GameConfig::human(),
                Variant::Agent => GameConfig::agent(),
            };
            GameConfig {
                grid_width: cli.width,
                grid_height: cli.height,
                wall_probability: cli.wall_probability,
                ..base
            }
        }
    };
    if cli.seed.is_some() {
        game_config.seed = cli.seed;
    }

    let ruleset = game_config.ruleset;
    let mut rollout_config = RolloutConfig::new(cli.episodes, game_config);
    rollout_config.log_frequency = cli.log_frequency;
    rollout_config.policy = match cli.policy {
        Policy::Random => PolicyKind::Random,
        Policy::Greedy => PolicyKind::Greedy,
    };

    let mut mode = RolloutMode::new(rollout_config)?;
    let stats = mode.run()?;

    println!("{:?}: {}", ruleset, stats.format_summary());

    Ok(())
}
