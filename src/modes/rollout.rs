//! Rollout mode: play episodes headlessly with a built-in policy
//!
//! Every step goes through the environment's one-hot step contract, so a
//! rollout exercises exactly what an external agent would see.
//!
//! # Example
//!
//! ```rust,no_run
//! use maze_runner::game::GameConfig;
//! use maze_runner::modes::{PolicyKind, RolloutConfig, RolloutMode};
//!
//! let mut config = RolloutConfig::new(100, GameConfig::agent());
//! config.policy = PolicyKind::Greedy;
//!
//! let mut mode = RolloutMode::new(config)?;
//! let stats = mode.run()?;
//! println!("{}", stats.format_summary());
//! # Ok::<(), anyhow::Error>(())
//! ```

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::game::{EpisodeEnd, GameConfig};
use crate::metrics::EpisodeStats;
use crate::rl::{default_device, DefaultBackend, GreedyPolicy, MazeEnvironment, Policy, RandomPolicy};

/// Built-in policies available to rollouts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    Random,
    Greedy,
}

impl PolicyKind {
    fn build(self, seed: Option<u64>) -> Box<dyn Policy> {
        match self {
            PolicyKind::Random => Box::new(RandomPolicy::new(seed)),
            PolicyKind::Greedy => Box::new(GreedyPolicy),
        }
    }
}

/// Configuration for rollout mode
#[derive(Debug, Clone)]
pub struct RolloutConfig {
    /// Number of episodes to play
    pub num_episodes: usize,

    /// Log progress every N episodes
    pub log_frequency: usize,

    /// Game configuration (grid, ruleset, rewards)
    pub game_config: GameConfig,

    pub policy: PolicyKind,
}

impl RolloutConfig {
    pub fn new(num_episodes: usize, game_config: GameConfig) -> Self {
        Self {
            num_episodes,
            log_frequency: 10,
            game_config,
            policy: PolicyKind::Random,
        }
    }
}

/// Summary of one finished episode
#[derive(Debug, Clone, PartialEq)]
pub struct EpisodeSummary {
    pub reward: f32,
    pub steps: usize,
    pub score: f32,
    pub end: EpisodeEnd,
}

pub struct RolloutMode {
    env: MazeEnvironment<DefaultBackend>,
    policy: Box<dyn Policy>,
    stats: EpisodeStats,
    config: RolloutConfig,
}

impl RolloutMode {
    pub fn new(config: RolloutConfig) -> Result<Self> {
        let env = MazeEnvironment::new(config.game_config.clone(), default_device())
            .context("Failed to create maze environment")?;
        // Offset so the policy and maze streams differ under one seed
        let policy = config
            .policy
            .build(config.game_config.seed.map(|seed| seed.wrapping_add(1)));

        Ok(Self {
            env,
            policy,
            // 100-episode rolling window
            stats: EpisodeStats::new(100),
            config,
        })
    }

    /// Play all configured episodes and return the collected statistics
    pub fn run(&mut self) -> Result<EpisodeStats> {
        self.log_header();

        for episode in 0..self.config.num_episodes {
            self.env
                .reset()
                .with_context(|| format!("Failed to reset episode {}", episode + 1))?;

            let summary = self.run_episode()?;
            debug!(
                episode = episode + 1,
                end = ?summary.end,
                steps = summary.steps,
                score = summary.score,
                "episode complete"
            );
            self.stats
                .record_episode(summary.reward, summary.steps, summary.score, summary.end);

            if self.config.log_frequency > 0 && (episode + 1) % self.config.log_frequency == 0 {
                info!(
                    "[Episode {}/{}] {}",
                    episode + 1,
                    self.config.num_episodes,
                    self.stats.format_summary()
                );
            }
        }

        info!("Rollout complete: {}", self.stats.format_summary());
        Ok(self.stats.clone())
    }

    /// Play the current episode to the end
    fn run_episode(&mut self) -> Result<EpisodeSummary> {
        let mut total_reward = 0.0;
        let mut steps = 0;

        loop {
            let action = self.policy.act(self.env.state());
            let (reward, done, score) = self
                .env
                .play_step(&action.to_one_hot())
                .context("Failed to step environment")?;

            total_reward += reward;
            steps += 1;

            if done {
                let end = self
                    .env
                    .state()
                    .outcome
                    .context("Episode reported done without an outcome")?;
                return Ok(EpisodeSummary {
                    reward: total_reward,
                    steps,
                    score,
                    end,
                });
            }
        }
    }

    pub fn stats(&self) -> &EpisodeStats {
        &self.stats
    }

    fn log_header(&self) {
        let game = &self.config.game_config;
        info!(
            episodes = self.config.num_episodes,
            policy = self.policy.name(),
            ruleset = ?game.ruleset,
            grid = %format!("{}x{}", game.grid_width, game.grid_height),
            wall_probability = game.wall_probability,
            time_limit_secs = game.time_limit_secs,
            tick_rate = game.tick_rate,
            seed = ?game.seed,
            "starting rollout"
        );
    }
}
