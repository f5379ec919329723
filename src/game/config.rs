use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::{GameError, GameResult};

/// Which set of scoring and termination rules an episode follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ruleset {
    /// Arcade rules: a wall ends the game, the score is the time left
    Human,
    /// Shaped reward for an external agent; walls only cost a penalty
    Agent,
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the maze in cells
    pub grid_width: usize,
    /// Height of the maze in cells
    pub grid_height: usize,
    /// Probability that an interior cell is a wall
    pub wall_probability: f64,
    pub ruleset: Ruleset,
    /// Episode length limit in seconds of simulated time
    pub time_limit_secs: u64,
    /// Simulation ticks per second; one step is one tick
    pub tick_rate: u32,
    /// Random draws before open-cell sampling falls back to a scan
    pub max_sampling_attempts: usize,
    /// Fixed RNG seed for reproducible mazes
    pub seed: Option<u64>,

    // Rewards (agent ruleset)
    /// Reward for reaching the goal
    pub goal_reward: f32,
    /// Reward for a move into a wall or off the grid
    pub illegal_move_penalty: f32,
    /// Maximum of the distance-shaped reward
    pub shaping_scale: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 32,
            grid_height: 24,
            wall_probability: 0.3,
            ruleset: Ruleset::Agent,
            time_limit_secs: 15,
            tick_rate: 12,
            max_sampling_attempts: 1000,
            seed: None,
            goal_reward: 50.0,
            illegal_move_penalty: -5.0,
            shaping_scale: 10.0,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Agent ruleset: 15 s at 12 ticks per second
    pub fn agent() -> Self {
        Self::default()
    }

    /// Human ruleset: 10 s at 10 ticks per second
    pub fn human() -> Self {
        Self {
            ruleset: Ruleset::Human,
            time_limit_secs: 10,
            tick_rate: 10,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    pub fn with_ruleset(mut self, ruleset: Ruleset) -> Self {
        self.ruleset = ruleset;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn time_limit(&self) -> Duration {
        Duration::from_secs(self.time_limit_secs)
    }

    /// Check that the configuration can produce a playable episode
    pub fn validate(&self) -> GameResult<()> {
        if self.grid_width < 3 || self.grid_height < 3 {
            return Err(GameError::GridTooSmall {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        if !(0.0..=1.0).contains(&self.wall_probability) {
            return Err(GameError::InvalidWallProbability(self.wall_probability));
        }
        if self.tick_rate == 0 {
            return Err(GameError::InvalidTickRate);
        }
        if self.time_limit_secs == 0 {
            return Err(GameError::InvalidTimeLimit);
        }
        Ok(())
    }

    /// Load a configuration from a JSON file; missing fields take defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: GameConfig =
            serde_json::from_str(&json).context("Failed to deserialize config")?;
        config
            .validate()
            .with_context(|| format!("Invalid config in {:?}", path))?;
        Ok(config)
    }
}
