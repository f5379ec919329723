//! Maze Runner - a grid maze game with a reinforcement-learning interface
//!
//! This library provides:
//! - Core game logic: maze generation, movement, termination rules (game module)
//! - The one-hot step contract and tensor observations (rl module)
//! - Episode statistics (metrics module)
//! - Headless rollouts with built-in policies (modes module)

pub mod error;
pub mod game;
pub mod metrics;
pub mod modes;
pub mod rl;

pub use error::{GameError, GameResult};
