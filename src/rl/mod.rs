//! Reinforcement learning interface for the maze game
//!
//! Provides:
//! - The one-hot step contract over the game engine
//! - 3-channel grid observations (walls, player, goal)
//! - Simple built-in policies for driving episodes

pub mod backend;
pub mod environment;
pub mod observation;
pub mod policy;

pub use backend::{default_device, DefaultBackend};
pub use environment::MazeEnvironment;
pub use observation::{create_observation, OBSERVATION_CHANNELS};
pub use policy::{GreedyPolicy, Policy, RandomPolicy};
