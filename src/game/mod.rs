//! Core maze game logic
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! It backs both the human ruleset and the agent environment.

pub mod action;
pub mod config;
pub mod engine;
pub mod grid;
pub mod reward;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction, ACTION_DIM};
pub use config::{GameConfig, Ruleset};
pub use engine::{try_move, GameEngine, MoveResult, StepResult, StepStatus};
pub use grid::{Cell, Grid};
pub use reward::{display_score, shaped_reward};
pub use state::{BlockReason, EpisodeEnd, GameState, Position};
