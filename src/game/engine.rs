use rand::{rngs::StdRng, SeedableRng};
use std::time::Duration;
use tracing::debug;

use super::{
    action::{Action, Direction},
    config::{GameConfig, Ruleset},
    grid::Grid,
    reward::{display_score, shaped_reward},
    state::{BlockReason, EpisodeEnd, GameState, Position},
};
use crate::error::{GameError, GameResult};

/// Outcome of a single move attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    Moved(Position),
    Blocked(BlockReason),
}

/// Move one cell in `direction` unless the target is a wall or off the grid
///
/// A blocked move leaves `position` untouched.
pub fn try_move(grid: &Grid, position: &mut Position, direction: Direction) -> MoveResult {
    let candidate = position.moved_in_direction(direction);

    if !grid.is_in_bounds(candidate) {
        return MoveResult::Blocked(BlockReason::OutOfBounds);
    }
    if grid.is_wall(candidate) {
        return MoveResult::Blocked(BlockReason::Wall);
    }

    *position = candidate;
    MoveResult::Moved(candidate)
}

/// Where the episode stands after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// Nothing happened that matters for termination
    Continue,
    /// The move was rejected but the episode goes on
    Failed(BlockReason),
    /// The episode is over
    Terminal(EpisodeEnd),
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Reward for this step
    pub reward: f32,
    /// Score after this step
    pub score: f32,
    pub status: StepStatus,
}

impl StepResult {
    /// Whether the game has terminated
    pub fn terminated(&self) -> bool {
        matches!(self.status, StepStatus::Terminal(_))
    }
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> GameResult<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Generate a fresh maze and place the player and goal
    pub fn reset(&mut self) -> GameResult<GameState> {
        let grid = Grid::generate(
            self.config.grid_width,
            self.config.grid_height,
            self.config.wall_probability,
            &mut self.rng,
        )?;

        let attempts = self.config.max_sampling_attempts;
        let player = grid.sample_open_cell(&mut self.rng, attempts, &[])?;
        let goal = match grid.sample_open_cell(&mut self.rng, attempts, &[player]) {
            Ok(goal) => goal,
            // The player's cell is the only open one
            Err(GameError::NoOpenCell) => player,
            Err(err) => return Err(err),
        };

        let mut state = GameState::new(grid, player, goal)?;
        if self.config.ruleset == Ruleset::Human {
            state.score = self.config.time_limit_secs as f32;
        }

        debug!(
            player = ?state.player,
            goal = ?state.goal,
            distance = state.initial_distance,
            "episode reset"
        );
        Ok(state)
    }

    /// Simulated time after `steps` ticks
    fn elapsed_after(&self, steps: u32) -> Duration {
        let nanos = steps as u64 * 1_000_000_000 / self.config.tick_rate as u64;
        Duration::from_nanos(nanos)
    }

    /// Execute one step, advancing the simulated clock by one tick
    pub fn step(&mut self, state: &mut GameState, action: Action) -> StepResult {
        let elapsed = self.elapsed_after(state.steps + 1);
        self.step_at(state, action, elapsed)
    }

    /// Execute one step with an externally measured elapsed time
    ///
    /// Termination is checked in a fixed order: blocked move, goal, timeout.
    pub fn step_at(&mut self, state: &mut GameState, action: Action, elapsed: Duration) -> StepResult {
        if let Some(end) = state.outcome {
            return StepResult {
                reward: 0.0,
                score: state.score,
                status: StepStatus::Terminal(end),
            };
        }

        state.steps += 1;
        state.elapsed = elapsed;

        // A player already standing on the goal finishes before moving
        let blocked = match action {
            _ if state.at_goal() => None,
            Action::Move(direction) => match try_move(&state.grid, &mut state.player, direction) {
                MoveResult::Moved(_) => None,
                MoveResult::Blocked(reason) => Some(reason),
            },
            Action::Stay => None,
        };

        let timed_out = state.elapsed >= self.config.time_limit();
        let result = match self.config.ruleset {
            Ruleset::Human => self.apply_human_rules(state, blocked, timed_out),
            Ruleset::Agent => self.apply_agent_rules(state, blocked, timed_out),
        };

        if let StepStatus::Terminal(end) = result.status {
            state.outcome = Some(end);
            debug!(
                ?end,
                steps = state.steps,
                score = state.score,
                "episode finished"
            );
        }
        result
    }

    fn apply_human_rules(
        &self,
        state: &mut GameState,
        blocked: Option<BlockReason>,
        timed_out: bool,
    ) -> StepResult {
        let remaining = state.remaining_secs(self.config.time_limit()) as f32;

        let (score, status) = if let Some(reason) = blocked {
            (0.0, StepStatus::Terminal(EpisodeEnd::Collision(reason)))
        } else if state.at_goal() {
            (remaining, StepStatus::Terminal(EpisodeEnd::ReachedGoal))
        } else if timed_out {
            (0.0, StepStatus::Terminal(EpisodeEnd::TimeExpired))
        } else {
            (remaining, StepStatus::Continue)
        };

        state.score = score;
        let reward = match status {
            StepStatus::Terminal(_) => score,
            _ => 0.0,
        };
        StepResult {
            reward,
            score,
            status,
        }
    }

    fn apply_agent_rules(
        &self,
        state: &mut GameState,
        blocked: Option<BlockReason>,
        timed_out: bool,
    ) -> StepResult {
        let shaped = shaped_reward(
            state.player,
            state.goal,
            state.initial_distance,
            self.config.shaping_scale,
        );
        state.score = display_score(shaped);

        let (reward, mut status) = if let Some(reason) = blocked {
            (self.config.illegal_move_penalty, StepStatus::Failed(reason))
        } else if state.at_goal() {
            (
                self.config.goal_reward,
                StepStatus::Terminal(EpisodeEnd::ReachedGoal),
            )
        } else {
            (shaped, StepStatus::Continue)
        };

        if timed_out && !matches!(status, StepStatus::Terminal(_)) {
            status = StepStatus::Terminal(EpisodeEnd::TimeExpired);
        }

        StepResult {
            reward,
            score: state.score,
            status,
        }
    }
}
