use burn::tensor::{backend::Backend, Tensor};

use super::observation::create_observation;
use crate::error::GameResult;
use crate::game::{Action, GameConfig, GameEngine, GameState, StepResult};

/// Maze environment for reinforcement learning
///
/// Wraps the game engine and provides:
/// - The one-hot step contract: action vector in, (reward, done, score) out
/// - Tensor observations (3-channel grid)
/// - Discrete action indices (0: Right, 1: Left, 2: Up, 3: Down)
pub struct MazeEnvironment<B: Backend> {
    engine: GameEngine,
    state: GameState,
    device: B::Device,
}

impl<B: Backend> MazeEnvironment<B> {
    /// Create a new maze environment with a freshly generated episode
    pub fn new(config: GameConfig, device: B::Device) -> GameResult<Self> {
        let mut engine = GameEngine::new(config)?;
        let state = engine.reset()?;
        Ok(Self {
            engine,
            state,
            device,
        })
    }

    /// Start a new episode with a new maze and return the initial observation
    ///
    /// Returns: Tensor<B, 3> with shape [3, height, width]
    pub fn reset(&mut self) -> GameResult<Tensor<B, 3>> {
        self.state = self.engine.reset()?;
        Ok(self.get_observation())
    }

    /// Step with a one-hot action vector ordered right, left, up, down
    ///
    /// Returns: (reward, done, score)
    pub fn play_step(&mut self, action: &[f32]) -> GameResult<(f32, bool, f32)> {
        let action = Action::from_one_hot(action)?;
        let result = self.apply(action);
        Ok((result.reward, result.terminated(), result.score))
    }

    /// Step with a discrete action index; indices above 3 stay in place
    ///
    /// Returns: (observation, reward, done)
    pub fn step(&mut self, action_idx: usize) -> (Tensor<B, 3>, f32, bool) {
        let result = self.apply(Action::from_index(action_idx));
        let observation = self.get_observation();
        (observation, result.reward, result.terminated())
    }

    fn apply(&mut self, action: Action) -> StepResult {
        self.engine.step(&mut self.state, action)
    }

    /// Get current observation without stepping
    pub fn get_observation(&self) -> Tensor<B, 3> {
        create_observation(&self.state, &self.device)
    }

    pub fn config(&self) -> &GameConfig {
        self.engine.config()
    }

    /// Get the device used by this environment
    pub fn device(&self) -> &B::Device {
        &self.device
    }

    /// Get reference to current game state
    pub fn state(&self) -> &GameState {
        &self.state
    }
}
