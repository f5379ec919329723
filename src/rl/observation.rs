use burn::tensor::{backend::Backend, Tensor, TensorData};

use crate::game::{GameState, Position};

/// Number of observation channels
pub const OBSERVATION_CHANNELS: usize = 3;

/// Create a 3-channel observation tensor from game state
///
/// Channels:
/// - 0: Walls (1.0 at wall cells, border included)
/// - 1: Player (1.0 at the player position)
/// - 2: Goal (1.0 at the goal position)
///
/// Returns: Tensor<B, 3> with shape [3, height, width]
pub fn create_observation<B: Backend>(state: &GameState, device: &B::Device) -> Tensor<B, 3> {
    let walls_channel = create_walls_channel(state, device);
    let player_channel = create_marker_channel(state, state.player, device);
    let goal_channel = create_marker_channel(state, state.goal, device);

    Tensor::stack(vec![walls_channel, player_channel, goal_channel], 0)
}

fn create_walls_channel<B: Backend>(state: &GameState, device: &B::Device) -> Tensor<B, 2> {
    let (width, height) = (state.grid.width(), state.grid.height());
    let mut data = Vec::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            let wall = state.grid.is_wall(Position::new(x as i32, y as i32));
            data.push(if wall { 1.0f32 } else { 0.0 });
        }
    }

    let tensor_data = TensorData::new(data, [height, width]);

    Tensor::<B, 2>::from_data(tensor_data, device)
}

/// Channel with a single 1.0 at `pos`
fn create_marker_channel<B: Backend>(
    state: &GameState,
    pos: Position,
    device: &B::Device,
) -> Tensor<B, 2> {
    let (width, height) = (state.grid.width(), state.grid.height());
    let mut data = vec![0.0f32; height * width];

    let idx = (pos.y as usize) * width + (pos.x as usize);
    data[idx] = 1.0;

    let tensor_data = TensorData::new(data, [height, width]);

    Tensor::<B, 2>::from_data(tensor_data, device)
}
