use std::time::Duration;

use super::action::Direction;
use super::grid::Grid;
use crate::error::{GameError, GameResult};

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    /// Euclidean distance between cell coordinates
    pub fn distance_to(&self, other: Position) -> f32 {
        let dx = (self.x - other.x) as f32;
        let dy = (self.y - other.y) as f32;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Why a move was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    /// Target cell is a wall
    Wall,
    /// Target cell is outside the grid
    OutOfBounds,
}

/// How an episode ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpisodeEnd {
    /// Ran into a wall or the edge (human ruleset only)
    Collision(BlockReason),
    ReachedGoal,
    TimeExpired,
}

/// Complete game state for one episode
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub grid: Grid,
    pub player: Position,
    pub goal: Position,
    /// Distance from the starting position to the goal
    pub initial_distance: f32,
    pub steps: u32,
    /// Simulated time since the episode started
    pub elapsed: Duration,
    pub score: f32,
    pub outcome: Option<EpisodeEnd>,
}

impl GameState {
    /// Create a new game state; both player and goal must be open cells
    pub fn new(grid: Grid, player: Position, goal: Position) -> GameResult<Self> {
        for (role, pos) in [("player", player), ("goal", goal)] {
            if !grid.is_open(pos) {
                return Err(GameError::BlockedPlacement {
                    role,
                    x: pos.x,
                    y: pos.y,
                });
            }
        }

        Ok(Self {
            initial_distance: player.distance_to(goal),
            grid,
            player,
            goal,
            steps: 0,
            elapsed: Duration::ZERO,
            score: 0.0,
            outcome: None,
        })
    }

    pub fn is_done(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn at_goal(&self) -> bool {
        self.player == self.goal
    }

    pub fn distance_to_goal(&self) -> f32 {
        self.player.distance_to(self.goal)
    }

    /// Whole seconds left before `limit`, counting elapsed time rounded down
    pub fn remaining_secs(&self, limit: Duration) -> u64 {
        limit.as_secs().saturating_sub(self.elapsed.as_secs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_room() -> Grid {
        Grid::bordered(8, 7).unwrap()
    }

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_in_direction(Direction::Down), Position::new(5, 6));
        assert_eq!(pos.moved_in_direction(Direction::Up), Position::new(5, 4));
    }

    #[test]
    fn test_distance() {
        let a = Position::new(1, 1);
        assert_eq!(a.distance_to(a), 0.0);
        assert_eq!(a.distance_to(Position::new(4, 5)), 5.0);
        assert_eq!(Position::new(4, 5).distance_to(a), 5.0);
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new(open_room(), Position::new(1, 1), Position::new(4, 5))
            .unwrap();
        assert_eq!(state.steps, 0);
        assert_eq!(state.elapsed, Duration::ZERO);
        assert_eq!(state.initial_distance, 5.0);
        assert!(!state.is_done());
        assert!(!state.at_goal());
    }

    #[test]
    fn test_placement_on_wall_rejected() {
        let result = GameState::new(open_room(), Position::new(0, 0), Position::new(2, 2));
        assert_eq!(
            result,
            Err(GameError::BlockedPlacement {
                role: "player",
                x: 0,
                y: 0
            })
        );

        let result = GameState::new(open_room(), Position::new(2, 2), Position::new(9, 9));
        assert_eq!(
            result,
            Err(GameError::BlockedPlacement {
                role: "goal",
                x: 9,
                y: 9
            })
        );
    }

    #[test]
    fn test_remaining_secs() {
        let mut state =
            GameState::new(open_room(), Position::new(1, 1), Position::new(2, 2)).unwrap();
        let limit = Duration::from_secs(10);
        assert_eq!(state.remaining_secs(limit), 10);

        state.elapsed = Duration::from_millis(3900);
        assert_eq!(state.remaining_secs(limit), 7);

        state.elapsed = Duration::from_secs(12);
        assert_eq!(state.remaining_secs(limit), 0);
    }
}
