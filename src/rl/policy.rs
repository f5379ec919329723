use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::game::{Action, Direction, GameState};

/// Something that picks an action for the current state
pub trait Policy {
    fn act(&mut self, state: &GameState) -> Action;

    fn name(&self) -> &'static str;
}

/// Uniformly random direction every step
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }
}

impl Policy for RandomPolicy {
    fn act(&mut self, _state: &GameState) -> Action {
        Action::Move(self.rng.gen::<Direction>())
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

/// Steps to the open neighbour closest to the goal
///
/// Ties go to the earlier direction in one-hot order. Without any open
/// neighbour the policy stays put. It can get stuck behind walls.
#[derive(Debug, Default)]
pub struct GreedyPolicy;

impl Policy for GreedyPolicy {
    fn act(&mut self, state: &GameState) -> Action {
        let mut best: Option<(Direction, f32)> = None;

        for direction in Direction::ALL {
            let next = state.player.moved_in_direction(direction);
            if !state.grid.is_open(next) {
                continue;
            }
            let distance = next.distance_to(state.goal);
            if best.map_or(true, |(_, d)| distance < d) {
                best = Some((direction, distance));
            }
        }

        best.map_or(Action::Stay, |(direction, _)| Action::Move(direction))
    }

    fn name(&self) -> &'static str {
        "greedy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Grid, Position};

    fn state_in(rows: &[&str], player: Position, goal: Position) -> GameState {
        GameState::new(Grid::from_rows(rows).unwrap(), player, goal).unwrap()
    }

    #[test]
    fn test_random_policy_is_reproducible() {
        let state = state_in(&["#####", "#   #", "#####"], Position::new(1, 1), Position::new(3, 1));
        let mut a = RandomPolicy::new(Some(9));
        let mut b = RandomPolicy::new(Some(9));

        for _ in 0..20 {
            let action = a.act(&state);
            assert!(matches!(action, Action::Move(_)));
            assert_eq!(action, b.act(&state));
        }
    }

    #[test]
    fn test_greedy_moves_toward_goal() {
        let state = state_in(
            &["######", "#    #", "#    #", "######"],
            Position::new(1, 1),
            Position::new(4, 1),
        );
        assert_eq!(GreedyPolicy.act(&state), Action::Move(Direction::Right));

        let state = state_in(
            &["######", "#    #", "#    #", "######"],
            Position::new(2, 1),
            Position::new(2, 2),
        );
        assert_eq!(GreedyPolicy.act(&state), Action::Move(Direction::Down));
    }

    #[test]
    fn test_greedy_avoids_walls() {
        // Goal is straight right but (2, 1) is a wall
        let state = state_in(
            &["######", "# #  #", "#    #", "######"],
            Position::new(1, 1),
            Position::new(4, 1),
        );
        assert_eq!(GreedyPolicy.act(&state), Action::Move(Direction::Down));
    }

    #[test]
    fn test_greedy_stays_when_boxed_in() {
        let state = state_in(
            &["#####", "# # #", "#####"],
            Position::new(1, 1),
            Position::new(3, 1),
        );
        assert_eq!(GreedyPolicy.act(&state), Action::Stay);
    }
}
