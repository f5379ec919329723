use super::state::Position;

/// Distance-shaped reward: `scale` at the goal, 0 at the starting distance,
/// negative further away
///
/// A zero starting distance yields the full `scale`.
pub fn shaped_reward(player: Position, goal: Position, initial_distance: f32, scale: f32) -> f32 {
    if initial_distance <= 0.0 {
        return scale;
    }
    scale * (1.0 - player.distance_to(goal) / initial_distance)
}

/// Score shown for a shaped reward: never negative, rounded to 2 decimals
pub fn display_score(reward: f32) -> f32 {
    if reward < 0.0 {
        0.0
    } else {
        (reward * 100.0).round() / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reward_at_start_and_goal() {
        let start = Position::new(1, 1);
        let goal = Position::new(4, 5);
        let total = start.distance_to(goal);

        assert!((shaped_reward(start, goal, total, 10.0)).abs() < 1e-6);
        assert_eq!(shaped_reward(goal, goal, total, 10.0), 10.0);
    }

    #[test]
    fn test_reward_halfway() {
        let goal = Position::new(0, 0);
        let reward = shaped_reward(Position::new(2, 0), goal, 4.0, 10.0);
        assert!((reward - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_reward_negative_beyond_start() {
        let goal = Position::new(0, 0);
        let reward = shaped_reward(Position::new(6, 0), goal, 4.0, 10.0);
        assert!((reward + 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_initial_distance() {
        let p = Position::new(1, 1);
        assert_eq!(shaped_reward(p, p, 0.0, 10.0), 10.0);
    }

    #[test]
    fn test_reward_strictly_decreases_with_distance() {
        let goal = Position::new(0, 0);
        let rewards: Vec<f32> = (0..10)
            .map(|x| shaped_reward(Position::new(x, 0), goal, 5.0, 10.0))
            .collect();
        for pair in rewards.windows(2) {
            assert!(pair[0] > pair[1]);
        }
    }

    #[test]
    fn test_display_score() {
        assert_eq!(display_score(-3.2), 0.0);
        assert_eq!(display_score(0.0), 0.0);
        assert_eq!(display_score(3.14159), 3.14);
        assert_eq!(display_score(10.0), 10.0);
    }
}
