use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

use crate::error::{GameError, GameResult};

/// Number of entries in a one-hot action vector
pub const ACTION_DIM: usize = 4;

/// Direction the player can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Directions in one-hot slot order: right, left, up, down
    pub const ALL: [Direction; ACTION_DIM] = [
        Direction::Right,
        Direction::Left,
        Direction::Up,
        Direction::Down,
    ];

    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Slot of this direction in a one-hot action vector
    pub fn index(&self) -> usize {
        match self {
            Direction::Right => 0,
            Direction::Left => 1,
            Direction::Up => 2,
            Direction::Down => 3,
        }
    }
}

impl Distribution<Direction> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Direction {
        Direction::ALL[rng.gen_range(0..ACTION_DIM)]
    }
}

/// Action that can be taken in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Try to move one cell in a direction
    Move(Direction),
    /// Stay in place (an action vector that names no direction)
    Stay,
}

impl Action {
    /// Decode a one-hot action vector ordered right, left, up, down
    ///
    /// Anything of the right length that is not exactly one-hot decodes to
    /// `Stay`.
    pub fn from_one_hot(values: &[f32]) -> GameResult<Self> {
        if values.len() != ACTION_DIM {
            return Err(GameError::ActionLength(values.len()));
        }

        let mut hot = None;
        for (idx, &value) in values.iter().enumerate() {
            if value == 1.0 {
                if hot.is_some() {
                    return Ok(Action::Stay);
                }
                hot = Some(idx);
            } else if value != 0.0 {
                return Ok(Action::Stay);
            }
        }

        Ok(hot.map_or(Action::Stay, Action::from_index))
    }

    /// Convert a discrete action index to an action
    ///
    /// - 0 → Right
    /// - 1 → Left
    /// - 2 → Up
    /// - 3 → Down
    /// - other → Stay
    pub fn from_index(idx: usize) -> Self {
        Direction::ALL
            .get(idx)
            .copied()
            .map_or(Action::Stay, Action::Move)
    }

    /// Encode as a one-hot vector; `Stay` is all zeros
    pub fn to_one_hot(&self) -> [f32; ACTION_DIM] {
        let mut values = [0.0; ACTION_DIM];
        if let Action::Move(direction) = self {
            values[direction.index()] = 1.0;
        }
        values
    }
}

impl From<Direction> for Action {
    fn from(direction: Direction) -> Self {
        Action::Move(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn test_one_hot_order() {
        assert_eq!(
            Action::from_one_hot(&[1.0, 0.0, 0.0, 0.0]).unwrap(),
            Action::Move(Direction::Right)
        );
        assert_eq!(
            Action::from_one_hot(&[0.0, 1.0, 0.0, 0.0]).unwrap(),
            Action::Move(Direction::Left)
        );
        assert_eq!(
            Action::from_one_hot(&[0.0, 0.0, 1.0, 0.0]).unwrap(),
            Action::Move(Direction::Up)
        );
        assert_eq!(
            Action::from_one_hot(&[0.0, 0.0, 0.0, 1.0]).unwrap(),
            Action::Move(Direction::Down)
        );
    }

    #[test]
    fn test_not_one_hot_is_stay() {
        assert_eq!(Action::from_one_hot(&[0.0; 4]).unwrap(), Action::Stay);
        assert_eq!(
            Action::from_one_hot(&[1.0, 1.0, 0.0, 0.0]).unwrap(),
            Action::Stay
        );
        assert_eq!(
            Action::from_one_hot(&[0.5, 0.0, 0.0, 0.0]).unwrap(),
            Action::Stay
        );
    }

    #[test]
    fn test_wrong_length_is_error() {
        assert_eq!(
            Action::from_one_hot(&[1.0, 0.0, 0.0]),
            Err(GameError::ActionLength(3))
        );
        assert_eq!(
            Action::from_one_hot(&[0.0; 5]),
            Err(GameError::ActionLength(5))
        );
    }

    #[test]
    fn test_index_mapping() {
        assert_eq!(Action::from_index(0), Action::Move(Direction::Right));
        assert_eq!(Action::from_index(1), Action::Move(Direction::Left));
        assert_eq!(Action::from_index(2), Action::Move(Direction::Up));
        assert_eq!(Action::from_index(3), Action::Move(Direction::Down));
        assert_eq!(Action::from_index(4), Action::Stay);
        assert_eq!(Action::from_index(999), Action::Stay);
    }

    #[test]
    fn test_to_one_hot_matches_decoder() {
        for direction in Direction::ALL {
            let encoded = Action::Move(direction).to_one_hot();
            assert_eq!(
                Action::from_one_hot(&encoded).unwrap(),
                Action::Move(direction)
            );
        }
        assert_eq!(Action::Stay.to_one_hot(), [0.0; 4]);
    }

    #[test]
    fn test_random_direction_covers_all() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; ACTION_DIM];
        for _ in 0..200 {
            let direction: Direction = rng.gen();
            seen[direction.index()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
