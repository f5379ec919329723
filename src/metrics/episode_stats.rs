//! Episode statistics for rollouts
//!
//! Tracks rewards, lengths and scores over a rolling window, plus lifetime
//! counts of how episodes ended.

use std::collections::VecDeque;

use crate::game::EpisodeEnd;

/// Episode statistics tracker with rolling averages
///
/// # Example
///
/// ```rust
/// use maze_runner::game::EpisodeEnd;
/// use maze_runner::metrics::EpisodeStats;
///
/// let mut stats = EpisodeStats::new(100);
/// stats.record_episode(55.0, 12, 10.0, EpisodeEnd::ReachedGoal);
///
/// assert_eq!(stats.total_episodes(), 1);
/// assert_eq!(stats.success_rate(), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct EpisodeStats {
    /// Episode rewards (rolling window)
    episode_rewards: VecDeque<f32>,

    /// Episode lengths in steps (rolling window)
    episode_lengths: VecDeque<usize>,

    /// Final episode scores (rolling window)
    episode_scores: VecDeque<f32>,

    total_episodes: usize,
    total_steps: usize,

    goals_reached: usize,
    collisions: usize,
    timeouts: usize,

    best_score: f32,

    /// Window size for rolling averages
    window_size: usize,
}

impl EpisodeStats {
    /// Create a new tracker keeping the last `window_size` episodes
    pub fn new(window_size: usize) -> Self {
        Self {
            episode_rewards: VecDeque::with_capacity(window_size),
            episode_lengths: VecDeque::with_capacity(window_size),
            episode_scores: VecDeque::with_capacity(window_size),
            total_episodes: 0,
            total_steps: 0,
            goals_reached: 0,
            collisions: 0,
            timeouts: 0,
            best_score: 0.0,
            window_size,
        }
    }

    /// Record the completion of an episode
    ///
    /// # Arguments
    ///
    /// * `reward` - Total reward accumulated during the episode
    /// * `length` - Number of steps taken in the episode
    /// * `score` - Final score
    /// * `end` - How the episode ended
    pub fn record_episode(&mut self, reward: f32, length: usize, score: f32, end: EpisodeEnd) {
        Self::push_deque(&mut self.episode_rewards, reward, self.window_size);
        Self::push_deque(&mut self.episode_lengths, length, self.window_size);
        Self::push_deque(&mut self.episode_scores, score, self.window_size);
        self.total_episodes += 1;
        self.total_steps += length;
        self.best_score = self.best_score.max(score);

        match end {
            EpisodeEnd::ReachedGoal => self.goals_reached += 1,
            EpisodeEnd::Collision(_) => self.collisions += 1,
            EpisodeEnd::TimeExpired => self.timeouts += 1,
        }
    }

    /// Mean episode reward over the rolling window, 0.0 when empty
    pub fn mean_episode_reward(&self) -> f32 {
        Self::mean(&self.episode_rewards)
    }

    pub fn mean_episode_length(&self) -> f32 {
        let sum: usize = self.episode_lengths.iter().sum();
        if self.episode_lengths.is_empty() {
            0.0
        } else {
            sum as f32 / self.episode_lengths.len() as f32
        }
    }

    pub fn mean_episode_score(&self) -> f32 {
        Self::mean(&self.episode_scores)
    }

    /// Fraction of all episodes that reached the goal
    pub fn success_rate(&self) -> f32 {
        if self.total_episodes == 0 {
            0.0
        } else {
            self.goals_reached as f32 / self.total_episodes as f32
        }
    }

    pub fn total_episodes(&self) -> usize {
        self.total_episodes
    }

    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    pub fn goals_reached(&self) -> usize {
        self.goals_reached
    }

    pub fn collisions(&self) -> usize {
        self.collisions
    }

    pub fn timeouts(&self) -> usize {
        self.timeouts
    }

    pub fn best_score(&self) -> f32 {
        self.best_score
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Format a summary of the current statistics
    pub fn format_summary(&self) -> String {
        format!(
            "Episodes: {} | Steps: {} | Reward: {:.2} | Score: {:.2} | Len: {:.1} | Goal: {} | Wall: {} | Timeout: {} | Success: {:.1}%",
            self.total_episodes,
            self.total_steps,
            self.mean_episode_reward(),
            self.mean_episode_score(),
            self.mean_episode_length(),
            self.goals_reached,
            self.collisions,
            self.timeouts,
            self.success_rate() * 100.0,
        )
    }

    fn mean(deque: &VecDeque<f32>) -> f32 {
        if deque.is_empty() {
            0.0
        } else {
            deque.iter().sum::<f32>() / deque.len() as f32
        }
    }

    /// Push to a deque, evicting the oldest entry past the window size
    fn push_deque<T>(deque: &mut VecDeque<T>, value: T, window_size: usize) {
        if deque.len() >= window_size {
            deque.pop_front();
        }
        deque.push_back(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::BlockReason;

    #[test]
    fn test_new() {
        let stats = EpisodeStats::new(100);
        assert_eq!(stats.window_size(), 100);
        assert_eq!(stats.total_episodes(), 0);
        assert_eq!(stats.total_steps(), 0);
    }

    #[test]
    fn test_record_episode() {
        let mut stats = EpisodeStats::new(100);
        stats.record_episode(10.0, 50, 3.5, EpisodeEnd::TimeExpired);

        assert_eq!(stats.total_episodes(), 1);
        assert_eq!(stats.total_steps(), 50);
        assert_eq!(stats.timeouts(), 1);
        assert!((stats.mean_episode_reward() - 10.0).abs() < 1e-5);
        assert!((stats.mean_episode_length() - 50.0).abs() < 1e-5);
        assert!((stats.mean_episode_score() - 3.5).abs() < 1e-5);
    }

    #[test]
    fn test_rolling_average() {
        let mut stats = EpisodeStats::new(3);

        stats.record_episode(1.0, 10, 1.0, EpisodeEnd::TimeExpired);
        stats.record_episode(2.0, 20, 2.0, EpisodeEnd::TimeExpired);
        stats.record_episode(3.0, 30, 3.0, EpisodeEnd::TimeExpired);
        assert!((stats.mean_episode_reward() - 2.0).abs() < 1e-5);

        // A 4th episode evicts the first
        stats.record_episode(4.0, 40, 4.0, EpisodeEnd::TimeExpired);

        assert_eq!(stats.total_episodes(), 4);
        assert_eq!(stats.total_steps(), 100);
        assert!((stats.mean_episode_reward() - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_outcome_counts_and_success_rate() {
        let mut stats = EpisodeStats::new(10);
        stats.record_episode(50.0, 5, 10.0, EpisodeEnd::ReachedGoal);
        stats.record_episode(0.0, 1, 0.0, EpisodeEnd::Collision(BlockReason::Wall));
        stats.record_episode(2.0, 180, 1.2, EpisodeEnd::TimeExpired);
        stats.record_episode(50.0, 9, 7.0, EpisodeEnd::ReachedGoal);

        assert_eq!(stats.goals_reached(), 2);
        assert_eq!(stats.collisions(), 1);
        assert_eq!(stats.timeouts(), 1);
        assert!((stats.success_rate() - 0.5).abs() < 1e-6);
        assert_eq!(stats.best_score(), 10.0);
    }

    #[test]
    fn test_format_summary() {
        let mut stats = EpisodeStats::new(100);
        stats.record_episode(15.5, 150, 5.0, EpisodeEnd::ReachedGoal);

        let summary = stats.format_summary();
        assert!(summary.contains("Episodes: 1"));
        assert!(summary.contains("Steps: 150"));
        assert!(summary.contains("Reward: 15.50"));
        assert!(summary.contains("Score: 5.00"));
        assert!(summary.contains("Len: 150.0"));
        assert!(summary.contains("Success: 100.0%"));
    }

    #[test]
    fn test_empty_stats() {
        let stats = EpisodeStats::new(100);

        assert_eq!(stats.mean_episode_reward(), 0.0);
        assert_eq!(stats.mean_episode_length(), 0.0);
        assert_eq!(stats.mean_episode_score(), 0.0);
        assert_eq!(stats.success_rate(), 0.0);
    }
}
