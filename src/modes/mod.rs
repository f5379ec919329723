pub mod rollout;

pub use rollout::{EpisodeSummary, PolicyKind, RolloutConfig, RolloutMode};
