pub mod tabular;

pub use tabular::{MonteCarloQAgent, MonteCarloVAgent};

/// Outcome of a single episode run by an agent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpisodeSummary {
    /// The episode number, starting at 1
    pub episode: u32,
    /// Number of transitions taken
    pub steps: usize,
    /// Undiscounted sum of rewards
    pub total_reward: f64,
    /// Epsilon at the last action selection of the episode
    pub epsilon: f64,
}
