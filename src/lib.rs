//! Tabular Monte Carlo reinforcement learning on discrete grid worlds
//!
//! Agents record each episode, label every step with its discounted return once the episode
//! ends, and fold those returns into a value table (V(s) or Q(s,a)) that drives an epsilon greedy
//! policy for the next episode.

/// Implemented RL algorithms
pub mod algo;

/// Implementations of strategies for time-decaying hyperparameters
pub mod decay;

/// Environment
pub mod env;

/// Error types
pub mod error;

/// Exploration policies
pub mod exploration;

/// Grid geometry shared by agents and environments
pub mod grid;

/// Episode memory and return calculation
pub mod memory;

/// Testing environments
#[cfg(feature = "gym")]
pub mod gym;

mod util;

pub use error::{Error, Result};
