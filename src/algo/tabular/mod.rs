pub mod mc_q;
pub mod mc_value;
pub mod value_table;

pub use mc_q::{MonteCarloQAgent, MonteCarloQConfig};
pub use mc_value::{MonteCarloVAgent, MonteCarloVConfig};
pub use value_table::{Entry, UpdateRule, ValueTable};

/// A trait for state and action types that can be used as keys in a [`HashMap`](std::collections::HashMap)
pub trait Hashable: Copy + Eq + std::hash::Hash {}

impl<T> Hashable for T where T: Copy + Eq + std::hash::Hash {}
