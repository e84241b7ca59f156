use rand::Rng;

use crate::decay::{self, Decay};

use super::Choice;

/// Epsilon greedy exploration policy with a time-decaying epsilon threshold
#[derive(Debug, Clone)]
pub struct EpsilonGreedy<D: Decay> {
    epsilon: D,
}

impl<D: Decay> EpsilonGreedy<D> {
    /// Initialize epsilon greedy policy with a decay strategy
    pub fn new(decay: D) -> Self {
        Self { epsilon: decay }
    }

    /// Epsilon at time `t`
    pub fn epsilon(&self, t: u32) -> f64 {
        self.epsilon.evaluate(t as f64)
    }

    /// Invoke epsilon greedy policy at time `t`, exploring with probability epsilon
    pub fn choose<R: Rng + ?Sized>(&self, t: u32, rng: &mut R) -> Choice {
        if rng.gen::<f64>() < self.epsilon(t) {
            Choice::Explore
        } else {
            Choice::Exploit
        }
    }
}

impl Default for EpsilonGreedy<decay::Constant> {
    fn default() -> Self {
        Self::new(decay::Constant::new(0.1))
    }
}

impl Default for EpsilonGreedy<decay::Reciprocal> {
    fn default() -> Self {
        Self::new(decay::Reciprocal::default())
    }
}
