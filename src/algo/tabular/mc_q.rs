use std::num::NonZeroU32;

use log::{debug, trace};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use strum::VariantArray;

use crate::{
    algo::EpisodeSummary,
    decay::{self, Decay},
    env::Environment,
    exploration::{argmax_random_tie, Choice, EpsilonGreedy},
    grid::{GridAction, Pos},
    memory::{discounted_returns, EpisodeMemory},
    util::assert_discount,
};

use super::{UpdateRule, ValueTable};

/// Configuration for the [`MonteCarloQAgent`]
#[derive(Debug, Clone)]
pub struct MonteCarloQConfig<D: Decay> {
    /// Discount factor, in `[0, 1)`
    ///
    /// **Default**: `0.9`
    pub gamma: f64,
    /// Exploration policy, evaluated at the current episode number
    ///
    /// **Default**: a [`Reciprocal`](decay::Reciprocal) epsilon of `1 / (0.1 * episode)`
    pub exploration: EpsilonGreedy<D>,
    /// How episode returns are folded into the Q-table
    ///
    /// **Default**: [`UpdateRule::Incremental`]
    pub update_rule: UpdateRule,
    /// Actions the agent chooses between
    ///
    /// **Default**: all four [`GridAction`]s
    pub actions: Vec<GridAction>,
    /// Seed for the agent's random source, or `None` to seed from entropy
    pub seed: Option<u64>,
}

impl Default for MonteCarloQConfig<decay::Reciprocal> {
    fn default() -> Self {
        Self {
            gamma: 0.9,
            exploration: EpsilonGreedy::default(),
            update_rule: UpdateRule::Incremental,
            actions: GridAction::VARIANTS.to_vec(),
            seed: None,
        }
    }
}

/// Monte Carlo agent that learns a state-action value function Q(s,a)
///
/// Greedy actions read Q(s,a) straight from the table, so no knowledge of the grid is needed.
/// Epsilon is recomputed from the episode counter on every action selection; the counter starts
/// at 1 and advances each time an episode is folded into the table.
pub struct MonteCarloQAgent<D: Decay = decay::Reciprocal> {
    table: ValueTable<(Pos, GridAction)>,
    memory: EpisodeMemory<Pos, GridAction>,
    exploration: EpsilonGreedy<D>,
    gamma: f64,
    actions: Vec<GridAction>,
    rng: StdRng,
    episode: NonZeroU32,
    epsilon: f64,
}

impl<D: Decay> MonteCarloQAgent<D> {
    /// Initialize a new `MonteCarloQAgent`
    ///
    /// **Panics** if `gamma` is not in `[0, 1)` or if `actions` is empty
    pub fn new(config: MonteCarloQConfig<D>) -> Self {
        assert_discount(config.gamma);
        assert!(
            !config.actions.is_empty(),
            "There must be at least one action available"
        );

        Self {
            table: ValueTable::new(config.update_rule),
            memory: EpisodeMemory::new(),
            epsilon: config.exploration.epsilon(1),
            exploration: config.exploration,
            gamma: config.gamma,
            actions: config.actions,
            rng: config
                .seed
                .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64),
            episode: NonZeroU32::MIN,
        }
    }

    /// Choose an action for `state` with the epsilon greedy policy
    pub fn select_action(&mut self, state: Pos) -> GridAction {
        let t = self.episode.get();
        self.epsilon = self.exploration.epsilon(t);
        match self.exploration.choose(t, &mut self.rng) {
            Choice::Explore => {
                trace!("explore from {state:?}, epsilon {:.4}", self.epsilon);
                *self
                    .actions
                    .choose(&mut self.rng)
                    .expect("There is always at least one action available")
            }
            Choice::Exploit => {
                let values = self.candidate_values(state);
                self.actions[argmax_random_tie(&values, &mut self.rng)]
            }
        }
    }

    /// Q(state, a) for each available action, in action order
    pub fn candidate_values(&self, state: Pos) -> Vec<f64> {
        self.actions
            .iter()
            .map(|&action| self.table.value(&(state, action)))
            .collect()
    }

    /// Record the action taken in `state` and the reward received for it
    pub fn record(&mut self, state: Pos, action: GridAction, reward: f64, done: bool) {
        self.memory.record(state, action, reward, done);
    }

    /// Fold the recorded episode into the Q-table, clear the episode memory, and advance
    /// the episode counter
    ///
    /// **Returns** the number of visits that contributed to the table
    pub fn update(&mut self) -> usize {
        let labeled = discounted_returns(
            self.memory.iter().map(|s| ((s.state, s.action), s.reward)),
            self.gamma,
        );
        let contributed = self.table.update(&labeled);
        debug!(
            "episode {}: folded {contributed}/{} visits, {} state-action pairs known, epsilon {:.4}",
            self.episode,
            labeled.len(),
            self.table.len(),
            self.epsilon,
        );

        self.memory.clear();
        self.episode = self.episode.saturating_add(1);
        contributed
    }

    /// Learned value of taking `action` in `state`, 0.0 if never tried
    pub fn q_value(&self, state: Pos, action: GridAction) -> f64 {
        self.table.value(&(state, action))
    }

    pub fn table(&self) -> &ValueTable<(Pos, GridAction)> {
        &self.table
    }

    pub fn memory(&self) -> &EpisodeMemory<Pos, GridAction> {
        &self.memory
    }

    /// Epsilon used by the most recent action selection
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// The current episode number, starting at 1
    pub fn episode(&self) -> u32 {
        self.episode.get()
    }

    /// Run one episode in `env`, learning from it once it terminates
    pub fn go<E>(&mut self, env: &mut E) -> EpisodeSummary
    where
        E: Environment<State = Pos, Action = GridAction>,
    {
        let episode = self.episode.get();
        let mut steps = 0;
        let mut total_reward = 0.0;

        let mut state = env.reset();
        loop {
            let action = self.select_action(state);
            let (next_state, reward, done) = env.step(action);
            self.record(state, action, reward, done);
            steps += 1;
            total_reward += reward;

            if done {
                break;
            }
            state = next_state;
        }

        let epsilon = self.epsilon;
        self.update();

        EpisodeSummary {
            episode,
            steps,
            total_reward,
            epsilon,
        }
    }
}

#[cfg(test)]
mod tests {
    use statrs::distribution::{ChiSquared, ContinuousCDF};

    use super::*;
    use crate::algo::tabular::mc_value::tests::Corridor;

    fn agent_with<D: Decay>(decay: D, seed: u64) -> MonteCarloQAgent<D> {
        MonteCarloQAgent::new(MonteCarloQConfig {
            gamma: 0.9,
            exploration: EpsilonGreedy::new(decay),
            update_rule: UpdateRule::Incremental,
            actions: GridAction::VARIANTS.to_vec(),
            seed: Some(seed),
        })
    }

    #[test]
    fn epsilon_decays_per_episode() {
        let mut agent: MonteCarloQAgent = MonteCarloQAgent::new(MonteCarloQConfig {
            seed: Some(0),
            ..Default::default()
        });
        let state = Pos::new(0, 0);

        agent.select_action(state);
        assert!((agent.epsilon() - 10.0).abs() < 1e-12, "1 / (1 * 0.1)");

        for _ in 0..19 {
            agent.record(state, GridAction::Up, 0.0, true);
            agent.update();
        }
        assert_eq!(agent.episode(), 20);
        agent.select_action(state);
        assert!((agent.epsilon() - 0.5).abs() < 1e-12, "1 / (20 * 0.1)");

        let mut prev = agent.epsilon();
        for _ in 0..50 {
            agent.update();
            agent.select_action(state);
            assert!(agent.epsilon() < prev, "strictly decreasing");
            prev = agent.epsilon();
        }
    }

    #[test]
    fn greedy_reads_q_table() {
        let mut agent = agent_with(decay::Constant::new(0.0), 1);
        let state = Pos::new(0, 0);
        agent.record(state, GridAction::Left, 2.0, true);
        agent.update();
        agent.record(state, GridAction::Down, 1.0, true);
        agent.update();

        assert_eq!(agent.candidate_values(state), [0.0, 1.0, 2.0, 0.0]);
        for _ in 0..200 {
            assert_eq!(
                agent.select_action(state),
                GridAction::Left,
                "no boundary special casing for Q"
            );
        }
    }

    #[test]
    fn uniform_when_epsilon_one() {
        const TRIALS: usize = 8000;
        let mut agent = agent_with(decay::Constant::new(1.0), 2);
        agent.record(Pos::new(1, 1), GridAction::Up, 5.0, true);
        agent.update();

        let mut counts = [0usize; 4];
        for _ in 0..TRIALS {
            counts[agent.select_action(Pos::new(1, 1)).index()] += 1;
        }

        let expected = TRIALS as f64 / 4.0;
        let chi2 = counts
            .iter()
            .map(|&c| (c as f64 - expected).powi(2) / expected)
            .sum::<f64>();
        let critical = ChiSquared::new(3.0).unwrap().inverse_cdf(0.999);
        assert!(chi2 < critical, "actions chosen uniformly: {counts:?}");
    }

    #[test]
    fn update_labels_state_actions() {
        let mut agent = agent_with(decay::Constant::new(0.1), 3);
        let (a, b) = (Pos::new(0, 0), Pos::new(1, 0));
        agent.record(a, GridAction::Right, 0.0, false);
        agent.record(b, GridAction::Left, 0.0, false);
        agent.record(a, GridAction::Right, 1.0, true);

        assert_eq!(agent.update(), 3, "incremental folds every visit");
        assert!(agent.memory().is_empty());
        // seeded at 0.81, then nudged toward 1.0 with rate 0.25
        assert!((agent.q_value(a, GridAction::Right) - 0.8575).abs() < 1e-9);
        assert!((agent.q_value(b, GridAction::Left) - 0.9).abs() < 1e-9);
        assert_eq!(agent.q_value(a, GridAction::Left), 0.0);
    }

    #[test]
    fn learns_corridor() {
        let mut env = Corridor::new(4);
        let mut agent: MonteCarloQAgent = MonteCarloQAgent::new(MonteCarloQConfig {
            seed: Some(4),
            ..Default::default()
        });

        for i in 1..=300 {
            let summary = agent.go(&mut env);
            assert_eq!(summary.episode, i);
            assert_eq!(summary.steps, env.steps, "every step recorded");
        }
        assert_eq!(agent.episode(), 301);

        let last = Pos::new(2, 0);
        assert!(
            agent.q_value(last, GridAction::Right) > agent.q_value(last, GridAction::Left),
            "stepping onto the goal beats stepping away"
        );
    }

    #[test]
    #[should_panic(expected = "at least one action")]
    fn empty_actions_rejected() {
        let _: MonteCarloQAgent = MonteCarloQAgent::new(MonteCarloQConfig {
            actions: vec![],
            ..Default::default()
        });
    }

    #[test]
    #[should_panic(expected = "strictly below 1")]
    fn undiscounted_rejected() {
        let _: MonteCarloQAgent = MonteCarloQAgent::new(MonteCarloQConfig {
            gamma: 1.0,
            ..Default::default()
        });
    }
}
