use std::num::NonZeroU32;

use log::{debug, trace};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use strum::VariantArray;

use crate::{
    algo::EpisodeSummary,
    assert_interval,
    decay::{self, Decay},
    env::Environment,
    exploration::{argmax_random_tie, Choice, EpsilonGreedy},
    grid::{Grid, GridAction, Pos},
    memory::{discounted_returns, EpisodeMemory},
    util::assert_discount,
};

use super::{UpdateRule, ValueTable};

/// Configuration for the [`MonteCarloVAgent`]
#[derive(Debug, Clone)]
pub struct MonteCarloVConfig<D: Decay> {
    /// Discount factor, in `[0, 1)`
    ///
    /// **Default**: `0.9`
    pub gamma: f64,
    /// Exploration policy
    ///
    /// **Default**: a [`Constant`](decay::Constant) epsilon of `0.1`
    pub exploration: EpsilonGreedy<D>,
    /// How episode returns are folded into the value table
    ///
    /// **Default**: [`UpdateRule::FirstVisit`]
    pub update_rule: UpdateRule,
    /// Bounds used to project each action onto a neighboring cell
    ///
    /// **Default**: 5x5
    pub grid: Grid,
    /// Actions the agent chooses between
    ///
    /// **Default**: all four [`GridAction`]s
    pub actions: Vec<GridAction>,
    /// Seed for the agent's random source, or `None` to seed from entropy
    pub seed: Option<u64>,
}

impl Default for MonteCarloVConfig<decay::Constant> {
    fn default() -> Self {
        Self {
            gamma: 0.9,
            exploration: EpsilonGreedy::default(),
            update_rule: UpdateRule::FirstVisit,
            grid: Grid::default(),
            actions: GridAction::VARIANTS.to_vec(),
            seed: None,
        }
    }
}

/// Monte Carlo agent that learns a state-value function V(s)
///
/// The agent has no model of the environment's dynamics beyond the grid layout: greedy actions
/// are scored by the learned value of the cell each move leads to, with moves off the grid scored
/// by the value of the current cell. Learning happens once per episode, from the full returns
/// observed after each visit.
pub struct MonteCarloVAgent<D: Decay = decay::Constant> {
    table: ValueTable<Pos>,
    memory: EpisodeMemory<Pos>,
    exploration: EpsilonGreedy<D>,
    gamma: f64,
    grid: Grid,
    actions: Vec<GridAction>,
    rng: StdRng,
    episode: NonZeroU32,
    epsilon: f64,
}

impl<D: Decay> MonteCarloVAgent<D> {
    /// Initialize a new `MonteCarloVAgent`
    ///
    /// **Panics** if `gamma` is not in `[0, 1)`, if the initial epsilon is not in `[0, 1]`,
    /// or if `actions` is empty
    pub fn new(config: MonteCarloVConfig<D>) -> Self {
        assert_discount(config.gamma);
        assert!(
            !config.actions.is_empty(),
            "There must be at least one action available"
        );
        let epsilon = config.exploration.epsilon(1);
        assert_interval!(epsilon, 0.0, 1.0);

        Self {
            table: ValueTable::new(config.update_rule),
            memory: EpisodeMemory::new(),
            exploration: config.exploration,
            gamma: config.gamma,
            grid: config.grid,
            actions: config.actions,
            rng: config
                .seed
                .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64),
            episode: NonZeroU32::MIN,
            epsilon,
        }
    }

    /// Choose an action for `state` with the epsilon greedy policy
    pub fn select_action(&mut self, state: Pos) -> GridAction {
        let t = self.episode.get();
        self.epsilon = self.exploration.epsilon(t);
        match self.exploration.choose(t, &mut self.rng) {
            Choice::Explore => {
                trace!("explore from {state:?}");
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

    /// Value of the cell each action leads to from `state`, in action order
    ///
    /// Moves that would leave the grid are scored with the value of `state` itself.
    pub fn candidate_values(&self, state: Pos) -> Vec<f64> {
        self.actions
            .iter()
            .map(|&action| {
                let next = self.grid.neighbor(state, action).unwrap_or(state);
                self.table.value(&next)
            })
            .collect()
    }

    /// Record the state reached and the reward received for it
    pub fn record(&mut self, state: Pos, reward: f64, done: bool) {
        self.memory.record(state, (), reward, done);
    }

    /// Fold the recorded episode into the value table, then clear the episode memory
    ///
    /// **Returns** the number of visits that contributed to the table
    pub fn update(&mut self) -> usize {
        let labeled = discounted_returns(
            self.memory.iter().map(|s| (s.state, s.reward)),
            self.gamma,
        );
        let contributed = self.table.update(&labeled);
        debug!(
            "episode {}: folded {contributed}/{} visits, {} states known, epsilon {:.4}",
            self.episode,
            labeled.len(),
            self.table.len(),
            self.epsilon,
        );

        self.memory.clear();
        self.episode = self.episode.saturating_add(1);
        contributed
    }

    /// Learned value of `state`, 0.0 if never visited
    pub fn value(&self, state: Pos) -> f64 {
        self.table.value(&state)
    }

    pub fn table(&self) -> &ValueTable<Pos> {
        &self.table
    }

    pub fn memory(&self) -> &EpisodeMemory<Pos> {
        &self.memory
    }

    pub fn grid(&self) -> Grid {
        self.grid
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

        let state = env.reset();
        let mut action = self.select_action(state);
        loop {
            let (next_state, reward, done) = env.step(action);
            self.record(next_state, reward, done);
            steps += 1;
            total_reward += reward;

            if done {
                break;
            }
            action = self.select_action(next_state);
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
