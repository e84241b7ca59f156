use rand::{seq::SliceRandom, Rng};

/// Represents an episodic Markov decision process, defining the dynamics of an environment
/// in which an agent can operate.
///
/// Agents only see the environment through this trait; transition rules and termination
/// belong to the implementor.
pub trait Environment {
    /// A representation of the state of the environment to be passed to an agent
    type State;

    /// A representation of an action that an agent can take to affect the environment
    type Action;

    /// Reset the environment to an initial state
    ///
    /// **Returns** the state
    fn reset(&mut self) -> Self::State;

    /// Update the environment in response to an action taken by an agent
    ///
    /// **Returns** `(next_state, reward, done)`
    fn step(&mut self, action: Self::Action) -> (Self::State, f64, bool);
}

/// An environment with a finite set of actions
pub trait DiscreteActionSpace: Environment
where
    Self::Action: Clone,
{
    /// Get the available actions
    ///
    /// The returned vec should never be empty, instead specify an action that represents doing nothing if necessary.
    fn actions(&self) -> Vec<Self::Action>;

    /// Pick one of [`actions`](DiscreteActionSpace::actions) uniformly at random
    fn random_action<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Action {
        self.actions()
            .choose(rng)
            .cloned()
            .expect("action space is not empty")
    }
}
