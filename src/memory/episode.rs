/// A single transition observed during an episode
///
/// For state-value learning the action is `()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample<S, A = ()> {
    /// The state this sample is credited to
    pub state: S,
    /// The action taken, if the learner tracks actions
    pub action: A,
    /// The reward received after taking the action
    pub reward: f64,
    /// Whether the transition ended the episode
    pub done: bool,
}

/// Time-ordered record of every transition in the current episode
///
/// Unbounded and without deduplication: a state visited several times appears once per visit.
/// Nothing here survives [`clear`](EpisodeMemory::clear), so it carries no state across episodes.
#[derive(Debug, Clone)]
pub struct EpisodeMemory<S, A = ()> {
    samples: Vec<Sample<S, A>>,
}

impl<S, A> EpisodeMemory<S, A> {
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
        }
    }

    /// Append a transition in call order
    pub fn record(&mut self, state: S, action: A, reward: f64, done: bool) {
        self.samples.push(Sample {
            state,
            action,
            reward,
            done,
        });
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Oldest to newest
    pub fn iter(&self) -> std::slice::Iter<'_, Sample<S, A>> {
        self.samples.iter()
    }

    pub fn view(&self) -> &[Sample<S, A>] {
        &self.samples
    }
}

impl<S, A> Default for EpisodeMemory<S, A> {
    fn default() -> Self {
        Self::new()
    }
}
