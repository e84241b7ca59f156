/// Label each step of a finished episode with its discounted return
///
/// `steps` yields `(identity, reward)` pairs oldest first, where each reward is the one received
/// after the action at that step. The episode is walked backwards with
/// G<sub>t</sub> = r<sub>t</sub> + γG<sub>t+1</sub>, starting from G = 0 past the last step,
/// and the labels come back in chronological order.
pub fn discounted_returns<K, I>(steps: I, gamma: f64) -> Vec<(K, f64)>
where
    I: IntoIterator<Item = (K, f64)>,
    I::IntoIter: DoubleEndedIterator,
{
    let mut g = 0.0;
    let mut labeled = steps
        .into_iter()
        .rev()
        .map(|(key, reward)| {
            g = reward + gamma * g;
            (key, g)
        })
        .collect::<Vec<_>>();
    labeled.reverse();
    labeled
}
