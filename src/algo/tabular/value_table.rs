use std::collections::{HashMap, HashSet};

use super::Hashable;

/// How an episode's labeled returns are merged into a [`ValueTable`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UpdateRule {
    /// Only the first occurrence of each identity in an episode counts, averaged over all episodes
    #[default]
    FirstVisit,
    /// Every occurrence counts, averaged over all occurrences
    EveryVisit,
    /// Every occurrence nudges the estimate with learning rate 0.5/n, without keeping a running total
    Incremental,
}

/// Accumulated statistics for one identity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry {
    /// Sum of every return that contributed, `None` under [`UpdateRule::Incremental`]
    pub total: Option<f64>,
    /// Number of contributing returns
    pub count: u32,
    /// Current estimate
    pub value: f64,
}

/// A sparse table of value estimates learned from Monte Carlo returns
///
/// The update rule is fixed when the table is created and applies for its whole lifetime, since
/// the averaging rules and the incremental rule keep different statistics. Entries are created on
/// first observation and never removed.
#[derive(Debug, Clone)]
pub struct ValueTable<K: Hashable> {
    entries: HashMap<K, Entry>,
    rule: UpdateRule,
}

impl<K: Hashable> ValueTable<K> {
    pub fn new(rule: UpdateRule) -> Self {
        Self {
            entries: HashMap::new(),
            rule,
        }
    }

    pub fn rule(&self) -> UpdateRule {
        self.rule
    }

    /// Current estimate for `key`, or 0.0 if it has never been observed
    pub fn value(&self, key: &K) -> f64 {
        self.entries.get(key).map_or(0.0, |e| e.value)
    }

    pub fn get(&self, key: &K) -> Option<&Entry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &Entry)> {
        self.entries.iter()
    }

    /// Fold one episode's `(identity, return)` pairs, in chronological order, into the table
    ///
    /// **Returns** the number of pairs that contributed
    pub fn update(&mut self, labeled: &[(K, f64)]) -> usize {
        match self.rule {
            UpdateRule::FirstVisit => {
                let mut seen = HashSet::with_capacity(labeled.len());
                let mut contributed = 0;
                for &(key, g) in labeled {
                    if seen.insert(key) {
                        self.average(key, g);
                        contributed += 1;
                    }
                }
                contributed
            }
            UpdateRule::EveryVisit => {
                for &(key, g) in labeled {
                    self.average(key, g);
                }
                labeled.len()
            }
            UpdateRule::Incremental => {
                for &(key, g) in labeled {
                    self.nudge(key, g);
                }
                labeled.len()
            }
        }
    }

    fn average(&mut self, key: K, g: f64) {
        self.entries
            .entry(key)
            .and_modify(|e| {
                let total = e.total.get_or_insert(0.0);
                *total += g;
                e.count += 1;
                e.value = *total / e.count as f64;
            })
            .or_insert(Entry {
                total: Some(g),
                count: 1,
                value: g,
            });
    }

    fn nudge(&mut self, key: K, g: f64) {
        self.entries
            .entry(key)
            .and_modify(|e| {
                e.count += 1;
                let alpha = 0.5 / e.count as f64;
                e.value += alpha * (g - e.value);
            })
            .or_insert(Entry {
                total: None,
                count: 1,
                value: g,
            });
    }
}

impl<K: Hashable> Default for ValueTable<K> {
    fn default() -> Self {
        Self::new(UpdateRule::default())
    }
}
