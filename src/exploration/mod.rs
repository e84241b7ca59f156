use rand::{seq::SliceRandom, Rng};

mod epsilon_greedy;

pub use epsilon_greedy::EpsilonGreedy;

/// Exploration policy result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Explore,
    Exploit,
}

/// Index of the largest value, with ties broken uniformly at random
///
/// A single left-to-right scan keeps every index that matches the running maximum, restarting
/// the candidate list whenever a strictly larger value shows up.
///
/// **Panics** if `values` is empty
pub fn argmax_random_tie<R: Rng + ?Sized>(values: &[f64], rng: &mut R) -> usize {
    let mut max_value = *values.first().expect("`values` is not empty");
    let mut candidates = Vec::with_capacity(values.len());
    for (i, &value) in values.iter().enumerate() {
        if value > max_value {
            candidates.clear();
            max_value = value;
            candidates.push(i);
        } else if value == max_value {
            candidates.push(i);
        }
    }

    *candidates.choose(rng).expect("the maximum is attained")
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};
    use statrs::distribution::{ChiSquared, ContinuousCDF};

    use super::*;

    #[test]
    fn argmax_unique() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..100 {
            assert_eq!(argmax_random_tie(&[1.0, -2.0, 7.5, 3.0], &mut rng), 2);
        }
        assert_eq!(argmax_random_tie(&[4.0], &mut rng), 0, "single value");
    }

    #[test]
    fn argmax_tie_break() {
        const TRIALS: usize = 10_000;
        let mut rng = StdRng::seed_from_u64(7);
        let mut counts = [0usize; 4];
        for _ in 0..TRIALS {
            counts[argmax_random_tie(&[2.0, 5.0, 5.0, 1.0], &mut rng)] += 1;
        }

        assert_eq!(counts[0], 0, "non-maximal index never chosen");
        assert_eq!(counts[3], 0, "non-maximal index never chosen");

        let expected = TRIALS as f64 / 2.0;
        let chi2 = counts[1..3]
            .iter()
            .map(|&c| (c as f64 - expected).powi(2) / expected)
            .sum::<f64>();
        let critical = ChiSquared::new(1.0).unwrap().inverse_cdf(0.999);
        assert!(chi2 < critical, "tied maxima chosen uniformly: {counts:?}");
    }

    #[test]
    fn argmax_first_value_is_max() {
        let mut rng = StdRng::seed_from_u64(3);
        let picks = (0..200)
            .map(|_| argmax_random_tie(&[3.0, 3.0, 1.0, 3.0], &mut rng))
            .collect::<Vec<_>>();
        assert!(picks.iter().all(|&i| i != 2));
        for i in [0, 1, 3] {
            assert!(picks.contains(&i), "index {i} reachable");
        }
    }

    #[test]
    #[should_panic]
    fn argmax_empty_panics() {
        argmax_random_tie(&[], &mut StdRng::seed_from_u64(0));
    }
}
