/// Asserts that a numerical value is in the provided interval `[a,b]` and panics
/// with a helpful message if not
///
/// ### Example
/// ```should_panic
/// # use mcrl::assert_interval;
/// let gamma = 1.5;
/// assert_interval!(gamma, 0.0, 1.0);
/// ```
/// This panics with the message "Invalid value for \`gamma\`. Must be in the interval \[0, 1\]."
#[macro_export]
macro_rules! assert_interval {
    ($var:expr, $a:expr, $b:expr) => {
        assert!(
            $var >= $a && $var <= $b,
            "Invalid value for `{}`. Must be in the interval [{}, {}].",
            stringify!($var),
            $a,
            $b,
        );
    };
}

/// Panics unless `gamma` is a valid discount factor, i.e. in `[0, 1)`
pub(crate) fn assert_discount(gamma: f64) {
    assert_interval!(gamma, 0.0, 1.0);
    assert!(gamma < 1.0, "Discount factor must be strictly below 1.");
}
