use crate::error::{Error, Result};

/// An implementation of a time-decaying value
pub trait Decay {
    /// Calculate value at time `t`
    fn evaluate(&self, t: f64) -> f64;
}

/// A constant value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Constant {
    value: f64,
}

impl Constant {
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

impl Decay for Constant {
    fn evaluate(&self, _t: f64) -> f64 {
        self.value
    }
}

/// v(t) = 1 / (t * f)
///
/// Only defined for `t >= 1`. Callers drive `t` from a counter that starts at 1
/// and is only ever incremented.
#[derive(Debug, Clone, PartialEq)]
pub struct Reciprocal {
    factor: f64,
}

impl Reciprocal {
    /// **Errors** if `factor` is not finite or not strictly positive
    pub fn new(factor: f64) -> Result<Self> {
        if factor.is_finite() && factor > 0.0 {
            Ok(Self { factor })
        } else {
            Err(Error::InvalidDecayFactor { factor })
        }
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }
}

impl Default for Reciprocal {
    fn default() -> Self {
        Self { factor: 0.1 }
    }
}

impl Decay for Reciprocal {
    fn evaluate(&self, t: f64) -> f64 {
        debug_assert!(t >= 1.0, "reciprocal decay is undefined for t < 1");
        1.0 / (t * self.factor)
    }
}
