//! # Bernoulli distribution
//!
//! The [Bernoulli distribution](https://en.wikipedia.org/wiki/Bernoulli_distribution).
//!
//! It represents a value that can eiter take the value `1` with probability
//! `p` or `0` with probability `1 - p`. It is a special case of the
//! [Binomial distribution](crate::distributions::Binomial) when `n = 1`.
//!
//! It can be interpreted as a coin toss, where `p = 0.5` and the result `1`
//! represents heads and `0` represents tails.
//!

use crate::{
    distribution_trait::DiscreteDistribution,
    domain::DiscreteDomain,
    errors::BayesVizError,
};

pub const BERNOULLI_DOMAIN: DiscreteDomain = DiscreteDomain::Range(0, 1);

/// Represnets a Bernoulli distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct Bernoulli {
    p: f64,
}

impl Bernoulli {
    /// Creates a new [Bernoulli] distribution.
    ///
    ///  - `p` indicates the probability of success (returning `1.0`).
    ///     - `p` must belong in the interval `(0.0, 1.0]`. Otherwise an
    ///       error will be returned.
    pub fn new(p: f64) -> Result<Bernoulli, BayesVizError> {
        if !p.is_finite() {
            return Err(BayesVizError::single_violation(
                "parameter p is not a number.",
            ));
        }
        if !(0.0 < p && p <= 1.0) {
            return Err(BayesVizError::single_violation("p must be in (0, 1]."));
        }

        return Ok(Bernoulli { p });
    }

    /// Creates a new [Bernoulli] distribution without any checks.
    ///
    /// ## Safety
    ///
    /// If the conditions of [Bernoulli::new] are not fullfiled, the returned
    /// distribution will be invalid.
    #[must_use]
    pub const unsafe fn new_unchecked(p: f64) -> Bernoulli {
        return Bernoulli { p };
    }

    /// Return `p` (probability of success).
    #[must_use]
    pub const fn get_p(&self) -> f64 {
        return self.p;
    }
}

impl DiscreteDistribution for Bernoulli {
    fn pmf(&self, x: f64) -> f64 {
        let mut ret: f64 = 0.0;
        if x == 1.0 {
            ret = self.p;
        } else if x == 0.0 {
            ret = 1.0 - self.p;
        }
        return ret;
    }

    fn cdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        if x < 1.0 {
            return 1.0 - self.p;
        }
        return 1.0;
    }

    fn get_domain(&self) -> &DiscreteDomain {
        return &BERNOULLI_DOMAIN;
    }

    fn plot_range(&self) -> (f64, f64) {
        return BERNOULLI_DOMAIN.get_bounds();
    }
}
