//! # Geometric distribution
//!
//! The [Geometric distribution](https://en.wikipedia.org/wiki/Geometric_distribution)
//! counts the number of [Bernoulli](crate::distributions::Bernoulli) trials
//! (with success probability `p`) needed to get the first success.
//!
//! Note that we use the variant supported on `{1, 2, 3, ...}` (trials until
//! success **inclusive**), not the one that counts failures before the first
//! success.
//!

use crate::{
    configuration::GEOMETRIC_RANGE,
    distribution_trait::DiscreteDistribution,
    domain::DiscreteDomain,
    errors::BayesVizError,
};

pub const GEOMETRIC_DOMAIN: DiscreteDomain = DiscreteDomain::From(1);

#[derive(Debug, Clone, PartialEq)]
pub struct Geometric {
    p: f64,
}

impl Geometric {
    /// Creates a new [Geometric] distribution.
    ///
    ///  - `p` indicates the probability of success of each trial.
    ///     - `p` must belong in the interval `(0.0, 1.0]`. Otherwise an
    ///       error will be returned.
    pub fn new(p: f64) -> Result<Geometric, BayesVizError> {
        if !p.is_finite() {
            return Err(BayesVizError::single_violation(
                "parameter p is not a number.",
            ));
        }
        if !(0.0 < p && p <= 1.0) {
            return Err(BayesVizError::single_violation("p must be in (0, 1]."));
        }

        return Ok(Geometric { p });
    }

    /// Creates a new [Geometric] distribution without any checks.
    ///
    /// ## Safety
    ///
    /// If the conditions of [Geometric::new] are not fullfiled, the returned
    /// distribution will be invalid.
    #[must_use]
    pub const unsafe fn new_unchecked(p: f64) -> Geometric {
        return Geometric { p };
    }

    /// Return `p` (probability of success of each trial).
    #[must_use]
    pub const fn get_p(&self) -> f64 {
        return self.p;
    }
}

impl DiscreteDistribution for Geometric {
    fn pmf(&self, x: f64) -> f64 {
        // pmf(x | p) = (1-p)^(x-1) * p
        if !GEOMETRIC_DOMAIN.contains(x) {
            return 0.0;
        }
        return (1.0 - self.p).powf(x - 1.0) * self.p;
    }

    fn cdf(&self, x: f64) -> f64 {
        // closed form: cdf(x | p) = 1 - (1-p)^x
        if x < 1.0 {
            return 0.0;
        }
        return 1.0 - (1.0 - self.p).powf(x);
    }

    fn get_domain(&self) -> &DiscreteDomain {
        return &GEOMETRIC_DOMAIN;
    }

    fn plot_range(&self) -> (f64, f64) {
        // fixed generous window: even for p = 0.2 the cdf at 20 is ~0.988
        return GEOMETRIC_RANGE;
    }
}
