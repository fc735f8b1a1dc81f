//! # Exponential distribution
//!
//! The [Exponential distribution](https://en.wikipedia.org/wiki/Exponential_distribution)
//! is a continuous distribution very important on statistics that measures
//! the time to the next poission event.
//!
//! The Exponential distribution has a parameter: the rate `lambda` wich
//! determines how fast do events happen.
//!

use crate::{
    distribution_trait::Distribution,
    domain::ContinuousDomain,
    errors::BayesVizError,
};

pub const EXPONENTIAL_DOMAIN: ContinuousDomain = ContinuousDomain::From(0.0);

/// An [Exponential distribution](https://en.wikipedia.org/wiki/Exponential_distribution).
#[derive(Debug, Clone, PartialEq)]
pub struct Exponential {
    lambda: f64,
}

impl Exponential {
    /// Creates a new [Exponential] distribution. It is requiered that
    /// `lambda` is finite and `0.0 < lambda` or an error will be returned.
    pub fn new(lambda: f64) -> Result<Exponential, BayesVizError> {
        if !lambda.is_finite() {
            return Err(BayesVizError::single_violation(
                "parameter lambda is not a number.",
            ));
        }
        if lambda <= 0.0 {
            return Err(BayesVizError::single_violation("lambda must be > 0."));
        }

        return Ok(Exponential { lambda });
    }

    /// Creates a new [Exponential] distribution without checking.
    ///
    /// ## Safety
    ///
    /// If the conditions of [Exponential::new] are not fullfiled, the
    /// returned distribution will be invalid.
    #[must_use]
    pub const unsafe fn new_unchecked(lambda: f64) -> Exponential {
        return Exponential { lambda };
    }

    /// Returns the value of `lambda`.
    #[must_use]
    pub const fn get_lambda(&self) -> f64 {
        return self.lambda;
    }
}

impl Distribution for Exponential {
    fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        return self.lambda * (-self.lambda * x).exp();
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        return 1.0 - (-self.lambda * x).exp();
    }

    fn get_domain(&self) -> &ContinuousDomain {
        return &EXPONENTIAL_DOMAIN;
    }

    fn plot_range(&self) -> (f64, f64) {
        // quantile(8/lambda) = 1 - e^-8 ~= 0.99966, more than enough to plot
        let max: f64 = (8.0 / self.lambda).min(crate::configuration::SINGLE_RANGE_CLAMP);
        return (0.0, max);
    }
}
