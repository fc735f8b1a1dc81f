//! # Poisson distribution
//!
//! The [Poisson distribution](https://en.wikipedia.org/wiki/Poisson_distribution)
//! is a discrete distribution that counts the number of poisson events in a
//! given time with a given rate.
//!
//! The poisson distribution has a single parameter: the rate `lambda`. Lambda
//! represents the avarage number of events that happen in a given amount of time.
//!
//! Some properties of the Poisson distribution:
//!  - The sumation of 2 Poisson distributed random variables is also
//!     poisson distributed with the sum of the 2 original lambdas as
//!     it's own lambda.
//!      - This means that for large lambdas, the [CLT](https://en.wikipedia.org/wiki/Central_limit_theorem)
//!         aplies and the distributions get very close to a (discrete) normal distribution.
//!

use crate::{
    configuration::DISCRETE_RANGE_FALLBACK_SPAN,
    distribution_trait::DiscreteDistribution,
    domain::DiscreteDomain,
    errors::BayesVizError,
    euclid,
};

pub const POISSON_DOMAIN: DiscreteDomain = DiscreteDomain::From(0);

#[derive(Debug, Clone, PartialEq)]
pub struct Poisson {
    lambda: f64,
}

impl Poisson {
    /// Creates a new [Poisson] distribution.
    ///
    ///  - `lambda` indicates rate. And must fullfill:
    ///      - Must be finite (no `+-inf` nor NaNs)
    ///      - `0.0 < lambda`
    ///
    /// Otherwise an error will be returned.
    pub fn new(lambda: f64) -> Result<Poisson, BayesVizError> {
        if !lambda.is_finite() {
            return Err(BayesVizError::single_violation(
                "parameter lambda is not a number.",
            ));
        }
        if lambda <= 0.0 {
            return Err(BayesVizError::single_violation("lambda must be > 0."));
        }

        return Ok(Poisson { lambda });
    }

    /// Creates a new [Poisson] distribution without checking.
    ///
    /// ## Safety
    ///
    /// If the conditions of [Poisson::new] are not fullfiled, the returned
    /// distribution will be invalid.
    #[must_use]
    pub const unsafe fn new_unchecked(lambda: f64) -> Poisson {
        return Poisson { lambda };
    }

    /// Returns the value of `lambda`.
    #[must_use]
    pub const fn get_lambda(&self) -> f64 {
        return self.lambda;
    }
}

impl DiscreteDistribution for Poisson {
    fn pmf(&self, x: f64) -> f64 {
        // pmf(x | lambda) = lambda^x * exp(-lambda) / x!
        //
        // For very large x both lambda^x and x! overflow, wich degenerates
        // into NaN; the curve sampler coerces those points to 0.
        if !POISSON_DOMAIN.contains(x) {
            return 0.0;
        }
        return self.lambda.powf(x) * (-self.lambda).exp() / euclid::factorial(x as u64);
    }

    fn cdf(&self, x: f64) -> f64 {
        // explicit cumulative sum of the pmf
        if x < 0.0 {
            return 0.0;
        }

        let mut accumulator: f64 = 0.0;
        let mut k: f64 = 0.0;
        while k <= x {
            let term: f64 = self.pmf(k);
            if term.is_finite() {
                accumulator += term;
            }
            k += 1.0;
        }
        return accumulator.min(1.0);
    }

    fn get_domain(&self) -> &DiscreteDomain {
        return &POISSON_DOMAIN;
    }

    fn plot_range(&self) -> (f64, f64) {
        // mean + 4 standard deviations (mean = variance = lambda)
        let max: f64 = (self.lambda + 4.0 * self.lambda.sqrt()).ceil();
        if !max.is_finite() || max < 0.0 {
            return (0.0, DISCRETE_RANGE_FALLBACK_SPAN);
        }
        return (0.0, max);
    }
}
