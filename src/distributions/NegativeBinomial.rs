//! # Negative Binomial distribution
//!
//! The [Negative Binomial distribution](https://en.wikipedia.org/wiki/Negative_binomial_distribution)
//! counts the number of [Bernoulli](crate::distributions::Bernoulli) trials
//! (with success probability `p`) needed to get the `r`-th success.
//!
//! We use the trials-counting parametrization, supported on
//! `{r, r+1, r+2, ...}`. For `r = 1` it reduces to the
//! [Geometric](crate::distributions::Geometric) distribution.
//!

use crate::{
    distribution_trait::DiscreteDistribution,
    domain::DiscreteDomain,
    errors::BayesVizError,
    euclid,
};

#[derive(Debug, Clone, PartialEq)]
pub struct NegativeBinomial {
    /// The number of successes to wait for. Always integer valued.
    r: f64,
    /// The probability of success of each trial.
    p: f64,
    domain: DiscreteDomain,
}

impl NegativeBinomial {
    /// Creates a new [NegativeBinomial] distribution.
    ///
    ///  - `r`: the number of successes to wait for. Must be an integer and `1 <= r`.
    ///  - `p`: the probability of success. Must belong in the interval `(0.0, 1.0]`.
    ///
    /// If those conditions are not fullfiled, an error with **all** the
    /// violations will be returned.
    pub fn new(r: f64, p: f64) -> Result<NegativeBinomial, BayesVizError> {
        let mut violations: Vec<String> = Vec::new();

        if !r.is_finite() {
            violations.push(String::from("parameter r is not a number."));
        } else {
            if r < 1.0 {
                violations.push(String::from("r must be >= 1."));
            }
            if r.fract() != 0.0 {
                violations.push(String::from("r must be an integer."));
            }
        }
        if !p.is_finite() {
            violations.push(String::from("parameter p is not a number."));
        } else if !(0.0 < p && p <= 1.0) {
            violations.push(String::from("p must be in (0, 1]."));
        }

        if !violations.is_empty() {
            return Err(BayesVizError::ParameterDomain { violations });
        }

        return Ok(NegativeBinomial {
            r,
            p,
            domain: DiscreteDomain::From(r as i64),
        });
    }

    /// Creates a new [NegativeBinomial] distribution without checking.
    ///
    /// ## Safety
    ///
    /// If the conditions of [NegativeBinomial::new] are not fullfiled, the
    /// returned distribution will be invalid.
    #[must_use]
    pub const unsafe fn new_unchecked(r: f64, p: f64) -> NegativeBinomial {
        return NegativeBinomial {
            r,
            p,
            domain: DiscreteDomain::From(r as i64),
        };
    }

    /// Returns `r`, the number of successes to wait for.
    #[must_use]
    pub const fn get_r(&self) -> f64 {
        return self.r;
    }

    /// Returns `p`, the probability of success of each trial.
    #[must_use]
    pub const fn get_p(&self) -> f64 {
        return self.p;
    }
}

impl DiscreteDistribution for NegativeBinomial {
    fn pmf(&self, x: f64) -> f64 {
        // pmf(x | r, p) = C(x-1, r-1) * p^r * (1-p)^(x-r)
        if !self.domain.contains(x) {
            return 0.0;
        }
        let x_int: i64 = x as i64;
        let r_int: i64 = self.r as i64;
        return euclid::combination(x_int - 1, r_int - 1)
            * self.p.powi(r_int as i32)
            * (1.0 - self.p).powi((x_int - r_int) as i32);
    }

    fn cdf(&self, x: f64) -> f64 {
        // explicit cumulative sum of the pmf
        if x < self.r {
            return 0.0;
        }

        let mut accumulator: f64 = 0.0;
        let mut k: f64 = self.r;
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
        return &self.domain;
    }

    fn plot_range(&self) -> (f64, f64) {
        /*
           mean + 4 standard deviations:
           mean = r / p
           variance = r * (1-p) / p^2
        */
        let min: f64 = self.r.max(1.0);
        let mean: f64 = self.r / self.p;
        let std_dev: f64 = (self.r * (1.0 - self.p)).sqrt() / self.p;
        let max: f64 = (mean + 4.0 * std_dev).ceil();

        if !max.is_finite() || max < min {
            return (min, min + crate::configuration::DISCRETE_RANGE_FALLBACK_SPAN);
        }
        return (min, max);
    }
}
