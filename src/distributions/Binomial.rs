//! # Binomial distribution
//!
//! The [Binomial distribution](https://en.wikipedia.org/wiki/Binomial_distribution)
//! counts the number of successes among `n` independent
//! [Bernoulli](crate::distributions::Bernoulli) trials, each with success
//! probability `p`.
//!

use crate::{
    distribution_trait::DiscreteDistribution,
    domain::DiscreteDomain,
    errors::BayesVizError,
    euclid,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Binomial {
    /// The number of trials. Always integer valued.
    n: f64,
    /// The probability of success of each trial.
    p: f64,
    domain: DiscreteDomain,
}

impl Binomial {
    /// Creates a new [Binomial] distribution.
    ///
    ///  - `n`: the number of trials. Must be an integer and `1 <= n`.
    ///  - `p`: the probability of success. Must belong in the interval `(0.0, 1.0]`.
    ///
    /// If those conditions are not fullfiled, an error with **all** the
    /// violations will be returned.
    pub fn new(n: f64, p: f64) -> Result<Binomial, BayesVizError> {
        let mut violations: Vec<String> = Vec::new();

        if !n.is_finite() {
            violations.push(String::from("parameter n is not a number."));
        } else {
            if n < 1.0 {
                violations.push(String::from("n must be >= 1."));
            }
            if n.fract() != 0.0 {
                violations.push(String::from("n must be an integer."));
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

        return Ok(Binomial {
            n,
            p,
            domain: DiscreteDomain::Range(0, n as i64),
        });
    }

    /// Creates a new [Binomial] distribution without checking.
    ///
    /// ## Safety
    ///
    /// If the conditions of [Binomial::new] are not fullfiled, the returned
    /// distribution will be invalid.
    #[must_use]
    pub const unsafe fn new_unchecked(n: f64, p: f64) -> Binomial {
        return Binomial {
            n,
            p,
            domain: DiscreteDomain::Range(0, n as i64),
        };
    }

    /// Returns `n`, the number of trials.
    #[must_use]
    pub const fn get_n(&self) -> f64 {
        return self.n;
    }

    /// Returns `p`, the probability of success of each trial.
    #[must_use]
    pub const fn get_p(&self) -> f64 {
        return self.p;
    }
}

impl DiscreteDistribution for Binomial {
    fn pmf(&self, x: f64) -> f64 {
        // pmf(x | n, p) = C(n, x) * p^x * (1-p)^(n-x)
        if !self.domain.contains(x) {
            return 0.0;
        }
        let k: i64 = x as i64;
        return euclid::combination(self.n as i64, k)
            * self.p.powi(k as i32)
            * (1.0 - self.p).powi((self.n as i64 - k) as i32);
    }

    fn cdf(&self, x: f64) -> f64 {
        // explicit cumulative sum of the pmf
        if x < 0.0 {
            return 0.0;
        }
        if self.n <= x {
            return 1.0;
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
        return &self.domain;
    }

    fn plot_range(&self) -> (f64, f64) {
        return (0.0, self.n.max(1.0));
    }
}
