//! # Uniform distribution
//!
//! The continuous [Uniform distribution](https://en.wikipedia.org/wiki/Continuous_uniform_distribution).
//!
//! All the values in the interval `[a, b]` are equally likely. It is the
//! maximum entropy distribution for a bounded support, and the easiest way
//! to build two distributions with fully disjoint supports (wich makes the
//! overlap error drop to `0`).
//!
//! For the integer-valued counterpart see
//! [DiscreteUniform](crate::distributions::DiscreteUniform).
//!

use crate::{
    distribution_trait::Distribution,
    domain::ContinuousDomain,
    errors::BayesVizError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Uniform {
    a: f64,
    b: f64,
    domain: ContinuousDomain,
}

impl Uniform {
    /// Creates a new [Uniform] distribution over `[a, b]`.
    ///
    ///  - Both `a` and `b` must be finite (No `+-inf` or NaNs)
    ///  - `a < b` (stricly)
    ///
    /// If those conditions are not fullfiled, an error with **all** the
    /// violations will be returned.
    pub fn new(a: f64, b: f64) -> Result<Uniform, BayesVizError> {
        let mut violations: Vec<String> = Vec::new();

        if !a.is_finite() {
            violations.push(String::from("parameter a is not a number."));
        }
        if !b.is_finite() {
            violations.push(String::from("parameter b is not a number."));
        }
        if violations.is_empty() && b <= a {
            violations.push(String::from("a must be less than b."));
        }

        if !violations.is_empty() {
            return Err(BayesVizError::ParameterDomain { violations });
        }

        return Ok(Uniform {
            a,
            b,
            domain: ContinuousDomain::Range(a, b),
        });
    }

    /// Creates a new [Uniform] distribution without checking.
    ///
    /// ## Safety
    ///
    /// If the conditions of [Uniform::new] are not fullfiled, the returned
    /// distribution will be invalid (in particular `a == b` divides by zero).
    #[must_use]
    pub const unsafe fn new_unchecked(a: f64, b: f64) -> Uniform {
        return Uniform {
            a,
            b,
            domain: ContinuousDomain::Range(a, b),
        };
    }

    /// Returns `a`, the minimum of the support.
    #[must_use]
    pub const fn get_a(&self) -> f64 {
        return self.a;
    }

    /// Returns `b`, the maximum of the support.
    #[must_use]
    pub const fn get_b(&self) -> f64 {
        return self.b;
    }
}

impl Distribution for Uniform {
    fn pdf(&self, x: f64) -> f64 {
        if x < self.a || self.b < x {
            return 0.0;
        }
        return 1.0 / (self.b - self.a);
    }

    fn cdf(&self, x: f64) -> f64 {
        if x < self.a {
            return 0.0;
        }
        if self.b < x {
            return 1.0;
        }
        return (x - self.a) / (self.b - self.a);
    }

    fn get_domain(&self) -> &ContinuousDomain {
        return &self.domain;
    }

    fn plot_range(&self) -> (f64, f64) {
        // swap if the caller built an (invalid) reversed interval
        if self.b < self.a {
            return (self.b, self.a);
        }
        return (self.a, self.b);
    }
}
