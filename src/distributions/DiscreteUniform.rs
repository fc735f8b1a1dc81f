//! # Discrete Uniform distribution
//!
//! The [Discrete Uniform distribution](https://en.wikipedia.org/wiki/Discrete_uniform_distribution).
//!
//! All the integers in `[a, b]` (both inclusive) are equally likely: a fair
//! die is a Discrete Uniform with `a = 1` and `b = 6`.
//!
//! Non-integer inputs for `a` and `b` are floored, matching how the sliders
//! of the visualizer treat them.
//!

use crate::{
    distribution_trait::DiscreteDistribution,
    domain::DiscreteDomain,
    errors::BayesVizError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteUniform {
    a: f64,
    b: f64,
    domain: DiscreteDomain,
}

impl DiscreteUniform {
    /// Creates a new [DiscreteUniform] distribution over the integers of
    /// `[a, b]`.
    ///
    ///  - Both `a` and `b` must be finite (No `+-inf` or NaNs)
    ///  - `a < b` (stricly)
    ///
    /// Non-integer values are floored. If the conditions are not fullfiled,
    /// an error with **all** the violations will be returned.
    pub fn new(a: f64, b: f64) -> Result<DiscreteUniform, BayesVizError> {
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

        let (a, b): (f64, f64) = (a.floor(), b.floor());
        return Ok(DiscreteUniform {
            a,
            b,
            domain: DiscreteDomain::Range(a as i64, b as i64),
        });
    }

    /// Creates a new [DiscreteUniform] distribution without checking.
    ///
    /// ## Safety
    ///
    /// If the conditions of [DiscreteUniform::new] are not fullfiled (on top
    /// of `a` and `b` being integer valued), the returned distribution will
    /// be invalid.
    #[must_use]
    pub const unsafe fn new_unchecked(a: f64, b: f64) -> DiscreteUniform {
        return DiscreteUniform {
            a,
            b,
            domain: DiscreteDomain::Range(a as i64, b as i64),
        };
    }

    /// Returns `a`, the minimum of the support (floored).
    #[must_use]
    pub const fn get_a(&self) -> f64 {
        return self.a;
    }

    /// Returns `b`, the maximum of the support (floored).
    #[must_use]
    pub const fn get_b(&self) -> f64 {
        return self.b;
    }
}

impl DiscreteDistribution for DiscreteUniform {
    fn pmf(&self, x: f64) -> f64 {
        if !self.domain.contains(x) {
            return 0.0;
        }
        return 1.0 / (self.b - self.a + 1.0);
    }

    fn cdf(&self, x: f64) -> f64 {
        if x < self.a {
            return 0.0;
        }
        if self.b < x {
            return 1.0;
        }
        return (x.floor() - self.a + 1.0) / (self.b - self.a + 1.0);
    }

    fn get_domain(&self) -> &DiscreteDomain {
        return &self.domain;
    }

    fn plot_range(&self) -> (f64, f64) {
        if self.b < self.a {
            return (self.b, self.a);
        }
        return (self.a, self.b);
    }
}
