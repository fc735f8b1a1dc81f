//! # Pareto distribution
//!
//! The [Pareto distribution](https://en.wikipedia.org/wiki/Pareto_distribution)
//! is a heavy-tailed continuous distribution, originally used to describe the
//! allocation of wealth ("80-20 rule").
//!
//! It has 2 parameters: the scale `x_m` (the minimum possible value, where
//! the density peaks) and the shape `alpha` (how fast the tail decays).
//!

use crate::{
    distribution_trait::Distribution,
    domain::ContinuousDomain,
    errors::BayesVizError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Pareto {
    x_m: f64,
    alpha: f64,
    domain: ContinuousDomain,
}

impl Pareto {
    /// Creates a new [Pareto] distribution.
    ///
    ///  - `x_m`: the scale parameter (minimum value). Must be finite and `0.0 < x_m`.
    ///  - `alpha`: the shape parameter. Must be finite and `0.0 < alpha`.
    ///
    /// If those conditions are not fullfiled, an error with **all** the
    /// violations will be returned.
    pub fn new(x_m: f64, alpha: f64) -> Result<Pareto, BayesVizError> {
        let mut violations: Vec<String> = Vec::new();

        if !x_m.is_finite() {
            violations.push(String::from("parameter xm is not a number."));
        } else if x_m <= 0.0 {
            violations.push(String::from("xm must be > 0."));
        }
        if !alpha.is_finite() {
            violations.push(String::from("parameter alpha is not a number."));
        } else if alpha <= 0.0 {
            violations.push(String::from("alpha must be > 0."));
        }

        if !violations.is_empty() {
            return Err(BayesVizError::ParameterDomain { violations });
        }

        return Ok(Pareto {
            x_m,
            alpha,
            domain: ContinuousDomain::From(x_m),
        });
    }

    /// Creates a new [Pareto] distribution without checking.
    ///
    /// ## Safety
    ///
    /// If the conditions of [Pareto::new] are not fullfiled, the returned
    /// distribution will be invalid.
    #[must_use]
    pub const unsafe fn new_unchecked(x_m: f64, alpha: f64) -> Pareto {
        return Pareto {
            x_m,
            alpha,
            domain: ContinuousDomain::From(x_m),
        };
    }

    /// Returns `x_m`, the scale parameter.
    #[must_use]
    pub const fn get_x_m(&self) -> f64 {
        return self.x_m;
    }

    /// Returns `alpha`, the shape parameter.
    #[must_use]
    pub const fn get_alpha(&self) -> f64 {
        return self.alpha;
    }
}

impl Distribution for Pareto {
    fn pdf(&self, x: f64) -> f64 {
        // pdf(x | x_m, alpha) = alpha * x_m^alpha / x^(alpha+1)
        if x < self.x_m {
            return 0.0;
        }
        return self.alpha * self.x_m.powf(self.alpha) / x.powf(self.alpha + 1.0);
    }

    fn cdf(&self, x: f64) -> f64 {
        if x < self.x_m {
            return 0.0;
        }
        return 1.0 - (self.x_m / x).powf(self.alpha);
    }

    fn get_domain(&self) -> &ContinuousDomain {
        return &self.domain;
    }

    fn plot_range(&self) -> (f64, f64) {
        // 8 scale-lengths of tail. For small alpha a lot of mass is left
        // out, but the window would be unusable otherwise.
        let max: f64 = (self.x_m + 8.0 * self.x_m).min(crate::configuration::SINGLE_RANGE_CLAMP);
        return (self.x_m, max);
    }
}
