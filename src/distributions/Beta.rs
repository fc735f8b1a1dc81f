//! # Beta distribution
//!
//! The [Beta distribution](https://en.wikipedia.org/wiki/Beta_distribution)
//! is a continuous distribution defined on the interval `[0, 1]`, with 2
//! shape parameters `alpha` and `beta`.
//!
//! It is very flexible: depending on the parameters the pdf can be flat
//! (`alpha = beta = 1`, the [Uniform](crate::distributions::Uniform) on
//! `[0, 1]`), bell shaped, U shaped or J shaped. Note that for `alpha < 1.0`
//! (or `beta < 1.0`) the density diverges at the corresponding endpoint;
//! the cdf integration skips the non-finite evaluations.
//!
//! The cdf has no closed form. Here it is aproximated with a cumulative
//! fixed-step numerical integration, wich is accurate enough for plotting.
//!

use crate::{
    configuration::BETA_CDF_INTEGRATION_STEP,
    distribution_trait::Distribution,
    domain::ContinuousDomain,
    errors::BayesVizError,
    euclid,
};

pub const BETA_DOMAIN: ContinuousDomain = ContinuousDomain::Range(0.0, 1.0);

#[derive(Debug, Clone, PartialEq)]
pub struct Beta {
    alpha: f64,
    beta: f64,
}

impl Beta {
    /// Creates a new [Beta] distribution.
    ///
    ///  - `alpha`: the first shape parameter. Must be finite and `0.0 < alpha`.
    ///  - `beta`: the second shape parameter. Must be finite and `0.0 < beta`.
    ///
    /// If those conditions are not fullfiled, an error with **all** the
    /// violations will be returned.
    pub fn new(alpha: f64, beta: f64) -> Result<Beta, BayesVizError> {
        let mut violations: Vec<String> = Vec::new();

        if !alpha.is_finite() {
            violations.push(String::from("parameter alpha is not a number."));
        } else if alpha <= 0.0 {
            violations.push(String::from("alpha must be > 0."));
        }
        if !beta.is_finite() {
            violations.push(String::from("parameter beta is not a number."));
        } else if beta <= 0.0 {
            violations.push(String::from("beta must be > 0."));
        }

        if !violations.is_empty() {
            return Err(BayesVizError::ParameterDomain { violations });
        }

        return Ok(Beta { alpha, beta });
    }

    /// Creates a new [Beta] distribution without checking.
    ///
    /// ## Safety
    ///
    /// If the conditions of [Beta::new] are not fullfiled, the returned
    /// distribution will be invalid.
    #[must_use]
    pub const unsafe fn new_unchecked(alpha: f64, beta: f64) -> Beta {
        return Beta { alpha, beta };
    }

    /// Returns `alpha`, the first shape parameter.
    #[must_use]
    pub const fn get_alpha(&self) -> f64 {
        return self.alpha;
    }

    /// Returns `beta`, the second shape parameter.
    #[must_use]
    pub const fn get_beta(&self) -> f64 {
        return self.beta;
    }

    /// The unnormalized density `x^(alpha-1) * (1-x)^(beta-1)`.
    fn density_kernel(&self, x: f64) -> f64 {
        return x.powf(self.alpha - 1.0) * (1.0 - x).powf(self.beta - 1.0);
    }
}

impl Distribution for Beta {
    fn pdf(&self, x: f64) -> f64 {
        // pdf(x | alpha, beta) = x^(alpha-1) * (1-x)^(beta-1) / B(alpha, beta)
        if !BETA_DOMAIN.contains(x) {
            return 0.0;
        }
        return self.density_kernel(x) / euclid::beta_fn(self.alpha, self.beta);
    }

    fn cdf(&self, x: f64) -> f64 {
        /*
           Cumulative fixed-step integration of the density kernel from 0 to x,
           normalized by B(alpha, beta) at the end.

           For alpha < 1 (or beta < 1) the kernel is infinite at the endpoint;
           those evaluations are skipped, wich keeps the accumulated sum finite
           and non-decreasing.
        */
        if x < 0.0 {
            return 0.0;
        }
        if 1.0 <= x {
            return 1.0;
        }

        let step: f64 = BETA_CDF_INTEGRATION_STEP;
        let mut accumulator: f64 = 0.0;
        let mut i: f64 = 0.0;
        while i <= x {
            let kernel: f64 = self.density_kernel(i);
            if kernel.is_finite() {
                accumulator += kernel;
            }
            i += step;
        }

        let cdf: f64 = accumulator * step / euclid::beta_fn(self.alpha, self.beta);
        return cdf.min(1.0);
    }

    fn get_domain(&self) -> &ContinuousDomain {
        return &BETA_DOMAIN;
    }

    fn plot_range(&self) -> (f64, f64) {
        // the support is the whole plotting window
        return (0.0, 1.0);
    }
}
