//! # Gamma distribution
//!
//! The [Gamma distribution](https://en.wikipedia.org/wiki/Gamma_distribution)
//! is a continuous distribution with 2 parameters: the shape `alpha` and the
//! rate `beta`. It generalizes some other distributions:
//!  - A Gamma with `alpha = 1` is an [Exponential](crate::distributions::Exponential)
//!     with `lambda = beta`.
//!  - The sum of `k` Exponentials with rate `beta` is a Gamma with
//!     `alpha = k`.
//!
//! The cdf has no closed form. We evaluate the
//! [lower incomplete gamma function](https://en.wikipedia.org/wiki/Incomplete_gamma_function)
//! with it's power series, truncated at a fixed tolerance so the computation
//! always terminates.
//!

use crate::{
    configuration::GAMMA_CDF_SERIES_TOLERANCE,
    distribution_trait::Distribution,
    domain::ContinuousDomain,
    errors::BayesVizError,
    euclid,
};

pub const GAMMA_DOMAIN: ContinuousDomain = ContinuousDomain::From(0.0);

/// Backstop for the series iteration count. With the plotting clamps in
/// place the series needs at most a few thousand terms; this bound only
/// matters for pathological direct calls.
const GAMMA_CDF_MAX_TERMS: u32 = 10_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Gamma {
    alpha: f64,
    beta: f64,
}

impl Gamma {
    /// Creates a new [Gamma] distribution.
    ///
    ///  - `alpha`: the shape parameter. Must be finite and `0.0 < alpha`.
    ///  - `beta`: the rate parameter. Must be finite and `0.0 < beta`.
    ///
    /// If those conditions are not fullfiled, an error with **all** the
    /// violations will be returned.
    pub fn new(alpha: f64, beta: f64) -> Result<Gamma, BayesVizError> {
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

        return Ok(Gamma { alpha, beta });
    }

    /// Creates a new [Gamma] distribution without checking.
    ///
    /// ## Safety
    ///
    /// If the conditions of [Gamma::new] are not fullfiled, the returned
    /// distribution will be invalid.
    #[must_use]
    pub const unsafe fn new_unchecked(alpha: f64, beta: f64) -> Gamma {
        return Gamma { alpha, beta };
    }

    /// Returns `alpha`, the shape parameter.
    #[must_use]
    pub const fn get_alpha(&self) -> f64 {
        return self.alpha;
    }

    /// Returns `beta`, the rate parameter.
    #[must_use]
    pub const fn get_beta(&self) -> f64 {
        return self.beta;
    }
}

impl Distribution for Gamma {
    fn pdf(&self, x: f64) -> f64 {
        // pdf(x | alpha, beta) = beta^alpha * x^(alpha-1) * e^(-beta*x) / gamma(alpha)
        if x <= 0.0 {
            return 0.0;
        }
        return self.beta.powf(self.alpha) * x.powf(self.alpha - 1.0) * (-self.beta * x).exp()
            / euclid::gamma(self.alpha);
    }

    fn cdf(&self, x: f64) -> f64 {
        /*
           cdf(x | alpha, beta) = P(alpha, beta*x)

           where P is the regularized lower incomplete gamma function,
           evaluated with it's power series:

           P(a, z) = z^a * e^-z / gamma(a + 1) * (1 + sum_{k=1..} z^k / ((a+1) * ... * (a+k)))

           Every term is non-negative, so the truncated sum is monotone in x.
           The terms grow until k ~ z - a and decay geometrically afterwards;
           we cut off once a term drops below the tolerance.
        */
        if x <= 0.0 {
            return 0.0;
        }

        let z: f64 = self.beta * x;
        let mut term: f64 = (self.alpha * z.ln() - z - euclid::ln_gamma(self.alpha + 1.0)).exp();

        if term == 0.0 {
            // The prefactor underflowed: either essentially all the mass is
            // below z (huge z) or above it (z ~ 0 with a large alpha).
            return if self.alpha < z { 1.0 } else { 0.0 };
        }

        let mut accumulator: f64 = 0.0;
        let mut k: u32 = 0;
        // Terms keep growing while z / (alpha + k) > 1, so the tolerance
        // cutoff only applies once the series is past its peak.
        while (GAMMA_CDF_SERIES_TOLERANCE < term || (k as f64) < z - self.alpha)
            && k < GAMMA_CDF_MAX_TERMS
        {
            accumulator += term;
            k += 1;
            term = term * z / (self.alpha + k as f64);
        }
        accumulator += term;

        return accumulator.min(1.0);
    }

    fn get_domain(&self) -> &ContinuousDomain {
        return &GAMMA_DOMAIN;
    }

    fn plot_range(&self) -> (f64, f64) {
        // 4 means wide (mean = alpha/beta), but at least [0, 8]
        let max: f64 = (4.0 * self.alpha / self.beta)
            .max(8.0)
            .min(crate::configuration::SINGLE_RANGE_CLAMP);
        return (0.0, max);
    }
}
