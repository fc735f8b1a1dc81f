//! # Normal distribution
//!
//! The [Normal distribution](https://en.wikipedia.org/wiki/Normal_distribution)
//! is a very important continuous probability distribution.
//!
//! This distribution is very frequent in statistics and extremly well studied.
//! In the two-class overlap plots it is usually the first thing a user reaches
//! for, since moving `mean` apart while keeping `std_dev` fixed is the classic
//! way to show the Bayes error region shrinking.
//!

use crate::{
    distribution_trait::Distribution,
    domain::ContinuousDomain,
    errors::BayesVizError,
    euclid,
};

pub const NORMAL_DOMAIN: ContinuousDomain = ContinuousDomain::Reals;

#[derive(Debug, Clone, PartialEq)]
pub struct Normal {
    /// The mean of the distribution
    mean: f64,
    /// The standard deviation of the distribution
    standard_deviation: f64,
}

impl Normal {
    /// Create a [Normal] distribution.
    ///
    ///  - The `mean` must be finite (No `+-inf` or NaNs)
    ///  - The `standard_deviation` must be finite (No `+-inf` or NaNs)
    ///  - The `standard_deviation` must be stricly greater than `0.0`.
    ///
    /// If those conditions are not fullfiled, an error with **all** the
    /// violations will be returned.
    pub fn new(mean: f64, standard_deviation: f64) -> Result<Normal, BayesVizError> {
        let mut violations: Vec<String> = Vec::new();

        if !mean.is_finite() {
            violations.push(String::from("parameter mu is not a number."));
        }
        if !standard_deviation.is_finite() {
            violations.push(String::from("parameter sigma is not a number."));
        } else if standard_deviation <= 0.0 {
            violations.push(String::from("sigma must be > 0."));
        }

        if !violations.is_empty() {
            return Err(BayesVizError::ParameterDomain { violations });
        }

        return Ok(Normal {
            mean,
            standard_deviation,
        });
    }

    /// Create a [Normal] distribution without checking for the corrrectness
    /// of the inputs.
    ///
    /// ## Safety
    ///
    /// If the conditions of [Normal::new] are not fullfiled, the returned
    /// distribution will be invalid.
    #[must_use]
    pub const unsafe fn new_unchecked(mean: f64, standard_deviation: f64) -> Normal {
        return Normal {
            mean,
            standard_deviation,
        };
    }

    /// Returns the mean, the first parameter of the normal distribution.
    #[must_use]
    pub const fn get_mean(&self) -> f64 {
        return self.mean;
    }

    /// Returns the standard deviation, the second parameter of the normal
    /// distribution.
    #[must_use]
    pub const fn get_standard_deviation(&self) -> f64 {
        return self.standard_deviation;
    }
}

impl Distribution for Normal {
    fn pdf(&self, x: f64) -> f64 {
        let inv_std: f64 = 1.0 / self.standard_deviation;
        let z: f64 = (x - self.mean) * inv_std;
        return euclid::INV_SQRT_2_PI * inv_std * (-0.5 * z * z).exp();
    }

    fn cdf(&self, x: f64) -> f64 {
        // cdf(x) = 0.5 * (1 + erf((x - mean) / (std * sqrt(2))))
        let z: f64 = (x - self.mean) / (self.standard_deviation * std::f64::consts::SQRT_2);
        return 0.5 * (1.0 + euclid::erf(z));
    }

    fn get_domain(&self) -> &ContinuousDomain {
        return &NORMAL_DOMAIN;
    }

    fn plot_range(&self) -> (f64, f64) {
        // 4 standard deviations to each side leave out less mass than any
        // plot could show (~0.0063%).
        let min: f64 = (self.mean - 4.0 * self.standard_deviation)
            .max(-crate::configuration::SINGLE_RANGE_CLAMP);
        let max: f64 = (self.mean + 4.0 * self.standard_deviation)
            .min(crate::configuration::SINGLE_RANGE_CLAMP);
        return (min, max);
    }
}
