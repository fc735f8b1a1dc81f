//! The traits every distribution in this library implements.
//!
//! There are 2 traits depending on if the distribution is continuous
//! ([Distribution]) or discrete ([DiscreteDistribution]). Both expose the
//! minimum needed to plot a distribution and to compare it against another
//! one: the density, the cumulative probability, the support and a finite
//! plotting window.
//!
//! Unlike a full statistics library there are no sampling, quantile or
//! moment methods here: every evaluation pass of the visualizer only needs
//! pointwise evaluations over a grid.
//!

use crate::domain::{ContinuousDomain, DiscreteDomain};

/// A continuous probability distribution.
pub trait Distribution {
    /// Evaluates the [PDF](https://en.wikipedia.org/wiki/Probability_density_function)
    /// (Probability Density function) of the distribution at point `x`.
    ///
    /// Returns `0.0` for any `x` outside the support (instead of failing).
    /// The returned values are always non-negative.
    #[must_use]
    fn pdf(&self, x: f64) -> f64;

    /// Evaluates the [CDF](https://en.wikipedia.org/wiki/Cumulative_distribution_function)
    /// (Cumulative Distribution function) of the distribution at point `x`:
    /// the probability of the random variable being less or equal to `x`.
    ///
    /// The result is non-decreasing in `x` and bounded to `[0, 1]` (up to
    /// the error of the numerical approximation used).
    #[must_use]
    fn cdf(&self, x: f64) -> f64;

    /// Returns a reference to the [domain](crate::domain::ContinuousDomain)
    /// of the pdf: the points where it is non-zero.
    #[must_use]
    fn get_domain(&self) -> &ContinuousDomain;

    /// Returns a finite `(min, max)` x-axis window that captures essentially
    /// all the probability mass of the distribution for its current
    /// parameters. Always satisfies `min <= max` and both values are finite.
    #[must_use]
    fn plot_range(&self) -> (f64, f64);
}

/// A discrete probability distribution (over the integers).
pub trait DiscreteDistribution {
    /// Evaluates the [PMF](https://en.wikipedia.org/wiki/Probability_mass_function)
    /// (Probability Mass function) of the distribution at point `x`.
    ///
    /// Returns `0.0` for any `x` outside the support (instead of failing).
    /// The returned values are always non-negative.
    #[must_use]
    fn pmf(&self, x: f64) -> f64;

    /// Evaluates the [CDF](https://en.wikipedia.org/wiki/Cumulative_distribution_function)
    /// (Cumulative Distribution function) of the distribution at point `x`:
    /// the probability of the random variable being less or equal to `x`.
    ///
    /// At integer points this is exacly the cumulative sum of the pmf over
    /// the support up to `x` (within floating point tolerance).
    #[must_use]
    fn cdf(&self, x: f64) -> f64;

    /// Returns a reference to the [domain](crate::domain::DiscreteDomain)
    /// of the pmf: the points where it is non-zero.
    #[must_use]
    fn get_domain(&self) -> &DiscreteDomain;

    /// Returns a finite `(min, max)` x-axis window that captures essentially
    /// all the probability mass of the distribution for its current
    /// parameters. Always satisfies `min <= max` and both values are finite.
    #[must_use]
    fn plot_range(&self) -> (f64, f64);
}
