//! # Hypergeometric distribution
//!
//! The [Hypergeometric distribution](https://en.wikipedia.org/wiki/Hypergeometric_distribution)
//! describes drawing `n` elements **without replacement** from a population
//! of `N` elements of wich `K` are successes, and counting the successes in
//! the draw.
//!
//! Unlike the [Binomial](crate::distributions::Binomial) (its
//! with-replacement counterpart), the trials are not independent.
//!

use crate::{
    distribution_trait::DiscreteDistribution,
    domain::DiscreteDomain,
    errors::BayesVizError,
    euclid,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Hypergeometric {
    /// The population size. Always integer valued.
    n_population: f64,
    /// The number of successes in the population. Always integer valued.
    k_successes: f64,
    /// The number of draws. Always integer valued.
    n_draws: f64,
    domain: DiscreteDomain,
}

impl Hypergeometric {
    /// Creates a new [Hypergeometric] distribution.
    ///
    ///  - `n_population` (`N`): the population size. Must be an integer and `1 <= N`.
    ///  - `k_successes` (`K`): the successes in the population. Must be an integer and `1 <= K`.
    ///  - `n_draws` (`n`): the number of draws. Must be an integer and `1 <= n`.
    ///
    /// If those conditions are not fullfiled, an error with **all** the
    /// violations will be returned. Note that a population smaller than the
    /// draws (`N < n`) is not rejected here: the pmf is just 0 everywhere,
    /// wich mirrors how the original visualizer behaves.
    pub fn new(
        n_population: f64,
        k_successes: f64,
        n_draws: f64,
    ) -> Result<Hypergeometric, BayesVizError> {
        let mut violations: Vec<String> = Vec::new();

        for (value, name) in [
            (n_population, "N"),
            (k_successes, "K"),
            (n_draws, "n"),
        ] {
            if !value.is_finite() {
                violations.push(std::format!("parameter {} is not a number.", name));
            } else {
                if value < 1.0 {
                    violations.push(std::format!("{} must be >= 1.", name));
                }
                if value.fract() != 0.0 {
                    violations.push(std::format!("{} must be an integer.", name));
                }
            }
        }

        if !violations.is_empty() {
            return Err(BayesVizError::ParameterDomain { violations });
        }

        return Ok(Hypergeometric {
            n_population,
            k_successes,
            n_draws,
            domain: DiscreteDomain::Range(0, k_successes.min(n_draws) as i64),
        });
    }

    /// Creates a new [Hypergeometric] distribution without checking.
    ///
    /// ## Safety
    ///
    /// If the conditions of [Hypergeometric::new] are not fullfiled, the
    /// returned distribution will be invalid.
    #[must_use]
    pub const unsafe fn new_unchecked(
        n_population: f64,
        k_successes: f64,
        n_draws: f64,
    ) -> Hypergeometric {
        return Hypergeometric {
            n_population,
            k_successes,
            n_draws,
            domain: DiscreteDomain::Range(
                0,
                (if k_successes < n_draws {
                    k_successes
                } else {
                    n_draws
                }) as i64,
            ),
        };
    }

    /// Returns `N`, the population size.
    #[must_use]
    pub const fn get_population(&self) -> f64 {
        return self.n_population;
    }

    /// Returns `K`, the number of successes in the population.
    #[must_use]
    pub const fn get_successes(&self) -> f64 {
        return self.k_successes;
    }

    /// Returns `n`, the number of draws.
    #[must_use]
    pub const fn get_draws(&self) -> f64 {
        return self.n_draws;
    }
}

impl DiscreteDistribution for Hypergeometric {
    fn pmf(&self, x: f64) -> f64 {
        // pmf(x | N, K, n) = C(K, x) * C(N-K, n-x) / C(N, n)
        if !self.domain.contains(x) {
            return 0.0;
        }
        if self.n_population < self.n_draws {
            // more draws than population: no valid draw exists
            return 0.0;
        }

        let n_int: i64 = self.n_population as i64;
        let k_int: i64 = self.k_successes as i64;
        let draws_int: i64 = self.n_draws as i64;
        let x_int: i64 = x as i64;

        return euclid::combination(k_int, x_int)
            * euclid::combination(n_int - k_int, draws_int - x_int)
            / euclid::combination(n_int, draws_int);
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
        return &self.domain;
    }

    fn plot_range(&self) -> (f64, f64) {
        // the support is finite, plot all of it
        return self.domain.get_bounds();
    }
}
