#![allow(
    non_snake_case,
    clippy::needless_return,
    clippy::assign_op_pattern,
    clippy::excessive_precision
)]

#![warn(
    clippy::all,
    clippy::restriction,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
)]
// ^Disable warning "crate `BayesOverlap` should have a snake case name convert the identifier to snake case: `bayes_overlap`"
// The rest of the names will follow the snake_case convention.

//! # Bayes Overlap
//!
//!
//! This library is the numerical core of an interactive visualizer for
//! comparing two probability distributions. It provides:
//!
//! - [x] PDF/PMF and CDF evaluators for the supported distributions
//! - [x] Special functions (gamma, erf, factorial, combination)
//! - [x] Parameter validation (all violations reported at once)
//! - [x] Per-distribution plotting ranges and range union
//! - [x] Shared sample grids mixing continuous and discrete axes
//! - [x] Overlap-region (Bayes error proxy) computation
//! - [ ] Unequal class priors
//! - [ ] Multivariate class-conditional densities
//! - [x] Updated to rust 2024 version
//!
//! The library itself draws nothing: a renderer consumes the
//! [OverlapReport](overlap::OverlapReport) arrays and is free to update
//! its charts in place. Every evaluation pass is recomputed from scratch,
//! so there is no state to invalidate between parameter changes.
//!
//! ## Distributions
//!
//! We have defined the traits [Distribution](distribution_trait::Distribution) and
//! [DiscreteDistribution](distribution_trait::DiscreteDistribution) with the
//! methods needed to plot a distribution:
//!  - [pdf](distribution_trait::Distribution::pdf) (or
//!    [pmf](distribution_trait::DiscreteDistribution::pmf)): the density at a point.
//!  - [cdf](distribution_trait::Distribution::cdf): the probability of being `<= x`.
//!  - [get_domain](distribution_trait::Distribution::get_domain): the [domain]
//!    of the pdf of the distribution.
//!  - [plot_range](distribution_trait::Distribution::plot_range): a finite
//!    x-axis window that captures essentially all the mass.
//!
//! ### Continuous distributions:
//!
//!  - [x] [Normal distribution](crate::distributions::Normal) ([Wiki](https://en.wikipedia.org/wiki/Normal_distribution))
//!  - [x] [Uniform distribution](crate::distributions::Uniform) ([Wiki](https://en.wikipedia.org/wiki/Continuous_uniform_distribution))
//!  - [x] [Exponential](crate::distributions::Exponential) ([Wiki](https://en.wikipedia.org/wiki/Exponential_distribution))
//!  - [x] [Gamma distribution](crate::distributions::Gamma) ([Wiki](https://en.wikipedia.org/wiki/Gamma_distribution))
//!  - [x] [Beta distribution](crate::distributions::Beta) ([Wiki](https://en.wikipedia.org/wiki/Beta_distribution))
//!  - [x] [Pareto distribution](crate::distributions::Pareto) ([Wiki](https://en.wikipedia.org/wiki/Pareto_distribution))
//!
//! ### Discrete distributions:
//!
//!  - [x] [Bernoulli](distributions::Bernoulli) ([Wiki](https://en.wikipedia.org/wiki/Bernoulli_distribution))
//!  - [x] [Binomial](distributions::Binomial) ([Wiki](https://en.wikipedia.org/wiki/Binomial_distribution))
//!  - [x] [Discrete Uniform](distributions::DiscreteUniform) ([Wiki](https://en.wikipedia.org/wiki/Discrete_uniform_distribution))
//!  - [x] [Geometric distribution](distributions::Geometric) ([Wiki](https://en.wikipedia.org/wiki/Geometric_distribution))
//!  - [x] [Negative binomial distribution](distributions::NegativeBinomial) ([Wiki](https://en.wikipedia.org/wiki/Negative_binomial_distribution))
//!  - [x] [Poisson distribution](distributions::Poisson) ([Wiki](https://en.wikipedia.org/wiki/Poisson_distribution))
//!  - [x] [Hypergeometric distribution](distributions::Hypergeometric) ([Wiki](https://en.wikipedia.org/wiki/Hypergeometric_distribution))
//!
//! All of them are wrapped by the closed
//! [AnyDistribution](distributions::AnyDistribution) enum, so adding a new
//! distribution forces the evaluators, the validator and the range selector
//! to be wired at compile time.
//!
//! ## Overlap
//!
//! The overlap region between two class-conditional densities is used as a
//! visual proxy for the [Bayes error rate](https://en.wikipedia.org/wiki/Bayes_error_rate)
//! of the corresponding two-class problem with equal priors. See
//! [overlap::overlap_report] and [overlap::evaluate_pair].
//!
//!
//! ***
//!

pub mod configuration;
pub mod distribution_trait;
pub mod distributions;
pub mod domain;
pub mod errors;
pub mod euclid;
pub mod overlap;
