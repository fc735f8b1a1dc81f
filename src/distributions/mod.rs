//! The supported distributions and the closed dispatch over them.
//!
//! Each distribution lives in it's own module with a concrete struct
//! implementing [Distribution](crate::distribution_trait::Distribution) or
//! [DiscreteDistribution](crate::distribution_trait::DiscreteDistribution).
//! On top of that, this module defines:
//!
//!  - [DistributionKind]: a closed enum with one variant per supported
//!     distribution. Every dispatch below is an exhaustive `match`, so adding
//!     a new distribution forces the parameter table, the validating
//!     constructor and the evaluators to be wired (the compiler refuses to
//!     build otherwise).
//!  - [ParameterSet]: the name -> value mapping that sliders mutate.
//!  - [AnyDistribution]: a validated, ready to evaluate distribution of any
//!     of the supported kinds.
//!

// Discrete
pub mod Bernoulli;
pub mod Binomial;
pub mod DiscreteUniform;
pub mod Geometric;
pub mod Hypergeometric;
pub mod NegativeBinomial;
pub mod Poisson;

// Continuous
pub mod Beta;
pub mod Exponential;
pub mod Gamma;
pub mod Normal;
pub mod Pareto;
pub mod Uniform;

use std::collections::HashMap;

use crate::distribution_trait::{DiscreteDistribution, Distribution};
use crate::errors::BayesVizError;

/// Identifies one of the supported distributions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistributionKind {
    Normal,
    Exponential,
    Gamma,
    Beta,
    Pareto,
    Uniform,
    DiscreteUniform,
    Bernoulli,
    Binomial,
    Geometric,
    NegativeBinomial,
    Poisson,
    Hypergeometric,
}

/// The static description of a [DistributionKind]: wether it is discrete and
/// the ordered names of its parameters (the names the sliders and the
/// [ParameterSet] use).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistributionSpec {
    pub kind: DistributionKind,
    pub is_discrete: bool,
    pub param_names: &'static [&'static str],
}

impl DistributionKind {
    /// Every supported kind, continuous first.
    pub const ALL: [DistributionKind; 13] = [
        DistributionKind::Normal,
        DistributionKind::Exponential,
        DistributionKind::Gamma,
        DistributionKind::Beta,
        DistributionKind::Pareto,
        DistributionKind::Uniform,
        DistributionKind::DiscreteUniform,
        DistributionKind::Bernoulli,
        DistributionKind::Binomial,
        DistributionKind::Geometric,
        DistributionKind::NegativeBinomial,
        DistributionKind::Poisson,
        DistributionKind::Hypergeometric,
    ];

    /// Returns the [DistributionSpec] of this kind.
    #[must_use]
    pub const fn spec(self) -> DistributionSpec {
        let (is_discrete, param_names): (bool, &'static [&'static str]) = match self {
            DistributionKind::Normal => (false, &["mu", "sigma"]),
            DistributionKind::Exponential => (false, &["lambda"]),
            DistributionKind::Gamma => (false, &["alpha", "beta"]),
            DistributionKind::Beta => (false, &["alpha", "beta"]),
            DistributionKind::Pareto => (false, &["xm", "alpha"]),
            DistributionKind::Uniform => (false, &["a", "b"]),
            DistributionKind::DiscreteUniform => (true, &["a", "b"]),
            DistributionKind::Bernoulli => (true, &["p"]),
            DistributionKind::Binomial => (true, &["n", "p"]),
            DistributionKind::Geometric => (true, &["p"]),
            DistributionKind::NegativeBinomial => (true, &["r", "p"]),
            DistributionKind::Poisson => (true, &["lambda"]),
            DistributionKind::Hypergeometric => (true, &["N", "K", "n"]),
        };

        return DistributionSpec {
            kind: self,
            is_discrete,
            param_names,
        };
    }

    /// Validates `parameters` and builds the corresponding
    /// [AnyDistribution].
    ///
    /// On failure returns [BayesVizError::ParameterDomain] with **every**
    /// violation found (a missing parameter reads as NaN and is reported as
    /// not being a number). No distribution is built on any violation.
    pub fn build(self, parameters: &ParameterSet) -> Result<AnyDistribution, BayesVizError> {
        let p = |name: &str| -> f64 { parameters.value_of(name) };

        let ret: AnyDistribution = match self {
            DistributionKind::Normal => {
                AnyDistribution::Normal(Normal::Normal::new(p("mu"), p("sigma"))?)
            }
            DistributionKind::Exponential => {
                AnyDistribution::Exponential(Exponential::Exponential::new(p("lambda"))?)
            }
            DistributionKind::Gamma => {
                AnyDistribution::Gamma(Gamma::Gamma::new(p("alpha"), p("beta"))?)
            }
            DistributionKind::Beta => {
                AnyDistribution::Beta(Beta::Beta::new(p("alpha"), p("beta"))?)
            }
            DistributionKind::Pareto => {
                AnyDistribution::Pareto(Pareto::Pareto::new(p("xm"), p("alpha"))?)
            }
            DistributionKind::Uniform => {
                AnyDistribution::Uniform(Uniform::Uniform::new(p("a"), p("b"))?)
            }
            DistributionKind::DiscreteUniform => AnyDistribution::DiscreteUniform(
                DiscreteUniform::DiscreteUniform::new(p("a"), p("b"))?,
            ),
            DistributionKind::Bernoulli => {
                AnyDistribution::Bernoulli(Bernoulli::Bernoulli::new(p("p"))?)
            }
            DistributionKind::Binomial => {
                AnyDistribution::Binomial(Binomial::Binomial::new(p("n"), p("p"))?)
            }
            DistributionKind::Geometric => {
                AnyDistribution::Geometric(Geometric::Geometric::new(p("p"))?)
            }
            DistributionKind::NegativeBinomial => AnyDistribution::NegativeBinomial(
                NegativeBinomial::NegativeBinomial::new(p("r"), p("p"))?,
            ),
            DistributionKind::Poisson => {
                AnyDistribution::Poisson(Poisson::Poisson::new(p("lambda"))?)
            }
            DistributionKind::Hypergeometric => AnyDistribution::Hypergeometric(
                Hypergeometric::Hypergeometric::new(p("N"), p("K"), p("n"))?,
            ),
        };

        return Ok(ret);
    }
}

/// The current parameter values of one distribution instance, keyed by the
/// names in [DistributionSpec::param_names].
///
/// The core never mutates a [ParameterSet]: the caller (the UI layer) owns
/// it, updates it on slider input and passes it by reference into each
/// evaluation pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParameterSet {
    values: HashMap<String, f64>,
}

impl ParameterSet {
    /// Creates an empty [ParameterSet].
    #[must_use]
    pub fn new() -> ParameterSet {
        return ParameterSet {
            values: HashMap::new(),
        };
    }

    /// Creates a [ParameterSet] from `(name, value)` pairs.
    #[must_use]
    pub fn from_pairs(pairs: &[(&str, f64)]) -> ParameterSet {
        let mut ret: ParameterSet = ParameterSet::new();
        for (name, value) in pairs {
            ret.set(name, *value);
        }
        return ret;
    }

    /// Sets the parameter `name` to `value`, overwriting any previous value.
    pub fn set(&mut self, name: &str, value: f64) {
        self.values.insert(String::from(name), value);
    }

    /// Returns the value of the parameter `name`, or NaN if it was never
    /// set. The NaN will be caught by validation and reported as the
    /// parameter not being a number.
    #[must_use]
    pub fn value_of(&self, name: &str) -> f64 {
        return self.values.get(name).copied().unwrap_or(f64::NAN);
    }
}

/// A validated distribution of any of the supported kinds, ready to be
/// evaluated over a grid.
///
/// All the methods dispatch with an exhaustive `match`, so a new variant
/// cannot be added without implementing all of them.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyDistribution {
    Normal(Normal::Normal),
    Exponential(Exponential::Exponential),
    Gamma(Gamma::Gamma),
    Beta(Beta::Beta),
    Pareto(Pareto::Pareto),
    Uniform(Uniform::Uniform),
    DiscreteUniform(DiscreteUniform::DiscreteUniform),
    Bernoulli(Bernoulli::Bernoulli),
    Binomial(Binomial::Binomial),
    Geometric(Geometric::Geometric),
    NegativeBinomial(NegativeBinomial::NegativeBinomial),
    Poisson(Poisson::Poisson),
    Hypergeometric(Hypergeometric::Hypergeometric),
}

impl AnyDistribution {
    /// Returns the [DistributionKind] of this distribution.
    #[must_use]
    pub const fn kind(&self) -> DistributionKind {
        return match self {
            AnyDistribution::Normal(_) => DistributionKind::Normal,
            AnyDistribution::Exponential(_) => DistributionKind::Exponential,
            AnyDistribution::Gamma(_) => DistributionKind::Gamma,
            AnyDistribution::Beta(_) => DistributionKind::Beta,
            AnyDistribution::Pareto(_) => DistributionKind::Pareto,
            AnyDistribution::Uniform(_) => DistributionKind::Uniform,
            AnyDistribution::DiscreteUniform(_) => DistributionKind::DiscreteUniform,
            AnyDistribution::Bernoulli(_) => DistributionKind::Bernoulli,
            AnyDistribution::Binomial(_) => DistributionKind::Binomial,
            AnyDistribution::Geometric(_) => DistributionKind::Geometric,
            AnyDistribution::NegativeBinomial(_) => DistributionKind::NegativeBinomial,
            AnyDistribution::Poisson(_) => DistributionKind::Poisson,
            AnyDistribution::Hypergeometric(_) => DistributionKind::Hypergeometric,
        };
    }

    /// Returns `true` if the distribution is discrete.
    #[must_use]
    pub const fn is_discrete(&self) -> bool {
        return self.kind().spec().is_discrete;
    }

    /// Evaluates the density (pdf for continuous, pmf for discrete) at `x`.
    #[must_use]
    pub fn density(&self, x: f64) -> f64 {
        return match self {
            AnyDistribution::Normal(d) => d.pdf(x),
            AnyDistribution::Exponential(d) => d.pdf(x),
            AnyDistribution::Gamma(d) => d.pdf(x),
            AnyDistribution::Beta(d) => d.pdf(x),
            AnyDistribution::Pareto(d) => d.pdf(x),
            AnyDistribution::Uniform(d) => d.pdf(x),
            AnyDistribution::DiscreteUniform(d) => d.pmf(x),
            AnyDistribution::Bernoulli(d) => d.pmf(x),
            AnyDistribution::Binomial(d) => d.pmf(x),
            AnyDistribution::Geometric(d) => d.pmf(x),
            AnyDistribution::NegativeBinomial(d) => d.pmf(x),
            AnyDistribution::Poisson(d) => d.pmf(x),
            AnyDistribution::Hypergeometric(d) => d.pmf(x),
        };
    }

    /// Evaluates the cumulative distribution function at `x`.
    #[must_use]
    pub fn cdf(&self, x: f64) -> f64 {
        return match self {
            AnyDistribution::Normal(d) => d.cdf(x),
            AnyDistribution::Exponential(d) => d.cdf(x),
            AnyDistribution::Gamma(d) => d.cdf(x),
            AnyDistribution::Beta(d) => d.cdf(x),
            AnyDistribution::Pareto(d) => d.cdf(x),
            AnyDistribution::Uniform(d) => d.cdf(x),
            AnyDistribution::DiscreteUniform(d) => DiscreteDistribution::cdf(d, x),
            AnyDistribution::Bernoulli(d) => DiscreteDistribution::cdf(d, x),
            AnyDistribution::Binomial(d) => DiscreteDistribution::cdf(d, x),
            AnyDistribution::Geometric(d) => DiscreteDistribution::cdf(d, x),
            AnyDistribution::NegativeBinomial(d) => DiscreteDistribution::cdf(d, x),
            AnyDistribution::Poisson(d) => DiscreteDistribution::cdf(d, x),
            AnyDistribution::Hypergeometric(d) => DiscreteDistribution::cdf(d, x),
        };
    }

    /// Returns the finite `(min, max)` x-axis window of this distribution
    /// for its current parameters.
    #[must_use]
    pub fn plot_range(&self) -> (f64, f64) {
        return match self {
            AnyDistribution::Normal(d) => d.plot_range(),
            AnyDistribution::Exponential(d) => d.plot_range(),
            AnyDistribution::Gamma(d) => d.plot_range(),
            AnyDistribution::Beta(d) => d.plot_range(),
            AnyDistribution::Pareto(d) => d.plot_range(),
            AnyDistribution::Uniform(d) => d.plot_range(),
            AnyDistribution::DiscreteUniform(d) => DiscreteDistribution::plot_range(d),
            AnyDistribution::Bernoulli(d) => DiscreteDistribution::plot_range(d),
            AnyDistribution::Binomial(d) => DiscreteDistribution::plot_range(d),
            AnyDistribution::Geometric(d) => DiscreteDistribution::plot_range(d),
            AnyDistribution::NegativeBinomial(d) => DiscreteDistribution::plot_range(d),
            AnyDistribution::Poisson(d) => DiscreteDistribution::plot_range(d),
            AnyDistribution::Hypergeometric(d) => DiscreteDistribution::plot_range(d),
        };
    }
}
