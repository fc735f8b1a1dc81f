use BayesOverlap::{
    distribution_trait::{DiscreteDistribution, Distribution},
    distributions::Bernoulli::*, distributions::Beta::*, distributions::Binomial::*,
    distributions::DiscreteUniform::*, distributions::Exponential::*,
    distributions::Gamma::*, distributions::Geometric::*, distributions::Hypergeometric::*,
    distributions::NegativeBinomial::*, distributions::Normal::*, distributions::Pareto::*,
    distributions::Poisson::*, distributions::Uniform::*,
};

#[inline]
fn assert_approx_eq(a: f64, b: f64) {
    let eps: f64 = 1.0e-6;

    assert!(
        (a - b).abs() < eps,
        "assertion failed: `(left !== right)` \
         (left: `{:?}`, right: `{:?}`, expect diff: `{:?}`, real diff: `{:?}`)",
        a,
        b,
        eps,
        (a - b).abs()
    );
}

/// Trapezoid integration of the pdf over its own plotting window. Used to
/// check that the continuous densities integrate to ~1.
fn integrate_pdf<D: Distribution>(distribution: &D, step: f64) -> f64 {
    let (min, max): (f64, f64) = distribution.plot_range();
    let mut accumulator: f64 = 0.0;
    let mut i: u64 = 0;
    loop {
        let x: f64 = min + (i as f64) * step;
        if max < x {
            break;
        }
        let weight: f64 = if i == 0 || max < x + step { 0.5 } else { 1.0 };
        accumulator += weight * distribution.pdf(x);
        i += 1;
    }
    return accumulator * step;
}

/// Checks that the cdf is non-decreasing when sampled with `step` over the
/// plotting window (with a small tolerance for the numerical approximations).
fn assert_cdf_monotone(cdf: impl Fn(f64) -> f64, range: (f64, f64), step: f64) {
    let eps: f64 = 1.0e-7;
    let mut previous: f64 = cdf(range.0);
    let mut x: f64 = range.0 + step;
    while x <= range.1 {
        let current: f64 = cdf(x);
        assert!(
            previous <= current + eps,
            "cdf not monotone: cdf({}) = {} > {}",
            x - step,
            previous,
            current
        );
        assert!((-eps..=1.0 + eps).contains(&current));
        previous = current;
        x += step;
    }
}

#[cfg(test)]
mod normal_tests {
    use super::*;

    #[test]
    fn test_pdf() {
        let distribution: Normal = Normal::new(0.0, 1.0).expect("Parameters should be valid");
        assert_approx_eq(distribution.pdf(0.0), 0.3989422804014327);
        assert_approx_eq(distribution.pdf(1.0), 0.24197072451914337);
        assert_approx_eq(distribution.pdf(-1.0), distribution.pdf(1.0));
    }

    #[test]
    fn test_cdf() {
        let distribution: Normal = Normal::new(0.0, 1.0).expect("Parameters should be valid");
        assert_approx_eq(distribution.cdf(0.0), 0.5);
        assert_approx_eq(distribution.cdf(1.959964), 0.975);
        assert_approx_eq(distribution.cdf(-8.0), 0.0);
        assert_approx_eq(distribution.cdf(8.0), 1.0);
    }

    #[test]
    fn test_scaled_cdf() {
        let distribution: Normal = Normal::new(2.0, 3.0).expect("Parameters should be valid");
        assert_approx_eq(distribution.cdf(2.0), 0.5);
        assert_approx_eq(distribution.cdf(5.0), 0.8413447460685429);
    }

    #[test]
    fn test_plot_range() {
        let distribution: Normal = Normal::new(2.0, 1.0).expect("Parameters should be valid");
        assert_eq!(distribution.plot_range(), (-2.0, 6.0));

        // the window is clamped to [-100, 100]
        let wide: Normal = Normal::new(0.0, 50.0).expect("Parameters should be valid");
        assert_eq!(wide.plot_range(), (-100.0, 100.0));
    }

    #[test]
    fn test_normalization() {
        let distribution: Normal = Normal::new(0.0, 1.0).expect("Parameters should be valid");
        let area: f64 = integrate_pdf(&distribution, 0.1);
        assert!((area - 1.0).abs() < 0.01, "area = {}", area);
    }

    #[test]
    fn test_monotone_cdf() {
        let distribution: Normal = Normal::new(0.0, 1.0).expect("Parameters should be valid");
        assert_cdf_monotone(|x| distribution.cdf(x), distribution.plot_range(), 0.1);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(Normal::new(0.0, 0.0).is_err());
        assert!(Normal::new(0.0, -1.5).is_err());
        assert!(Normal::new(f64::NAN, 1.0).is_err());
    }
}

#[cfg(test)]
mod exponential_tests {
    use super::*;

    #[test]
    fn test_pdf() {
        let distribution: Exponential = Exponential::new(2.0).expect("Parameter should be valid");
        assert_approx_eq(distribution.pdf(0.0), 2.0);
        assert_approx_eq(distribution.pdf(1.0), 0.2706705664732254);
        assert_eq!(distribution.pdf(-0.5), 0.0);
    }

    #[test]
    fn test_cdf() {
        let distribution: Exponential = Exponential::new(2.0).expect("Parameter should be valid");
        assert_eq!(distribution.cdf(0.0), 0.0);
        assert_approx_eq(distribution.cdf(1.0), 0.8646647167633873);
        assert_eq!(distribution.cdf(-3.0), 0.0);
    }

    #[test]
    fn test_plot_range() {
        let distribution: Exponential = Exponential::new(2.0).expect("Parameter should be valid");
        assert_eq!(distribution.plot_range(), (0.0, 4.0));

        let slow: Exponential = Exponential::new(0.01).expect("Parameter should be valid");
        assert_eq!(slow.plot_range(), (0.0, 100.0));
    }

    #[test]
    fn test_normalization() {
        let distribution: Exponential = Exponential::new(1.0).expect("Parameter should be valid");
        let area: f64 = integrate_pdf(&distribution, 0.01);
        assert!((area - 1.0).abs() < 0.01, "area = {}", area);
    }
}

#[cfg(test)]
mod gamma_tests {
    use super::*;

    #[test]
    fn test_pdf() {
        let distribution: Gamma = Gamma::new(2.0, 1.0).expect("Parameters should be valid");
        assert_approx_eq(distribution.pdf(1.0), 0.36787944117144233);
        assert_eq!(distribution.pdf(0.0), 0.0);
        assert_eq!(distribution.pdf(-1.0), 0.0);
    }

    #[test]
    fn test_cdf_series() {
        let distribution: Gamma = Gamma::new(2.0, 1.0).expect("Parameters should be valid");
        // cdf(x | 2, 1) = 1 - (1 + x) * e^-x
        assert_approx_eq(distribution.cdf(1.0), 0.26424111765711533);
        assert_approx_eq(distribution.cdf(3.0), 0.8008517265285442);
        assert_eq!(distribution.cdf(0.0), 0.0);
    }

    #[test]
    fn test_cdf_matches_exponential() {
        // Gamma(1, lambda) is an Exponential(lambda)
        let gamma_distribution: Gamma = Gamma::new(1.0, 2.0).expect("Parameters should be valid");
        let exponential: Exponential = Exponential::new(2.0).expect("Parameter should be valid");
        for x in [0.1, 0.5, 1.0, 2.0, 5.0] {
            assert_approx_eq(gamma_distribution.cdf(x), exponential.cdf(x));
        }
    }

    #[test]
    fn test_cdf_far_tail() {
        let distribution: Gamma = Gamma::new(2.0, 1.0).expect("Parameters should be valid");
        assert!(0.999999 < distribution.cdf(100.0));
        assert!(distribution.cdf(1000.0) <= 1.0);
    }

    #[test]
    fn test_plot_range() {
        let distribution: Gamma = Gamma::new(2.0, 1.0).expect("Parameters should be valid");
        // max(8, 4 * alpha / beta)
        assert_eq!(distribution.plot_range(), (0.0, 8.0));

        let wide: Gamma = Gamma::new(9.0, 1.0).expect("Parameters should be valid");
        assert_eq!(wide.plot_range(), (0.0, 36.0));
    }

    #[test]
    fn test_normalization() {
        let distribution: Gamma = Gamma::new(2.0, 1.0).expect("Parameters should be valid");
        let area: f64 = integrate_pdf(&distribution, 0.01);
        assert!((area - 1.0).abs() < 0.01, "area = {}", area);
    }

    #[test]
    fn test_monotone_cdf() {
        let distribution: Gamma = Gamma::new(2.5, 1.5).expect("Parameters should be valid");
        assert_cdf_monotone(|x| distribution.cdf(x), distribution.plot_range(), 0.1);
    }
}

#[cfg(test)]
mod beta_tests {
    use super::*;

    #[test]
    fn test_pdf() {
        let distribution: Beta = Beta::new(2.0, 2.0).expect("Parameters should be valid");
        // pdf(x | 2, 2) = 6 * x * (1 - x)
        assert_approx_eq(distribution.pdf(0.5), 1.5);
        assert_approx_eq(distribution.pdf(0.25), 1.125);
        assert_eq!(distribution.pdf(-0.1), 0.0);
        assert_eq!(distribution.pdf(1.1), 0.0);
    }

    #[test]
    fn test_cdf() {
        let distribution: Beta = Beta::new(2.0, 2.0).expect("Parameters should be valid");
        // the fixed-step integration is coarse, allow a generous tolerance
        assert!((distribution.cdf(0.5) - 0.5).abs() < 0.02);
        assert_eq!(distribution.cdf(-0.1), 0.0);
        assert_eq!(distribution.cdf(1.0), 1.0);
        assert_eq!(distribution.cdf(2.0), 1.0);
    }

    #[test]
    fn test_flat_beta_is_uniform() {
        let distribution: Beta = Beta::new(1.0, 1.0).expect("Parameters should be valid");
        assert_approx_eq(distribution.pdf(0.3), 1.0);
        assert_approx_eq(distribution.pdf(0.8), 1.0);
    }

    #[test]
    fn test_plot_range() {
        let distribution: Beta = Beta::new(2.0, 5.0).expect("Parameters should be valid");
        assert_eq!(distribution.plot_range(), (0.0, 1.0));
    }

    #[test]
    fn test_normalization() {
        let distribution: Beta = Beta::new(2.0, 2.0).expect("Parameters should be valid");
        let area: f64 = integrate_pdf(&distribution, 0.001);
        assert!((area - 1.0).abs() < 0.01, "area = {}", area);
    }

    #[test]
    fn test_monotone_cdf() {
        let distribution: Beta = Beta::new(2.0, 3.0).expect("Parameters should be valid");
        assert_cdf_monotone(|x| distribution.cdf(x), (0.0, 1.0), 0.01);
    }
}

#[cfg(test)]
mod pareto_tests {
    use super::*;

    #[test]
    fn test_pdf() {
        let distribution: Pareto = Pareto::new(1.0, 2.0).expect("Parameters should be valid");
        assert_approx_eq(distribution.pdf(1.0), 2.0);
        assert_approx_eq(distribution.pdf(2.0), 0.25);
        assert_eq!(distribution.pdf(0.5), 0.0);
    }

    #[test]
    fn test_cdf() {
        let distribution: Pareto = Pareto::new(1.0, 2.0).expect("Parameters should be valid");
        assert_eq!(distribution.cdf(1.0), 0.0);
        assert_approx_eq(distribution.cdf(2.0), 0.75);
        assert_eq!(distribution.cdf(0.5), 0.0);
    }

    #[test]
    fn test_plot_range() {
        let distribution: Pareto = Pareto::new(1.0, 2.0).expect("Parameters should be valid");
        assert_eq!(distribution.plot_range(), (1.0, 9.0));
    }

    #[test]
    fn test_normalization() {
        // alpha = 3: the tail outside the window holds ~0.14% of the mass
        let distribution: Pareto = Pareto::new(1.0, 3.0).expect("Parameters should be valid");
        let area: f64 = integrate_pdf(&distribution, 0.001);
        assert!((area - 1.0).abs() < 0.01, "area = {}", area);
    }
}

#[cfg(test)]
mod uniform_tests {
    use super::*;

    #[test]
    fn test_pdf() {
        let distribution: Uniform = Uniform::new(0.0, 2.0).expect("Parameters should be valid");
        assert_approx_eq(distribution.pdf(1.0), 0.5);
        assert_approx_eq(distribution.pdf(0.0), 0.5);
        assert_eq!(distribution.pdf(3.0), 0.0);
        assert_eq!(distribution.pdf(-0.5), 0.0);
    }

    #[test]
    fn test_cdf() {
        let distribution: Uniform = Uniform::new(0.0, 2.0).expect("Parameters should be valid");
        assert_eq!(distribution.cdf(-1.0), 0.0);
        assert_approx_eq(distribution.cdf(1.0), 0.5);
        assert_eq!(distribution.cdf(5.0), 1.0);
    }

    #[test]
    fn test_invalid_parameters() {
        let error = Uniform::new(5.0, 2.0).expect_err("a >= b should be rejected");
        assert_eq!(error.violations(), ["a must be less than b."]);

        assert!(Uniform::new(1.0, 1.0).is_err());
        assert!(Uniform::new(f64::INFINITY, 2.0).is_err());
    }
}

#[cfg(test)]
mod discrete_uniform_tests {
    use super::*;

    #[test]
    fn test_pmf() {
        let distribution: DiscreteUniform =
            DiscreteUniform::new(1.0, 6.0).expect("Parameters should be valid");
        assert_approx_eq(distribution.pmf(3.0), 1.0 / 6.0);
        assert_eq!(distribution.pmf(3.5), 0.0);
        assert_eq!(distribution.pmf(0.0), 0.0);
        assert_eq!(distribution.pmf(7.0), 0.0);
    }

    #[test]
    fn test_cdf() {
        let distribution: DiscreteUniform =
            DiscreteUniform::new(1.0, 6.0).expect("Parameters should be valid");
        assert_eq!(distribution.cdf(0.0), 0.0);
        assert_approx_eq(distribution.cdf(4.0), 4.0 / 6.0);
        assert_approx_eq(distribution.cdf(4.9), 4.0 / 6.0);
        assert_eq!(distribution.cdf(10.0), 1.0);
    }

    #[test]
    fn test_full_support_sums_to_one() {
        let distribution: DiscreteUniform =
            DiscreteUniform::new(1.0, 6.0).expect("Parameters should be valid");
        let total: f64 = (1..=6).map(|k| distribution.pmf(k as f64)).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }
}

#[cfg(test)]
mod bernoulli_tests {
    use super::*;

    #[test]
    fn test_pmf() {
        let distribution: Bernoulli =
            Bernoulli::new(0.3).expect("Parameter should be a valid probability");
        assert_eq!(distribution.pmf(0.0), 0.7);
        assert_eq!(distribution.pmf(1.0), 0.3);
        assert_eq!(distribution.pmf(0.5), 0.0);
    }

    #[test]
    fn test_cdf() {
        let distribution: Bernoulli =
            Bernoulli::new(0.3).expect("Parameter should be a valid probability");
        assert_eq!(distribution.cdf(-1.0), 0.0);
        assert_eq!(distribution.cdf(0.5), 0.7);
        assert_eq!(distribution.cdf(1.5), 1.0);
    }

    #[test]
    fn test_invalid_parameters() {
        let error = Bernoulli::new(0.0).expect_err("p = 0 should be rejected");
        assert_eq!(error.violations(), ["p must be in (0, 1]."]);
        assert!(Bernoulli::new(1.2).is_err());
        assert!(Bernoulli::new(f64::NAN).is_err());
        assert!(Bernoulli::new(1.0).is_ok());
    }
}

#[cfg(test)]
mod binomial_tests {
    use super::*;

    #[test]
    fn test_pmf() {
        let distribution: Binomial = Binomial::new(5.0, 0.5).expect("Parameters should be valid");
        assert_approx_eq(distribution.pmf(2.0), 0.3125);
        assert_approx_eq(distribution.pmf(0.0), 0.03125);
        assert_eq!(distribution.pmf(2.5), 0.0);
        assert_eq!(distribution.pmf(6.0), 0.0);
        assert_eq!(distribution.pmf(-1.0), 0.0);
    }

    #[test]
    fn test_cdf_is_cumulative_sum() {
        let distribution: Binomial = Binomial::new(5.0, 0.5).expect("Parameters should be valid");
        let mut accumulator: f64 = 0.0;
        for k in 0..=5 {
            accumulator += distribution.pmf(k as f64);
            assert!((distribution.cdf(k as f64) - accumulator).abs() < 1e-9);
        }
        assert_eq!(distribution.cdf(7.0), 1.0);
    }

    #[test]
    fn test_full_support_sums_to_one() {
        let distribution: Binomial = Binomial::new(12.0, 0.3).expect("Parameters should be valid");
        let total: f64 = (0..=12).map(|k| distribution.pmf(k as f64)).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_parameters() {
        let error = Binomial::new(2.5, 1.5).expect_err("both parameters are invalid");
        assert_eq!(
            error.violations(),
            ["n must be an integer.", "p must be in (0, 1]."]
        );
        assert!(Binomial::new(0.0, 0.5).is_err());
    }
}

#[cfg(test)]
mod geometric_tests {
    use super::*;

    #[test]
    fn test_pmf() {
        let distribution: Geometric =
            Geometric::new(0.5).expect("Parameter should be a valid probability");
        assert_approx_eq(distribution.pmf(1.0), 0.5);
        assert_approx_eq(distribution.pmf(3.0), 0.125);
        assert_eq!(distribution.pmf(0.0), 0.0);
        assert_eq!(distribution.pmf(1.5), 0.0);
    }

    #[test]
    fn test_cdf() {
        let distribution: Geometric =
            Geometric::new(0.5).expect("Parameter should be a valid probability");
        assert_eq!(distribution.cdf(0.5), 0.0);
        assert_approx_eq(distribution.cdf(1.0), 0.5);
        assert_approx_eq(distribution.cdf(3.0), 0.875);
    }

    #[test]
    fn test_cdf_is_cumulative_sum() {
        let distribution: Geometric =
            Geometric::new(0.3).expect("Parameter should be a valid probability");
        let mut accumulator: f64 = 0.0;
        for k in 1..=20 {
            accumulator += distribution.pmf(k as f64);
            assert!((distribution.cdf(k as f64) - accumulator).abs() < 1e-9);
        }
    }
}

#[cfg(test)]
mod negative_binomial_tests {
    use super::*;

    #[test]
    fn test_pmf() {
        let distribution: NegativeBinomial =
            NegativeBinomial::new(2.0, 0.5).expect("Parameters should be valid");
        assert_approx_eq(distribution.pmf(2.0), 0.25);
        assert_approx_eq(distribution.pmf(3.0), 0.25);
        assert_approx_eq(distribution.pmf(4.0), 0.1875);
        assert_eq!(distribution.pmf(1.0), 0.0);
    }

    #[test]
    fn test_cdf_is_cumulative_sum() {
        let distribution: NegativeBinomial =
            NegativeBinomial::new(3.0, 0.4).expect("Parameters should be valid");
        let mut accumulator: f64 = 0.0;
        for k in 3..=30 {
            accumulator += distribution.pmf(k as f64);
            assert!((distribution.cdf(k as f64) - accumulator).abs() < 1e-9);
        }
        assert_eq!(distribution.cdf(1.9), 0.0);
    }

    #[test]
    fn test_reduces_to_geometric() {
        let negative_binomial: NegativeBinomial =
            NegativeBinomial::new(1.0, 0.3).expect("Parameters should be valid");
        let geometric: Geometric = Geometric::new(0.3).expect("Parameter should be valid");
        for k in 1..=15 {
            assert_approx_eq(negative_binomial.pmf(k as f64), geometric.pmf(k as f64));
        }
    }

    #[test]
    fn test_plot_range() {
        let distribution: NegativeBinomial =
            NegativeBinomial::new(2.0, 0.5).expect("Parameters should be valid");
        // mean = 4, std_dev = 2 => (2, ceil(4 + 8)) = (2, 12)
        assert_eq!(distribution.plot_range(), (2.0, 12.0));
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(NegativeBinomial::new(0.0, 0.5).is_err());
        assert!(NegativeBinomial::new(1.5, 0.5).is_err());
        assert!(NegativeBinomial::new(2.0, 0.0).is_err());
    }
}

#[cfg(test)]
mod poisson_tests {
    use super::*;

    #[test]
    fn test_pmf() {
        let poisson: Poisson = Poisson::new(3.0).expect("Parameter should be valid");
        assert_approx_eq(poisson.pmf(0.0), 0.049787068367863944);
        assert_approx_eq(poisson.pmf(1.0), 0.14936120510359183);
        assert_approx_eq(poisson.pmf(3.0), 0.22404180765538775);
        assert_approx_eq(poisson.pmf(5.0), 0.10081881344492448);
        assert_eq!(poisson.pmf(-1.0), 0.0);
        assert_eq!(poisson.pmf(2.5), 0.0);
    }

    #[test]
    fn test_cdf() {
        let poisson: Poisson = Poisson::new(2.0).expect("Parameter should be valid");
        assert_approx_eq(poisson.cdf(0.0), 0.1353352832366127);
        assert_approx_eq(poisson.cdf(1.0), 0.4060058497098381);
        assert_approx_eq(poisson.cdf(2.0), 0.6766764161830635);
        assert_approx_eq(poisson.cdf(5.0), 0.9834363915193856);
    }

    #[test]
    fn test_cdf_is_cumulative_sum() {
        let poisson: Poisson = Poisson::new(4.5).expect("Parameter should be valid");
        let mut accumulator: f64 = 0.0;
        for k in 0..=25 {
            accumulator += poisson.pmf(k as f64);
            assert!((poisson.cdf(k as f64) - accumulator).abs() < 1e-9);
        }
    }

    #[test]
    fn test_long_prefix_sums_to_one() {
        let poisson: Poisson = Poisson::new(4.0).expect("Parameter should be valid");
        let total: f64 = (0..=60).map(|k| poisson.pmf(k as f64)).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_plot_range() {
        let poisson: Poisson = Poisson::new(4.0).expect("Parameter should be valid");
        // ceil(4 + 4 * sqrt(4)) = 12
        assert_eq!(poisson.plot_range(), (0.0, 12.0));
    }
}

#[cfg(test)]
mod hypergeometric_tests {
    use super::*;

    #[test]
    fn test_pmf() {
        let distribution: Hypergeometric =
            Hypergeometric::new(10.0, 4.0, 3.0).expect("Parameters should be valid");
        assert_approx_eq(distribution.pmf(0.0), 1.0 / 6.0);
        assert_approx_eq(distribution.pmf(1.0), 0.5);
        assert_approx_eq(distribution.pmf(2.0), 0.3);
        assert_approx_eq(distribution.pmf(3.0), 1.0 / 30.0);
        assert_eq!(distribution.pmf(4.0), 0.0);
    }

    #[test]
    fn test_full_support_sums_to_one() {
        let distribution: Hypergeometric =
            Hypergeometric::new(10.0, 4.0, 3.0).expect("Parameters should be valid");
        let total: f64 = (0..=3).map(|k| distribution.pmf(k as f64)).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_cdf_is_cumulative_sum() {
        let distribution: Hypergeometric =
            Hypergeometric::new(20.0, 8.0, 6.0).expect("Parameters should be valid");
        let mut accumulator: f64 = 0.0;
        for k in 0..=6 {
            accumulator += distribution.pmf(k as f64);
            assert!((distribution.cdf(k as f64) - accumulator).abs() < 1e-9);
        }
        assert!((distribution.cdf(10.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_more_draws_than_population() {
        // not rejected, but there is no valid draw: everything is 0
        let distribution: Hypergeometric =
            Hypergeometric::new(3.0, 2.0, 5.0).expect("Parameters should be valid");
        for k in 0..=5 {
            assert_eq!(distribution.pmf(k as f64), 0.0);
        }
    }

    #[test]
    fn test_plot_range() {
        let distribution: Hypergeometric =
            Hypergeometric::new(10.0, 4.0, 3.0).expect("Parameters should be valid");
        assert_eq!(distribution.plot_range(), (0.0, 3.0));
    }

    #[test]
    fn test_invalid_parameters() {
        let error = Hypergeometric::new(0.5, 4.0, 3.0).expect_err("N is invalid");
        assert_eq!(
            error.violations(),
            ["N must be >= 1.", "N must be an integer."]
        );
    }
}
