use assert_approx_eq::assert_approx_eq;

use BayesOverlap::euclid::*;

#[cfg(test)]
mod gamma_tests {
    use super::*;

    #[test]
    fn test_gamma_integers() {
        // gamma(n) = (n-1)! for positive integers, to at least 6 significant digits
        assert_approx_eq!(gamma(1.0), 1.0);
        assert_approx_eq!(gamma(2.0), 1.0);
        assert_approx_eq!(gamma(3.0), 2.0);
        assert_approx_eq!(gamma(5.0), 24.0);
        assert_approx_eq!(gamma(6.0), 120.0);
        assert_approx_eq!(gamma(10.0), 362880.0, 1e-3);
    }

    #[test]
    fn test_gamma_half() {
        // gamma(0.5) = sqrt(pi)
        assert_approx_eq!(gamma(0.5), 1.7724538509055159);
    }

    #[test]
    fn test_gamma_reflection() {
        // arguments below 0.5 go trough the reflection formula
        assert_approx_eq!(gamma(0.1), 9.513507698668732);
        assert_approx_eq!(gamma(0.25), 3.625609908221908);
    }

    #[test]
    fn test_ln_gamma_matches_gamma() {
        for z in [0.5, 1.0, 2.5, 5.0, 10.0, 42.0] {
            assert_approx_eq!(ln_gamma(z), gamma(z).ln(), 1e-9);
        }
    }

    #[test]
    fn test_ln_gamma_large_argument() {
        // ln(gamma(z)) must not overflow where gamma(z) does.
        // Stirling: ln(gamma(200)) ~= 857.9336698...
        let value: f64 = ln_gamma(200.0);
        assert!(value.is_finite());
        assert_approx_eq!(value, 857.9336698258574, 1e-6);
    }
}

#[cfg(test)]
mod erf_tests {
    use super::*;

    #[test]
    fn test_erf_values() {
        // reference values, within the ~1.5e-7 error of the approximation
        assert_approx_eq!(erf(0.0), 0.0);
        assert_approx_eq!(erf(0.5), 0.5204998778130465, 1e-6);
        assert_approx_eq!(erf(1.0), 0.8427007929497149, 1e-6);
        assert_approx_eq!(erf(2.0), 0.9953222650189527, 1e-6);
        assert_approx_eq!(erf(4.0), 1.0, 1e-6);
    }

    #[test]
    fn test_erf_is_odd() {
        for x in [0.1, 0.5, 1.0, 2.0, 3.5] {
            assert_eq!(erf(-x), -erf(x));
        }
    }
}

#[cfg(test)]
mod factorial_tests {
    use super::*;

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), 1.0);
        assert_eq!(factorial(1), 1.0);
        assert_eq!(factorial(5), 120.0);
        assert_eq!(factorial(10), 3628800.0);
    }

    #[test]
    fn test_factorial_matches_gamma() {
        for n in 1..12_u64 {
            assert_approx_eq!(factorial(n), gamma(n as f64 + 1.0), 1e-3);
        }
    }
}

#[cfg(test)]
mod combination_tests {
    use super::*;

    #[test]
    fn test_combination_values() {
        assert_eq!(combination(5, 2), 10.0);
        assert_eq!(combination(0, 0), 1.0);
        assert_eq!(combination(10, 3), 120.0);
        assert_eq!(combination(7, 7), 1.0);
        assert_eq!(combination(7, 0), 1.0);
    }

    #[test]
    fn test_combination_out_of_range() {
        assert_eq!(combination(5, 7), 0.0);
        assert_eq!(combination(5, -1), 0.0);
        assert_eq!(combination(-3, 2), 0.0);
    }

    #[test]
    fn test_combination_large_arguments() {
        // would overflow with the factorial-ratio formula
        assert_approx_eq!(combination(100, 2), 4950.0, 1e-6);
        assert_approx_eq!(combination(500, 3), 20708500.0, 1e-2);
    }
}

#[cfg(test)]
mod beta_fn_tests {
    use super::*;

    #[test]
    fn test_beta_fn_values() {
        // B(2, 2) = 1/6
        assert_approx_eq!(beta_fn(2.0, 2.0), 1.0 / 6.0);
        // B(0.5, 0.5) = pi
        assert_approx_eq!(beta_fn(0.5, 0.5), std::f64::consts::PI);
        // B(1, n) = 1/n
        assert_approx_eq!(beta_fn(1.0, 5.0), 0.2);
    }

    #[test]
    fn test_beta_fn_large_arguments() {
        // B(150, 150): the direct gamma ratio overflows, the ln route must not
        let value: f64 = beta_fn(150.0, 150.0);
        assert!(value.is_finite());
        assert!(0.0 < value);
    }
}
