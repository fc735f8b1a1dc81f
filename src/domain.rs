//! A Domain represents the set of points where a function is defined.
//!
//! In this library we use it for the pdf or pmf of distributions (see
//! [crate::distribution_trait]). It has 2 variants:
//!  - [DiscreteDomain]
//!  - [ContinuousDomain]
//!
//! Every evaluator returns `0.0` outside its domain instead of failing,
//! so `contains` is the single place where support membership is decided.
//!

use core::f64;

/// A [domain](https://en.wikipedia.org/wiki/Domain_of_a_function) composed of
/// integers.
///
/// [DiscreteDomain] assumes that discrete supports only include integers,
/// wich holds for every distribution in this library.
#[derive(Debug, Clone, PartialEq)]
pub enum DiscreteDomain {
    /// All the integers in the range [.0, .1] (**both** inclusive).
    /// The first number is the minimum, and the last is the maximum.
    ///
    /// Has the **invariant** that `min <= max`.
    Range(i64, i64),
    /// All the integers from the given value onwards. The value **is** included.
    From(i64),
}

/// A [domain](https://en.wikipedia.org/wiki/Domain_of_a_function) of a region
/// of the real numbers.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ContinuousDomain {
    /// All real numbers
    #[default]
    Reals,
    /// The values contained in the range.
    ///
    /// The first number is the minimum, and the last is the maximum.
    ///
    /// Has the **invariant** that `min <= max`.
    Range(f64, f64),
    /// All the numbers from the given value onwards. The value **is** included.
    From(f64),
}

impl DiscreteDomain {
    /// Returns `true` if `x` belongs to the domain.
    ///
    /// Non-integer values never belong to a [DiscreteDomain].
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        if !x.is_finite() || x.fract() != 0.0 {
            return false;
        }

        let x_int: i64 = x as i64;

        return match self {
            DiscreteDomain::Range(min, max) => (*min <= x_int) && (x_int <= *max),
            DiscreteDomain::From(min) => *min <= x_int,
        };
    }

    /// Returns the upper and lower bounds of the domain.
    ///
    /// Take into account that the upper value can be positive infinity.
    /// It is guaranteed that `return.0 <= return.1`. If the bounds are
    /// finite, the values themselves are included.
    #[must_use]
    pub fn get_bounds(&self) -> (f64, f64) {
        return match self {
            DiscreteDomain::Range(min, max) => (*min as f64, *max as f64),
            DiscreteDomain::From(min) => (*min as f64, f64::INFINITY),
        };
    }
}

impl ContinuousDomain {
    /// Returns `true` if `x` belongs to the domain.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        if x.is_nan() {
            return false;
        }

        return match self {
            ContinuousDomain::Reals => true,
            ContinuousDomain::Range(min, max) => (*min <= x) && (x <= *max),
            ContinuousDomain::From(min) => *min <= x,
        };
    }

    /// Returns the upper and lower bounds of the domain.
    ///
    /// Take into account that the values can also include positive and
    /// negative infinity. It is guaranteed that `return.0 <= return.1`.
    #[must_use]
    pub fn get_bounds(&self) -> (f64, f64) {
        return match self {
            ContinuousDomain::Reals => (f64::NEG_INFINITY, f64::INFINITY),
            ContinuousDomain::Range(min, max) => (*min, *max),
            ContinuousDomain::From(min) => (*min, f64::INFINITY),
        };
    }
}
