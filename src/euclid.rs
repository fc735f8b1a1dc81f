//! Euclid contains the special functions used by the distribution evaluators.
//!
//! All of them are pure and hold no state. They trade some precision for
//! simplicity: the approximations here are more than accurate enough for
//! plotting, but this is **not** a numerics library for production inference.
//!

use std::f64::consts::PI;

/// `1/sqrt(2*pi)`, the normalitzation constant of the standard normal pdf.
pub const INV_SQRT_2_PI: f64 = 0.39894228040143267794;

/// The `g` constant of the [Lanczos approximation](https://en.wikipedia.org/wiki/Lanczos_approximation)
/// used in [gamma] and [ln_gamma].
pub const LANCZOS_G: f64 = 7.0;

/// The 9 fixed coefitients of the [Lanczos approximation](https://en.wikipedia.org/wiki/Lanczos_approximation)
/// for `g = 7`.
pub const LANCZOS_COEFFICIENTS: [f64; 9] = [
    0.99999999999980993,
    676.5203681218851,
    -1259.1392167224028,
    771.32342877765313,
    -176.61502916214059,
    12.507343278686905,
    -0.13857109526572012,
    9.9843695780195716e-6,
    1.5056327351493116e-7,
];

/// Arguments greater than this make [gamma] overflow an `f64`.
/// (`gamma(171.62..)` is already `> f64::MAX`)
pub const MAX_GAMMA_ARGUMENT: f64 = 170.0;

/// The [gamma function](https://en.wikipedia.org/wiki/Gamma_function) `Γ(z)`,
/// the continuous extension of the factorial: `Γ(n) = (n-1)!` for positive
/// integers `n`.
///
/// Computed with the [Lanczos approximation](https://en.wikipedia.org/wiki/Lanczos_approximation)
/// ([LANCZOS_G] `= 7`, [LANCZOS_COEFFICIENTS]). For `z < 0.5` the
/// [reflection formula](https://en.wikipedia.org/wiki/Reflection_formula)
/// `Γ(z) = pi / (sin(pi*z) * Γ(1 - z))` is used, wich recurses exacly once
/// (the reflected argument is always `0.5 <= 1 - z`), so the computation
/// always terminates.
///
/// Matches `(n-1)!` to at least 6 significant digits for positive integers.
#[must_use]
pub fn gamma(z: f64) -> f64 {
    if z < 0.5 {
        return PI / ((PI * z).sin() * gamma(1.0 - z));
    }

    let x: f64 = z - 1.0;
    let mut acc: f64 = LANCZOS_COEFFICIENTS[0];
    for (i, coefficient) in LANCZOS_COEFFICIENTS.iter().enumerate().skip(1) {
        acc += coefficient / (x + i as f64);
    }

    let t: f64 = x + LANCZOS_G + 0.5;
    return (2.0 * PI).sqrt() * t.powf(x + 0.5) * (-t).exp() * acc;
}

/// The natural logarithm of the [gamma] function: `ln(Γ(z))`.
///
/// For `0.5 <= z` the Lanczos series is evaluated in log form, so arguments
/// far beyond [MAX_GAMMA_ARGUMENT] do not overflow. Below `0.5` it falls
/// back to `gamma` trough the reflection formula.
#[must_use]
pub fn ln_gamma(z: f64) -> f64 {
    if z < 0.5 {
        return (PI / ((PI * z).sin() * gamma(1.0 - z))).ln();
    }

    let x: f64 = z - 1.0;
    let mut acc: f64 = LANCZOS_COEFFICIENTS[0];
    for (i, coefficient) in LANCZOS_COEFFICIENTS.iter().enumerate().skip(1) {
        acc += coefficient / (x + i as f64);
    }

    let t: f64 = x + LANCZOS_G + 0.5;
    return 0.5 * (2.0 * PI).ln() + (x + 0.5) * t.ln() - t + acc.ln();
}

/// The [error function](https://en.wikipedia.org/wiki/Error_function) `erf(x)`.
///
/// Uses the rational approximation 7.1.26 of Abramowitz and Stegun (5 term
/// polynomial), with a maximum absolute error of about `1.5 * 10^-7`. Plenty
/// for plotting a cdf.
///
/// `erf` is an odd function: `erf(-x) = -erf(x)`.
#[must_use]
pub fn erf(x: f64) -> f64 {
    const A_1: f64 = 0.254829592;
    const A_2: f64 = -0.284496736;
    const A_3: f64 = 1.421413741;
    const A_4: f64 = -1.453152027;
    const A_5: f64 = 1.061405429;
    const P: f64 = 0.3275911;

    let sign: f64 = if x < 0.0 { -1.0 } else { 1.0 };
    let x_abs: f64 = x.abs();

    let t: f64 = 1.0 / (1.0 + P * x_abs);
    let polynomial: f64 = ((((A_5 * t + A_4) * t + A_3) * t + A_2) * t + A_1) * t;
    let y: f64 = 1.0 - polynomial * (-x_abs * x_abs).exp();

    return sign * y;
}

/// The [factorial](https://en.wikipedia.org/wiki/Factorial) `n!` as an `f64`.
///
/// `factorial(0) = factorial(1) = 1`. Overflows to `f64::INFINITY` for
/// `170 < n` (see [MAX_GAMMA_ARGUMENT]); callers that can receive such
/// arguments must handle the resulting non-finite values themselves.
#[must_use]
pub fn factorial(n: u64) -> f64 {
    let mut ret: f64 = 1.0;
    for i in 2..=n {
        ret = ret * i as f64;
    }
    return ret;
}

/// The [binomial coefficient](https://en.wikipedia.org/wiki/Binomial_coefficient)
/// `C(n, k)`: the number of ways to choose `k` elements out of `n`.
///
///  - Returns `0.0` if `k < 0` or `n < k` (also covers negative `n`).
///  - Returns `1.0` if `k == 0` or `k == n`.
///  - Otherwise evaluates the multiplicative formula
///    `prod_{i in 1..=k} (n - i + 1) / i`.
///
/// The multiplicative formula is used instead of a ratio of factorials
/// because the intermediate factorials overflow much earlier than the
/// coefficient itself.
#[must_use]
pub fn combination(n: i64, k: i64) -> f64 {
    if k < 0 || n < k {
        return 0.0;
    }
    if k == 0 || k == n {
        return 1.0;
    }

    let mut ret: f64 = 1.0;
    for i in 1..=k {
        ret = ret * (n - i + 1) as f64 / i as f64;
    }
    return ret;
}

/// The [beta function](https://en.wikipedia.org/wiki/Beta_function)
/// `B(a, b) = Γ(a) * Γ(b) / Γ(a + b)`.
///
/// Evaluated trough [ln_gamma] when the direct gamma ratio would overflow.
#[must_use]
pub fn beta_fn(a: f64, b: f64) -> f64 {
    if MAX_GAMMA_ARGUMENT < a + b {
        return (ln_gamma(a) + ln_gamma(b) - ln_gamma(a + b)).exp();
    }
    return gamma(a) * gamma(b) / gamma(a + b);
}
