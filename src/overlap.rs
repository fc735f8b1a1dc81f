//! # Curve sampling and overlap computation
//!
//! This module is the outer boundary of the library: it takes two validated
//! distributions, selects a common x-axis window, builds a shared
//! [SampleGrid], evaluates both curves over it and computes the overlap
//! region between the two densities.
//!
//! The area of the overlap region (the pointwise minimum of the two
//! densities) is used as a visual proxy for the
//! [Bayes error rate](https://en.wikipedia.org/wiki/Bayes_error_rate) of the
//! two-class classification problem whose class-conditional densities are
//! the two distributions (with equal priors):
//!
//! > error = integral min(pdf_1(x), pdf_2(x)) dx
//!
//! This identity is only exact for two **continuous** densities (and a fine
//! enough grid). When one or both sides are discrete the number shown is a
//! heuristic of the same flavour, not a rigorous error measure; for two
//! discrete distributions the sum over the integer grid *is* the exact
//! discrete overlap.
//!
//! Everything here is recomputed from scratch on every call and returned by
//! value: the external renderer owns whatever in-place chart updating it
//! wants to do.
//!

use std::fmt;

use crate::configuration;
use crate::distributions::{AnyDistribution, DistributionKind, ParameterSet};
use crate::errors::BayesVizError;

/// The shared x-axis sample points of one evaluation pass.
///
/// The points are strictly increasing and deduplicated. They are the union
/// of a fine-step arithmetic sequence (if eiter distribution is continuous)
/// and of all the integers in range (if eiter distribution is discrete).
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    points: Vec<f64>,
    /// The step used for the left-Riemann overlap integral: the fine step
    /// if any side is continuous, `1.0` for a pair of discrete
    /// distributions (where the "integral" is a plain sum over the
    /// support).
    integration_step: f64,
}

impl SampleGrid {
    /// Builds the shared grid for `first` and `second` over `range`.
    ///
    /// `fine_step` overrides the step of the continuous part; if `None` the
    /// default is used ([BETA_FINE_STEP](configuration::BETA_FINE_STEP)
    /// when eiter side is a Beta, [DEFAULT_FINE_STEP](configuration::DEFAULT_FINE_STEP)
    /// otherwise).
    #[must_use]
    pub fn build(
        range: (f64, f64),
        first: &AnyDistribution,
        second: &AnyDistribution,
        fine_step: Option<f64>,
    ) -> SampleGrid {
        let (min, max): (f64, f64) = range;
        assert!(
            min.is_finite() && max.is_finite(),
            "Tried to build a sample grid over a non-finite range. \n"
        );

        let either_continuous: bool = !first.is_discrete() || !second.is_discrete();
        let either_discrete: bool = first.is_discrete() || second.is_discrete();

        let involves_beta: bool = first.kind() == DistributionKind::Beta
            || second.kind() == DistributionKind::Beta;
        let default_step: f64 = if involves_beta {
            configuration::BETA_FINE_STEP
        } else {
            configuration::DEFAULT_FINE_STEP
        };
        // a non-finite or non-positive override would never terminate
        let step: f64 = match fine_step {
            Some(s) if s.is_finite() && 0.0 < s => s,
            _ => default_step,
        };

        let mut points: Vec<f64> = Vec::new();

        if either_continuous {
            // Fine arithmetic sequence. The points are rounded so that the
            // ones landing on integers collapse with the discrete points
            // during deduplication.
            let mut i: u64 = 0;
            loop {
                let x: f64 = min + (i as f64) * step;
                if max < x {
                    break;
                }
                points.push(round_grid_point(x));
                i += 1;
            }
        }

        if either_discrete {
            let mut k: f64 = min.ceil();
            while k <= max.floor() {
                points.push(k);
                k += 1.0;
            }
        }

        points.sort_by(|a, b| a.partial_cmp(b).unwrap());
        points.dedup();

        let integration_step: f64 = if either_continuous { step } else { 1.0 };

        return SampleGrid {
            points,
            integration_step,
        };
    }

    /// The grid points (strictly increasing, deduplicated).
    #[must_use]
    pub fn points(&self) -> &[f64] {
        return &self.points;
    }

    /// The step used for the overlap integral. See [SampleGrid].
    #[must_use]
    pub const fn integration_step(&self) -> f64 {
        return self.integration_step;
    }

    /// Number of points in the grid.
    #[must_use]
    pub fn len(&self) -> usize {
        return self.points.len();
    }

    /// Returns `true` if the grid contains no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        return self.points.is_empty();
    }
}

/// Rounds a grid point to [GRID_ROUNDING_DECIMALS](configuration::GRID_ROUNDING_DECIMALS)
/// decimal places.
fn round_grid_point(x: f64) -> f64 {
    let scale: f64 = 10.0_f64.powi(configuration::GRID_ROUNDING_DECIMALS);
    return (x * scale).round() / scale;
}

/// The density and cumulative curves of one distribution, aligned to a
/// [SampleGrid] (`pdf.len() == cdf.len() == grid.len()`).
#[derive(Debug, Clone, PartialEq)]
pub struct CurveResult {
    /// Density values (pdf for continuous, pmf for discrete).
    pub pdf: Vec<f64>,
    /// Cumulative distribution values.
    pub cdf: Vec<f64>,
}

impl CurveResult {
    /// Evaluates `distribution` at every point of `grid`.
    ///
    /// Any NaN result is coerced to `0.0` at the point level, so one
    /// degenerate evaluation can never poison the rest of the curve.
    #[must_use]
    pub fn evaluate(distribution: &AnyDistribution, grid: &SampleGrid) -> CurveResult {
        let mut pdf: Vec<f64> = Vec::with_capacity(grid.len());
        let mut cdf: Vec<f64> = Vec::with_capacity(grid.len());

        for &x in grid.points() {
            let density: f64 = distribution.density(x);
            let cumulative: f64 = distribution.cdf(x);
            pdf.push(if density.is_nan() { 0.0 } else { density });
            cdf.push(if cumulative.is_nan() { 0.0 } else { cumulative });
        }

        return CurveResult { pdf, cdf };
    }
}

/// The overlap region between two density curves sharing a grid.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlapResult {
    /// `min_curve[i] = min(first.pdf[i], second.pdf[i])`, the boundary of
    /// the shaded error region.
    pub min_curve: Vec<f64>,
    /// Left-Riemann integral of `min_curve` with the grid's integration
    /// step: the Bayes error proxy. Always `>= 0`; at most ~1 (up to the
    /// integration error).
    pub error_estimate: f64,
}

impl OverlapResult {
    /// Computes the pointwise minimum of the two densities and its
    /// integral.
    #[must_use]
    pub fn between(first: &CurveResult, second: &CurveResult, grid: &SampleGrid) -> OverlapResult {
        debug_assert!(first.pdf.len() == grid.len() && second.pdf.len() == grid.len());

        let mut min_curve: Vec<f64> = Vec::with_capacity(grid.len());
        let mut error_estimate: f64 = 0.0;

        for i in 0..grid.len() {
            let min_value: f64 = first.pdf[i].min(second.pdf[i]);
            min_curve.push(min_value);
            error_estimate += min_value * grid.integration_step();
        }

        return OverlapResult {
            min_curve,
            error_estimate,
        };
    }
}

impl fmt::Display for OverlapResult {
    /// Formats the estimate the way the error-rate display shows it
    /// (4 decimal places).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "Bayes Error Rate: {:.4}", self.error_estimate);
    }
}

/// Everything one evaluation pass produces. An external renderer can map
/// `grid` + `first`/`second` to its line/bar charts and `overlap` to the
/// shaded region and the error read-out.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlapReport {
    /// The unioned (and clamped) plotting window the grid spans.
    pub range: (f64, f64),
    pub grid: SampleGrid,
    pub first: CurveResult,
    pub second: CurveResult,
    pub overlap: OverlapResult,
    /// Non-fatal recoveries that happened during the pass (currently only
    /// the plotting-range fallback).
    pub warnings: Vec<String>,
}

/// Unions the plotting ranges of the two distributions and clamps the
/// result to the hard numerical-stability bounds.
///
/// Returns [BayesVizError::UnsupportedRange] if the union is non-finite or
/// inverted. [overlap_report] recovers from that error with the default
/// window, so it never reaches the caller of the pipeline.
pub fn union_plot_range(
    first: &AnyDistribution,
    second: &AnyDistribution,
) -> Result<(f64, f64), BayesVizError> {
    let range_1: (f64, f64) = first.plot_range();
    let range_2: (f64, f64) = second.plot_range();

    let mut min: f64 = range_1.0.min(range_2.0);
    let mut max: f64 = range_1.1.max(range_2.1);

    min = min.max(configuration::UNION_RANGE_MIN);
    max = max.min(configuration::UNION_RANGE_MAX);

    if !min.is_finite() || !max.is_finite() || max < min {
        return Err(BayesVizError::UnsupportedRange);
    }

    return Ok((min, max));
}

/// Runs one full evaluation pass over two already-validated distributions:
/// range union, grid construction, curve evaluation and overlap
/// computation.
///
/// ## Inputs:
///
/// 1. `first`: the first distribution.
/// 2. `second`: the second distribution.
/// 3. `fine_step`: (optional) overrides the step of the continuous part of
///    the grid.
///     - The default is [DEFAULT_FINE_STEP](configuration::DEFAULT_FINE_STEP),
///       or [BETA_FINE_STEP](configuration::BETA_FINE_STEP) when eiter side
///       is a Beta.
///
/// ## Results
///
/// An [OverlapReport] with the curves aligned to the shared grid and the
/// overlap estimate. This function cannot fail: range problems are
/// recovered with the fallback window (and reported in
/// [OverlapReport::warnings]) and degenerate evaluations are coerced to 0
/// pointwise.
#[bon::builder]
pub fn overlap_report(
    first: &AnyDistribution,
    second: &AnyDistribution,
    fine_step: Option<f64>,
) -> OverlapReport {
    let (range, range_warning): ((f64, f64), Option<String>) =
        match union_plot_range(first, second) {
            Ok(range) => (range, None),
            Err(error) => (
                configuration::FALLBACK_RANGE,
                Some(std::format!(
                    "{}Falling back to [{}, {}].",
                    error,
                    configuration::FALLBACK_RANGE.0,
                    configuration::FALLBACK_RANGE.1
                )),
            ),
        };

    let grid: SampleGrid = SampleGrid::build(range, first, second, fine_step);

    let first_curve: CurveResult = CurveResult::evaluate(first, &grid);
    let second_curve: CurveResult = CurveResult::evaluate(second, &grid);
    let overlap: OverlapResult = OverlapResult::between(&first_curve, &second_curve, &grid);

    let warnings: Vec<String> = range_warning.into_iter().collect::<Vec<String>>();

    return OverlapReport {
        range,
        grid,
        first: first_curve,
        second: second_curve,
        overlap,
        warnings,
    };
}

/// The full pipeline from raw UI state: validates both parameter sets,
/// builds the distributions and runs [overlap_report].
///
/// On any parameter violation the evaluation is skipped **entirely** (no
/// partial results) and a [BayesVizError::ParameterDomain] is returned with
/// every violation of both distributions, each message prefixed with
/// `"Distribution 1: "` or `"Distribution 2: "`.
pub fn evaluate_pair(
    first_kind: DistributionKind,
    first_parameters: &ParameterSet,
    second_kind: DistributionKind,
    second_parameters: &ParameterSet,
) -> Result<OverlapReport, BayesVizError> {
    let first_result: Result<AnyDistribution, BayesVizError> = first_kind.build(first_parameters);
    let second_result: Result<AnyDistribution, BayesVizError> =
        second_kind.build(second_parameters);

    let (first, second): (AnyDistribution, AnyDistribution) = match (first_result, second_result) {
        (Ok(first), Ok(second)) => (first, second),
        (first_result, second_result) => {
            let mut violations: Vec<String> = Vec::new();
            if let Err(error) = first_result {
                for message in error.violations() {
                    violations.push(std::format!("Distribution 1: {}", message));
                }
            }
            if let Err(error) = second_result {
                for message in error.violations() {
                    violations.push(std::format!("Distribution 2: {}", message));
                }
            }
            return Err(BayesVizError::ParameterDomain { violations });
        }
    };

    return Ok(overlap_report().first(&first).second(&second).call());
}
