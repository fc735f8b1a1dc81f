
//! This file contains the deafult values and other value choices used trough the library.
//!


/// The step length of the fine (continuous) part of a shared sample grid.
///
/// A finer step captures more of the shape of the curves but makes every
/// evaluation pass proportionally more expensive. The whole pipeline must
/// stay cheap enough to re-run on every slider movement, so this is a
/// compromise value.
pub static DEFAULT_FINE_STEP: f64 = 0.1;

/// The step length of the fine part of the grid when a [Beta](crate::distributions::Beta)
/// distribution is involved.
///
/// The whole support of a Beta is `[0, 1]`, so with [DEFAULT_FINE_STEP] the
/// curve would be rendered with only 11 points.
pub static BETA_FINE_STEP: f64 = 0.01;

/// Grid points are rounded to this many decimal places before deduplication,
/// so that a fine-grid point that lands on an integer collapses with the
/// discrete-grid point at the same location.
pub static GRID_ROUNDING_DECIMALS: i32 = 5;

/// The integration step used for the cumulative numerical integration of the
/// [Beta](crate::distributions::Beta) cdf.
pub static BETA_CDF_INTEGRATION_STEP: f64 = 0.01;

/// The series expansion of the lower incomplete gamma function (used for the
/// [Gamma](crate::distributions::Gamma) cdf) is truncated once a term gets
/// smaller than this tolerance.
pub static GAMMA_CDF_SERIES_TOLERANCE: f64 = 1e-8;

/// Hard bounds for the plotting window of a **single** distribution:
/// `[-100, 100]`. Heavy-tailed parameter choices would otherwise ask for
/// absurdly wide windows.
pub static SINGLE_RANGE_CLAMP: f64 = 100.0;

/// Hard lower bound of the unioned plotting window of the two distributions.
pub static UNION_RANGE_MIN: f64 = -100.0;

/// Hard upper bound of the unioned plotting window of the two distributions.
///
/// Together with [UNION_RANGE_MIN] and the fine steps, this bounds the size
/// of any sample grid, wich keeps every evaluation pass finite and fast.
pub static UNION_RANGE_MAX: f64 = 1000.0;

/// The plotting window used when range selection produces a non-finite or
/// inverted window. The recovery is reported as a warning in the
/// [OverlapReport](crate::overlap::OverlapReport), never as an error.
pub static FALLBACK_RANGE: (f64, f64) = (0.0, 10.0);

/// The fixed plotting window of the [Geometric](crate::distributions::Geometric)
/// distribution. Generous enough for any `p` the sliders can produce.
pub static GEOMETRIC_RANGE: (f64, f64) = (1.0, 20.0);

/// When the mean + 4 standard deviations heuristic of a discrete range fails
/// (non finite or below the minimum), the window is extended this many units
/// past its minimum instead.
pub static DISCRETE_RANGE_FALLBACK_SPAN: f64 = 20.0;
