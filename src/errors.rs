use thiserror::Error;

/// An enum that indicates why an evaluation pass could not be completed
/// (or had to be degraded).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BayesVizError {
    /// One or more parameters violate the domain of their distribution.
    /// Contains **every** violation found, not just the first one: the
    /// caller is expected to surface the full list at once and skip the
    /// evaluation entirely (no partial charts).
    #[error("{}", .violations.join("\n"))]
    ParameterDomain {
        /// Human readable messages, one per violated rule.
        violations: Vec<String>,
    },
    /// A computed value was NaN or infinite. Within curve evaluation this is
    /// handled locally (the offending point is coerced to `0.0`), so this
    /// variant only shows up when a whole computation degenerates.
    #[error(
        "A numerical degeneracy (NaN or infinite value) was found during the computation. "
    )]
    NumericalDegeneracy,
    /// Range selection produced an unusable window. Recovered internally by
    /// falling back to the default window, so this never reaches the caller
    /// as an error (only as a warning in the report).
    #[error("The unioned plotting range was not usable. ")]
    UnsupportedRange,
}

impl BayesVizError {
    /// Convenience constructor for a [BayesVizError::ParameterDomain] with a
    /// single violation.
    #[must_use]
    pub fn single_violation(message: &str) -> BayesVizError {
        return BayesVizError::ParameterDomain {
            violations: std::vec![String::from(message)],
        };
    }

    /// Returns the violation list if `self` is a
    /// [BayesVizError::ParameterDomain], otherwise an empty list.
    #[must_use]
    pub fn violations(&self) -> &[String] {
        match self {
            BayesVizError::ParameterDomain { violations } => violations,
            _ => &[],
        }
    }
}
