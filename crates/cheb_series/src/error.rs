//! Error types for series and domain construction.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from building a series or an interval domain.
///
/// Evaluation itself never fails; every variant is raised at construction
/// time or when combining two series.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SeriesError {
    /// The coefficient sequence has no elements.
    EmptySeries,
    /// The interval bounds are not finite or do not satisfy `lower < upper`.
    InvalidDomain { lower: f64, upper: f64 },
    /// Two series defined over different domains were combined.
    DomainMismatch,
}

impl Display for SeriesError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySeries => write!(f, "expected at least one coefficient, found none"),
            Self::InvalidDomain { lower, upper } => write!(
                f,
                "invalid interval domain [{lower}, {upper}]: bounds must be finite with lower < upper"
            ),
            Self::DomainMismatch => write!(f, "series are defined over different domains"),
        }
    }
}

impl Error for SeriesError {}
