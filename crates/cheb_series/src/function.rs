//! Shared interface for one-dimensional functions defined over a domain.

use crate::domain::IntervalDomain;
use crate::error::SeriesError;

/// A real function of one variable attached to an [`IntervalDomain`].
///
/// Implementors are immutable; `evaluate` must be pure and total.
pub trait SeriesFunction {
    /// The domain the function was defined over.
    fn domain(&self) -> &IntervalDomain;

    /// Evaluate the function at `x`. Points outside the domain extrapolate.
    fn evaluate(&self, x: f64) -> f64;

    /// Whether `x` lies inside the domain.
    fn is_inside(&self, x: f64) -> bool {
        self.domain().contains(x)
    }

    /// Whether both functions are defined over the same domain.
    fn is_same_domain(&self, other: &dyn SeriesFunction) -> bool {
        self.domain() == other.domain()
    }
}

/// Reject an empty coefficient sequence.
pub(crate) fn verify_coefficients(coefficients: &[f64]) -> Result<(), SeriesError> {
    if coefficients.is_empty() {
        return Err(SeriesError::EmptySeries);
    }
    Ok(())
}
