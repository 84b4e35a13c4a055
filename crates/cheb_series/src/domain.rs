//! Bounded real intervals and the affine map onto `[-1, 1]`.

use crate::error::SeriesError;

/// A closed interval `[lower, upper]` over which a series is defined.
///
/// The series basis lives on the canonical interval `[-1, 1]`; [`map`]
/// carries a point of this domain into that coordinate:
///
/// ```text
/// t(x) = (2x - lower - upper) / (upper - lower) = (x - mid) / half
/// ```
///
/// The second form is the one evaluated. Both bounds are halved before they
/// are combined, so no intermediate overflows for finite bounds.
///
/// [`map`]: IntervalDomain::map
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalDomain {
    lower: f64,
    upper: f64,
}

impl IntervalDomain {
    /// Create a domain, rejecting `lower >= upper` and non-finite bounds.
    pub fn new(lower: f64, upper: f64) -> Result<Self, SeriesError> {
        if lower.is_finite() && upper.is_finite() && lower < upper {
            Ok(Self { lower, upper })
        } else {
            Err(SeriesError::InvalidDomain { lower, upper })
        }
    }

    /// The canonical `[-1, 1]` domain.
    pub const fn canonical() -> Self {
        Self {
            lower: -1.0,
            upper: 1.0,
        }
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Centre of the interval.
    pub fn midpoint(&self) -> f64 {
        0.5 * self.lower + 0.5 * self.upper
    }

    /// Half the interval length. Finite for every valid domain.
    pub fn half_width(&self) -> f64 {
        0.5 * self.upper - 0.5 * self.lower
    }

    /// Whether this is the canonical `[-1, 1]` domain.
    pub fn is_canonical(&self) -> bool {
        *self == Self::canonical()
    }

    /// Map `x` into the canonical coordinate.
    ///
    /// No clamping: points outside the domain extrapolate linearly. On the
    /// canonical domain `mid = 0` and `half = 1`, so the result is `x` exactly.
    pub fn map(&self, x: f64) -> f64 {
        (x - self.midpoint()) / self.half_width()
    }

    /// Inverse of [`map`](Self::map): carry a canonical coordinate back.
    pub fn unmap(&self, t: f64) -> f64 {
        self.midpoint() + self.half_width() * t
    }

    /// Closed-interval membership test.
    pub fn contains(&self, x: f64) -> bool {
        self.lower <= x && x <= self.upper
    }
}

impl Default for IntervalDomain {
    fn default() -> Self {
        Self::canonical()
    }
}
