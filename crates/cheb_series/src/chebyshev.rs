//! Truncated Chebyshev series `f(x) = sum(c_k * T_k(t(x)))`.

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::clenshaw::clenshaw;
use crate::domain::IntervalDomain;
use crate::error::SeriesError;
use crate::function::{SeriesFunction, verify_coefficients};
use crate::roots;

/// A Chebyshev series of the first kind over an [`IntervalDomain`].
///
/// Coefficients are stored lowest degree first: `coefficients()[k]`
/// multiplies `T_k`. Evaluation maps `x` into the canonical coordinate with
/// [`IntervalDomain::map`] and runs the Clenshaw recurrence there.
///
/// The series is immutable. Arithmetic returns new series.
#[derive(Debug, Clone, PartialEq)]
pub struct ChebyshevSeries {
    coefficients: Vec<f64>,
    domain: IntervalDomain,
}

impl ChebyshevSeries {
    /// Build a series over the canonical `[-1, 1]` domain.
    pub fn new(coefficients: Vec<f64>) -> Result<Self, SeriesError> {
        Self::with_domain(coefficients, IntervalDomain::canonical())
    }

    /// Build a series over an explicit domain.
    pub fn with_domain(
        coefficients: Vec<f64>,
        domain: IntervalDomain,
    ) -> Result<Self, SeriesError> {
        verify_coefficients(&coefficients)?;
        Ok(Self {
            coefficients,
            domain,
        })
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Degree of the highest term: one less than the coefficient count.
    pub fn order(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn domain(&self) -> &IntervalDomain {
        &self.domain
    }

    /// Evaluate the series at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        let t = self.domain.map(x);
        clenshaw(&self.coefficients, t)
    }

    /// Borrow the series as a plain function of `x`.
    ///
    /// The closure forwards to [`evaluate`](Self::evaluate), so both give
    /// bit-identical results.
    pub fn as_fn(&self) -> impl Fn(f64) -> f64 + '_ {
        move |x| self.evaluate(x)
    }

    /// Evaluate at every point of `xs`, in order.
    pub fn evaluate_all(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }

    /// Real solutions of `f(x) = value`, sorted ascending.
    ///
    /// Found as eigenvalues of the Chebyshev comrade matrix, so roots outside the
    /// domain are reported too. Use [`roots_in_domain`](Self::roots_in_domain)
    /// to keep only those inside it. A constant series yields no roots.
    pub fn roots(&self, value: f64) -> Vec<f64> {
        roots::series_roots::<roots::Chebyshev>(&self.coefficients, &self.domain, value)
    }

    /// Real solutions of `f(x) = value` that lie inside the domain.
    pub fn roots_in_domain(&self, value: f64) -> Vec<f64> {
        roots::clip_to_domain(self.roots(value), &self.domain)
    }

    /// Add two series term by term. The shorter one is padded with zeros.
    pub fn checked_add(&self, other: &Self) -> Result<Self, SeriesError> {
        self.combine(other, |a, b| a + b)
    }

    /// Subtract `other` term by term. The shorter one is padded with zeros.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, SeriesError> {
        self.combine(other, |a, b| a - b)
    }

    fn combine(&self, other: &Self, op: impl Fn(f64, f64) -> f64) -> Result<Self, SeriesError> {
        if self.domain != other.domain {
            return Err(SeriesError::DomainMismatch);
        }
        let len = self.coefficients.len().max(other.coefficients.len());
        let coefficients = (0..len)
            .map(|k| {
                let a = self.coefficients.get(k).copied().unwrap_or(0.0);
                let b = other.coefficients.get(k).copied().unwrap_or(0.0);
                op(a, b)
            })
            .collect();
        Ok(Self {
            coefficients,
            domain: self.domain,
        })
    }

    fn map_coefficients(&self, op: impl Fn(f64) -> f64) -> Self {
        Self {
            coefficients: self.coefficients.iter().map(|&c| op(c)).collect(),
            domain: self.domain,
        }
    }

    fn shift(&self, offset: f64) -> Self {
        let mut coefficients = self.coefficients.clone();
        // T_0 = 1, so a constant only touches c_0.
        coefficients[0] += offset;
        Self {
            coefficients,
            domain: self.domain,
        }
    }
}

impl SeriesFunction for ChebyshevSeries {
    fn domain(&self) -> &IntervalDomain {
        &self.domain
    }

    fn evaluate(&self, x: f64) -> f64 {
        ChebyshevSeries::evaluate(self, x)
    }
}

impl Add<f64> for &ChebyshevSeries {
    type Output = ChebyshevSeries;

    fn add(self, rhs: f64) -> ChebyshevSeries {
        self.shift(rhs)
    }
}

impl Sub<f64> for &ChebyshevSeries {
    type Output = ChebyshevSeries;

    fn sub(self, rhs: f64) -> ChebyshevSeries {
        self.shift(-rhs)
    }
}

impl Mul<f64> for &ChebyshevSeries {
    type Output = ChebyshevSeries;

    fn mul(self, rhs: f64) -> ChebyshevSeries {
        self.map_coefficients(|c| c * rhs)
    }
}

impl Div<f64> for &ChebyshevSeries {
    type Output = ChebyshevSeries;

    fn div(self, rhs: f64) -> ChebyshevSeries {
        self.map_coefficients(|c| c / rhs)
    }
}

impl Neg for &ChebyshevSeries {
    type Output = ChebyshevSeries;

    fn neg(self) -> ChebyshevSeries {
        self.map_coefficients(|c| -c)
    }
}
