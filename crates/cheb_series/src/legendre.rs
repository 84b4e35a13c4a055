//! Truncated Legendre series `f(x) = sum(c_k * P_k(t(x)))`.

use std::ops::{Div, Mul};

use crate::clenshaw::clenshaw_legendre;
use crate::domain::IntervalDomain;
use crate::error::SeriesError;
use crate::function::{SeriesFunction, verify_coefficients};
use crate::roots;

/// A Legendre series over an [`IntervalDomain`].
///
/// Same contract as [`ChebyshevSeries`](crate::ChebyshevSeries) with the
/// Legendre polynomials as basis.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendreSeries {
    coefficients: Vec<f64>,
    domain: IntervalDomain,
}

impl LegendreSeries {
    pub fn new(coefficients: Vec<f64>) -> Result<Self, SeriesError> {
        Self::with_domain(coefficients, IntervalDomain::canonical())
    }

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

    pub fn order(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn domain(&self) -> &IntervalDomain {
        &self.domain
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        clenshaw_legendre(&self.coefficients, self.domain.map(x))
    }

    pub fn as_fn(&self) -> impl Fn(f64) -> f64 + '_ {
        move |x| self.evaluate(x)
    }

    /// Real solutions of `f(x) = value`, sorted ascending.
    ///
    /// Found as eigenvalues of the Legendre comrade matrix, so roots outside the
    /// domain are reported too. Use [`roots_in_domain`](Self::roots_in_domain)
    /// to keep only those inside it. A constant series yields no roots.
    pub fn roots(&self, value: f64) -> Vec<f64> {
        roots::series_roots::<roots::Legendre>(&self.coefficients, &self.domain, value)
    }

    /// Real solutions of `f(x) = value` that lie inside the domain.
    pub fn roots_in_domain(&self, value: f64) -> Vec<f64> {
        roots::clip_to_domain(self.roots(value), &self.domain)
    }
}

impl SeriesFunction for LegendreSeries {
    fn domain(&self) -> &IntervalDomain {
        &self.domain
    }

    fn evaluate(&self, x: f64) -> f64 {
        LegendreSeries::evaluate(self, x)
    }
}

impl Mul<f64> for &LegendreSeries {
    type Output = LegendreSeries;

    fn mul(self, rhs: f64) -> LegendreSeries {
        LegendreSeries {
            coefficients: self.coefficients.iter().map(|c| c * rhs).collect(),
            domain: self.domain,
        }
    }
}

impl Div<f64> for &LegendreSeries {
    type Output = LegendreSeries;

    fn div(self, rhs: f64) -> LegendreSeries {
        LegendreSeries {
            coefficients: self.coefficients.iter().map(|c| c / rhs).collect(),
            domain: self.domain,
        }
    }
}
