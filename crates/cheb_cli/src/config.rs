//! Evaluation settings gathered from the command line.

use std::error::Error;
use std::fmt::{Display, Formatter};

use cheb_series::{ChebyshevSeries, IntervalDomain, LegendreSeries, SeriesError, SeriesFunction};
use clap::ValueEnum;

/// Polynomial basis of the coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SeriesKind {
    Chebyshev,
    Legendre,
}

impl SeriesKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chebyshev => "chebyshev",
            Self::Legendre => "legendre",
        }
    }
}

/// Errors from assembling a series out of CLI arguments.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CliError {
    InvalidConfig(&'static str),
    Series(SeriesError),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid arguments: {msg}"),
            Self::Series(e) => write!(f, "{e}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Series(e) => Some(e),
            Self::InvalidConfig(_) => None,
        }
    }
}

impl From<SeriesError> for CliError {
    fn from(e: SeriesError) -> Self {
        Self::Series(e)
    }
}

/// Everything needed to build one series.
#[derive(Debug, Clone, PartialEq)]
pub struct EvalConfig {
    pub kind: SeriesKind,
    pub coefficients: Vec<f64>,
    pub lower: Option<f64>,
    pub upper: Option<f64>,
}

impl EvalConfig {
    fn validate(&self) -> Result<(), CliError> {
        if self.lower.is_some() != self.upper.is_some() {
            return Err(CliError::InvalidConfig(
                "--lower and --upper must be given together",
            ));
        }
        if self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(CliError::InvalidConfig("coefficients must be finite"));
        }
        Ok(())
    }

    fn domain(&self) -> Result<IntervalDomain, CliError> {
        match (self.lower, self.upper) {
            (Some(lower), Some(upper)) => Ok(IntervalDomain::new(lower, upper)?),
            _ => Ok(IntervalDomain::canonical()),
        }
    }

    /// Validate the settings and construct the series.
    pub fn build(&self) -> Result<Series, CliError> {
        self.validate()?;
        let domain = self.domain()?;
        let coefficients = self.coefficients.clone();
        let series = match self.kind {
            SeriesKind::Chebyshev => {
                Series::Chebyshev(ChebyshevSeries::with_domain(coefficients, domain)?)
            }
            SeriesKind::Legendre => {
                Series::Legendre(LegendreSeries::with_domain(coefficients, domain)?)
            }
        };
        tracing::debug!(
            kind = self.kind.name(),
            order = series.order(),
            lower = domain.lower(),
            upper = domain.upper(),
            "series constructed"
        );
        Ok(series)
    }
}

/// A constructed series of either basis.
#[derive(Debug, Clone)]
pub enum Series {
    Chebyshev(ChebyshevSeries),
    Legendre(LegendreSeries),
}

impl Series {
    pub fn order(&self) -> usize {
        match self {
            Self::Chebyshev(s) => s.order(),
            Self::Legendre(s) => s.order(),
        }
    }

    pub fn coefficients(&self) -> &[f64] {
        match self {
            Self::Chebyshev(s) => s.coefficients(),
            Self::Legendre(s) => s.coefficients(),
        }
    }

    /// Real solutions of `f(x) = value`, optionally restricted to the domain.
    pub fn roots(&self, value: f64, in_domain: bool) -> Vec<f64> {
        match (self, in_domain) {
            (Self::Chebyshev(s), false) => s.roots(value),
            (Self::Chebyshev(s), true) => s.roots_in_domain(value),
            (Self::Legendre(s), false) => s.roots(value),
            (Self::Legendre(s), true) => s.roots_in_domain(value),
        }
    }

    pub fn function(&self) -> &dyn SeriesFunction {
        match self {
            Self::Chebyshev(s) => s,
            Self::Legendre(s) => s,
        }
    }
}

/// `points` evenly spaced abscissae spanning `domain`, endpoints included.
pub fn sample_points(domain: &IntervalDomain, points: usize) -> Result<Vec<f64>, CliError> {
    if points < 2 {
        return Err(CliError::InvalidConfig("--points must be at least 2"));
    }
    let step = 2.0 / (points - 1) as f64;
    Ok((0..points)
        .map(|i| {
            // Pin the last point so the upper bound is hit exactly.
            if i == points - 1 {
                domain.upper()
            } else {
                domain.unmap(-1.0 + step * i as f64)
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(coefficients: Vec<f64>) -> EvalConfig {
        EvalConfig {
            kind: SeriesKind::Chebyshev,
            coefficients,
            lower: None,
            upper: None,
        }
    }

    #[test]
    fn builds_on_canonical_domain_by_default() {
        let series = config(vec![-11.5, 14.75, -3.5, 0.25]).build().unwrap();
        assert_eq!(series.order(), 3);
        assert!(series.function().domain().is_canonical());
        assert!((series.function().evaluate(0.0) + 8.0).abs() < 1e-12);
    }

    #[test]
    fn empty_coefficients_surface_series_error() {
        assert_eq!(
            config(vec![]).build().unwrap_err(),
            CliError::Series(SeriesError::EmptySeries)
        );
    }

    #[test]
    fn half_specified_domain_is_rejected() {
        let mut cfg = config(vec![1.0]);
        cfg.lower = Some(0.0);
        assert!(matches!(cfg.build(), Err(CliError::InvalidConfig(_))));
    }

    #[test]
    fn reversed_domain_is_rejected() {
        let mut cfg = config(vec![1.0]);
        cfg.lower = Some(5.0);
        cfg.upper = Some(1.0);
        assert_eq!(
            cfg.build().unwrap_err(),
            CliError::Series(SeriesError::InvalidDomain {
                lower: 5.0,
                upper: 1.0
            })
        );
    }

    #[test]
    fn legendre_kind() {
        let mut cfg = config(vec![-31.0 / 3.0, 73.0 / 5.0, -14.0 / 3.0, 2.0 / 5.0]);
        cfg.kind = SeriesKind::Legendre;
        let series = cfg.build().unwrap();
        assert!(matches!(series, Series::Legendre(_)));
        assert!((series.function().evaluate(-1.0) + 30.0).abs() < 1e-12);
    }

    #[test]
    fn roots_dispatch_by_kind() {
        let cheb = config(vec![-11.5, 14.75, -3.5, 0.25]).build().unwrap();
        let all = cheb.roots(0.0, false);
        assert_eq!(all.len(), 3);
        assert!((all[2] - 4.0).abs() < 1e-9);
        assert_eq!(cheb.roots(0.0, true).len(), 1);

        let mut cfg = config(vec![-31.0 / 3.0, 73.0 / 5.0, -14.0 / 3.0, 2.0 / 5.0]);
        cfg.kind = SeriesKind::Legendre;
        let leg = cfg.build().unwrap();
        let level = leg.roots(-8.0, false);
        assert_eq!(level.len(), 1);
        assert!(level[0].abs() < 1e-9);
    }

    #[test]
    fn sample_points_span_domain() {
        let domain = IntervalDomain::new(2.0, 4.0).unwrap();
        let xs = sample_points(&domain, 5).unwrap();
        assert_eq!(xs.len(), 5);
        assert_eq!(xs[0], 2.0);
        assert_eq!(xs[4], 4.0);
        assert!((xs[2] - 3.0).abs() < 1e-12);
        assert!(sample_points(&domain, 1).is_err());
    }
}
