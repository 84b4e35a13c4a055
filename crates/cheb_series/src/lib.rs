//! Orthogonal polynomial series over bounded real intervals.
//!
//! This crate provides:
//! - [`IntervalDomain`]: a validated `[lower, upper]` interval and its affine
//!   map onto the canonical `[-1, 1]`
//! - [`ChebyshevSeries`]: a truncated Chebyshev expansion evaluated with the
//!   Clenshaw recurrence
//! - [`LegendreSeries`]: the same container over the Legendre basis
//! - [`clenshaw`](mod@clenshaw) kernels usable directly on coefficient slices
//! - real root finding for both series types through the comrade matrix
//!
//! All types are immutable after construction and safe to evaluate from
//! multiple threads at once.

pub mod chebyshev;
pub mod clenshaw;
pub mod domain;
pub mod error;
pub mod function;
pub mod legendre;
mod roots;

pub use chebyshev::ChebyshevSeries;
pub use clenshaw::{clenshaw, clenshaw_legendre, clenshaw_with};
pub use domain::IntervalDomain;
pub use error::SeriesError;
pub use function::SeriesFunction;
pub use legendre::LegendreSeries;
