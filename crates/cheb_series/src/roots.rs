//! Real roots of orthogonal series via the comrade matrix.
//!
//! For a basis with `t * F_k = a_k * F_{k+1} + b_k * F_{k-1}`, the operator
//! "multiply by `t`" on `span(F_0..F_{n-1})`, reduced modulo the series
//! itself, has the roots of the series as eigenvalues. For the Chebyshev
//! basis this is the colleague matrix.

use nalgebra::DMatrix;

use crate::domain::IntervalDomain;

/// Convergence threshold handed to the Schur iteration.
const SCHUR_EPS: f64 = 1e-15;
const SCHUR_MAX_ITER: usize = 10_000;
/// Eigenvalues whose imaginary part is below this (relative) are real.
const IMAG_TOL: f64 = 1e-9;
/// Slack, in the canonical coordinate, for roots landing on a domain bound.
const EDGE_TOL: f64 = 1e-10;

/// Three-term recurrence in the "multiply by `t`" form.
pub(crate) trait ComradeBasis {
    /// Weight of `F_{k+1}` in `t * F_k`.
    fn up(k: usize) -> f64;
    /// Weight of `F_{k-1}` in `t * F_k`. Unused for `k = 0`.
    fn down(k: usize) -> f64;
}

pub(crate) struct Chebyshev;

impl ComradeBasis for Chebyshev {
    fn up(k: usize) -> f64 {
        if k == 0 { 1.0 } else { 0.5 }
    }

    fn down(_k: usize) -> f64 {
        0.5
    }
}

pub(crate) struct Legendre;

impl ComradeBasis for Legendre {
    fn up(k: usize) -> f64 {
        (k + 1) as f64 / (2 * k + 1) as f64
    }

    fn down(k: usize) -> f64 {
        k as f64 / (2 * k + 1) as f64
    }
}

/// Real roots, in the canonical coordinate, of `sum(c_k * F_k(t)) = 0`.
///
/// Trailing zero coefficients are dropped first. A constant series has no
/// isolated roots and yields an empty list, as does a Schur iteration that
/// fails to converge. The result is sorted ascending.
pub(crate) fn canonical_roots<B: ComradeBasis>(coeffs: &[f64]) -> Vec<f64> {
    let degree = match coeffs.iter().rposition(|&c| c != 0.0) {
        Some(d) if d > 0 => d,
        _ => return Vec::new(),
    };
    let lead = coeffs[degree];

    let mut comrade = DMatrix::<f64>::zeros(degree, degree);
    for j in 0..degree {
        if j + 1 < degree {
            comrade[(j + 1, j)] = B::up(j);
        }
        if j >= 1 {
            comrade[(j - 1, j)] = B::down(j);
        }
    }
    // F_n is eliminated with the series itself: F_n = -sum(c_k F_k) / c_n.
    let last = degree - 1;
    for i in 0..degree {
        comrade[(i, last)] -= B::up(last) * coeffs[i] / lead;
    }

    let schur = match comrade.try_schur(SCHUR_EPS, SCHUR_MAX_ITER) {
        Some(s) => s,
        None => return Vec::new(),
    };
    let mut roots: Vec<f64> = schur
        .complex_eigenvalues()
        .iter()
        .filter(|z| z.im.abs() <= IMAG_TOL * z.re.abs().max(1.0))
        .map(|z| z.re)
        .collect();
    roots.sort_by(f64::total_cmp);
    roots
}

/// Real roots of `series(x) = value`, in the domain's own coordinate.
pub(crate) fn series_roots<B: ComradeBasis>(
    coeffs: &[f64],
    domain: &IntervalDomain,
    value: f64,
) -> Vec<f64> {
    let mut shifted = coeffs.to_vec();
    // F_0 = 1 for both bases, so the target value only moves c_0.
    shifted[0] -= value;
    canonical_roots::<B>(&shifted)
        .into_iter()
        .map(|t| domain.unmap(t))
        .collect()
}

/// Keep the roots that fall inside `domain`, snapping near-misses onto its
/// bounds.
pub(crate) fn clip_to_domain(roots: Vec<f64>, domain: &IntervalDomain) -> Vec<f64> {
    roots
        .into_iter()
        .filter(|&x| domain.map(x).abs() <= 1.0 + EDGE_TOL)
        .map(|x| x.clamp(domain.lower(), domain.upper()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-10;

    #[test]
    fn clipping_snaps_edge_roots() {
        let d = IntervalDomain::new(0.0, 10.0).unwrap();
        let kept = clip_to_domain(vec![-1.0, -1e-12, 4.0, 10.0 + 1e-12, 11.0], &d);
        assert_eq!(kept, vec![0.0, 4.0, 10.0]);
    }

    #[test]
    fn chebyshev_t2_roots() {
        // T_2 = 2t^2 - 1
        let roots = canonical_roots::<Chebyshev>(&[0.0, 0.0, 1.0]);
        let r = std::f64::consts::FRAC_1_SQRT_2;
        assert_eq!(roots.len(), 2);
        assert!((roots[0] + r).abs() < EPS);
        assert!((roots[1] - r).abs() < EPS);
    }

    #[test]
    fn linear_series() {
        // 3 + 2t and 3 + 2 P_1 both vanish at -1.5
        let cheb = canonical_roots::<Chebyshev>(&[3.0, 2.0]);
        let leg = canonical_roots::<Legendre>(&[3.0, 2.0]);
        assert_eq!(cheb.len(), 1);
        assert_eq!(leg.len(), 1);
        assert!((cheb[0] + 1.5).abs() < EPS);
        assert!((leg[0] + 1.5).abs() < EPS);
    }

    #[test]
    fn trailing_zeros_and_constants() {
        let roots = canonical_roots::<Chebyshev>(&[3.0, 2.0, 0.0, 0.0]);
        assert_eq!(roots.len(), 1);
        assert!(canonical_roots::<Chebyshev>(&[4.0]).is_empty());
        assert!(canonical_roots::<Legendre>(&[0.0, 0.0]).is_empty());
    }

    #[test]
    fn legendre_p3_roots() {
        // P_3 = (5t^3 - 3t) / 2 vanishes at 0 and ±sqrt(3/5)
        let roots = canonical_roots::<Legendre>(&[0.0, 0.0, 0.0, 1.0]);
        let r = (0.6_f64).sqrt();
        assert_eq!(roots.len(), 3);
        assert!((roots[0] + r).abs() < EPS);
        assert!(roots[1].abs() < EPS);
        assert!((roots[2] - r).abs() < EPS);
    }

    #[test]
    fn chebyshev_nodes_of_high_degree() {
        // T_n vanishes at cos((2j + 1) π / 2n)
        let n = 12;
        let mut coeffs = vec![0.0; n + 1];
        coeffs[n] = 1.0;
        let roots = canonical_roots::<Chebyshev>(&coeffs);
        assert_eq!(roots.len(), n);
        let mut nodes: Vec<f64> = (0..n)
            .map(|j| ((2 * j + 1) as f64 * std::f64::consts::PI / (2 * n) as f64).cos())
            .collect();
        nodes.sort_by(f64::total_cmp);
        for (got, want) in roots.iter().zip(&nodes) {
            assert!((got - want).abs() < 1e-9, "{got} vs {want}");
        }
    }
}
