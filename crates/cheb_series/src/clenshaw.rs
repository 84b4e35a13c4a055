//! Clenshaw recurrence kernels for orthogonal polynomial sums.
//!
//! Algorithms from "Numerical Recipes" (3rd ed., section 5.4) and the
//! three-term recurrences of the Chebyshev and Legendre polynomials.

/// Evaluate a Chebyshev expansion `sum(c_k * T_k(t))`.
///
/// Coefficients run lowest degree first. The accumulator pair
/// `(b_{k+1}, b_{k+2})` starts at zero and is folded from the highest degree
/// down to `k = 1`:
///
/// ```text
/// b_k    = 2t * b_{k+1} - b_{k+2} + c_k
/// result = t * b_1 - b_2 + c_0
/// ```
///
/// `t` is not range checked; values outside `[-1, 1]` extrapolate. An empty
/// slice sums to zero and a lone `c_0` is returned as is, whatever `t` is.
pub fn clenshaw(coeffs: &[f64], t: f64) -> f64 {
    let Some((&c0, higher)) = coeffs.split_first() else {
        return 0.0;
    };
    if higher.is_empty() {
        return c0;
    }

    let two_t = 2.0 * t;
    let (b1, b2) = higher
        .iter()
        .rev()
        .fold((0.0, 0.0), |(b_k1, b_k2), &c_k| (two_t * b_k1 - b_k2 + c_k, b_k1));

    t * b1 - b2 + c0
}

/// Evaluate `sum(c_k * F_k(x))` for any basis obeying a three-term recurrence.
///
/// The basis must satisfy
///
/// ```text
/// F_{k+1}(x) = alpha(k, x) * F_k(x) + beta(k, x) * F_{k-1}(x)
/// ```
///
/// with `f0 = F_0(x)` and `f1 = F_1(x)` supplied by the caller. The backward
/// pass is
///
/// ```text
/// y_{n+1} = y_{n+2} = 0
/// y_k     = alpha(k, x) * y_{k+1} + beta(k + 1, x) * y_{k+2} + c_k
/// result  = beta(1, x) * F_0 * y_2 + F_1 * y_1 + c_0 * F_0
/// ```
pub fn clenshaw_with<A, B>(coeffs: &[f64], x: f64, alpha: A, beta: B, f0: f64, f1: f64) -> f64
where
    A: Fn(usize, f64) -> f64,
    B: Fn(usize, f64) -> f64,
{
    let n = coeffs.len();
    if n == 0 {
        return 0.0;
    }
    if n == 1 {
        return coeffs[0] * f0;
    }

    let mut y_k1 = 0.0;
    let mut y_k2 = 0.0;

    for k in (1..n).rev() {
        let y_k = alpha(k, x) * y_k1 + beta(k + 1, x) * y_k2 + coeffs[k];
        y_k2 = y_k1;
        y_k1 = y_k;
    }

    beta(1, x) * f0 * y_k2 + f1 * y_k1 + coeffs[0] * f0
}

/// Evaluate a Legendre expansion `sum(c_k * P_k(t))`.
///
/// Uses Bonnet's recurrence `(k + 1) P_{k+1} = (2k + 1) t P_k - k P_{k-1}`.
pub fn clenshaw_legendre(coeffs: &[f64], t: f64) -> f64 {
    clenshaw_with(
        coeffs,
        t,
        |k, t| (2 * k + 1) as f64 / (k + 1) as f64 * t,
        |k, _| -(k as f64) / (k + 1) as f64,
        1.0,
        t,
    )
}
