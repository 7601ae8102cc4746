//! Empirical quantiles via plotting positions.

/// Cunnane plotting-position shape parameter α.
pub const CUNNANE_ALPHA: f64 = 0.4;

/// Cunnane plotting-position shape parameter β.
pub const CUNNANE_BETA: f64 = 0.4;

/// Empirical quantile with plotting-position parameters `(alpha, beta)`.
///
/// Interpolates linearly between order statistics at position
/// `p * (n + 1 - alpha - beta) + alpha` (matching scipy's `mquantiles`).
///
/// **Expects pre-sorted input** (caller's responsibility).
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn empirical_quantile(sorted: &[f64], p: f64, alpha: f64, beta: f64) -> f64 {
    assert!(
        !sorted.is_empty(),
        "empirical_quantile: input must not be empty"
    );
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let h = p * (n as f64 + 1.0 - alpha - beta) + alpha;
    let k = h.floor().clamp(1.0, (n - 1) as f64);
    let gamma = (h - k).clamp(0.0, 1.0);
    let k = k as usize;
    (1.0 - gamma) * sorted[k - 1] + gamma * sorted[k]
}

/// Empirical quantile with Cunnane parameters (α = β = 0.4).
pub fn cunnane_quantile(sorted: &[f64], p: f64) -> f64 {
    empirical_quantile(sorted, p, CUNNANE_ALPHA, CUNNANE_BETA)
}
