//! Offline numerical transforms
//!
//! Brute-force evaluations of the Laplace and Z transforms of a sampled
//! signal, for exploring recorded histories outside the tick loop. They are
//! `O(N·M)` and not used by the live pole/zero model.
//!
//! ```text
//! X(σ + jω) ≈ Σ x[n]·e^{-σ t[n]}·e^{-jω t[n]}·(t[n] - t[n-1])     (first term weight 0)
//! X(e^{jω}) = Σ x[n]·e^{-jω n}
//! ```

use num_complex::Complex64;

/// Rectangle-rule Laplace transform along the line `s = σ + jω`
///
/// One output per entry of `omega`. `x` and `t` are paired element-wise and
/// any excess in the longer slice is ignored. `t` should be increasing.
pub fn numerical_laplace(x: &[f64], t: &[f64], sigma: f64, omega: &[f64]) -> Vec<Complex64> {
    let n = x.len().min(t.len());
    omega
        .iter()
        .map(|&w| {
            (0..n)
                .map(|i| {
                    let dt = if i == 0 { 0.0 } else { t[i] - t[i - 1] };
                    let decay = (-sigma * t[i]).exp() * x[i];
                    Complex64::from_polar(decay * dt, -w * t[i])
                })
                .sum()
        })
        .collect()
}

/// Z transform evaluated on the unit circle, one output per entry of `omega`
pub fn numerical_z_transform(x: &[f64], omega: &[f64]) -> Vec<Complex64> {
    omega
        .iter()
        .map(|&w| {
            x.iter()
                .enumerate()
                .map(|(n, &xn)| Complex64::from_polar(xn, -w * n as f64))
                .sum()
        })
        .collect()
}
