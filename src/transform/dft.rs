//! Direct O(N²) forward transform.
//!
//! `X[k] = Σ x[n]·e^{-i2πkn/N}`, unnormalized. Works for any N ≥ 1.

use std::f64::consts::PI;

use rustfft::num_complex::Complex64;

use super::check_lengths;
use crate::error::Result;

/// Unit-circle table `e^{+i2πm/N}` for `m in 0..N`.
///
/// `k·n mod N` indexes into it, which keeps every angle in [0, 2π) and avoids the
/// precision loss of evaluating `cos`/`sin` on large arguments.
pub(crate) fn unit_roots(n: usize) -> Vec<Complex64> {
    (0..n)
        .map(|m| {
            let theta = 2.0 * PI * m as f64 / n as f64;
            Complex64::new(theta.cos(), theta.sin())
        })
        .collect()
}

/// Forward DFT of a real window into a caller-owned buffer of the same length.
pub fn dft_into(input: &[f64], output: &mut [Complex64]) -> Result<()> {
    check_lengths(input.len(), output.len())?;
    let n = input.len();
    let roots = unit_roots(n);

    for (k, bin) in output.iter_mut().enumerate() {
        let mut sum = Complex64::new(0.0, 0.0);
        let mut idx = 0usize;
        for &x in input {
            // e^{-iθ} is the conjugate of the table entry
            let w = roots[idx];
            sum.re += x * w.re;
            sum.im -= x * w.im;
            idx += k;
            if idx >= n {
                idx -= n;
            }
        }
        *bin = sum;
    }
    Ok(())
}

pub fn dft(input: &[f64]) -> Result<Vec<Complex64>> {
    let mut output = vec![Complex64::new(0.0, 0.0); input.len()];
    dft_into(input, &mut output)?;
    Ok(output)
}
