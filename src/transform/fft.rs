//! `rustfft`-backed engine producing the same values as the direct transforms.
//!
//! rustfft handles every length (mixed radix, Bluestein for awkward primes), so this
//! is a drop-in for non-power-of-two windows too. Neither direction scales its output;
//! the 1/N of the inverse is applied here.

use rustfft::num_complex::Complex64;
use rustfft::FftPlanner;

use super::check_lengths;
use crate::error::Result;

pub fn fft_into(input: &[f64], output: &mut [Complex64]) -> Result<()> {
    check_lengths(input.len(), output.len())?;

    for (slot, &x) in output.iter_mut().zip(input) {
        *slot = Complex64::new(x, 0.0);
    }

    // Per-call planner (rayon-safe)
    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(input.len());
    fft.process(output);
    Ok(())
}

pub fn ifft_into(input: &[Complex64], output: &mut [Complex64]) -> Result<()> {
    check_lengths(input.len(), output.len())?;
    output.copy_from_slice(input);

    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_inverse(input.len());
    fft.process(output);

    let scale = 1.0 / input.len() as f64;
    for v in output.iter_mut() {
        *v *= scale;
    }
    Ok(())
}
