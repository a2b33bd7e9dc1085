//! Magnitude views of a complex spectrum.

use rustfft::num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// How a complex spectrum is reduced to magnitudes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projection {
    /// Divide by the window's peak magnitude so the maximum becomes 1.0.
    pub normalize: bool,
    /// Keep only bins `[0, N/2)`; the upper half mirrors it for real input.
    pub half_spectrum: bool,
}

impl Projection {
    pub const FULL: Projection = Projection {
        normalize: false,
        half_spectrum: false,
    };

    /// Half spectrum scaled to a peak of 1.0, as used for display.
    pub const DISPLAY: Projection = Projection {
        normalize: true,
        half_spectrum: true,
    };

    pub fn apply(&self, spectrum: &[Complex64]) -> Vec<f64> {
        let bins = if self.half_spectrum {
            &spectrum[..spectrum.len() / 2]
        } else {
            spectrum
        };

        let mut mags = magnitudes(bins);
        if self.normalize {
            normalize(&mut mags);
        }
        mags
    }
}

/// `|X[k]| = sqrt(re² + im²)` per bin.
pub fn magnitudes(spectrum: &[Complex64]) -> Vec<f64> {
    spectrum.iter().map(|c| c.norm()).collect()
}

/// Scale so the peak is exactly 1.0. An all-zero (or empty) slice is left untouched.
pub fn normalize(values: &mut [f64]) {
    let max = values.iter().copied().fold(0.0f64, f64::max);
    if max > 0.0 {
        for v in values.iter_mut() {
            *v /= max;
        }
    }
}

/// Center frequency in Hz of bin `k` of an `n`-point transform.
pub fn bin_frequency(k: usize, n: usize, sample_rate: u32) -> f64 {
    if n == 0 {
        return 0.0;
    }
    k as f64 * sample_rate as f64 / n as f64
}
