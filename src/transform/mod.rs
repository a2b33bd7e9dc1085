//! Forward and inverse discrete Fourier transforms over single windows.

pub mod dft;
pub mod fft;
pub mod idft;

use rustfft::num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub use dft::{dft, dft_into};
pub use idft::{idft, idft_into, real_part};

/// Which implementation evaluates the transforms. Both produce the same values
/// within floating-point tolerance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    /// Textbook O(N²) summation.
    #[default]
    Direct,
    /// rustfft.
    Fft,
}

impl Engine {
    pub fn forward_into(self, input: &[f64], output: &mut [Complex64]) -> Result<()> {
        match self {
            Engine::Direct => dft::dft_into(input, output),
            Engine::Fft => fft::fft_into(input, output),
        }
    }

    pub fn inverse_into(self, input: &[Complex64], output: &mut [Complex64]) -> Result<()> {
        match self {
            Engine::Direct => idft::idft_into(input, output),
            Engine::Fft => fft::ifft_into(input, output),
        }
    }

    pub fn forward(self, input: &[f64]) -> Result<Vec<Complex64>> {
        let mut output = vec![Complex64::new(0.0, 0.0); input.len()];
        self.forward_into(input, &mut output)?;
        Ok(output)
    }

    pub fn inverse(self, input: &[Complex64]) -> Result<Vec<Complex64>> {
        let mut output = vec![Complex64::new(0.0, 0.0); input.len()];
        self.inverse_into(input, &mut output)?;
        Ok(output)
    }
}

pub(crate) fn check_lengths(input: usize, output: usize) -> Result<()> {
    if input == 0 {
        return Err(Error::invalid("transform length must be at least 1"));
    }
    if input != output {
        return Err(Error::invalid(format!(
            "output buffer holds {} values, transform needs {}",
            output, input
        )));
    }
    Ok(())
}
