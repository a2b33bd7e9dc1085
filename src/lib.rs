//! Windowed spectral analysis of PCM WAV recordings.
//!
//! A file is decoded once into normalized samples of its first channel, split into
//! fixed-size zero-padded windows, and each window is run through a discrete Fourier
//! transform. From there callers take magnitude spectra (full or half, optionally
//! normalized) or send the complex spectrum back through the inverse transform to
//! check that the window is recovered.
//!
//! ```no_run
//! use discrete_signal::{Analysis, AnalysisOptions, Projection};
//! use std::path::Path;
//!
//! let analysis = Analysis::open(Path::new("voice.wav"), &AnalysisOptions::default())?;
//! let spectra = analysis.magnitude_spectra(Projection::DISPLAY)?;
//! let check = analysis.reconstruct(0)?;
//! println!("{} windows, round-trip error {:e}", spectra.len(), check.max_error);
//! # Ok::<(), discrete_signal::Error>(())
//! ```

pub mod analysis;
pub mod audio;
pub mod error;
pub mod projection;
pub mod transform;
pub mod window;

pub use analysis::{raw_samples, Analysis, AnalysisOptions, Reconstruction};
pub use audio::{decode_audio, AudioData, Encoding};
pub use error::{Error, Result};
pub use projection::{bin_frequency, Projection};
pub use rustfft::num_complex::Complex64;
pub use transform::Engine;
pub use window::DEFAULT_WINDOW_SIZE;
