//! Windowed spectral analysis of one decoded file.
//!
//! The file is decoded once up front; every per-window transform afterwards is
//! independent and fans out across rayon's pool. Results are collected back in
//! window order.

use std::path::Path;

use rayon::prelude::*;
use rustfft::num_complex::Complex64;
use serde::Serialize;

use crate::audio::{decode_audio, AudioData};
use crate::error::{Error, Result};
use crate::projection::Projection;
use crate::transform::Engine;
use crate::window::{self, DEFAULT_WINDOW_SIZE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnalysisOptions {
    pub window_size: usize,
    /// Cap on decoded samples; `None` decodes the whole file.
    pub max_count: Option<usize>,
    pub engine: Engine,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            max_count: None,
            engine: Engine::default(),
        }
    }
}

/// Result of running one window through the forward and inverse transforms.
#[derive(Clone, Debug, Serialize)]
pub struct Reconstruction {
    /// Real part of the inverse transform.
    pub signal: Vec<f64>,
    /// Largest `|original - recovered|` over the window.
    pub max_error: f64,
    /// Largest `|imaginary part|` left over by the inverse transform.
    pub max_imaginary: f64,
}

pub struct Analysis {
    audio: AudioData,
    window_size: usize,
    engine: Engine,
}

impl Analysis {
    /// Decode `path` and prepare it for windowed analysis.
    pub fn open(path: &Path, options: &AnalysisOptions) -> Result<Self> {
        if options.window_size == 0 {
            return Err(Error::invalid("window size must be positive"));
        }
        let audio = decode_audio(path, options.max_count)?;
        Self::new(audio, options.window_size, options.engine)
    }

    pub fn new(audio: AudioData, window_size: usize, engine: Engine) -> Result<Self> {
        let count = window::window_count(audio.samples.len(), window_size)?;
        log::info!(
            "{} windows of {} samples ({:?} engine)",
            count,
            window_size,
            engine
        );
        Ok(Self {
            audio,
            window_size,
            engine,
        })
    }

    pub fn audio(&self) -> &AudioData {
        &self.audio
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn window_count(&self) -> usize {
        self.audio.samples.len().div_ceil(self.window_size)
    }

    pub fn windows(&self) -> Result<Vec<Vec<f64>>> {
        window::segment(&self.audio.samples, self.window_size)
    }

    pub fn complex_spectrum(&self, index: usize) -> Result<Vec<Complex64>> {
        let mut buf = vec![0.0; self.window_size];
        window::fill_window(&self.audio.samples, index, &mut buf)?;
        self.engine.forward(&buf)
    }

    pub fn complex_spectra(&self) -> Result<Vec<Vec<Complex64>>> {
        let samples = &self.audio.samples;
        let engine = self.engine;

        (0..self.window_count())
            .into_par_iter()
            .map_init(
                || vec![0.0; self.window_size],
                |buf, i| -> Result<Vec<Complex64>> {
                    window::fill_window(samples, i, buf)?;
                    engine.forward(buf)
                },
            )
            .collect()
    }

    pub fn magnitude_spectrum(&self, index: usize, projection: Projection) -> Result<Vec<f64>> {
        Ok(projection.apply(&self.complex_spectrum(index)?))
    }

    pub fn magnitude_spectra(&self, projection: Projection) -> Result<Vec<Vec<f64>>> {
        let samples = &self.audio.samples;
        let engine = self.engine;
        let n = self.window_size;

        (0..self.window_count())
            .into_par_iter()
            .map_init(
                || (vec![0.0; n], vec![Complex64::new(0.0, 0.0); n]),
                |(buf, spectrum), i| -> Result<Vec<f64>> {
                    window::fill_window(samples, i, buf)?;
                    engine.forward_into(buf, spectrum)?;
                    Ok(projection.apply(spectrum))
                },
            )
            .collect()
    }

    pub fn reconstruct(&self, index: usize) -> Result<Reconstruction> {
        let mut scratch = Scratch::new(self.window_size);
        window::fill_window(&self.audio.samples, index, &mut scratch.window)?;
        scratch.round_trip(self.engine)
    }

    pub fn reconstructions(&self) -> Result<Vec<Reconstruction>> {
        let samples = &self.audio.samples;
        let engine = self.engine;
        let n = self.window_size;

        (0..self.window_count())
            .into_par_iter()
            .map_init(
                || Scratch::new(n),
                |scratch, i| -> Result<Reconstruction> {
                    window::fill_window(samples, i, &mut scratch.window)?;
                    scratch.round_trip(engine)
                },
            )
            .collect()
    }

    /// Normalized half-spectrum of the first window (zero-padded if the file is short).
    pub fn amplitude_response(&self) -> Result<Vec<f64>> {
        let mut buf = vec![0.0; self.window_size];
        let count = self.window_size.min(self.audio.samples.len());
        buf[..count].copy_from_slice(&self.audio.samples[..count]);
        Ok(Projection::DISPLAY.apply(&self.engine.forward(&buf)?))
    }
}

/// Decode at most `max_count` samples of the first channel.
pub fn raw_samples(path: &Path, max_count: Option<usize>) -> Result<Vec<f64>> {
    Ok(decode_audio(path, max_count)?.samples)
}

struct Scratch {
    window: Vec<f64>,
    spectrum: Vec<Complex64>,
    restored: Vec<Complex64>,
}

impl Scratch {
    fn new(n: usize) -> Self {
        Self {
            window: vec![0.0; n],
            spectrum: vec![Complex64::new(0.0, 0.0); n],
            restored: vec![Complex64::new(0.0, 0.0); n],
        }
    }

    fn round_trip(&mut self, engine: Engine) -> Result<Reconstruction> {
        engine.forward_into(&self.window, &mut self.spectrum)?;
        engine.inverse_into(&self.spectrum, &mut self.restored)?;

        let mut max_error = 0.0f64;
        let mut max_imaginary = 0.0f64;
        for (x, r) in self.window.iter().zip(&self.restored) {
            max_error = max_error.max((x - r.re).abs());
            max_imaginary = max_imaginary.max(r.im.abs());
        }

        Ok(Reconstruction {
            signal: self.restored.iter().map(|c| c.re).collect(),
            max_error,
            max_imaginary,
        })
    }
}
