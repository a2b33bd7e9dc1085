use anyhow::{Context, Result};
use discrete_signal::{Complex64, Reconstruction};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// A single window's value, or every window's in order.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum PerWindow<T> {
    One(T),
    All(Vec<T>),
}

#[derive(Debug, Serialize)]
pub struct SpectrumReport {
    pub ok: bool,
    pub window_size: usize,
    pub window_count: usize,
    pub sample_rate: u32,
    pub magnitudes: PerWindow<Vec<f64>>,
}

#[derive(Debug, Serialize)]
pub struct ComplexReport {
    pub ok: bool,
    pub window_size: usize,
    pub window_count: usize,
    /// `[re, im]` per bin
    pub spectra: PerWindow<Vec<[f64; 2]>>,
}

#[derive(Debug, Serialize)]
pub struct InverseReport {
    pub ok: bool,
    pub window_size: usize,
    pub window_count: usize,
    pub windows: PerWindow<Reconstruction>,
}

#[derive(Debug, Serialize)]
pub struct SamplesReport<T: Serialize> {
    pub ok: bool,
    pub samples: Vec<T>,
}

#[derive(Debug, Serialize)]
pub struct ResponseReport {
    pub ok: bool,
    pub window_size: usize,
    /// Bin center frequencies in Hz
    pub frequencies: Vec<f64>,
    pub magnitudes: Vec<f64>,
}

pub fn pairs(spectrum: &[Complex64]) -> Vec<[f64; 2]> {
    spectrum.iter().map(|c| [c.re, c.im]).collect()
}

pub fn write_json<T: Serialize>(value: &T, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            let mut writer = std::io::BufWriter::new(file);
            serde_json::to_writer(&mut writer, value).context("Failed to serialize report")?;
            writer.flush()?;
            log::info!("Wrote {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = std::io::BufWriter::new(stdout.lock());
            serde_json::to_writer(&mut writer, value).context("Failed to serialize report")?;
            writeln!(writer)?;
            writer.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_window_serializes_flat() {
        let report = SpectrumReport {
            ok: true,
            window_size: 2,
            window_count: 1,
            sample_rate: 8000,
            magnitudes: PerWindow::One(vec![1.0, 0.5]),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["magnitudes"], serde_json::json!([1.0, 0.5]));
        assert_eq!(json["ok"], serde_json::json!(true));
    }

    #[test]
    fn all_windows_serialize_nested() {
        let report = ComplexReport {
            ok: true,
            window_size: 1,
            window_count: 2,
            spectra: PerWindow::All(vec![
                pairs(&[Complex64::new(1.0, -1.0)]),
                pairs(&[Complex64::new(0.0, 2.0)]),
            ]),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["spectra"], serde_json::json!([[[1.0, -1.0]], [[0.0, 2.0]]]));
    }
}
