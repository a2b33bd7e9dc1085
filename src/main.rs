mod cli;
mod config;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

use cli::{Cli, Command, WindowArgs};
use discrete_signal::{
    audio::raw, bin_frequency, raw_samples, Analysis, AnalysisOptions, Engine, Projection,
    DEFAULT_WINDOW_SIZE,
};
use output::{
    pairs, write_json, ComplexReport, InverseReport, PerWindow, ResponseReport, SamplesReport,
    SpectrumReport,
};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let mut cli = Cli::parse();

    // Config values apply only when the CLI is at its default
    let mut engine = cli.engine;
    if let Some(path) = config::find_config(cli.config.as_deref()) {
        if let Some(cfg) = config::load_config(&path) {
            log::info!("Loaded config from {}", path.display());
            let a = cfg.analysis;
            engine = engine.or(Some(a.engine));
            match &mut cli.command {
                Command::Spectrum { window, normalize, half, .. } => {
                    merge_window(window, a.window_size, a.max_count);
                    *normalize |= a.normalize;
                    *half |= a.half_spectrum;
                }
                Command::Complex { window, .. } | Command::Inverse { window, .. } => {
                    merge_window(window, a.window_size, a.max_count);
                }
                Command::Response { window_size, .. } => {
                    if *window_size == DEFAULT_WINDOW_SIZE {
                        *window_size = a.window_size;
                    }
                }
                Command::Samples { .. } | Command::Raw { .. } => {}
            }
        } else {
            log::warn!("Failed to load config from {}", path.display());
        }
    }
    let engine = engine.unwrap_or_default();
    let out = cli.output.as_deref();

    match cli.command {
        Command::Spectrum { input, window, normalize, half } => {
            let analysis = open(&input, &window, engine)?;
            let projection = Projection { normalize, half_spectrum: half };
            let magnitudes = match window.index {
                Some(i) => PerWindow::One(
                    analysis
                        .magnitude_spectrum(i, projection)
                        .with_context(|| format!("Failed to compute spectrum of window {}", i))?,
                ),
                None => {
                    let pb = spinner(&analysis)?;
                    let all = analysis.magnitude_spectra(projection);
                    pb.finish_and_clear();
                    PerWindow::All(all.context("Failed to compute spectra")?)
                }
            };
            write_json(
                &SpectrumReport {
                    ok: true,
                    window_size: analysis.window_size(),
                    window_count: analysis.window_count(),
                    sample_rate: analysis.audio().sample_rate,
                    magnitudes,
                },
                out,
            )
        }
        Command::Complex { input, window } => {
            let analysis = open(&input, &window, engine)?;
            let spectra = match window.index {
                Some(i) => PerWindow::One(pairs(
                    &analysis
                        .complex_spectrum(i)
                        .with_context(|| format!("Failed to compute spectrum of window {}", i))?,
                )),
                None => {
                    let pb = spinner(&analysis)?;
                    let all = analysis.complex_spectra();
                    pb.finish_and_clear();
                    PerWindow::All(
                        all.context("Failed to compute spectra")?
                            .iter()
                            .map(|s| pairs(s))
                            .collect(),
                    )
                }
            };
            write_json(
                &ComplexReport {
                    ok: true,
                    window_size: analysis.window_size(),
                    window_count: analysis.window_count(),
                    spectra,
                },
                out,
            )
        }
        Command::Inverse { input, window } => {
            let analysis = open(&input, &window, engine)?;
            let windows = match window.index {
                Some(i) => PerWindow::One(
                    analysis
                        .reconstruct(i)
                        .with_context(|| format!("Failed to reconstruct window {}", i))?,
                ),
                None => {
                    let pb = spinner(&analysis)?;
                    let all = analysis.reconstructions();
                    pb.finish_and_clear();
                    let all = all.context("Failed to reconstruct windows")?;
                    let worst = all.iter().map(|r| r.max_error).fold(0.0f64, f64::max);
                    log::info!("Worst reconstruction error: {:e}", worst);
                    PerWindow::All(all)
                }
            };
            write_json(
                &InverseReport {
                    ok: true,
                    window_size: analysis.window_size(),
                    window_count: analysis.window_count(),
                    windows,
                },
                out,
            )
        }
        Command::Samples { input, max_count } => {
            let samples = raw_samples(&input, Some(max_count))
                .with_context(|| format!("Failed to decode {}", input.display()))?;
            write_json(&SamplesReport { ok: true, samples }, out)
        }
        Command::Raw { input } => {
            let samples = raw::read_pcm16(&input)
                .with_context(|| format!("Failed to read {}", input.display()))?;
            write_json(&SamplesReport { ok: true, samples }, out)
        }
        Command::Response { input, window_size } => {
            let options = AnalysisOptions {
                window_size,
                max_count: None,
                engine,
            };
            let analysis = Analysis::open(&input, &options)
                .with_context(|| format!("Failed to analyze {}", input.display()))?;
            let magnitudes = analysis
                .amplitude_response()
                .context("Failed to compute amplitude response")?;
            let rate = analysis.audio().sample_rate;
            let frequencies = (0..magnitudes.len())
                .map(|k| bin_frequency(k, window_size, rate))
                .collect();
            write_json(
                &ResponseReport {
                    ok: true,
                    window_size,
                    frequencies,
                    magnitudes,
                },
                out,
            )
        }
    }
}

fn merge_window(window: &mut WindowArgs, window_size: usize, max_count: Option<usize>) {
    if window.window_size == DEFAULT_WINDOW_SIZE {
        window.window_size = window_size;
    }
    if window.max_count.is_none() {
        window.max_count = max_count;
    }
}

fn open(input: &Path, window: &WindowArgs, engine: Engine) -> Result<Analysis> {
    log::info!("Input: {}", input.display());
    let options = AnalysisOptions {
        window_size: window.window_size,
        max_count: window.max_count,
        engine,
    };
    Analysis::open(input, &options).with_context(|| format!("Failed to analyze {}", input.display()))
}

fn spinner(analysis: &Analysis) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner} {msg} [{elapsed_precise}]")?);
    pb.set_message(format!(
        "Transforming {} windows of {} samples",
        analysis.window_count(),
        analysis.window_size()
    ));
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}
