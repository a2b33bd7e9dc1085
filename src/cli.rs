use clap::{Args, Parser, Subcommand};
use discrete_signal::{Engine, DEFAULT_WINDOW_SIZE};
use std::path::PathBuf;

pub const DEFAULT_SAMPLE_LIMIT: usize = 10_000;

#[derive(Parser, Debug)]
#[command(name = "discrete-signal", about = "Windowed DFT / inverse DFT analysis of PCM WAV files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file (TOML). Defaults to ./discrete-signal.toml or the user config dir
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Transform implementation
    #[arg(long, value_enum, global = true)]
    pub engine: Option<Engine>,

    /// Write JSON here instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Magnitude spectrum of every window (or one window with --index)
    Spectrum {
        /// Input WAV file
        input: PathBuf,

        #[command(flatten)]
        window: WindowArgs,

        /// Scale each window so its peak magnitude is 1.0
        #[arg(long)]
        normalize: bool,

        /// Keep only bins [0, N/2)
        #[arg(long)]
        half: bool,
    },

    /// Complex spectrum as [re, im] pairs
    Complex {
        input: PathBuf,

        #[command(flatten)]
        window: WindowArgs,
    },

    /// Inverse DFT of each window's spectrum, with the reconstruction error
    Inverse {
        input: PathBuf,

        #[command(flatten)]
        window: WindowArgs,
    },

    /// Decoded samples of the first channel
    Samples {
        input: PathBuf,

        /// Stop after this many samples
        #[arg(long, default_value_t = DEFAULT_SAMPLE_LIMIT)]
        max_count: usize,
    },

    /// Samples read straight past a 44-byte header (16-bit PCM only)
    Raw { input: PathBuf },

    /// Normalized half-spectrum of the first window
    Response {
        input: PathBuf,

        /// Window length N
        #[arg(short, long, default_value_t = DEFAULT_WINDOW_SIZE)]
        window_size: usize,
    },
}

#[derive(Args, Debug, Clone)]
pub struct WindowArgs {
    /// Window length N
    #[arg(short, long, default_value_t = DEFAULT_WINDOW_SIZE)]
    pub window_size: usize,

    /// Only this window (0-based)
    #[arg(short, long)]
    pub index: Option<usize>,

    /// Decode at most this many samples
    #[arg(long)]
    pub max_count: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spectrum_flags() {
        let cli = Cli::try_parse_from([
            "discrete-signal",
            "spectrum",
            "a.wav",
            "-w",
            "512",
            "--index",
            "3",
            "--half",
            "--engine",
            "fft",
        ])
        .unwrap();
        assert_eq!(cli.engine, Some(Engine::Fft));
        match cli.command {
            Command::Spectrum { input, window, normalize, half } => {
                assert_eq!(input, PathBuf::from("a.wav"));
                assert_eq!(window.window_size, 512);
                assert_eq!(window.index, Some(3));
                assert!(half);
                assert!(!normalize);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["discrete-signal", "samples", "a.wav"]).unwrap();
        match cli.command {
            Command::Samples { max_count, .. } => assert_eq!(max_count, DEFAULT_SAMPLE_LIMIT),
            other => panic!("unexpected command {:?}", other),
        }
        assert!(cli.engine.is_none());
    }

    #[test]
    fn negative_window_rejected() {
        assert!(Cli::try_parse_from(["discrete-signal", "complex", "a.wav", "-w", "-4"]).is_err());
    }
}
