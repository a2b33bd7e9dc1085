use discrete_signal::{Engine, DEFAULT_WINDOW_SIZE};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG: &str = "discrete-signal.toml";

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default = "default_window_size")]
    pub window_size: usize,
    #[serde(default)]
    pub max_count: Option<usize>,
    #[serde(default)]
    pub normalize: bool,
    #[serde(default)]
    pub half_spectrum: bool,
    #[serde(default)]
    pub engine: Engine,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            window_size: default_window_size(),
            max_count: None,
            normalize: false,
            half_spectrum: false,
            engine: Engine::default(),
        }
    }
}

fn default_window_size() -> usize { DEFAULT_WINDOW_SIZE }

pub fn load_config(path: &Path) -> Option<Config> {
    let content = std::fs::read_to_string(path).ok()?;
    match toml::from_str(&content) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            log::debug!("{}: {}", path.display(), e);
            None
        }
    }
}

/// Explicit path, then ./discrete-signal.toml, then ~/.config, then the platform config dir.
pub fn find_config(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let local = PathBuf::from(LOCAL_CONFIG);
    if local.exists() {
        return Some(local);
    }
    if let Some(home) = dirs::home_dir() {
        let xdg = home.join(".config").join("discrete-signal").join("config.toml");
        if xdg.exists() {
            return Some(xdg);
        }
    }
    if let Some(config_dir) = dirs::config_dir() {
        let platform = config_dir.join("discrete-signal").join("config.toml");
        if platform.exists() {
            return Some(platform);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let cfg: Config = toml::from_str("").unwrap();
        assert_eq!(cfg.analysis.window_size, 1024);
        assert_eq!(cfg.analysis.engine, Engine::Direct);
        assert!(cfg.analysis.max_count.is_none());
        assert!(!cfg.analysis.normalize);
    }

    #[test]
    fn analysis_table() {
        let cfg: Config = toml::from_str(
            r#"
            [analysis]
            window_size = 2048
            max_count = 44100
            normalize = true
            half_spectrum = true
            engine = "fft"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.analysis.window_size, 2048);
        assert_eq!(cfg.analysis.max_count, Some(44100));
        assert!(cfg.analysis.normalize);
        assert!(cfg.analysis.half_spectrum);
        assert_eq!(cfg.analysis.engine, Engine::Fft);
    }

    #[test]
    fn unreadable_config_is_none() {
        assert!(load_config(Path::new("/nonexistent/discrete-signal.toml")).is_none());

        let path = std::env::temp_dir().join(format!("discrete_signal_cfg_{}.toml", std::process::id()));
        std::fs::write(&path, "[analysis]\nwindow_size = \"big\"\n").unwrap();
        assert!(load_config(&path).is_none());
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn explicit_path_wins() {
        let p = Path::new("/tmp/custom.toml");
        assert_eq!(find_config(Some(p)), Some(p.to_path_buf()));
    }
}
