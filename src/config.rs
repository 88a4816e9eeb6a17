use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_TIMES_FILE: &str = "timings.txt";
pub const DEFAULT_FALLBACK_EXIT_CODE: i32 = 120;

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub timing: TimingConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TimingConfig {
    // Used when neither -t/--times nor FTIME_TIMES is given
    pub default_file: PathBuf,
    pub fallback_exit_code: i32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub language: String,
    pub color: bool,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            default_file: PathBuf::from(DEFAULT_TIMES_FILE),
            fallback_exit_code: DEFAULT_FALLBACK_EXIT_CODE,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            color: true,
        }
    }
}

impl Config {
    /// Loads the config file if present; a missing file yields defaults.
    pub fn new() -> Result<Self> {
        let config_path = Self::get_config_path();

        if config_path.exists() {
            let content = fs::read_to_string(&config_path)
                .with_context(|| format!("Cannot read config file {}", config_path.display()))?;
            Self::from_toml(&content)
                .with_context(|| format!("Invalid config file {}", config_path.display()))
        } else {
            Ok(Config::default())
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    fn get_config_path() -> PathBuf {
        if let Some(path) = std::env::var_os("FTIME_CONFIG") {
            return PathBuf::from(path);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".ftime")
            .join("config.toml")
    }

    pub fn get_effective_language(&self) -> String {
        if self.display.language == "auto" {
            // Try to get system language
            std::env::var("LANG")
                .unwrap_or_else(|_| "en_US".to_string())
                .split('.')
                .next()
                .unwrap_or("en")
                .to_string()
        } else {
            self.display.language.clone()
        }
    }

    /// Flag, then `FTIME_TIMES`, then the configured default.
    pub fn resolve_times_file(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| {
            std::env::var_os("FTIME_TIMES")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        })
        .unwrap_or_else(|| self.timing.default_file.clone())
    }
}
