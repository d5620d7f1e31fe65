use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;

use crate::cli::Cli;
use crate::error::{Error, Result};
use crate::questions::DEFAULT_TITLE;

pub const DEFAULT_MAX_TIME: f64 = 10.0;
pub const DEFAULT_TICK_MS: u64 = 100;
pub const MIN_TICK_MS: u64 = 10;
pub const MAX_TICK_MS: u64 = 100;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub max_time: f64,
    pub tick_ms: u64,
    pub seed: Option<u64>,
    pub questions: Option<PathBuf>,
    pub title: String,
    pub expired_message: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_time: DEFAULT_MAX_TIME,
            tick_ms: DEFAULT_TICK_MS,
            seed: None,
            questions: None,
            title: DEFAULT_TITLE.to_string(),
            expired_message: "Goodbye seed round".to_string(),
        }
    }
}

impl Settings {
    pub fn from_yaml(content: &str, path: &Path) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Command-line flags win over the file.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(v) = cli.max_time {
            self.max_time = v;
        }
        if let Some(v) = cli.tick_ms {
            self.tick_ms = v;
        }
        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
        if cli.questions.is_some() {
            self.questions = cli.questions.clone();
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.max_time.is_finite() || self.max_time <= 0.0 {
            return Err(Error::InvalidSetting(format!(
                "max_time must be a positive number of seconds, got {}",
                self.max_time
            )));
        }
        if !(MIN_TICK_MS..=MAX_TICK_MS).contains(&self.tick_ms) {
            return Err(Error::InvalidSetting(format!(
                "tick_ms must be between {} and {}, got {}",
                MIN_TICK_MS, MAX_TICK_MS, self.tick_ms
            )));
        }
        Ok(())
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "pitchme").map(|dirs| dirs.config_dir().join("config.yaml"))
}

/// Loads the config file (explicit or default), then layers the CLI on top.
///
/// A missing default file means defaults; a missing explicit file is an error.
pub fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = match &cli.config {
        Some(path) => read_settings(path)?,
        None => match default_config_path() {
            Some(path) if path.is_file() => read_settings(&path)?,
            _ => Settings::default(),
        },
    };

    settings.apply_cli(cli);
    settings.validate()?;
    Ok(settings)
}

fn read_settings(path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    let mut settings = Settings::from_yaml(&content, path)?;

    // Deck paths in the file are relative to the file
    if let (Some(deck), Some(dir)) = (&settings.questions, path.parent()) {
        if deck.is_relative() {
            settings.questions = Some(dir.join(deck));
        }
    }
    Ok(settings)
}
