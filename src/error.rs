use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Invalid question deck {}: {source}", path.display())]
    Deck {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Question deck {} contains no questions", .0.display())]
    EmptyDeck(PathBuf),

    #[error("Invalid setting: {0}")]
    InvalidSetting(String),

    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
