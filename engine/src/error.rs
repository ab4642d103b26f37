use thiserror::Error;

use crate::game::CELL_COUNT;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("cell index {index} is out of range (expected 0..{max})", max = CELL_COUNT)]
    InvalidCell { index: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[source] std::io::Error),
    #[error("Failed to write config file: {0}")]
    Write(#[source] std::io::Error),
    #[error("Failed to serialize config: {0}")]
    Serialize(#[source] serde_yaml_ng::Error),
    #[error("Failed to deserialize config: {0}")]
    Deserialize(#[source] serde_yaml_ng::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
    #[error("Config cache lock poisoned")]
    Poisoned,
}
