use serde::{Deserialize, Serialize};

use crate::game::GameMode;
use crate::logger::{self, LogLevel};
use super::Validate;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub level: LogLevel,
}

impl LogConfig {
    pub fn init_logger(&self) {
        logger::init_logger(self.prefix.clone(), self.level);
    }
}

impl Validate for LogConfig {
    fn validate(&self) -> Result<(), String> {
        if self.prefix.as_deref().is_some_and(|p| p.trim().is_empty()) {
            return Err("Log prefix must not be empty".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub initial_mode: GameMode,
    #[serde(default)]
    pub log: LogConfig,
}

impl Validate for EngineConfig {
    fn validate(&self) -> Result<(), String> {
        self.log.validate()?;
        Ok(())
    }
}
