//! Error types for the arena

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArenaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parsing failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("unknown engine: {0}")]
    UnknownEngine(String),

    #[error("engine {engine} broke the rules: {source}")]
    Rules {
        engine: String,
        #[source]
        source: chess_rules::RulesError,
    },
}

pub type Result<T> = std::result::Result<T, ArenaError>;
