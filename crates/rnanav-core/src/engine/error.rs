use thiserror::Error;

use super::config::ConfigError;
use crate::core::models::sequence::SequenceError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid sequence: {source}")]
    Sequence {
        #[from]
        source: SequenceError,
    },

    #[error("Configuration error: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },
}
