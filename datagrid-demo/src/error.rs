use thiserror::Error;

use crate::config::ConfigError;

/// Errors that end the demo.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
