//! Driver errors.

use corridor_core::error::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Game loop already running")]
    AlreadyRunning,

    #[error("Game loop not running")]
    NotRunning,

    #[error("Game loop channel closed")]
    ChannelClosed,

    #[error("No frame from the game loop for {0:?}")]
    Stalled(std::time::Duration),

    #[error("Shared state lock poisoned")]
    LockPoisoned,

    #[error("Failed to spawn game loop thread: {0}")]
    Spawn(#[from] std::io::Error),
}
