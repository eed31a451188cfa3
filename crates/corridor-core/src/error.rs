//! Error types for configuration loading.

use thiserror::Error;

/// Errors raised while loading or validating a `CorridorConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid value for {field}: must be finite and positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("Invalid value for {field}: must be finite and not negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("Invalid value for {field}: must be finite, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("Eye and door heights differ by {gap}, doors open only within {threshold}")]
    DoorsOutOfEyeLevel { gap: f64, threshold: f64 },

    #[error("Player diameter {diameter} does not fit a corridor {width} wide")]
    PlayerTooWide { diameter: f64, width: f64 },

    #[error("Corridor needs at least one door")]
    NoDoors,

    #[error("Door {index} at depth {depth} lies beyond the reachable depth {reachable}")]
    DoorOutOfReach {
        index: usize,
        depth: f64,
        reachable: f64,
    },

    #[error("Expected {expected} door payloads, got {got}")]
    PayloadCountMismatch { expected: usize, got: usize },

    #[error("Auto-dismiss delay must be at least one frame")]
    ZeroDismissDelay,
}
