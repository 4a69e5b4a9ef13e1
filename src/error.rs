//! Error types for configuration and stepping

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("corridor {height}x{width} is out of range (5 to 4096 rows, 3 to 4096 columns)")]
    InvalidCorridor { height: u32, width: u32 },

    #[error("distance limit must be positive")]
    InvalidDistanceLimit,

    #[error("queue floor {floor} must be between 1 and the queue cap {cap}")]
    InvalidQueueFloor { floor: u32, cap: u32 },

    #[error("action {0} is not 0 (down) or 1 (up)")]
    InvalidAction(i64),

    #[error("episode has terminated; call reset before stepping again")]
    EpisodeTerminated,

    #[error("could not parse config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("could not read config: {0}")]
    ConfigIo(#[from] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;
