use thiserror::Error;

use crate::game::GameStatus;

/// Errors surfaced at the session boundary. The model itself is total.
#[derive(Debug, Error)]
pub enum SimError {
    /// A policy lever was NaN or infinite.
    #[error("policy lever `{field}` is not a finite number ({value})")]
    NonFinitePolicy { field: &'static str, value: f64 },

    /// The game already reached a terminal status; no further quarters.
    #[error("game is over ({0}); reset before applying another quarter")]
    GameOver(GameStatus),

    #[error("unknown scenario `{0}`")]
    UnknownScenario(String),

    /// Malformed parameter or scenario JSON.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type SimResult<T> = Result<T, SimError>;
