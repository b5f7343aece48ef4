// src/infra/errors.rs — Error types for daybreak

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DaybreakError {
    // Invalid input: the gate must not fabricate defaults for these
    #[error("no food candidates available")]
    NoFoodCandidates,

    #[error("no travel candidates available")]
    NoTravelCandidates,

    #[error("invalid class time '{value}': expected HH:MM")]
    InvalidClassTime { value: String },

    #[error("unknown timezone '{0}'")]
    UnknownTimezone(String),

    // Upstream lookups (not retried; callers fall back to mock tables)
    #[error("provider request failed: {0}")]
    Provider(#[from] reqwest::Error),

    // Infra
    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DaybreakError {
    /// True for errors the cycle must surface to the caller rather than paper
    /// over: bad request fields and empty candidate sets. The planner never
    /// substitutes default candidates for these.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            DaybreakError::NoFoodCandidates
                | DaybreakError::NoTravelCandidates
                | DaybreakError::InvalidClassTime { .. }
                | DaybreakError::UnknownTimezone(_)
        )
    }
}
