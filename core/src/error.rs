use thiserror::Error;

#[derive(Error, Debug)]
pub enum RotaError {
    #[error("no people configured")]
    NoPeopleConfigured,

    #[error("no operations tasks configured, but {assignees} people need assignments")]
    NoTasksConfigured { assignees: usize },

    #[error("history I/O error: {0}")]
    Persistence(#[from] std::io::Error),

    #[error("history serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("webhook delivery error: {0}")]
    Delivery(#[from] reqwest::Error),
}

impl RotaError {
    /// Configuration errors abort the run; everything else degrades.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            RotaError::NoPeopleConfigured | RotaError::NoTasksConfigured { .. }
        )
    }
}

pub type RotaResult<T> = Result<T, RotaError>;
