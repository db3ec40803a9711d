use thiserror::Error;

use crate::core::sampling::SamplingError;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum EngineError {
    #[error("Invalid sampling space: {source}")]
    Sampling {
        #[from]
        source: SamplingError,
    },

    #[error("Invalid trial count: {trials} (at least one trial is required)")]
    InvalidTrials { trials: usize },

    #[error("Invalid solution count: {num_solutions} (at least one solution must be retained)")]
    InvalidSolutionCount { num_solutions: usize },

    #[error("Internal logic error: {0}")]
    Internal(String),
}
