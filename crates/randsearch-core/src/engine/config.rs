use crate::core::sampling::{SampleSpace, SamplingError};
use crate::engine::error::EngineError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid parameter: {source}")]
    Invalid {
        #[from]
        source: EngineError,
    },
}

impl From<SamplingError> for ConfigError {
    fn from(source: SamplingError) -> Self {
        Self::Invalid {
            source: source.into(),
        }
    }
}

pub const DEFAULT_TRIALS: usize = 100;
pub const DEFAULT_NUM_SOLUTIONS: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingConfig {
    pub space: SampleSpace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptimizationConfig {
    pub trials: usize,
    pub num_solutions: usize,
}

/// A fully validated description of one search run.
///
/// Construct through [`SearchConfig::builder`]; every instance that exists
/// has already passed the fail-fast parameter checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub sampling: SamplingConfig,
    pub optimization: OptimizationConfig,
}

impl SearchConfig {
    pub fn builder() -> SearchConfigBuilder {
        SearchConfigBuilder::new()
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            sampling: SamplingConfig {
                space: SampleSpace::default(),
            },
            optimization: OptimizationConfig {
                trials: DEFAULT_TRIALS,
                num_solutions: DEFAULT_NUM_SOLUTIONS,
            },
        }
    }
}

#[derive(Debug, Default)]
pub struct SearchConfigBuilder {
    trials: Option<usize>,
    length: Option<usize>,
    lower_bound: Option<i64>,
    upper_bound: Option<i64>,
    num_solutions: Option<usize>,
}

impl SearchConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trials(mut self, trials: usize) -> Self {
        self.trials = Some(trials);
        self
    }
    pub fn length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }
    pub fn lower_bound(mut self, lower: i64) -> Self {
        self.lower_bound = Some(lower);
        self
    }
    pub fn upper_bound(mut self, upper: i64) -> Self {
        self.upper_bound = Some(upper);
        self
    }
    pub fn num_solutions(mut self, n: usize) -> Self {
        self.num_solutions = Some(n);
        self
    }

    /// Fills unset fields with the documented defaults, then validates.
    pub fn build(self) -> Result<SearchConfig, ConfigError> {
        let trials = self.trials.unwrap_or(DEFAULT_TRIALS);
        if trials == 0 {
            return Err(EngineError::InvalidTrials { trials }.into());
        }

        let num_solutions = self.num_solutions.unwrap_or(DEFAULT_NUM_SOLUTIONS);
        if num_solutions == 0 {
            return Err(EngineError::InvalidSolutionCount { num_solutions }.into());
        }

        let space = SampleSpace::new(
            self.length.unwrap_or(SampleSpace::DEFAULT_LENGTH),
            self.lower_bound.unwrap_or(SampleSpace::DEFAULT_LOWER),
            self.upper_bound.unwrap_or(SampleSpace::DEFAULT_UPPER),
        )?;

        Ok(SearchConfig {
            sampling: SamplingConfig { space },
            optimization: OptimizationConfig {
                trials,
                num_solutions,
            },
        })
    }
}
