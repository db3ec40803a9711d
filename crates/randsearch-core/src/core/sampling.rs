use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SamplingError {
    #[error("Invalid sampling bounds: lower ({lower}) exceeds upper ({upper})")]
    InvalidBounds { lower: i64, upper: i64 },
}

/// The domain candidates are drawn from: a vector length and a closed
/// integer interval `[lower, upper]` applied to every component.
///
/// A zero `length` is valid and describes the empty candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleSpace {
    length: usize,
    lower: i64,
    upper: i64,
}

impl SampleSpace {
    pub const DEFAULT_LENGTH: usize = 5;
    pub const DEFAULT_LOWER: i64 = -10;
    pub const DEFAULT_UPPER: i64 = 10;

    /// Builds a sampling space, rejecting inverted bounds.
    pub fn new(length: usize, lower: i64, upper: i64) -> Result<Self, SamplingError> {
        if lower > upper {
            return Err(SamplingError::InvalidBounds { lower, upper });
        }
        Ok(Self {
            length,
            lower,
            upper,
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn lower(&self) -> i64 {
        self.lower
    }

    pub fn upper(&self) -> i64 {
        self.upper
    }

    /// True when `value` lies within the closed interval.
    pub fn contains(&self, value: i64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

impl Default for SampleSpace {
    fn default() -> Self {
        Self {
            length: Self::DEFAULT_LENGTH,
            lower: Self::DEFAULT_LOWER,
            upper: Self::DEFAULT_UPPER,
        }
    }
}
