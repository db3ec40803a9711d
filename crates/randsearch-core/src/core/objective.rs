use super::models::candidate::Candidate;

/// A scoring function mapping a candidate to a scalar; lower is better.
pub trait Objective {
    fn score(&self, candidate: &Candidate) -> f64;
}

/// The sum-of-squares objective: `f(x) = sum(x_i^2)`.
///
/// Its global minimum over any bounded integer domain containing zero is the
/// all-zero vector with score 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct SumOfSquares;

impl Objective for SumOfSquares {
    fn score(&self, candidate: &Candidate) -> f64 {
        sum_of_squares(candidate.values())
    }
}

/// Sum of each element squared, accumulated in `f64`.
///
/// Total over any finite input; the empty slice scores 0.0.
pub fn sum_of_squares(values: &[i64]) -> f64 {
    values.iter().map(|&v| (v as f64) * (v as f64)).sum()
}
