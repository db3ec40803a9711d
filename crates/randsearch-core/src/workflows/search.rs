use crate::core::objective::{Objective, SumOfSquares};
use crate::engine::config::SearchConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::sampler::UniformSampler;
use crate::engine::state::{BestTracker, Solution};
use rand::Rng;
use rand::thread_rng;
use tracing::{debug, info, instrument};

/// The outcome of one complete search run.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Retained solutions, best first. Never empty for a successful run.
    pub solutions: Vec<Solution>,
    /// Number of candidates generated and evaluated.
    pub trials: usize,
}

impl SearchResult {
    /// The best solution found during the run.
    pub fn best(&self) -> &Solution {
        &self.solutions[0]
    }
}

/// Runs a blind random search using the thread-local random source.
///
/// Each run may yield different results; use [`run_with_rng`] with a seeded
/// generator when reproducibility is required.
pub fn run(config: &SearchConfig, reporter: &ProgressReporter) -> Result<SearchResult, EngineError> {
    run_with_rng(config, reporter, &mut thread_rng())
}

/// Runs a blind random search with an injected random source.
///
/// Generates `trials` candidates uniformly from the configured sampling
/// space, scores each with the sum-of-squares objective, and retains the
/// best-scoring ones. A candidate only displaces a retained solution when
/// its score is strictly lower; the first-seen minimum wins ties.
#[instrument(skip_all, name = "search_workflow")]
pub fn run_with_rng<R: Rng + ?Sized>(
    config: &SearchConfig,
    reporter: &ProgressReporter,
    rng: &mut R,
) -> Result<SearchResult, EngineError> {
    validate(config)?;

    let trials = config.optimization.trials;
    let space = config.sampling.space;
    let sampler = UniformSampler::new(space);
    let objective = SumOfSquares;
    let mut tracker = BestTracker::new(config.optimization.num_solutions);

    info!(
        trials,
        length = space.length(),
        lower = space.lower(),
        upper = space.upper(),
        "Starting random search."
    );
    reporter.report(Progress::SearchStart {
        total_trials: trials as u64,
    });

    for trial in 1..=trials {
        let candidate = sampler.sample(rng);
        let score = objective.score(&candidate);

        let improved = score < tracker.best_score();
        tracker.submit(Solution { candidate, score });

        if improved {
            debug!(trial, score, "New best solution found.");
            reporter.report(Progress::NewBest { trial, score });
        }
        reporter.report(Progress::TrialDone);
    }

    let solutions = tracker.into_sorted_solutions();
    info!(
        best_score = solutions[0].score,
        retained = solutions.len(),
        "Search complete."
    );
    reporter.report(Progress::SearchFinish);

    Ok(SearchResult { solutions, trials })
}

// SearchConfig fields are public, so a caller can bypass the builder;
// the fail-fast checks are repeated here before any sampling happens.
fn validate(config: &SearchConfig) -> Result<(), EngineError> {
    let trials = config.optimization.trials;
    if trials == 0 {
        return Err(EngineError::InvalidTrials { trials });
    }
    let num_solutions = config.optimization.num_solutions;
    if num_solutions == 0 {
        return Err(EngineError::InvalidSolutionCount { num_solutions });
    }
    Ok(())
}
