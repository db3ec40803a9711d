use crate::cli::SearchArgs;
use crate::config::PartialSearchConfig;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use randsearch::{engine::progress::ProgressReporter, workflows};
use tracing::info;

pub fn run(args: SearchArgs) -> Result<()> {
    let partial_config = match &args.config {
        Some(path) => PartialSearchConfig::from_file(path)?,
        None => PartialSearchConfig::default(),
    };
    info!("Merging configuration from file and CLI arguments...");
    let final_config = partial_config.merge_with_cli(&args)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the core search workflow...");
    let result = workflows::search::run(&final_config, &reporter)?;

    info!(
        "Workflow finished after {} trial(s), retained {} solution(s).",
        result.trials,
        result.solutions.len()
    );

    let best = result.best();
    println!("Best solution found: {}", best.candidate);
    println!("Objective value: {}", best.score);

    for (i, solution) in result.solutions.iter().enumerate().skip(1) {
        println!(
            "  Solution {}: {} (objective value: {})",
            i + 1,
            solution.candidate,
            solution.score
        );
    }

    Ok(())
}
