use crate::cli::SearchArgs;
use crate::error::{CliError, Result};
use randsearch::engine::config::{SearchConfig, SearchConfigBuilder};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialSamplingConfig {
    length: Option<usize>,
    #[serde(rename = "lower-bound")]
    lower_bound: Option<i64>,
    #[serde(rename = "upper-bound")]
    upper_bound: Option<i64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialOptimizationConfig {
    trials: Option<usize>,
    #[serde(rename = "num-solutions")]
    num_solutions: Option<usize>,
}

/// Configuration file contents before merging with CLI arguments.
///
/// Every field is optional; precedence is CLI flag > file value > default.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialSearchConfig {
    sampling: Option<PartialSamplingConfig>,
    optimization: Option<PartialOptimizationConfig>,
}

impl PartialSearchConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Reading configuration file from {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn merge_with_cli(self, args: &SearchArgs) -> Result<SearchConfig> {
        let sampling = self.sampling.unwrap_or_default();
        let optimization = self.optimization.unwrap_or_default();

        let mut builder = SearchConfigBuilder::new();
        if let Some(trials) = args.trials.or(optimization.trials) {
            builder = builder.trials(trials);
        }
        if let Some(num_solutions) = args.num_solutions.or(optimization.num_solutions) {
            builder = builder.num_solutions(num_solutions);
        }
        if let Some(length) = args.length.or(sampling.length) {
            builder = builder.length(length);
        }
        if let Some(lower) = args.lower.or(sampling.lower_bound) {
            builder = builder.lower_bound(lower);
        }
        if let Some(upper) = args.upper.or(sampling.upper_bound) {
            builder = builder.upper_bound(upper);
        }

        let config = builder.build()?;
        debug!("Final merged configuration: {:?}", config);
        Ok(config)
    }
}
