use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "randsearch CLI - A command-line interface for blind random-sampling search over bounded integer vectors.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Minimize the sum of squares of a bounded integer vector by random sampling.
    Search(SearchArgs),
}

/// Arguments for the `search` subcommand.
#[derive(Args, Debug, Default)]
pub struct SearchArgs {
    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the number of candidates to generate and evaluate.
    #[arg(short, long, value_name = "INT")]
    pub trials: Option<usize>,

    /// Override the candidate vector length.
    #[arg(short = 'n', long, value_name = "INT")]
    pub length: Option<usize>,

    /// Override the inclusive lower bound for each vector component.
    #[arg(long, value_name = "INT", allow_hyphen_values = true)]
    pub lower: Option<i64>,

    /// Override the inclusive upper bound for each vector component.
    #[arg(long, value_name = "INT", allow_hyphen_values = true)]
    pub upper: Option<i64>,

    /// Override the number of best solutions to retain and report.
    #[arg(short = 's', long, value_name = "INT")]
    pub num_solutions: Option<usize>,
}
