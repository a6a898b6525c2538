use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "tidy-report")]
#[command(about = "Generate Markdown reports from clang-tidy integration-test logs")]
#[command(version)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate a markdown report from tool log files
    Report {
        /// Directory containing <project>.log files
        #[arg(long, default_value = "logs", value_name = "DIR")]
        log_dir: PathBuf,

        /// Output markdown file
        #[arg(long, default_value = "issue.md", value_name = "FILE")]
        output: PathBuf,

        /// Optional projects.json with source-browse URLs per project
        #[arg(long, value_name = "FILE")]
        projects: Option<PathBuf>,
    },

    /// Parse an issue body from stdin into a GitHub env file
    ParseIssue {
        /// Path to the output environment file
        #[arg(value_name = "OUTPUT_ENV_FILE")]
        output_env_file: PathBuf,
    },
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }
}
