//! CLI argument parsing using Clap.

use clap::Parser;
use std::path::PathBuf;

/// run-compare - decide which run comparison page to present
#[derive(Parser, Debug)]
#[command(name = "run-compare")]
#[command(version, about, long_about = None)]
#[command(after_help = "Examples:
  run-compare --runs a,b,c                       Route against the default API server
  run-compare --runs a,b --base-url http://host  Route against a specific API server
  run-compare --runs a,b --features feature.json Read flags from a features document
  run-compare --runs a,b --v2                    Force the new-format flag on
")]
pub struct Cli {
    /// Comma-separated run IDs (the console's `runlist` query value)
    #[arg(long, value_name = "IDS")]
    pub runs: String,

    /// Base URL of the pipelines API server
    #[arg(
        long,
        env = "RUN_COMPARE_BASE_URL",
        default_value = "http://localhost:3000"
    )]
    pub base_url: String,

    /// Path to the console's feature flags JSON document
    #[arg(long, value_name = "PATH")]
    pub features: Option<PathBuf>,

    /// Force the new-format flag on, regardless of the features document
    #[arg(long)]
    pub v2: bool,

    /// Require a non-empty pipeline manifest for new-format classification
    #[arg(long)]
    pub strict_manifest: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_run_list_and_flags() {
        let cli = Cli::parse_from(["run-compare", "--runs", "a,b,c", "--v2"]);
        assert_eq!(cli.runs, "a,b,c");
        assert!(cli.v2);
        assert!(!cli.strict_manifest);
        assert_eq!(cli.base_url, "http://localhost:3000");
    }
}
