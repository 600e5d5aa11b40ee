//! run-compare CLI.
//!
//! Routes a comma-separated list of run IDs against a live pipelines API
//! server and prints which comparison page would be presented. Fetch
//! failures degrade the decision to the legacy page, as in the console; only
//! usage errors exit non-zero.

#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use run_compare::banner::LogBanner;
use run_compare::cli::Cli;
use run_compare::compare::{ComparisonView, RouterOptions, resolve};
use run_compare::features::{FeatureKey, Features};
use run_compare::run::{ManifestPresence, parse_run_list};
use run_compare::service::HttpRunService;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(err) = main_impl() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn main_impl() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let ids = parse_run_list(&cli.runs);

    let mut features = match &cli.features {
        Some(path) => Features::load(path)?,
        None => Features::default(),
    };
    if cli.v2 {
        features.set(FeatureKey::V2Alpha, true);
    }

    let options = RouterOptions {
        manifest_presence: if cli.strict_manifest {
            ManifestPresence::NonEmpty
        } else {
            ManifestPresence::Present
        },
        ..Default::default()
    };

    let service = HttpRunService::new(&cli.base_url);
    let sink = LogBanner;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let resolution = runtime.block_on(resolve(&ids, &service, &features, &sink, options));

    match resolution.view {
        ComparisonView::NewView => println!("new"),
        ComparisonView::LegacyView => println!("legacy"),
    }
    for run in &resolution.runs {
        println!("  {} ({})", run.run.id, run.run.name);
    }

    Ok(())
}
