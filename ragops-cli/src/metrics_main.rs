//! Metrics pipeline runner.
//!
//! Scores the built-in labelled dataset and prints the four aggregate
//! RAG metrics.

use clap::Parser;
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use ragops_core::{builtin_dataset, evaluate_dataset};

/// Score the built-in RAG dataset and print aggregate metrics
#[derive(Parser, Debug)]
#[command(name = "ragops-metrics", version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let dataset = builtin_dataset();
    let summary = evaluate_dataset(&dataset);
    debug!(items = dataset.len(), "dataset scored");

    println!("Evaluation metrics:");
    for (name, value) in summary.entries() {
        println!("{name}: {value:.2}");
    }
    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    let filter = match verbose {
        0 if quiet => "error",
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::new(filter));
    tracing_subscriber::registry().with(stderr_layer).init();
}
