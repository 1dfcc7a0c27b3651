//! Report pipeline runner.
//!
//! Evaluates the built-in question set against the built-in corpus and
//! writes a dated markdown report.

use std::path::PathBuf;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use ragops_core::{builtin_corpus, builtin_questions, run_eval, write_report};

/// Run the toy RAG evaluation and write a markdown report
#[derive(Parser, Debug)]
#[command(name = "ragops-eval", version, about, long_about = None)]
struct Cli {
    /// Directory the report is written into
    #[arg(short, long, default_value = "reports")]
    output_dir: PathBuf,

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

    let corpus = builtin_corpus();
    let questions = builtin_questions();
    let results = run_eval(&corpus, &questions, &mut rand::thread_rng())?;
    debug!(questions = results.len(), "evaluation finished");

    let path = write_report(&results, &cli.output_dir)?;
    println!("Report written to {}", path.display());
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
