//! Retort chat service binary.
//!
//! Startup order is strict: load the corpus, fit the model, bind the
//! listener, serve. A load or training failure aborts before the listener
//! ever binds, so per-request callers can never observe one.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;

use retort::corpus::Corpus;
use retort::model::IntentModel;
use retort::selector::ResponseSelector;
use retort::service::{self, ChatService};

/// Retort - an intent-classification chat service
#[derive(Parser, Debug, Clone)]
#[command(name = "retort")]
#[command(about = "An intent-classification chat service")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// Path to the training corpus CSV
    #[arg(short, long, default_value = "data/training_data.csv")]
    corpus: PathBuf,

    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:5000")]
    listen: SocketAddr,

    /// Verbosity level (0=errors, 1=warnings, 2=info, 3+=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => LevelFilter::ERROR,
        1 => LevelFilter::WARN,
        2 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };
    tracing_subscriber::fmt().with_max_level(log_level).init();

    if let Err(e) = run(args).await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let corpus = Corpus::load_csv(&args.corpus)
        .with_context(|| format!("failed to load corpus from {}", args.corpus.display()))?;
    tracing::info!(rows = corpus.len(), "corpus loaded");

    let model = IntentModel::fit(&corpus.training_set()).context("model training failed")?;
    tracing::info!(intents = model.labels().len(), "model fitted");

    let service = Arc::new(ChatService::new(model, corpus, ResponseSelector::new()));

    let listener = tokio::net::TcpListener::bind(args.listen)
        .await
        .with_context(|| format!("failed to bind {}", args.listen))?;
    tracing::info!(addr = %args.listen, "serving");

    axum::serve(listener, service::router(service))
        .await
        .context("server error")?;

    Ok(())
}
