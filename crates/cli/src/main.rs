mod cli;
mod render;
mod task;

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use docreads_core::config::{load_dotenv, Config};
use docreads_store::EventStore;

use crate::cli::CliArgs;
use crate::task::{execute, TaskOutput, TaskRequest};

/// Exit status for rejected arguments.
const EXIT_USAGE: i32 = 2;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    load_dotenv();
    let config = Config::from_env();
    config.log_summary();

    let args = CliArgs::parse();
    let request = match TaskRequest::from_args(&args, &config) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(EXIT_USAGE);
        }
    };

    let start = Instant::now();
    let store = EventStore::load(&request.file, request.policy)
        .with_context(|| format!("failed to load {}", request.file.display()))?;
    let stats = store.stats();
    info!(
        events = stats.event_count,
        reads = stats.read_count,
        visitors = stats.visitor_count,
        documents = stats.document_count,
        skipped = store.load_report().skipped,
        "Store ready in {:.1}ms",
        start.elapsed().as_secs_f64() * 1000.0
    );

    let output = execute(&store, &request).context("task failed")?;

    if let (TaskOutput::Graph { dot, node_count, edge_count, .. }, Some(path)) = (&output, &args.output) {
        std::fs::write(path, dot).with_context(|| format!("failed to write {}", path.display()))?;
        info!(nodes = node_count, edges = edge_count, "Graph written to {}", path.display());
        if !args.json {
            println!("Graph written to {}", path.display());
            return Ok(());
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", render::render(&output));
    }

    Ok(())
}
