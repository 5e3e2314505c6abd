use std::error::Error;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use direction_splitter::batch::{BatchInput, process_batch};
use direction_splitter::splitter::{AlternateCollisionPolicy, SplitterConfig, TripSplitter};
use direction_splitter::ttc;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let mut message = e.to_string();
            let mut source = e.source();
            while let Some(cause) = source {
                message.push_str(&format!(": {cause}"));
                source = cause.source();
            }
            eprintln!("Error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = config_from_env();
    info!(
        split_turnarounds = config.split_turnarounds,
        alternate_collisions = ?config.alternate_collisions,
        "Starting"
    );

    let registry = ttc::registry()?;
    let classifier = ttc::classifier();
    info!(
        routes = registry.len(),
        strategies = ?classifier.strategy_names(),
        "Loaded TTC direction data"
    );

    let input: BatchInput = serde_json::from_reader(io::stdin().lock())?;
    let splitter = TripSplitter::new(&registry, &classifier, config);
    let report = process_batch(&splitter, &input)?;

    let mut out = BufWriter::new(io::stdout().lock());
    serde_json::to_writer_pretty(&mut out, &report.outputs)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Splitter settings from `DIRECTION_SPLITTER_*` environment variables.
fn config_from_env() -> SplitterConfig {
    let enabled = |name: &str| std::env::var(name).is_ok_and(|v| v == "1");

    let alternate_collisions = if enabled("DIRECTION_SPLITTER_REJECT_COLLISIONS") {
        AlternateCollisionPolicy::Reject
    } else {
        AlternateCollisionPolicy::TieBreak
    };
    SplitterConfig::new(
        !enabled("DIRECTION_SPLITTER_NO_TURNAROUNDS"),
        alternate_collisions,
    )
}
