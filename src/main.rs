use std::path::Path;

use annotator::annotate_collection;
use anyhow::{Context, Result};
use clap::Parser;
use collection::{load_routes, write_routes};
use config::Args;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

mod annotator;
mod collection;
mod config;
mod geo;
mod model;
mod utils;

fn main() -> Result<()> {
    _ = dotenvy::dotenv();
    let args = Args::parse();

    let _guard = init_tracing(args.log_dir());

    let config = args.annotator_config();
    let output = args.output_path();

    let mut routes = load_routes(&args.input).context("Could not load the route collection")?;

    let summary = annotate_collection(&mut routes, &config);
    info!(%summary, "annotated routes");

    write_routes(&output, &routes)
        .with_context(|| format!("Could not write annotated routes to {}", output.display()))?;

    info!("Done! Distance + ETA + Time updated -> {}", output.display());

    Ok(())
}

/// Logs to stderr, and to a daily rolling file when `log_dir` is given.
/// The returned guard flushes the file log when dropped.
fn init_tracing(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    let stderr_log = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let (file_log, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "route_eta.log");
            let (non_blocking_appender, guard) = tracing_appender::non_blocking(appender);

            // A layer that logs events to rolling files.
            let file_log = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_appender)
                .with_ansi(false)
                .pretty();

            (Some(file_log), Some(guard))
        }
        None => (None, None),
    };

    Registry::default()
        .with(stderr_log)
        .with(file_log)
        .with(env_filter)
        .init();

    guard
}
