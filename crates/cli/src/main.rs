use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use relist_engine::{HttpRecordLookup, RecordLookup, RelatedListController, StaticLookup, resolve_navigation};
use relist_types::RawRecord;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod args;
mod render;

use args::{Cli, Command, ShowArgs};

const DEFAULT_LOG_FILTER: &str = "info";

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Show(show) => run_show(show).await,
        Command::Navigate(list) => {
            let config = list.resolve_config()?;
            println!("{}", serde_json::to_string_pretty(&resolve_navigation(&config))?);
            Ok(())
        }
    }
}

// stdout carries the list; logs go to stderr.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with_writer(std::io::stderr)
        .try_init();
}

/// Filter from a `RUST_LOG` value; unset or invalid directives fall back to `info`.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|value| !value.trim().is_empty())
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

async fn run_show(show: ShowArgs) -> Result<()> {
    let config = show.list.resolve_config()?;
    let lookup: Box<dyn RecordLookup> = match &show.records_file {
        Some(path) => Box::new(StaticLookup::records(read_records_file(path)?)),
        None => Box::new(HttpRecordLookup::from_env()?),
    };

    let mut controller = RelatedListController::new(config);
    let outcome = controller.activate(lookup.as_ref()).await;
    if show.all {
        controller.toggle_show_all();
    }
    if show.collapsed {
        controller.toggle_collapse();
    }

    let surface = controller.render();
    if show.json {
        println!("{}", serde_json::to_string_pretty(&surface)?);
    } else {
        print!("{}", render::render_text(&surface));
    }

    outcome.context("related records unavailable")
}

fn read_records_file(path: &Path) -> Result<Vec<RawRecord>> {
    let content = std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let records: Vec<RawRecord> =
        serde_json::from_str(&content).with_context(|| format!("{} is not a JSON array of records", path.display()))?;
    debug!(path = %path.display(), count = records.len(), "loaded records file");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn log_filter_follows_rust_log() {
        assert_eq!(log_filter(Some("debug")).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(log_filter(Some("relist_engine=trace")).max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn log_filter_defaults_to_info() {
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(log_filter(Some("  ")).max_level_hint(), Some(LevelFilter::INFO));
    }
}
