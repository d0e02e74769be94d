mod batch;
mod commons;
mod config;
mod report;
mod retry;
mod targets;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::io::{Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use batch::{BatchRunner, merge_into_catalog};
use commons::CommonsClient;
use config::ScrapeConfig;
use targets::load_targets;

#[derive(Debug, Parser)]
#[command(name = "plandl-scraper", version)]
#[command(about = "Fetch aircraft photos from Wikimedia Commons and extend the Plandl catalog")]
struct Args {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Catalog file to merge results into
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Directory images are written to
    #[arg(long)]
    images_dir: Option<PathBuf>,

    /// Target list (JSON array of manufacturer/model/version/search)
    #[arg(long)]
    targets: Option<PathBuf>,

    /// Commons API endpoint
    #[arg(long)]
    endpoint: Option<String>,

    /// User-Agent header sent with every request
    #[arg(long)]
    user_agent: Option<String>,

    /// Seconds to wait between targets
    #[arg(long)]
    pause_secs: Option<u64>,

    /// Base backoff in seconds after a rate limit
    #[arg(long)]
    backoff_secs: Option<u64>,

    /// Attempts per target before giving up on rate limits
    #[arg(long)]
    max_attempts: Option<u32>,

    /// Print the target list with derived filenames and exit
    #[arg(long)]
    list_targets: bool,
}

impl Args {
    fn resolve_config(&self) -> Result<ScrapeConfig> {
        let mut cfg = match &self.config {
            Some(path) => ScrapeConfig::load(path)?,
            None => ScrapeConfig::default(),
        };
        if let Some(v) = &self.catalog {
            cfg.catalog.clone_from(v);
        }
        if let Some(v) = &self.images_dir {
            cfg.images_dir.clone_from(v);
        }
        if self.targets.is_some() {
            cfg.targets.clone_from(&self.targets);
        }
        if let Some(v) = &self.endpoint {
            cfg.endpoint.clone_from(v);
        }
        if let Some(v) = &self.user_agent {
            cfg.user_agent.clone_from(v);
        }
        if let Some(v) = self.pause_secs {
            cfg.pause_secs = v;
        }
        if let Some(v) = self.backoff_secs {
            cfg.backoff_secs = v;
        }
        if let Some(v) = self.max_attempts {
            cfg.max_attempts = v;
        }
        Ok(cfg)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let cfg = args.resolve_config()?;
    let targets = load_targets(cfg.targets.as_deref())?;

    if args.list_targets {
        let mut out = stdout().lock();
        writeln!(out, "Targets ({}):", targets.len())?;
        for target in &targets {
            writeln!(out, "  {:40} -> {}", target.label(), target.filename())?;
        }
        return Ok(());
    }

    announce_banner();
    println!("Processing {} aircraft...", targets.len());
    let start = Instant::now();

    let client =
        CommonsClient::new(cfg.endpoint.clone(), &cfg.user_agent).context("building HTTP client")?;
    let runner = BatchRunner::new(client, cfg.images_dir.clone(), cfg.pause(), cfg.backoff());
    let report = runner.run(&targets).await?;
    report::print_item_lines(&report);

    let (added, total) = merge_into_catalog(&cfg.catalog, report.entries.clone())?;
    report::print_summary(&report, added, total, start.elapsed());
    Ok(())
}

fn announce_banner() {
    println!("{}", "✈️  Plandl Catalog Scraper".bright_cyan().bold());
    println!("{}", "==========================".cyan());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config_file_values() {
        let args = Args::parse_from([
            "plandl-scraper",
            "--pause-secs",
            "0",
            "--max-attempts",
            "5",
            "--catalog",
            "tmp/planes.json",
        ]);
        let cfg = args.resolve_config().unwrap();
        assert_eq!(cfg.pause_secs, 0);
        assert_eq!(cfg.max_attempts, 5);
        assert_eq!(cfg.catalog, PathBuf::from("tmp/planes.json"));
        assert_eq!(cfg.backoff_secs, 10);
        assert!(cfg.targets.is_none());
    }
}
