use colored::Colorize;
use std::time::Duration;

use crate::batch::{BatchReport, ItemStatus};

pub fn print_item_lines(report: &BatchReport) {
    for outcome in &report.outcomes {
        let line = match &outcome.status {
            ItemStatus::Downloaded => format!("  ✓ Downloaded: {}", outcome.filename).green(),
            ItemStatus::AlreadyPresent => {
                format!("  ✓ Already exists: {}", outcome.filename).normal()
            }
            ItemStatus::NoImage => format!("  ✗ No image found: {}", outcome.label).yellow(),
            ItemStatus::Failed(reason) => format!("  ✗ {}: {reason}", outcome.label).red(),
        };
        println!("{line}");
    }
}

pub fn print_summary(report: &BatchReport, added: usize, total: usize, elapsed: Duration) {
    println!();
    println!("{}", "📊 Scrape Summary".bright_cyan().bold());
    println!("{}", "=================".cyan());
    println!("Targets: {}", report.outcomes.len());
    println!("Downloaded: {}", report.downloaded().to_string().green());
    println!("Already present: {}", report.already_present());
    println!("No image: {}", report.missing().to_string().yellow());
    println!("Failed: {}", report.failed().to_string().red());
    println!("Added to catalog: {}", added.to_string().bold());
    println!("Total aircraft in catalog: {total}");
    println!("Total time: {elapsed:?}");
}
