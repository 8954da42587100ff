//! List command implementation
//!
//! Loads a catalog and prints one line per animation.

use anyhow::Result;
use asesheet_core::Spritesheet;
use colored::Colorize;
use serde::Serialize;
use std::process::ExitCode;

use crate::input::CatalogSource;

/// Summary of one animation for listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimationSummary {
    pub name: String,
    pub frames: usize,
    pub total_duration_ms: f64,
}

/// Summarizes every animation in discovery order.
pub fn summarize(sheet: &Spritesheet) -> Vec<AnimationSummary> {
    sheet
        .iter()
        .map(|(name, frames)| AnimationSummary {
            name: name.to_string(),
            frames: frames.len(),
            total_duration_ms: frames.iter().map(|f| f.duration_ms).sum(),
        })
        .collect()
}

/// Run the list command
///
/// # Arguments
/// * `source` - Where to load the catalog from
/// * `json` - Whether to print machine-readable JSON instead of text
///
/// # Returns
/// Exit code: 0 on success
pub fn run(source: &CatalogSource, json: bool) -> Result<ExitCode> {
    let sheet = source.load()?;
    let summaries = summarize(&sheet);
    log::info!(
        "loaded {} animation(s) from {}",
        summaries.len(),
        source.describe()
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(ExitCode::SUCCESS);
    }

    if summaries.is_empty() {
        println!("No animations found in {}", source.describe());
        return Ok(ExitCode::SUCCESS);
    }

    let width = summaries.iter().map(|s| s.name.len()).max().unwrap_or(0);
    for summary in &summaries {
        println!(
            "{:<width$}  {} {}",
            summary.name.bold(),
            format!("{:>3} frames", summary.frames).cyan(),
            format!("{:>8.1} ms", summary.total_duration_ms).dimmed(),
            width = width
        );
    }
    println!(
        "\n{} animation(s) from {}",
        summaries.len(),
        source.describe()
    );

    Ok(ExitCode::SUCCESS)
}
