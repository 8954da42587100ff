//! Export command implementation
//!
//! Writes a whole catalog as a JSON object mapping animation names to frames.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use crate::input::CatalogSource;

/// Run the export command
///
/// # Arguments
/// * `source` - Where to load the catalog from
/// * `output` - Output file path (stdout when `None`)
/// * `pretty` - Whether to pretty-print the JSON
///
/// # Returns
/// Exit code: 0 on success
pub fn run(source: &CatalogSource, output: Option<&str>, pretty: bool) -> Result<ExitCode> {
    let sheet = source.load()?;

    let json = if pretty {
        serde_json::to_string_pretty(&sheet)
    } else {
        serde_json::to_string(&sheet)
    }
    .context("Failed to serialize catalog to JSON")?;

    match output {
        Some(path) => {
            let path = Path::new(path);
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            std::fs::write(path, &json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!(
                "{} {} animation(s) to {}",
                "Exported".green().bold(),
                sheet.len(),
                path.display()
            );
        }
        None => println!("{}", json),
    }

    Ok(ExitCode::SUCCESS)
}
