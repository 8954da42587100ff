//! asesheet - inspect and export Aseprite animation catalogs
//!
//! This binary loads the JSON metadata Aseprite exports next to sprite
//! sheets, either from a directory tree or from the sprites embedded at
//! build time, and prints or exports the resulting catalog.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

// Use modules from the library crate
use asesheet_cli::commands;
use asesheet_cli::input::CatalogSource;

/// asesheet - Aseprite animation catalog tool
#[derive(Parser)]
#[command(name = "asesheet")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Write log output to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Flags selecting where a catalog is loaded from
#[derive(Args, Debug)]
struct SourceArgs {
    /// Root directory to scan for animation files (default: sprites)
    #[arg(short, long)]
    root: Option<String>,

    /// Use the sprite tree embedded in this binary
    #[arg(long, conflicts_with = "root")]
    embedded: bool,
}

impl SourceArgs {
    fn source(&self) -> CatalogSource {
        CatalogSource::from_args(self.root.as_deref(), self.embedded)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Load a catalog and list its animations
    List {
        #[command(flatten)]
        source: SourceArgs,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Decode a single export document and print its frames
    Inspect {
        /// Path to the JSON export
        #[arg(short, long)]
        file: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Export a whole catalog as JSON
    Export {
        #[command(flatten)]
        source: SourceArgs,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Pretty-print the output JSON
        #[arg(short, long)]
        pretty: bool,
    },
}

/// Default log filter for a `-v` count; `RUST_LOG` takes precedence.
fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_logging(verbose: u8, log_file: Option<&PathBuf>) -> std::io::Result<()> {
    let default_level = default_level(verbose);

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level));
    if let Some(path) = log_file {
        let file = std::fs::File::create(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.format_timestamp_millis().init();
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose, cli.log_file.as_ref()) {
        eprintln!("{}: failed to open log file: {}", colored::Colorize::red("error"), e);
        return ExitCode::from(1);
    }

    let result = match cli.command {
        Commands::List { source, json } => commands::list::run(&source.source(), json),
        Commands::Inspect { file, json } => commands::inspect::run(&file, json),
        Commands::Export {
            source,
            output,
            pretty,
        } => commands::export::run(&source.source(), output.as_deref(), pretty),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            log::debug!("command failed: {:?}", e);
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_list_with_root() {
        let cli = Cli::try_parse_from(["asesheet", "list", "--root", "art/sprites"]).unwrap();
        match cli.command {
            Commands::List { source, json } => {
                assert_eq!(source.source(), CatalogSource::Dir(PathBuf::from("art/sprites")));
                assert!(!json);
            }
            _ => panic!("expected list command"),
        }
    }

    #[test]
    fn test_cli_list_defaults_to_sprites_dir() {
        let cli = Cli::try_parse_from(["asesheet", "list"]).unwrap();
        match cli.command {
            Commands::List { source, .. } => {
                assert_eq!(source.source(), CatalogSource::Dir(PathBuf::from("sprites")));
            }
            _ => panic!("expected list command"),
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let levels: Vec<_> = (0..5).map(default_level).collect();
        assert_eq!(levels, vec!["warn", "info", "debug", "trace", "trace"]);
    }

    #[test]
    fn test_cli_root_conflicts_with_embedded() {
        let result = Cli::try_parse_from(["asesheet", "export", "--root", "x", "--embedded"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parses_export_embedded() {
        let cli = Cli::try_parse_from([
            "asesheet", "-vv", "export", "--embedded", "--output", "out.json", "--pretty",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Export {
                source,
                output,
                pretty,
            } => {
                assert_eq!(source.source(), CatalogSource::Embedded);
                assert_eq!(output.as_deref(), Some("out.json"));
                assert!(pretty);
            }
            _ => panic!("expected export command"),
        }
    }

    #[test]
    fn test_cli_parses_inspect() {
        let cli = Cli::try_parse_from(["asesheet", "inspect", "--file", "hero-idle.json", "--json"])
            .unwrap();
        match cli.command {
            Commands::Inspect { file, json } => {
                assert_eq!(file, "hero-idle.json");
                assert!(json);
            }
            _ => panic!("expected inspect command"),
        }
    }
}
