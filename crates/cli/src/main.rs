//! Command-line interface for batch ZIP extraction.
//!
//! Archive names are resolved against the user's downloads directory, the
//! same way the desktop app resolves them.

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::process;
use tracing::debug;
use zip_extractor::{
    downloads_dir, list_archives, probe, BatchProgress, BatchReport, BatchRequest, Session,
};

#[derive(Parser)]
#[command(name = "zip-extract")]
#[command(version, about = "Extract ZIP archives from your Downloads folder", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract one or more archives from Downloads
    Extract {
        /// Archive file names inside the Downloads folder
        archives: Vec<String>,

        /// Destination directory
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// List the outcome of every archive
        #[arg(short, long)]
        verbose: bool,
    },

    /// List ZIP archives in Downloads
    List,

    /// Show the contents of an archive in Downloads
    Probe {
        /// Archive file name inside the Downloads folder
        archive: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            archives,
            out,
            json,
            verbose,
        } => handle_extract(archives, out, json, verbose),
        Commands::List => handle_list(),
        Commands::Probe { archive, json } => handle_probe(archive, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn handle_extract(
    archives: Vec<String>,
    out: Option<PathBuf>,
    json: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::new();
    debug!(source = %session.extractor().source_dir().display(), "resolving archives");

    let request = BatchRequest::new(archives, out.unwrap_or_default());

    let bar = ProgressBar::new(request.archive_names.len() as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40.cyan/blue}] {pos}/{len} archives")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar.set_message("Extracting");

    let report = session.run_batch(&request, &mut |p: BatchProgress| {
        bar.set_length(p.total as u64);
        bar.set_position(p.processed as u64);
    });
    bar.finish_and_clear();
    let report = report?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        if verbose {
            print_outcomes(&report);
        }
        println!("{}", report.session);
    }

    Ok(())
}

fn handle_list() -> Result<(), Box<dyn std::error::Error>> {
    let dir = downloads_dir().ok_or("could not determine the Downloads folder")?;
    for name in list_archives(&dir)? {
        println!("{}", name);
    }
    Ok(())
}

fn handle_probe(archive: String, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let session = Session::new();
    let info = probe(&session.extractor().resolve(&archive))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("{}: {} entries", archive, info.entries);
    println!(
        "  {} bytes compressed, {} bytes uncompressed",
        info.compressed_bytes, info.uncompressed_estimate
    );
    for entry in &info.entry_list {
        if entry.is_directory {
            println!("  {}", entry.path);
        } else {
            println!("  {} ({} bytes)", entry.path, entry.size);
        }
    }
    Ok(())
}

fn print_outcomes(report: &BatchReport) {
    for outcome in &report.outcomes {
        match &outcome.result {
            Ok(stats) => println!(
                "ok      {} ({} files, {} bytes)",
                outcome.archive_name, stats.files_extracted, stats.bytes_written
            ),
            Err(e) => println!("failed  {} ({})", outcome.archive_name, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_extract() {
        let cli = Cli::try_parse_from([
            "zip-extract",
            "extract",
            "a.zip",
            "b.zip",
            "-o",
            "/tmp/out",
        ])
        .unwrap();
        match cli.command {
            Commands::Extract { archives, out, json, verbose } => {
                assert_eq!(archives, vec!["a.zip", "b.zip"]);
                assert_eq!(out, Some(PathBuf::from("/tmp/out")));
                assert!(!json);
                assert!(!verbose);
            }
            _ => panic!("expected extract"),
        }
    }

    #[test]
    fn test_parse_extract_without_args_defers_to_batch_check() {
        let cli = Cli::try_parse_from(["zip-extract", "extract"]).unwrap();
        match cli.command {
            Commands::Extract { archives, out, .. } => {
                assert!(archives.is_empty());
                assert!(out.is_none());
            }
            _ => panic!("expected extract"),
        }
    }
}
