//! Breaknews main entry point
//!
//! Command-line interface for the concurrent news-article crawler.

use anyhow::Context;
use breaknews::config::{load_config, Config};
use breaknews::crawler::crawl;
use breaknews::output::{print_stats, CsvWriter, RecordWriter};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Breaknews: a concurrent news-article crawler
///
/// Discovers article URLs from the site's paginated listing endpoint with
/// one worker pool, then fetches and extracts each article with another,
/// and saves the records as CSV.
#[derive(Parser, Debug)]
#[command(name = "breaknews")]
#[command(version = "1.0.0")]
#[command(about = "A concurrent news-article crawler", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults apply when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Number of articles to collect (prompts interactively when omitted)
    #[arg(short = 'n', long, value_name = "COUNT")]
    count: Option<usize>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path).with_context(|| format!("failed to load {}", path.display()))?
        }
        None => Config::default(),
    };

    // Desired article count, from the flag or the interactive prompt
    let target = match cli.count {
        Some(count) if count > 0 => count,
        Some(_) => anyhow::bail!("--count must be a positive number"),
        None => prompt_article_count()?,
    };

    let output_config = config.output.clone();

    println!("----- Crawler Start -----");
    let report = crawl(config, target).await?;
    println!("----- Crawler End -----");
    println!(
        "It took {:.2} seconds",
        report.stats.elapsed.as_secs_f64()
    );
    print_stats(&report.stats);

    println!("----- Saving Start -----");
    let writer = CsvWriter::new(&output_config.directory);
    let path = writer.save(&report.records, &output_config.file_name)?;
    println!("----- Saving End -----");
    println!("Saved {} records to {}", report.records.len(), path.display());

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("breaknews=info,warn"),
            1 => EnvFilter::new("breaknews=debug,info"),
            2 => EnvFilter::new("breaknews=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Asks for a positive article count until one is given
///
/// Non-numeric or non-positive input re-prompts without mutating any state.
fn prompt_article_count() -> anyhow::Result<usize> {
    let stdin = io::stdin();
    loop {
        print!("Number of articles to collect: ");
        io::stdout().flush()?;

        let mut line = String::new();
        let read = stdin.lock().read_line(&mut line)?;
        if read == 0 {
            anyhow::bail!("stdin closed before a count was given");
        }

        match line.trim().parse::<usize>() {
            Ok(count) if count > 0 => return Ok(count),
            _ => println!("Please enter a positive number."),
        }
    }
}
