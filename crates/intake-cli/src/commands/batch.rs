//! Batch processing command for multiple report files.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use intake_core::batch::aggregate;

use super::{load_config, render_document, write_table_csv};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output dataset file
    #[arg(short, long, default_value = "dataset.csv")]
    output: PathBuf,

    /// Output format for the dataset
    #[arg(short, long, value_enum, default_value = "csv")]
    format: DatasetFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum DatasetFormat {
    /// One CSV table, identity columns first
    Csv,
    /// JSON array of records
    Json,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(ext.to_lowercase().as_str(), "pdf" | "txt")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    // Render every document up front, keeping input order; a failed
    // rendering is handed to the aggregator as a per-document failure
    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let mut documents = Vec::with_capacity(files.len());
    for path in &files {
        let source = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("document")
            .to_string();
        let outcome = render_document(path, &config);
        debug!("Rendered {}: ok={}", source, outcome.is_ok());
        documents.push((source, outcome));
        pb.inc(1);
    }
    pb.finish_with_message("Complete");

    let report = aggregate(documents);

    let content = match args.format {
        DatasetFormat::Csv => write_table_csv(&report.table, &config.output)?,
        DatasetFormat::Json => serde_json::to_string_pretty(report.table.records())?,
    };
    fs::write(&args.output, content)?;

    // Print summary
    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        files.len(),
        start.elapsed()
    );
    println!(
        "   {} extracted, {} skipped",
        style(report.table.len()).green(),
        style(report.failures.len()).red()
    );
    println!(
        "{} Dataset written to {}",
        style("✓").green(),
        args.output.display()
    );

    if !report.failures.is_empty() {
        println!();
        println!("{}", style("Skipped files:").red());
        for failure in &report.failures {
            println!("  - {}: {}", failure.source, failure.error);
        }
    }

    Ok(())
}
