//! Process command - extract data from a single report file.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use intake_core::models::config::OutputConfig;
use intake_core::models::record::{BatchTable, Record};
use intake_core::report::ReportParser;

use super::{load_config, render_document, write_table_csv};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file (PDF or pre-rendered text)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Show extraction warnings
    #[arg(long)]
    show_warnings: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let text = render_document(&args.input, &config)?;
    let result = ReportParser::new().parse(&text);

    if args.show_warnings && !result.warnings.is_empty() {
        eprintln!("{}", style("Warnings:").yellow());
        for warning in &result.warnings {
            eprintln!("  - {}", warning);
        }
    }

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&result.record)?,
        OutputFormat::Csv => {
            let mut table = BatchTable::new();
            table.push(result.record);
            write_table_csv(&table, &config.output)?
        }
        OutputFormat::Text => format_record_text(&result.record, &config.output),
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, output)?;
        println!(
            "{} Wrote output to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn format_record_text(record: &Record, output: &OutputConfig) -> String {
    let cell = |key: &str| super::format_value(record.get(key), output);
    let mut text = String::new();

    text.push_str(&format!("Patient: {}\n", cell("Patient_Name")));
    text.push_str(&format!("Visit:   {}\n", cell("Visit_Date")));
    text.push('\n');

    text.push_str("Energy intake:\n");
    for (name, gram_key, kcal_key) in [
        ("Protein", "Protein_g", "Protein_kcal"),
        ("Carbs", "Carbs_g", "Carbs_kcal"),
        ("Fats", "Fats_g", "Fats_kcal"),
        ("Alcohol", "Alcohol_g", "Alcohol_kcal"),
    ] {
        text.push_str(&format!(
            "  {:<8} {} g ({} kcal)\n",
            name,
            cell(gram_key),
            cell(kcal_key)
        ));
    }
    text.push_str(&format!("  Total    {} kcal\n", cell("Total_kcal")));
    text.push('\n');

    let populated = record.iter().filter(|(_, v)| v.is_some()).count();
    text.push_str(&format!(
        "Fields populated: {} of {}\n",
        populated,
        record.len()
    ));

    text
}
