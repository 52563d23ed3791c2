//! CLI subcommands and shared output helpers.

pub mod batch;
pub mod process;

use std::fs;
use std::path::Path;

use intake_core::models::config::{IntakeConfig, OutputConfig};
use intake_core::models::record::{BatchTable, Value};
use intake_core::error::{IntakeError, PdfError};
use intake_core::pdf::{DocumentRenderer, PdfRenderer};

/// Load the pipeline configuration, falling back to defaults.
pub(crate) fn load_config(config_path: Option<&str>) -> anyhow::Result<IntakeConfig> {
    Ok(match config_path {
        Some(path) => IntakeConfig::from_file(Path::new(path))?,
        None => IntakeConfig::default(),
    })
}

/// Render one input file to document text.
///
/// `.pdf` goes through the PDF renderer; `.txt` is treated as already
/// rendered text. A rendering that yields less than the configured minimum
/// text length counts as a document failure.
pub(crate) fn render_document(
    path: &Path,
    config: &IntakeConfig,
) -> intake_core::Result<String> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match extension.as_str() {
        "pdf" => {
            let data = fs::read(path)?;
            let mut renderer = PdfRenderer::new();
            renderer.load(&data)?;

            let text = renderer.render_text()?;
            if text.trim().len() < config.pdf.min_text_length {
                return Err(IntakeError::Pdf(PdfError::NoText));
            }
            Ok(text)
        }
        "txt" => Ok(fs::read_to_string(path)?),
        _ => Err(IntakeError::Config(format!(
            "unsupported file format: {}",
            extension
        ))),
    }
}

/// Format one cell for tabular output. The writer owns display policy:
/// float precision and absent-value representation come from the config.
pub(crate) fn format_value(value: Option<&Value>, output: &OutputConfig) -> String {
    match value {
        None => output.absent.clone(),
        Some(Value::Text(s)) => s.clone(),
        Some(Value::Int(i)) => i.to_string(),
        Some(Value::Float(f)) => format!("{:.*}", output.float_precision, f),
    }
}

/// Serialize a batch table as CSV with the derived column ordering.
pub(crate) fn write_table_csv(
    table: &BatchTable,
    output: &OutputConfig,
) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    let columns = table.columns();
    wtr.write_record(&columns)?;

    for record in table.records() {
        let row: Vec<String> = columns
            .iter()
            .map(|column| format_value(record.get(column), output))
            .collect();
        wtr.write_record(&row)?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}
