//! Report parser: normalization, category extraction, record assembly.

use std::time::Instant;

use tracing::{debug, info};

use crate::models::record::Record;
use crate::report::normalize::normalize;
use crate::report::rules::{general, macronutrients, patterns, statistics, tables};

/// Result of extracting one document.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// The assembled flat record.
    pub record: Record,
    /// Extraction warnings. These never escalate to failures.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Extraction pipeline for one rendered report document.
///
/// Pure and deterministic: the output depends only on the document text
/// (plus the body weight the document itself supplies to the per-kg
/// derivation). Each document gets a freshly constructed record.
pub struct ReportParser;

impl ReportParser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Parse one document's rendered text into a flat record.
    pub fn parse(&self, raw_text: &str) -> ExtractionResult {
        let start = Instant::now();
        let mut warnings = Vec::new();

        info!("Parsing report from {} characters of text", raw_text.len());

        let text = normalize(raw_text);
        if text.display.is_empty() {
            warnings.push("Document text is empty".to_string());
        }

        // General information first: the macronutrient derivation needs the
        // extracted body weight.
        let mut record = general::extract(&text);
        if record.get("Patient_Name").is_none() {
            warnings.push("Could not extract patient name".to_string());
        }
        let weight_kg = record.float("Weight_kg");

        record.merge(statistics::extract(&text.numeric));

        if !patterns::MACRONUTRIENT_SECTION.is_match(&text.numeric) {
            warnings.push("Could not find the macronutrient section".to_string());
        }
        record.merge(macronutrients::extract(&text.numeric, weight_kg));
        record.merge(tables::extract(&text.numeric));

        let populated = record.iter().filter(|(_, v)| v.is_some()).count();
        debug!("Extracted {} of {} fields", populated, record.len());

        ExtractionResult {
            record,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

impl Default for ReportParser {
    fn default() -> Self {
        Self::new()
    }
}
