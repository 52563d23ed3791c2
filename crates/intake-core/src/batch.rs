//! Batch aggregation across many documents.
//!
//! Documents are processed independently and in input order. A document
//! whose rendering failed upstream is recorded as skipped and never aborts
//! the batch; no field- or section-level condition ever escalates to a
//! document failure.

use tracing::{debug, warn};

use crate::error::IntakeError;
use crate::models::record::BatchTable;
use crate::report::ReportParser;

/// A skipped document and the rendering error that caused the skip.
#[derive(Debug)]
pub struct BatchFailure {
    /// Source identifier (file name or caller-supplied label).
    pub source: String,
    /// Rendering error description.
    pub error: String,
}

/// Result of aggregating one batch.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Successful records, in input document order.
    pub table: BatchTable,
    /// Skipped documents, in input order.
    pub failures: Vec<BatchFailure>,
}

/// Apply the extraction pipeline to each rendered document and collect the
/// successful records into an ordered table.
///
/// `documents` yields `(source, render outcome)` pairs; an `Err` outcome is
/// the upstream renderer reporting that it could not produce text for that
/// document.
pub fn aggregate<I>(documents: I) -> BatchReport
where
    I: IntoIterator<Item = (String, Result<String, IntakeError>)>,
{
    let parser = ReportParser::new();
    let mut report = BatchReport::default();

    for (source, outcome) in documents {
        match outcome {
            Ok(text) => {
                let result = parser.parse(&text);
                for warning in &result.warnings {
                    debug!("{}: {}", source, warning);
                }
                report.table.push(result.record);
            }
            Err(e) => {
                warn!("Skipping {}: {}", source, e);
                report.failures.push(BatchFailure {
                    source,
                    error: e.to_string(),
                });
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PdfError;
    use crate::models::record::Value;
    use pretty_assertions::assert_eq;

    fn doc(name: &str) -> String {
        format!(
            "Report del Calcolo intake alimentare {name} Visita del: 01/02/2024 \
             Peso: kg 60,0"
        )
    }

    #[test]
    fn test_failed_document_is_skipped_not_fatal() {
        let report = aggregate(vec![
            ("one.pdf".to_string(), Ok(doc("Anna Bianchi"))),
            (
                "two.pdf".to_string(),
                Err(IntakeError::Pdf(PdfError::NoText)),
            ),
            ("three.pdf".to_string(), Ok(doc("Carla Verdi"))),
        ]);

        assert_eq!(report.table.len(), 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].source, "two.pdf");

        // relative order of the surviving documents is preserved
        let names: Vec<_> = report
            .table
            .records()
            .iter()
            .map(|r| r.get("Patient_Name").cloned())
            .collect();
        assert_eq!(
            names,
            vec![
                Some(Value::Text("Anna Bianchi".into())),
                Some(Value::Text("Carla Verdi".into())),
            ]
        );
    }

    #[test]
    fn test_columns_start_with_identity_fields() {
        let report = aggregate(vec![("one.pdf".to_string(), Ok(doc("Anna Bianchi")))]);

        let columns = report.table.columns();
        assert_eq!(
            &columns[..7],
            &[
                "Patient_Name",
                "Visit_Date",
                "Gender",
                "Age_years",
                "Height_cm",
                "Weight_kg",
                "BMI",
            ]
        );
        assert_eq!(columns.len(), 127);
        // the remaining general fields follow in first-seen order
        assert_eq!(columns[7], "BSA_m2");
    }

    #[test]
    fn test_empty_batch() {
        let report = aggregate(Vec::new());
        assert!(report.table.is_empty());
        assert!(report.failures.is_empty());
    }
}
