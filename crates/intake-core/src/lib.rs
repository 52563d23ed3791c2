//! Core library for nutrition report extraction.
//!
//! This crate provides:
//! - PDF-to-text rendering (the upstream black box, one string per document)
//! - Text normalization for the report's fixed locale conventions
//! - Pattern-driven field extraction across the nutrition vocabulary
//!   (patient info, macronutrients, minerals, vitamins, amino acids,
//!   fatty acids, ratios/indices, INQ scores)
//! - Batch aggregation of per-document records into one tabular dataset

pub mod batch;
pub mod error;
pub mod models;
pub mod pdf;
pub mod report;

pub use batch::{BatchFailure, BatchReport, aggregate};
pub use error::{IntakeError, Result};
pub use models::config::IntakeConfig;
pub use models::record::{BatchTable, IDENTITY_COLUMNS, Record, Value};
pub use pdf::{DocumentRenderer, PdfRenderer};
pub use report::{ExtractionResult, NormalizedText, ReportParser, normalize};
