//! Error types for the intake-core library.

use thiserror::Error;

/// Main error type for the intake library.
///
/// Only conditions that make a whole document unprocessable live here. A
/// pattern that fails to match is not an error; it resolves to the field's
/// documented default.
#[derive(Error, Debug)]
pub enum IntakeError {
    /// PDF rendering error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to rendering a PDF document to text.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from the PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// The rendering produced no usable text.
    #[error("no text rendered from document")]
    NoText,
}

/// Result type for the intake library.
pub type Result<T> = std::result::Result<T, IntakeError>;
