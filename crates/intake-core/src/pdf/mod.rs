//! PDF rendering module.
//!
//! The extraction pipeline treats rendering as a black box: one source
//! document in, one string of document text out. Everything downstream of
//! [`DocumentRenderer`] works on that string alone.

mod renderer;

pub use renderer::PdfRenderer;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for document-to-text rendering implementations.
pub trait DocumentRenderer {
    /// Load a document from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the document.
    fn page_count(&self) -> u32;

    /// Render the entire document to a single text string.
    fn render_text(&self) -> Result<String>;
}
