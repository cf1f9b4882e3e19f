//! # pdf_to_text
//!
//! Plain-text extraction from PDF files, one header-delimited record per
//! file.
//!
//! Decoding is delegated to `lopdf` behind the [`PdfBackend`] trait; this
//! crate owns the per-path loop, the failure reporting and the output layout.
//!
//! ## Quick Start
//!
//! ```no_run
//! fn main() -> pdf_to_text::Result<()> {
//!     let text = pdf_to_text::extract_text("document.pdf")?;
//!     print!("{}", text);
//!     Ok(())
//! }
//! ```
//!
//! ## Output layout
//!
//! For every file that opens, [`Extractor::run`] writes
//!
//! ```text
//! ===== <path> =====
//! <page 0 text>
//! <page 1 text>
//! ...
//!
//! ```
//!
//! Every page contributes its text plus a newline, and the record ends with
//! one further newline. Files that fail to open produce a single
//! `Failed to open <path>` line on the diagnostic stream instead.

pub mod backend;
pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod runner;

// Re-export commonly used types
pub use backend::{LopdfBackend, LopdfDocument, PdfBackend, PdfDocument};
pub use detect::{check_header, check_header_bytes, PdfVersion};
pub use error::{Error, Result};
pub use extract::{collect_text, extract_record};
pub use model::{Page, TextRecord};
pub use runner::{Extractor, USAGE};

use std::path::Path;

/// Extract the concatenated page text of a single PDF file.
///
/// Returns the body of the record [`Extractor::run`] would print for
/// `path`, without the header.
///
/// # Example
///
/// ```no_run
/// use pdf_to_text::extract_text;
///
/// let text = extract_text("document.pdf").unwrap();
/// println!("{}", text);
/// ```
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let record = extract_record(&LopdfBackend::new(), path.as_ref())?;
    Ok(record.body)
}

/// Extract the concatenated page text of a PDF held in memory.
pub fn extract_text_from_bytes(data: &[u8]) -> Result<String> {
    let doc = LopdfBackend::new().load_bytes(data)?;
    Ok(collect_text(&doc))
}
