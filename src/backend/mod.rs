//! PDF backend abstraction layer.
//!
//! Provides a trait-based interface for opening documents and reading page
//! text, isolating the concrete PDF library (lopdf) from the extraction loop.

mod lopdf_backend;
#[cfg(test)]
pub(crate) mod mock;

pub use lopdf_backend::{LopdfBackend, LopdfDocument};

use std::path::Path;

use crate::error::Result;
use crate::model::Page;

/// An opened document: a fixed number of pages, addressed by 0-based index.
pub trait PdfDocument {
    /// Number of pages, known as soon as the document is open.
    fn page_count(&self) -> usize;

    /// Fetch a page. `None` means the page could not be produced at all,
    /// which is different from a page that has no text.
    fn page(&self, index: usize) -> Option<Page>;
}

/// Something that can turn a path into a [`PdfDocument`].
pub trait PdfBackend {
    type Document: PdfDocument;

    /// Open the document at `path`. Every failure mode (missing file,
    /// permissions, malformed data, encryption) surfaces as an `Err`.
    fn open(&self, path: &Path) -> Result<Self::Document>;
}
