//! [`PdfBackend`] backed by `lopdf`.

use std::path::Path;

use lopdf::Document;

use crate::detect::{check_header, check_header_bytes};
use crate::error::{Error, Result};
use crate::model::Page;

use super::{PdfBackend, PdfDocument};

/// Opens documents with `lopdf::Document::load`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfBackend {
    _private: (),
}

impl LopdfBackend {
    /// Create a new backend.
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Load a document from an in-memory byte slice.
    pub fn load_bytes(&self, data: &[u8]) -> Result<LopdfDocument> {
        let version = check_header_bytes(data)?;
        log::debug!("loading {} byte PDF {} from memory", data.len(), version);
        let doc = Document::load_mem(data)?;
        LopdfDocument::from_document(doc)
    }
}

impl PdfBackend for LopdfBackend {
    type Document = LopdfDocument;

    fn open(&self, path: &Path) -> Result<LopdfDocument> {
        let version = check_header(path)?;
        log::debug!("loading {} (PDF {})", path.display(), version);
        let doc = Document::load(path)?;
        LopdfDocument::from_document(doc)
    }
}

/// A document opened through [`LopdfBackend`].
pub struct LopdfDocument {
    doc: Document,
    /// lopdf page numbers (1-based) in ascending order; index `i` is page `i`.
    page_numbers: Vec<u32>,
}

impl LopdfDocument {
    fn from_document(mut doc: Document) -> Result<Self> {
        // Permission-only encryption opens with the empty user password.
        if doc.is_encrypted() {
            doc.decrypt("").map_err(|e| {
                log::debug!("empty password rejected: {}", e);
                Error::Encrypted
            })?;
        }
        let page_numbers = doc.get_pages().keys().copied().collect::<Vec<_>>();
        log::debug!("document has {} pages", page_numbers.len());
        Ok(Self { doc, page_numbers })
    }

    /// Extract the text of the page at `index`.
    pub fn page_text(&self, index: usize) -> Result<String> {
        let number = *self
            .page_numbers
            .get(index)
            .ok_or(Error::PageOutOfRange(index, self.page_numbers.len()))?;
        self.doc
            .extract_text(&[number])
            .map_err(|e| Error::TextExtract(format!("Page {}: {}", number, e)))
    }

    /// PDF version from the document header.
    pub fn version(&self) -> &str {
        &self.doc.version
    }
}

impl PdfDocument for LopdfDocument {
    fn page_count(&self) -> usize {
        self.page_numbers.len()
    }

    fn page(&self, index: usize) -> Option<Page> {
        if index >= self.page_numbers.len() {
            return None;
        }
        match self.page_text(index) {
            Ok(text) => Some(Page::new(index, Some(text))),
            Err(e) => {
                log::debug!("no text for page index {}: {}", index, e);
                Some(Page::blank(index))
            }
        }
    }
}
