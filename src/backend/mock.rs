//! In-memory backend for unit tests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::model::Page;

use super::{PdfBackend, PdfDocument};

/// Slot for one page: `None` is an absent page, `Some(None)` a page
/// without text.
pub(crate) type MockPage = Option<Option<&'static str>>;

#[derive(Debug, Clone, Default)]
pub(crate) struct MockDocument {
    pages: Vec<MockPage>,
}

impl MockDocument {
    pub(crate) fn new(pages: Vec<MockPage>) -> Self {
        Self { pages }
    }

    pub(crate) fn with_texts(texts: &[&'static str]) -> Self {
        Self::new(texts.iter().map(|t| Some(Some(*t))).collect())
    }
}

impl PdfDocument for MockDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page(&self, index: usize) -> Option<Page> {
        let slot = self.pages.get(index).copied().flatten()?;
        Some(Page::new(index, slot.map(str::to_string)))
    }
}

#[derive(Debug, Default)]
pub(crate) struct MockBackend {
    documents: HashMap<PathBuf, MockDocument>,
}

impl MockBackend {
    pub(crate) fn with(mut self, path: &str, doc: MockDocument) -> Self {
        self.documents.insert(PathBuf::from(path), doc);
        self
    }
}

impl PdfBackend for MockBackend {
    type Document = MockDocument;

    fn open(&self, path: &Path) -> Result<MockDocument> {
        self.documents
            .get(path)
            .cloned()
            .ok_or(Error::UnknownFormat)
    }
}
