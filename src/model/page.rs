//! Page-level types.

/// A single page fetched from an open document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Page index (0-based, document order)
    pub index: usize,

    /// Extracted text, `None` when extraction produced nothing
    pub text: Option<String>,
}

impl Page {
    /// Create a page with optional text.
    pub fn new(index: usize, text: Option<String>) -> Self {
        Self { index, text }
    }

    /// Create a page that yielded no text.
    pub fn blank(index: usize) -> Self {
        Self::new(index, None)
    }

    /// Page text, with missing text read as the empty string.
    pub fn text_or_empty(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
}
