//! Turning an open document into the text printed for it.

use std::path::Path;

use crate::backend::{PdfBackend, PdfDocument};
use crate::error::Result;
use crate::model::TextRecord;

/// Concatenate the text of every page in order.
///
/// Each page that can be fetched contributes its text (or nothing, if it
/// has none) followed by `\n`. Pages the document cannot produce contribute
/// nothing at all, not even the newline.
pub fn collect_text<D: PdfDocument + ?Sized>(doc: &D) -> String {
    let mut buffer = String::new();
    for index in 0..doc.page_count() {
        if let Some(page) = doc.page(index) {
            buffer.push_str(page.text_or_empty());
            buffer.push('\n');
        } else {
            log::debug!("page index {} unavailable, skipped", index);
        }
    }
    buffer
}

/// Open `path` through `backend` and gather its text into a record.
///
/// The document is dropped before this returns.
pub fn extract_record<B: PdfBackend + ?Sized>(backend: &B, path: &Path) -> Result<TextRecord> {
    let doc = backend.open(path)?;
    log::debug!("{}: {} pages", path.display(), doc.page_count());
    Ok(TextRecord::new(path, collect_text(&doc)))
}
