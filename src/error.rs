//! Error types for pdf_to_text.

use std::io;
use thiserror::Error;

/// Result type alias for pdf_to_text operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while opening documents or writing output.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading the input or writing to stdout/stderr.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file does not carry a PDF header.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The header names a version we cannot read.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// Error parsing PDF structure.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// The PDF document is encrypted.
    #[error("Document is encrypted")]
    Encrypted,

    /// Error extracting text content from a page.
    #[error("Text extraction error: {0}")]
    TextExtract(String),

    /// Page index is out of range.
    #[error("Page {0} is out of range (document has {1} pages)")]
    PageOutOfRange(usize, usize),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::PdfParse(err.to_string()),
        }
    }
}
