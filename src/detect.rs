//! PDF header probing.
//!
//! A file is handed to the backend only once a `%PDF-x.y` marker has been
//! found near its start. Readers tolerate leading junk before the marker, so
//! the search covers the first [`HEADER_WINDOW`] bytes rather than offset 0.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const VERSION_LEN: usize = 3; // e.g., "1.7"

/// How far into the file the header may start.
pub const HEADER_WINDOW: usize = 1024;

/// Version declared in a PDF header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PdfVersion {
    pub major: u8,
    pub minor: u8,
}

impl std::fmt::Display for PdfVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Probe the header of the file at `path`.
///
/// # Example
/// ```no_run
/// use pdf_to_text::detect::check_header;
///
/// let version = check_header("document.pdf").unwrap();
/// println!("PDF {}", version);
/// ```
pub fn check_header<P: AsRef<Path>>(path: P) -> Result<PdfVersion> {
    let mut window = Vec::with_capacity(HEADER_WINDOW);
    File::open(path)?
        .take(HEADER_WINDOW as u64)
        .read_to_end(&mut window)?;
    check_header_bytes(&window)
}

/// Probe the header of an in-memory document.
pub fn check_header_bytes(data: &[u8]) -> Result<PdfVersion> {
    let window = &data[..data.len().min(HEADER_WINDOW)];
    let start = window
        .windows(PDF_MAGIC.len())
        .position(|w| w == PDF_MAGIC)
        .ok_or(Error::UnknownFormat)?;

    let version = &window[start + PDF_MAGIC.len()..];
    if version.len() < VERSION_LEN {
        return Err(Error::UnknownFormat);
    }
    parse_version(&version[..VERSION_LEN])
}

fn parse_version(bytes: &[u8]) -> Result<PdfVersion> {
    match bytes {
        [major, b'.', minor] if major.is_ascii_digit() && minor.is_ascii_digit() => {
            Ok(PdfVersion {
                major: major - b'0',
                minor: minor - b'0',
            })
        }
        _ => Err(Error::UnsupportedVersion(
            String::from_utf8_lossy(bytes).into_owned(),
        )),
    }
}
