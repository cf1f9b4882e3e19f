//! Per-file output record.

use std::fmt;
use std::path::{Path, PathBuf};

/// The text gathered for one input path, printed as a header line followed
/// by the body and a closing newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRecord {
    /// Path exactly as it was given on the command line
    pub path: PathBuf,

    /// Concatenated page texts, each already terminated by `\n`
    pub body: String,
}

impl TextRecord {
    /// Create a record.
    pub fn new(path: impl Into<PathBuf>, body: String) -> Self {
        Self {
            path: path.into(),
            body,
        }
    }

    /// Header line naming the source file, without a newline.
    pub fn header(&self) -> String {
        header_for(&self.path)
    }
}

/// `===== <path> =====`
pub fn header_for(path: &Path) -> String {
    format!("===== {} =====", path.display())
}

impl fmt::Display for TextRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header())?;
        writeln!(f, "{}", self.body)
    }
}
