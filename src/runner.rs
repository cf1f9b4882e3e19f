//! The command loop: every path in order, one record or one failure line
//! each.

use std::io::Write;
use std::path::Path;

use crate::backend::PdfBackend;
use crate::error::Result;
use crate::extract::extract_record;
use crate::model::TextRecord;

/// Printed to stderr when no paths are given.
pub const USAGE: &str = "Usage: pdf_to_text <file> [<file> ...]\n";

/// Exit code for a run that processed its paths, whatever their outcome.
pub const EXIT_OK: i32 = 0;

/// Exit code for an invocation without paths.
pub const EXIT_USAGE: i32 = 1;

/// Runs extraction over a list of paths with a given backend.
///
/// # Example
///
/// ```no_run
/// use pdf_to_text::{Extractor, LopdfBackend};
///
/// let stdout = std::io::stdout();
/// let stderr = std::io::stderr();
/// let code = Extractor::new(LopdfBackend::new())
///     .run(&["a.pdf", "b.pdf"], &mut stdout.lock(), &mut stderr.lock())
///     .unwrap();
/// std::process::exit(code);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Extractor<B> {
    backend: B,
}

impl<B: PdfBackend> Extractor<B> {
    /// Create an extractor over `backend`.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Extract a single path into a record.
    pub fn extract(&self, path: &Path) -> Result<TextRecord> {
        extract_record(&self.backend, path)
    }

    /// Process `paths` in order, writing records to `out` and diagnostics to
    /// `err`. Returns the process exit code.
    ///
    /// A path that cannot be opened produces `Failed to open <path>` on `err`
    /// and is skipped; it never changes the exit code. `Err` is returned only
    /// when writing to `out` or `err` fails.
    pub fn run<P, O, E>(&self, paths: &[P], out: &mut O, err: &mut E) -> Result<i32>
    where
        P: AsRef<Path>,
        O: Write + ?Sized,
        E: Write + ?Sized,
    {
        if paths.is_empty() {
            err.write_all(USAGE.as_bytes())?;
            err.flush()?;
            return Ok(EXIT_USAGE);
        }

        for path in paths {
            let path = path.as_ref();
            match self.extract(path) {
                Ok(record) => {
                    write!(out, "{}", record)?;
                }
                Err(e) => {
                    log::warn!("failed to open {}: {}", path.display(), e);
                    writeln!(err, "Failed to open {}", path.display())?;
                }
            }
        }

        out.flush()?;
        err.flush()?;
        Ok(EXIT_OK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::mock::{MockBackend, MockDocument};
    use crate::error::Error;
    use std::io;

    fn run_with(backend: MockBackend, paths: &[&str]) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = Extractor::new(backend).run(paths, &mut out, &mut err).unwrap();
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_no_paths_prints_usage() {
        let (code, out, err) = run_with(MockBackend::default(), &[]);
        assert_eq!(code, 1);
        assert_eq!(out, "");
        assert_eq!(err, "Usage: pdf_to_text <file> [<file> ...]\n");
    }

    #[test]
    fn test_single_document() {
        let backend =
            MockBackend::default().with("a.pdf", MockDocument::with_texts(&["p0", "p1"]));
        let (code, out, err) = run_with(backend, &["a.pdf"]);
        assert_eq!(code, 0);
        assert_eq!(out, "===== a.pdf =====\np0\np1\n\n");
        assert_eq!(err, "");
    }

    #[test]
    fn test_failure_only_still_exits_zero() {
        let (code, out, err) = run_with(MockBackend::default(), &["nope.pdf"]);
        assert_eq!(code, 0);
        assert_eq!(out, "");
        assert_eq!(err, "Failed to open nope.pdf\n");
    }

    #[test]
    fn test_mixed_inputs_keep_order() {
        let backend = MockBackend::default()
            .with("one.pdf", MockDocument::with_texts(&["first"]))
            .with("three.pdf", MockDocument::with_texts(&["third"]));
        let (code, out, err) =
            run_with(backend, &["bad.pdf", "one.pdf", "worse.pdf", "three.pdf"]);

        assert_eq!(code, 0);
        assert_eq!(
            out,
            "===== one.pdf =====\nfirst\n\n===== three.pdf =====\nthird\n\n"
        );
        assert_eq!(err, "Failed to open bad.pdf\nFailed to open worse.pdf\n");
    }

    #[test]
    fn test_blank_page_layout() {
        let backend =
            MockBackend::default().with("blank.pdf", MockDocument::new(vec![Some(None)]));
        let (_, out, _) = run_with(backend, &["blank.pdf"]);
        assert_eq!(out, "===== blank.pdf =====\n\n\n");
    }

    #[test]
    fn test_same_path_twice_is_processed_twice() {
        let backend = MockBackend::default().with("a.pdf", MockDocument::with_texts(&["x"]));
        let (_, out, _) = run_with(backend, &["a.pdf", "a.pdf"]);
        assert_eq!(out, "===== a.pdf =====\nx\n\n===== a.pdf =====\nx\n\n");
    }

    #[test]
    fn test_runs_are_identical() {
        let make = || {
            MockBackend::default().with("a.pdf", MockDocument::with_texts(&["stable", "text"]))
        };
        let first = run_with(make(), &["a.pdf", "missing.pdf"]);
        let second = run_with(make(), &["a.pdf", "missing.pdf"]);
        assert_eq!(first, second);
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_an_error() {
        let backend = MockBackend::default().with("a.pdf", MockDocument::with_texts(&["x"]));
        let mut err = Vec::new();
        let result = Extractor::new(backend).run(&["a.pdf"], &mut BrokenPipe, &mut err);
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
