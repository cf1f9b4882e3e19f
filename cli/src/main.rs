//! pdf_to_text CLI - print the text of PDF files to stdout

use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use pdf_to_text::{Extractor, LopdfBackend};

#[derive(Parser)]
#[command(name = "pdf_to_text")]
#[command(about = "Print the plain text of PDF files", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Input PDF files, processed in order
    #[arg(
        value_name = "FILE",
        num_args = 0..,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    files: Vec<PathBuf>,
}

impl Cli {
    /// Input paths from raw process arguments, program name first.
    ///
    /// clap drops the first bare `--` as its separator; with no options to
    /// separate, that `--` is a path like any other, so it is put back.
    fn paths_from<I, T>(args: I) -> Vec<PathBuf>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let raw: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let cli = Cli::parse_from(&raw);
        if raw.iter().skip(1).any(|arg| arg == "--") {
            raw.into_iter().skip(1).map(PathBuf::from).collect()
        } else {
            cli.files
        }
    }
}

fn main() {
    env_logger::init();

    let files = Cli::paths_from(std::env::args_os());
    log::debug!("{} input file(s)", files.len());

    let stdout = io::stdout();
    let stderr = io::stderr();
    let result = Extractor::new(LopdfBackend::new()).run(
        &files,
        &mut stdout.lock(),
        &mut stderr.lock(),
    );

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            std::process::exit(1);
        }
    }
}
