use anyhow::Error;
use std::io::{self, Write};
use std::path::Path;

use crate::exit::ExitCode;

pub fn eprintln_error(err: &Error) {
    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "error:");
    let _ = writeln!(stderr, "  {err}");

    let mut causes = err.chain().skip(1).peekable();
    if causes.peek().is_some() {
        let _ = writeln!(stderr, "caused by:");
        for cause in causes {
            let _ = writeln!(stderr, "  - {cause}");
        }
    }

    let _ = writeln!(stderr, "next:");
    for step in next_steps(crate::exit::error_code(err)) {
        let _ = writeln!(stderr, "  - {step}");
    }
}

fn next_steps(code: ExitCode) -> &'static [&'static str] {
    match code {
        ExitCode::InvalidArgs => &[
            "pass the path of a WPScan JSON result (wpscan --format json)",
            "see `wpreport --help` for usage",
        ],
        ExitCode::InputFailed => &[
            "check that the file exists and is readable",
            "make sure it is WPScan output produced with `--format json`",
        ],
        ExitCode::OutputFailed => &[
            "check that the current directory is writable",
            "remove or rename anything in the way of the report file",
        ],
    }
}

pub fn print_usage(usage: &str) {
    let mut out = io::stdout().lock();
    let _ = writeln!(out, "{usage}");
}

pub fn print_generated(path: &Path) {
    let mut out = io::stdout().lock();
    let _ = writeln!(out, "HTML Report generated: {}", path.display());
}
