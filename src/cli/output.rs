//! Terminal output helpers.
//!
//! Check results are plain lines on stdout; only diagnostics are styled.
//! Colour respects NO_COLOR.

use console::style;
use std::fmt::Display;
use std::io::{self, Write};
use tracing::warn;

fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Print one result line to stdout, unstyled.
///
/// A closed pipe (`scan-aws | head -1`) drops the line silently.
pub fn line(msg: impl Display) {
    if let Err(e) = write_line(&mut io::stdout().lock(), msg) {
        warn!(error = %e, "failed to write to stdout");
    }
}

/// Write `msg` and a newline to `out`, treating a broken pipe as success.
pub fn write_line(out: &mut impl Write, msg: impl Display) -> io::Result<()> {
    match writeln!(out, "{}", msg) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

/// Print an error message to stderr (red).
///
/// Example: `✗ KMS ListKeys failed: ...`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red().for_stderr(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}
