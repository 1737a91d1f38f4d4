use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Error, Result};

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
    let _ = writeln!(
        stderr,
        "  - set SCANPRINT_LOG=debug for details on skipped controls and resources"
    );
    let _ = writeln!(stderr, "  - see `scanprint --help` for commands and options");
}

/// Writes rendered text to stdout, or to `path` when given.
///
/// A closed stdout pipe (e.g. `| head`) is not an error.
pub fn write_output(text: &str, path: Option<&Path>) -> Result<()> {
    if let Some(path) = path {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("failed to create output file: {}", path.display()))?;
        file.write_all(text.as_bytes())
            .with_context(|| format!("failed to write output file: {}", path.display()))?;
        return file
            .flush()
            .with_context(|| format!("failed to flush output file: {}", path.display()));
    }

    let mut stdout = io::stdout().lock();
    match stdout.write_all(text.as_bytes()).and_then(|()| stdout.flush()) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Err(err) => Err(err).context("failed to write to stdout"),
    }
}
