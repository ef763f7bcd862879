use std::{fs, io::Write, path::Path};

use crate::error::StripError;

/// Reads `path` as text and writes every line to `out` with trailing
/// whitespace (spaces, tabs, carriage returns, newlines) removed, one
/// newline appended per line. Line count and order match the input.
pub fn strip_file(path: &Path, out: impl Write) -> Result<(), StripError> {
    let content = fs::read_to_string(path).map_err(|source| StripError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    strip_lines(&content, out)
}

pub fn strip_lines(content: &str, mut out: impl Write) -> Result<(), StripError> {
    for line in content.lines() {
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}
