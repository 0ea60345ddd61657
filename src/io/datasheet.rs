// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Plain-text datasheet files.
//!
//! A datasheet holds one rally per line, oldest first. Reading also
//! accepts comma-separated rallies so hand-written sheets load too.

use anyhow::{Context, Result};
use std::path::Path;

/// Newline-joined file contents for the given lines.
pub fn datasheet_contents<S: AsRef<str>>(lines: &[S]) -> String {
    lines
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write `lines` as a UTF-8 datasheet.
pub fn write_datasheet<S: AsRef<str>>(lines: &[S], path: &Path) -> Result<()> {
    std::fs::write(path, datasheet_contents(lines))
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Split datasheet text into rallies, dropping blanks.
pub fn parse_datasheet(text: &str) -> Vec<String> {
    text.split([',', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read rallies from a datasheet file.
pub fn read_datasheet(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    Ok(parse_datasheet(&text))
}
