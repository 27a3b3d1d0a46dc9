// SPDX-License-Identifier: PMPL-1.0-or-later

//! LINGUAS reader
//!
//! A LINGUAS file lists one language identifier per line. Blank lines and
//! `#` comments are ignored; every other line is taken verbatim after trimming.

use crate::error::SetupError;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read the language list from a LINGUAS file.
pub fn read_linguas(path: &Path) -> Result<Vec<String>> {
    if !path.is_file() {
        return Err(SetupError::MissingLinguas(path.to_path_buf()).into());
    }
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(parse_linguas(&content))
}

/// Parse LINGUAS content. Order is preserved, duplicates are kept.
pub fn parse_linguas(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
