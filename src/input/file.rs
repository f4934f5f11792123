//! History files.
//!
//! Reads a delimited text export (CSV, TSV or whitespace separated) and
//! takes the first field of every non-empty line as an outcome. A
//! non-numeric first non-empty line is treated as a column header.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::OutcomeSource;

/// A history file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutcomeSource for FileSource {
    fn read_outcomes(&self) -> Result<Vec<i64>> {
        let contents = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read history file: {}", self.path.display()))?;

        let outcomes = parse_history(&contents);
        info!(
            path = %self.path.display(),
            count = outcomes.len(),
            "Loaded history file"
        );
        Ok(outcomes)
    }

    fn name(&self) -> &'static str {
        "file"
    }
}

/// Parse the first column of a delimited text export.
///
/// A leading UTF-8 byte-order mark is ignored. Blank lines are skipped, as
/// is a non-numeric first non-empty line (header). Any other line whose
/// first field is not a number is skipped with a warning. Decimal values
/// such as `17.0` are truncated toward zero.
pub fn parse_history(contents: &str) -> Vec<i64> {
    let contents = contents.strip_prefix('\u{feff}').unwrap_or(contents);
    let mut outcomes = Vec::new();
    let mut header_checked = false;

    for (line_no, line) in contents.lines().enumerate() {
        let Some(field) = first_field(line) else {
            continue;
        };
        let first = !header_checked;
        header_checked = true;

        match parse_field(field) {
            Some(n) => outcomes.push(n),
            None if first => {
                debug!(header = field, "Skipping header line");
            }
            None => {
                warn!(line = line_no + 1, field, "Skipping unparsable line");
            }
        }
    }

    outcomes
}

fn first_field(line: &str) -> Option<&str> {
    line.split(|c: char| c == ',' || c == ';' || c == '\t' || c.is_whitespace())
        .map(|f| f.trim().trim_matches('"'))
        .find(|f| !f.is_empty())
}

fn parse_field(field: &str) -> Option<i64> {
    if let Ok(n) = field.parse::<i64>() {
        return Some(n);
    }
    let value = field.parse::<f64>().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(value.trunc() as i64)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
