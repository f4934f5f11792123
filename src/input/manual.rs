//! Manual entry of outcomes as free text.
//!
//! Any run of ASCII digits is one number; every other character (spaces,
//! commas, dashes, letters) is a separator. Values outside 0–36 are dropped
//! here so the user gets immediate feedback on what was accepted.

use anyhow::Result;
use tracing::{info, warn};

use super::OutcomeSource;
use crate::types::is_valid_outcome;

/// Text typed by a user, e.g. `"15 22 8, 31 4"`.
#[derive(Debug, Clone)]
pub struct ManualSource {
    text: String,
}

impl ManualSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl OutcomeSource for ManualSource {
    fn read_outcomes(&self) -> Result<Vec<i64>> {
        let numbers = extract_numbers(&self.text);
        let total = numbers.len();
        let valid: Vec<i64> = numbers.into_iter().filter(|&n| is_valid_outcome(n)).collect();

        if valid.len() < total {
            warn!(dropped = total - valid.len(), "Dropped numbers outside 0-36");
        }
        info!(count = valid.len(), "Parsed manual entry");
        Ok(valid)
    }

    fn name(&self) -> &'static str {
        "manual"
    }
}

/// Every maximal run of ASCII digits in `text`, in order. Runs too long for
/// an `i64` come back as `i64::MAX` so they fail range checks downstream.
pub fn extract_numbers(text: &str) -> Vec<i64> {
    text.split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty())
        .map(|run| run.parse::<i64>().unwrap_or(i64::MAX))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
