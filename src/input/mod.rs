//! Outcome sources.
//!
//! Defines the `OutcomeSource` trait and provides implementations for:
//! - built-in sample data (for trying the tool without a history)
//! - free-text manual entry ("15 22, 8 ...")
//! - delimited text files whose first column holds the outcomes
//!
//! Sources only deliver integers. Range filtering is the analyzer's job.

pub mod file;
pub mod manual;

use anyhow::Result;

pub use file::FileSource;
pub use manual::ManualSource;

/// Abstraction over anything that can supply a draw history.
#[cfg_attr(test, mockall::automock)]
pub trait OutcomeSource {
    /// Read the full history, oldest draw first.
    fn read_outcomes(&self) -> Result<Vec<i64>>;

    /// Source name for logging and identification.
    fn name(&self) -> &'static str;
}

/// Fixed sample history used for demos and tests.
pub const SAMPLE_OUTCOMES: [i64; 35] = [
    15, 22, 8, 31, 4, 17, 25, 12, 36, 7, 19, 2, 28, 14, 33, 6, 20, 11, 29, 1, 35, 16, 24, 9, 13,
    27, 10, 5, 30, 18, 23, 34, 3, 26, 21,
];

/// Serves [`SAMPLE_OUTCOMES`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleSource;

impl OutcomeSource for SampleSource {
    fn read_outcomes(&self) -> Result<Vec<i64>> {
        Ok(SAMPLE_OUTCOMES.to_vec())
    }

    fn name(&self) -> &'static str {
        "sample"
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
