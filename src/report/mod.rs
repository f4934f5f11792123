//! Analysis reports.
//!
//! [`AnalysisReport`] is the structured result of analysing one scheme at
//! one sigma level. It serialises to JSON for machine consumers and renders
//! to a plain-text report through its `Display` impl.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{Category, DelayStats, Scheme, SigmaLevel, Signal};

// ---------------------------------------------------------------------------
// Report types
// ---------------------------------------------------------------------------

/// Everything known about one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryReport {
    pub category: Category,
    pub stats: DelayStats,
    pub current_delay: usize,
    pub signal: Signal,
}

/// Per-category analysis of a history under one scheme.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub scheme: Scheme,
    pub sigma_level: SigmaLevel,
    pub total_draws: usize,
    pub generated_at: DateTime<Utc>,
    /// One entry per category, in category order.
    pub categories: Vec<CategoryReport>,
}

impl AnalysisReport {
    /// Categories whose current delay reached the sigma threshold.
    pub fn betting_categories(&self) -> Vec<Category> {
        self.categories
            .iter()
            .filter(|c| c.signal.should_bet())
            .map(|c| c.category)
            .collect()
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialise analysis report")
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== {} ANALYSIS ===", self.scheme.title().to_uppercase())?;
        writeln!(f, "Total draws analysed: {}", self.total_draws)?;
        writeln!(f, "Confidence level: {}", self.sigma_level)?;

        for entry in &self.categories {
            writeln!(f)?;
            writeln!(f, "--- {} {} ---", self.scheme.title(), entry.category)?;

            let Some(summary) = entry.stats.summary() else {
                writeln!(f, "Insufficient data for analysis")?;
                continue;
            };

            writeln!(f, "Mean delay: {:.2}", summary.mean)?;
            writeln!(f, "Standard deviation: {:.2}", summary.stdev)?;
            writeln!(f, "Range: {} - {}", summary.min, summary.max)?;
            writeln!(
                f,
                "Threshold {}: {:.2}",
                self.sigma_level,
                summary.threshold(self.sigma_level)
            )?;
            writeln!(f, "Current delay: {}", entry.current_delay)?;
            match entry.signal.intensity() {
                Some(z) => writeln!(f, "Intensity: {z:.2}σ")?,
                None => writeln!(f, "Intensity: n/a (zero deviation)")?,
            }
            writeln!(
                f,
                "BET: {}",
                if entry.signal.should_bet() { "YES" } else { "NO" }
            )?;
        }
        Ok(())
    }
}

/// Render a report as plain text.
pub fn render_text(report: &AnalysisReport) -> String {
    report.to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
