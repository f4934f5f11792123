//! Delay analyzer — gap statistics and sigma-based signals per category.
//!
//! Holds the draw history and derives everything else from it on demand:
//! gap lists between appearances, descriptive statistics, the current
//! outstanding delay, and the bet signal at a chosen sigma level.

pub mod partition;
pub mod stats;

use chrono::Utc;
use tracing::{debug, info};

use crate::report::{AnalysisReport, CategoryReport};
use crate::types::{is_valid_outcome, CategoryMap, DelayStats, Scheme, SigmaLevel, Signal};

// ---------------------------------------------------------------------------
// Single-pass scan
// ---------------------------------------------------------------------------

/// Result of one forward walk over the history for a scheme.
struct Scan {
    gaps: CategoryMap<Vec<usize>>,
    /// Index of the most recent appearance of each category.
    last_seen: CategoryMap<Option<usize>>,
}

impl Scan {
    /// Draws since each category last appeared, given the history length.
    fn delays(&self, len: usize) -> CategoryMap<usize> {
        CategoryMap::from_fn(|cat| match self.last_seen[cat] {
            Some(index) => len - 1 - index,
            None => len,
        })
    }
}

// ---------------------------------------------------------------------------
// Analyzer
// ---------------------------------------------------------------------------

/// Owns an ordered draw history and answers delay queries over it.
///
/// Every query is a pure function of the history; only [`record`] and
/// [`load`] mutate it. Out-of-range outcomes are dropped silently.
///
/// [`record`]: DelayAnalyzer::record
/// [`load`]: DelayAnalyzer::load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DelayAnalyzer {
    history: Vec<u8>,
}

impl DelayAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an analyzer preloaded with `outcomes` (invalid values dropped).
    pub fn with_history(outcomes: impl IntoIterator<Item = i64>) -> Self {
        let mut analyzer = Self::new();
        analyzer.load(outcomes);
        analyzer
    }

    /// Append one outcome. Returns `false` (and changes nothing) when the
    /// value is outside 0–36.
    pub fn record(&mut self, outcome: i64) -> bool {
        if !is_valid_outcome(outcome) {
            debug!(outcome, "Ignoring out-of-range outcome");
            return false;
        }
        self.history.push(outcome as u8);
        true
    }

    /// Replace the whole history with the valid subset of `outcomes`.
    /// Returns the number of outcomes kept.
    pub fn load(&mut self, outcomes: impl IntoIterator<Item = i64>) -> usize {
        let mut dropped = 0usize;
        self.history = outcomes
            .into_iter()
            .filter(|&v| {
                let ok = is_valid_outcome(v);
                if !ok {
                    dropped += 1;
                }
                ok
            })
            .map(|v| v as u8)
            .collect();

        debug!(kept = self.history.len(), dropped, "History loaded");
        self.history.len()
    }

    /// Draws in order, oldest first.
    pub fn history(&self) -> &[u8] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Category number (1–3) of an outcome under a scheme, or 0 for zero and
    /// anything outside the partition tables.
    pub fn category_of(outcome: i64, scheme: Scheme) -> u8 {
        partition::category_number(outcome, scheme)
    }

    fn scan(&self, scheme: Scheme) -> Scan {
        let mut gaps: CategoryMap<Vec<usize>> = CategoryMap::default();
        let mut last_seen: CategoryMap<Option<usize>> = CategoryMap::default();

        for (i, &outcome) in self.history.iter().enumerate() {
            let Some(cat) = partition::category(i64::from(outcome), scheme) else {
                continue; // zero
            };
            if let Some(prev) = last_seen[cat] {
                gaps[cat].push(i - prev);
            }
            last_seen[cat] = Some(i);
        }

        Scan { gaps, last_seen }
    }

    /// Draw-index differences between successive appearances of each
    /// category.
    pub fn gaps(&self, scheme: Scheme) -> CategoryMap<Vec<usize>> {
        self.scan(scheme).gaps
    }

    /// Gap statistics per category; fewer than two gaps is reported as
    /// insufficient data.
    pub fn delay_stats(&self, scheme: Scheme) -> CategoryMap<DelayStats> {
        self.scan(scheme).gaps.map(|_, g| stats::summarize(&g))
    }

    /// Draws since each category's last appearance (0 if it came up on the
    /// latest draw, the full history length if it never did).
    pub fn current_delay(&self, scheme: Scheme) -> CategoryMap<usize> {
        self.scan(scheme).delays(self.history.len())
    }

    /// Bet signal per category at the given sigma level.
    pub fn signals(&self, scheme: Scheme, level: SigmaLevel) -> CategoryMap<Signal> {
        let scan = self.scan(scheme);
        let delays = scan.delays(self.history.len());
        scan.gaps
            .map(|cat, g| build_signal(&stats::summarize(&g), delays[cat], level))
    }

    /// Full per-category analysis for one scheme, ready for rendering.
    pub fn analyze(&self, scheme: Scheme, level: SigmaLevel) -> AnalysisReport {
        let scan = self.scan(scheme);
        let delays = scan.delays(self.history.len());

        let categories: Vec<CategoryReport> = scan
            .gaps
            .map(|cat, g| {
                let stats = stats::summarize(&g);
                let signal = build_signal(&stats, delays[cat], level);
                debug!(scheme = %scheme, category = %cat, signal = %signal, "Category signal");
                CategoryReport {
                    category: cat,
                    stats,
                    current_delay: delays[cat],
                    signal,
                }
            })
            .into_values()
            .into_iter()
            .collect();

        let report = AnalysisReport {
            scheme,
            sigma_level: level,
            total_draws: self.history.len(),
            generated_at: Utc::now(),
            categories,
        };

        info!(
            scheme = %scheme,
            sigma = %level,
            draws = report.total_draws,
            bets = report.betting_categories().len(),
            "Analysis complete"
        );
        report
    }
}

/// Combine a category's statistics with its current delay.
fn build_signal(delay_stats: &DelayStats, current_delay: usize, level: SigmaLevel) -> Signal {
    match delay_stats {
        DelayStats::Sufficient(summary) => {
            let threshold = summary.threshold(level);
            let delay = current_delay as f64;
            Signal::Active {
                current_delay,
                mean: summary.mean,
                threshold,
                should_bet: delay >= threshold,
                intensity: stats::z_score(delay, summary.mean, summary.stdev),
            }
        }
        DelayStats::Insufficient { .. } => Signal::InsufficientData { current_delay },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
