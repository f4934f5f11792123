//! Shared types for the delay analyzer.
//!
//! These types form the data model used across all modules: the
//! partitioning schemes, categories, sigma levels, and the derived
//! statistics and signals handed to the report layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// Highest valid roulette outcome (European wheel, single zero).
pub const MAX_OUTCOME: i64 = 36;

/// Number of distinct outcomes, zero included.
pub const OUTCOME_COUNT: usize = 37;

/// Whether a raw value is a valid roulette outcome (0–36).
pub fn is_valid_outcome(value: i64) -> bool {
    (0..=MAX_OUTCOME).contains(&value)
}

// ---------------------------------------------------------------------------
// Scheme
// ---------------------------------------------------------------------------

/// Partitioning scheme applied to outcomes 1–36. Serialized lowercase;
/// deserialized through `FromStr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Scheme {
    /// Three groups of twelve by position on the table (n mod 3).
    Column,
    /// Three contiguous ranges: 1–12, 13–24, 25–36.
    Dozen,
}

impl Scheme {
    pub const ALL: &'static [Scheme] = &[Scheme::Column, Scheme::Dozen];

    /// Capitalised label used in rendered reports.
    pub fn title(&self) -> &'static str {
        match self {
            Scheme::Column => "Column",
            Scheme::Dozen => "Dozen",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scheme::Column => write!(f, "column"),
            Scheme::Dozen => write!(f, "dozen"),
        }
    }
}

impl FromStr for Scheme {
    type Err = DelayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "column" | "columns" | "columna" => Ok(Scheme::Column),
            "dozen" | "dozens" | "docena" => Ok(Scheme::Dozen),
            _ => Err(DelayError::UnknownScheme(s.to_string())),
        }
    }
}

impl TryFrom<String> for Scheme {
    type Error = DelayError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// One of the three groups of a scheme. Zero never has a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Category {
    First,
    Second,
    Third,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::First, Category::Second, Category::Third];

    /// Category number as shown to users (1, 2 or 3).
    pub fn number(&self) -> u8 {
        match self {
            Category::First => 1,
            Category::Second => 2,
            Category::Third => 3,
        }
    }

    /// Zero-based slot used by [`CategoryMap`].
    pub fn index(&self) -> usize {
        usize::from(self.number() - 1)
    }

    /// Inverse of [`Category::number`]; `None` for 0 and anything above 3.
    pub fn from_number(n: u8) -> Option<Category> {
        match n {
            1 => Some(Category::First),
            2 => Some(Category::Second),
            3 => Some(Category::Third),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl From<Category> for u8 {
    fn from(category: Category) -> u8 {
        category.number()
    }
}

impl TryFrom<u8> for Category {
    type Error = DelayError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Category::from_number(n).ok_or(DelayError::InvalidCategory(n))
    }
}

/// Fixed-size per-category container. Always holds exactly one value for
/// each of the three categories of a scheme.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CategoryMap<T>([T; 3]);

impl<T> CategoryMap<T> {
    pub fn new(values: [T; 3]) -> Self {
        Self(values)
    }

    /// Build a map by evaluating `f` for every category.
    pub fn from_fn(mut f: impl FnMut(Category) -> T) -> Self {
        Self(Category::ALL.map(&mut f))
    }

    /// Iterate `(category, value)` pairs in category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &T)> {
        Category::ALL.into_iter().zip(self.0.iter())
    }

    pub fn map<U>(self, mut f: impl FnMut(Category, T) -> U) -> CategoryMap<U> {
        let [first, second, third] = self.0;
        CategoryMap([
            f(Category::First, first),
            f(Category::Second, second),
            f(Category::Third, third),
        ])
    }

    pub fn values(&self) -> &[T; 3] {
        &self.0
    }

    pub fn into_values(self) -> [T; 3] {
        self.0
    }
}

impl<T> Index<Category> for CategoryMap<T> {
    type Output = T;

    fn index(&self, category: Category) -> &T {
        &self.0[category.index()]
    }
}

impl<T> IndexMut<Category> for CategoryMap<T> {
    fn index_mut(&mut self, category: Category) -> &mut T {
        &mut self.0[category.index()]
    }
}

// ---------------------------------------------------------------------------
// Sigma level
// ---------------------------------------------------------------------------

/// How many standard deviations above the mean gap a delay must reach
/// before a bet is signalled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum SigmaLevel {
    /// 1σ: more signals, less reliable.
    One,
    /// 2σ: balanced.
    #[default]
    Two,
    /// 3σ: few signals, strict.
    Three,
}

impl SigmaLevel {
    pub const ALL: [SigmaLevel; 3] = [SigmaLevel::One, SigmaLevel::Two, SigmaLevel::Three];

    /// Multiplier applied to the standard deviation.
    pub fn k(&self) -> u8 {
        match self {
            SigmaLevel::One => 1,
            SigmaLevel::Two => 2,
            SigmaLevel::Three => 3,
        }
    }

    /// Clamp an arbitrary integer into 1..=3, the way the interactive
    /// prompt treats out-of-range choices.
    pub fn clamped(level: i64) -> SigmaLevel {
        match level {
            i64::MIN..=1 => SigmaLevel::One,
            2 => SigmaLevel::Two,
            _ => SigmaLevel::Three,
        }
    }
}

impl fmt::Display for SigmaLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}σ", self.k())
    }
}

impl TryFrom<i64> for SigmaLevel {
    type Error = DelayError;

    fn try_from(level: i64) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(SigmaLevel::One),
            2 => Ok(SigmaLevel::Two),
            3 => Ok(SigmaLevel::Three),
            other => Err(DelayError::InvalidSigmaLevel(other)),
        }
    }
}

impl From<SigmaLevel> for i64 {
    fn from(level: SigmaLevel) -> i64 {
        i64::from(level.k())
    }
}

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

/// Descriptive statistics of a category's gap list. Mean, deviation and
/// thresholds are rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapSummary {
    pub mean: f64,
    /// Sample standard deviation (n − 1 denominator).
    pub stdev: f64,
    pub min: usize,
    pub max: usize,
    /// Number of gaps the summary was computed from.
    pub count: usize,
    pub threshold_1sigma: f64,
    pub threshold_2sigma: f64,
    pub threshold_3sigma: f64,
}

impl GapSummary {
    /// Threshold `mean + k·stdev` for the given sigma level.
    pub fn threshold(&self, level: SigmaLevel) -> f64 {
        match level {
            SigmaLevel::One => self.threshold_1sigma,
            SigmaLevel::Two => self.threshold_2sigma,
            SigmaLevel::Three => self.threshold_3sigma,
        }
    }
}

/// Per-category delay statistics.
///
/// Categories with fewer than two gaps carry no numbers at all, so a caller
/// cannot mistake missing data for a zero mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DelayStats {
    Sufficient(GapSummary),
    Insufficient {
        /// Gaps observed so far (0 or 1).
        count: usize,
    },
}

impl DelayStats {
    pub fn summary(&self) -> Option<&GapSummary> {
        match self {
            DelayStats::Sufficient(summary) => Some(summary),
            DelayStats::Insufficient { .. } => None,
        }
    }

    pub fn is_sufficient(&self) -> bool {
        matches!(self, DelayStats::Sufficient(_))
    }
}

// ---------------------------------------------------------------------------
// Signal
// ---------------------------------------------------------------------------

/// Bet assessment for one category at a given sigma level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Signal {
    Active {
        current_delay: usize,
        mean: f64,
        threshold: f64,
        should_bet: bool,
        /// z-score of the current delay against the gap distribution.
        /// `None` when every gap was identical (zero deviation).
        intensity: Option<f64>,
    },
    InsufficientData {
        current_delay: usize,
    },
}

impl Signal {
    pub fn should_bet(&self) -> bool {
        match self {
            Signal::Active { should_bet, .. } => *should_bet,
            Signal::InsufficientData { .. } => false,
        }
    }

    pub fn current_delay(&self) -> usize {
        match self {
            Signal::Active { current_delay, .. } | Signal::InsufficientData { current_delay } => {
                *current_delay
            }
        }
    }

    pub fn intensity(&self) -> Option<f64> {
        match self {
            Signal::Active { intensity, .. } => *intensity,
            Signal::InsufficientData { .. } => None,
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::Active {
                current_delay,
                mean,
                threshold,
                should_bet,
                intensity,
            } => {
                write!(
                    f,
                    "delay={current_delay} mean={mean:.2} threshold={threshold:.2} bet={}",
                    if *should_bet { "YES" } else { "NO" }
                )?;
                if let Some(z) = intensity {
                    write!(f, " intensity={z:.2}σ")?;
                }
                Ok(())
            }
            Signal::InsufficientData { current_delay } => {
                write!(f, "delay={current_delay} insufficient data")
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Domain-specific error types. The analyzer itself never fails; these are
/// raised while parsing configuration and user choices.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DelayError {
    #[error("Invalid sigma level: {0} (expected 1, 2 or 3)")]
    InvalidSigmaLevel(i64),

    #[error("Invalid category: {0} (expected 1, 2 or 3)")]
    InvalidCategory(u8),

    #[error("Unknown scheme: {0}")]
    UnknownScheme(String),

    #[error("Unknown input source: {0}")]
    UnknownSource(String),

    #[error("Unknown output format: {0}")]
    UnknownFormat(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
