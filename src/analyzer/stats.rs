//! Descriptive statistics over gap lists.

use rust_decimal::prelude::*;

use crate::types::{DelayStats, GapSummary};

/// Minimum number of gaps for a sample standard deviation.
pub const MIN_GAPS: usize = 2;

/// Round to two decimals, half-to-even on the exact binary value of the
/// float (1.075 is stored as 1.07499… and rounds down). Non-finite input is
/// returned unchanged.
pub fn round2(value: f64) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

/// Arithmetic mean; `None` for an empty slice.
pub fn mean(values: &[usize]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<usize>() as f64 / values.len() as f64)
}

/// Sample standard deviation with an n − 1 denominator; `None` below two
/// values.
pub fn sample_stdev(values: &[usize]) -> Option<f64> {
    if values.len() < MIN_GAPS {
        return None;
    }
    let m = mean(values)?;
    let sum_sq: f64 = values
        .iter()
        .map(|&v| {
            let d = v as f64 - m;
            d * d
        })
        .sum();
    Some((sum_sq / (values.len() - 1) as f64).sqrt())
}

/// Summarise one category's gap list.
///
/// Thresholds are derived from the unrounded mean and deviation and then
/// rounded, so `threshold_2sigma` may differ from `mean + 2·stdev` of the
/// rounded fields in the last decimal.
pub fn summarize(gaps: &[usize]) -> DelayStats {
    let (Some(m), Some(sd)) = (mean(gaps), sample_stdev(gaps)) else {
        return DelayStats::Insufficient { count: gaps.len() };
    };
    let min = gaps.iter().copied().min().unwrap_or(0);
    let max = gaps.iter().copied().max().unwrap_or(0);

    DelayStats::Sufficient(GapSummary {
        mean: round2(m),
        stdev: round2(sd),
        min,
        max,
        count: gaps.len(),
        threshold_1sigma: round2(m + sd),
        threshold_2sigma: round2(m + 2.0 * sd),
        threshold_3sigma: round2(m + 3.0 * sd),
    })
}

/// `(value − mean) / stdev` rounded to two decimals; `None` when the
/// deviation is zero.
pub fn z_score(value: f64, mean: f64, stdev: f64) -> Option<f64> {
    if stdev == 0.0 || !stdev.is_finite() {
        return None;
    }
    Some(round2((value - mean) / stdev))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_round2() {
        assert!(approx(round2(1.23456), 1.23));
        assert!(approx(round2(0.5164), 0.52));
        assert!(approx(round2(3.0), 3.0));
        assert!(approx(round2(-1.005), -1.0));
        assert!(round2(f64::NAN).is_nan());
        assert_eq!(round2(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_round2_uses_exact_binary_value() {
        // 43/40 and 107/40 sit just below x.xx5 in binary.
        assert_eq!(round2(43.0 / 40.0), 1.07);
        assert_eq!(round2(107.0 / 40.0), 2.67);
        // Exactly representable midpoints go to the even neighbour.
        assert_eq!(round2(1.125), 1.12);
        assert_eq!(round2(1.375), 1.38);
    }

    #[test]
    fn test_summarize_mean_just_below_midpoint() {
        // 37 gaps of 1 and 3 gaps of 2: mean 43/40.
        let mut gaps = vec![1; 37];
        gaps.extend([2, 2, 2]);
        let stats = summarize(&gaps);
        assert_eq!(stats.summary().unwrap().mean, 1.07);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), None);
        assert!(approx(mean(&[1, 2, 3]).unwrap(), 2.0));
    }

    #[test]
    fn test_sample_stdev_uses_n_minus_one() {
        // Population stdev of [2, 4, 4, 4, 5, 5, 7, 9] is 2.0; sample is sqrt(32/7).
        let sd = sample_stdev(&[2, 4, 4, 4, 5, 5, 7, 9]).unwrap();
        assert!(approx(sd, (32.0f64 / 7.0).sqrt()));
    }

    #[test]
    fn test_sample_stdev_needs_two_values() {
        assert_eq!(sample_stdev(&[]), None);
        assert_eq!(sample_stdev(&[3]), None);
        assert_eq!(sample_stdev(&[3, 3]), Some(0.0));
    }

    #[test]
    fn test_summarize_insufficient() {
        assert_eq!(summarize(&[]), DelayStats::Insufficient { count: 0 });
        assert_eq!(summarize(&[3]), DelayStats::Insufficient { count: 1 });
    }

    #[test]
    fn test_summarize_sufficient() {
        let stats = summarize(&[1, 2, 3]);
        let s = stats.summary().unwrap();
        assert!(approx(s.mean, 2.0));
        assert!(approx(s.stdev, 1.0));
        assert_eq!((s.min, s.max, s.count), (1, 3, 3));
        assert!(approx(s.threshold_1sigma, 3.0));
        assert!(approx(s.threshold_2sigma, 4.0));
        assert!(approx(s.threshold_3sigma, 5.0));
    }

    #[test]
    fn test_summarize_rounds_to_two_decimals() {
        // mean 4/3, stdev sqrt(1/3)
        let stats = summarize(&[1, 1, 2]);
        let s = stats.summary().unwrap();
        assert!(approx(s.mean, 1.33));
        assert!(approx(s.stdev, 0.58));
        assert!(approx(s.threshold_1sigma, 1.91));
        assert!(approx(s.threshold_2sigma, 2.49));
        assert!(approx(s.threshold_3sigma, 3.07));
    }

    #[test]
    fn test_z_score() {
        assert_eq!(z_score(4.0, 2.0, 1.0), Some(2.0));
        assert_eq!(z_score(1.0, 2.0, 0.5), Some(-2.0));
        assert_eq!(z_score(4.0, 3.0, 0.0), None);
    }
}
