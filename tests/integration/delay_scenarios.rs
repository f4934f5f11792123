//! End-to-end delay scenarios over the public API.
//!
//! Expected figures for the sample history were worked out by hand from
//! its gap lists and are checked to two decimals.

use roulette_delay::analyzer::DelayAnalyzer;
use roulette_delay::input::{OutcomeSource, SampleSource};
use roulette_delay::types::{Category, DelayStats, Scheme, SigmaLevel, Signal};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

fn sample_analyzer() -> DelayAnalyzer {
    DelayAnalyzer::with_history(SampleSource.read_outcomes().unwrap())
}

#[test]
fn test_sample_column_gaps() {
    let gaps = sample_analyzer().gaps(Scheme::Column);
    assert_eq!(gaps[Category::First], vec![2, 1, 2, 3, 1, 2, 7, 2, 3, 2, 5]);
    assert_eq!(gaps[Category::Second], vec![3, 6, 2, 3, 1, 1, 2, 7, 3, 3]);
    assert_eq!(gaps[Category::Third], vec![7, 1, 6, 1, 7, 1, 2, 3, 1, 3, 2]);
}

#[test]
fn test_sample_dozen_gaps() {
    let gaps = sample_analyzer().gaps(Scheme::Dozen);
    assert_eq!(gaps[Category::First], vec![2, 3, 2, 2, 4, 2, 2, 4, 3, 1, 5]);
    assert_eq!(gaps[Category::Second], vec![1, 4, 5, 3, 3, 5, 1, 2, 5, 1, 4]);
    assert_eq!(gaps[Category::Third], vec![3, 2, 4, 2, 4, 2, 5, 3, 3, 2]);
}

#[test]
fn test_sample_column_stats() {
    let stats = sample_analyzer().delay_stats(Scheme::Column);

    let first = stats[Category::First].summary().unwrap();
    assert!(approx(first.mean, 2.73));
    assert!(approx(first.stdev, 1.79));
    assert_eq!((first.min, first.max, first.count), (1, 7, 11));
    assert!(approx(first.threshold_1sigma, 4.52));
    assert!(approx(first.threshold_2sigma, 6.32));
    assert!(approx(first.threshold_3sigma, 8.11));

    let second = stats[Category::Second].summary().unwrap();
    assert!(approx(second.mean, 3.1));
    assert!(approx(second.stdev, 1.97));
    assert_eq!(second.count, 10);
    assert!(approx(second.threshold_2sigma, 7.04));
}

#[test]
fn test_sample_current_delays() {
    let a = sample_analyzer();
    let columns = a.current_delay(Scheme::Column);
    assert_eq!(columns.values(), &[3, 1, 0]);
    let dozens = a.current_delay(Scheme::Dozen);
    assert_eq!(dozens.values(), &[2, 0, 1]);
}

#[test]
fn test_sample_signals_none_fire() {
    let a = sample_analyzer();
    let signals = a.signals(Scheme::Column, SigmaLevel::One);
    assert_eq!(
        signals[Category::First],
        Signal::Active {
            current_delay: 3,
            mean: 2.73,
            threshold: 4.52,
            should_bet: false,
            intensity: Some(0.15),
        }
    );
    assert_eq!(signals[Category::Second].intensity(), Some(-1.07));
    assert_eq!(signals[Category::Third].intensity(), Some(-1.27));

    for scheme in Scheme::ALL {
        for level in SigmaLevel::ALL {
            let report = a.analyze(*scheme, level);
            assert!(report.betting_categories().is_empty());
        }
    }
}

#[test]
fn test_overdue_dozen_signals_bet() {
    // Dozen 3 appears every other draw, then stays away for eight draws.
    let mut a = DelayAnalyzer::new();
    for n in [25, 1, 26, 2, 27, 3, 28, 4, 30] {
        a.record(n);
    }
    for _ in 0..8 {
        a.record(5);
    }

    let stats = a.delay_stats(Scheme::Dozen);
    let third = stats[Category::Third].summary().unwrap();
    assert!(approx(third.mean, 2.0));
    assert!(approx(third.stdev, 0.0));

    let signals = a.signals(Scheme::Dozen, SigmaLevel::Three);
    assert!(signals[Category::Third].should_bet());
    assert_eq!(signals[Category::Third].current_delay(), 8);
    assert_eq!(signals[Category::Third].intensity(), None);
    assert_eq!(
        signals[Category::Second],
        Signal::InsufficientData { current_delay: 17 }
    );
}

#[test]
fn test_record_sequence_matches_load() {
    let outcomes = SampleSource.read_outcomes().unwrap();
    let mut recorded = DelayAnalyzer::new();
    for &n in &outcomes {
        recorded.record(n);
    }
    assert_eq!(recorded, DelayAnalyzer::with_history(outcomes));
}

#[test]
fn test_zero_only_history() {
    let a = DelayAnalyzer::with_history([0, 0, 0]);
    for scheme in Scheme::ALL {
        assert_eq!(a.current_delay(*scheme).values(), &[3, 3, 3]);
        for (_, stats) in a.delay_stats(*scheme).iter() {
            assert_eq!(*stats, DelayStats::Insufficient { count: 0 });
        }
    }
}
