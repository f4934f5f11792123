//! Outcome sources feeding the analyzer.

use roulette_delay::analyzer::DelayAnalyzer;
use roulette_delay::config::{AppConfig, InputConfig, SourceKind};
use roulette_delay::input::{FileSource, ManualSource, OutcomeSource};
use roulette_delay::types::{Category, Scheme, SigmaLevel};

fn temp_path() -> std::path::PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("roulette_it_{}.csv", uuid::Uuid::new_v4()));
    p
}

#[test]
fn test_manual_entry_to_report() {
    let source = ManualSource::new("1, 2, 3, 1, 2, 3, 1, 2, 3, 1, 77");
    let analyzer = DelayAnalyzer::with_history(source.read_outcomes().unwrap());
    assert_eq!(analyzer.len(), 10);

    let report = analyzer.analyze(Scheme::Column, SigmaLevel::Two);
    let text = report.to_string();
    assert!(text.contains("=== COLUMN ANALYSIS ==="));
    assert!(text.contains("--- Column 2 ---"));
    assert!(text.contains("Current delay: 2"));
}

#[test]
fn test_file_with_out_of_range_values() {
    let path = temp_path();
    std::fs::write(&path, "number\n1\n13\n99\n25\n-4\n1\n13\n25\n").unwrap();

    let outcomes = FileSource::new(&path).read_outcomes().unwrap();
    assert_eq!(outcomes, vec![1, 13, 99, 25, -4, 1, 13, 25]);

    let analyzer = DelayAnalyzer::with_history(outcomes);
    assert_eq!(analyzer.history(), &[1, 13, 25, 1, 13, 25]);
    let gaps = analyzer.gaps(Scheme::Dozen);
    for cat in Category::ALL {
        assert_eq!(gaps[cat], vec![3]);
    }

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_config_driven_file_source() {
    let path = temp_path();
    std::fs::write(&path, "4\n7\n10\n").unwrap();

    let cfg = AppConfig::from_toml(&format!(
        "[input]\nsource = \"file\"\npath = \"{}\"\n",
        path.display()
    ))
    .unwrap();
    assert_eq!(cfg.input.source, SourceKind::File);

    let outcomes = cfg.input.build_source().unwrap().read_outcomes().unwrap();
    let analyzer = DelayAnalyzer::with_history(outcomes);
    assert_eq!(analyzer.gaps(Scheme::Column)[Category::First], vec![1, 1]);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_json_report_from_sample_config() {
    let source = InputConfig::default().build_source().unwrap();
    let analyzer = DelayAnalyzer::with_history(source.read_outcomes().unwrap());
    let json = analyzer.analyze(Scheme::Dozen, SigmaLevel::One).to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["scheme"], "dozen");
    assert_eq!(value["total_draws"], 35);
    assert_eq!(value["categories"].as_array().unwrap().len(), 3);
}
