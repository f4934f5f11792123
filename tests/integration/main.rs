//! Integration tests for the delay analyzer.

mod delay_scenarios;
mod sources;
