//! Roulette delay analyzer.
//!
//! Library crate exposing all modules for use by integration tests
//! and the binary entry point.

pub mod config;
pub mod types;
pub mod analyzer;
pub mod input;
pub mod report;
