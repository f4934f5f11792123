//! Configuration loading from TOML.
//!
//! Reads `config.toml` and deserializes into strongly-typed structs. Every
//! section is optional; a missing file yields the defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

use crate::input::{FileSource, ManualSource, OutcomeSource, SampleSource};
use crate::types::{DelayError, Scheme, SigmaLevel};

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub analysis: AnalysisConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AnalysisConfig {
    pub sigma_level: SigmaLevel,
    /// Schemes to report on, in order.
    pub schemes: Vec<Scheme>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            sigma_level: SigmaLevel::Two,
            schemes: vec![Scheme::Column, Scheme::Dozen],
        }
    }
}

/// Where the history comes from. Deserialized through `FromStr`, so aliases
/// such as `csv` work in config files.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(try_from = "String")]
pub enum SourceKind {
    #[default]
    Sample,
    Manual,
    File,
}

impl FromStr for SourceKind {
    type Err = DelayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sample" | "example" => Ok(SourceKind::Sample),
            "manual" | "keyboard" => Ok(SourceKind::Manual),
            "file" | "csv" => Ok(SourceKind::File),
            _ => Err(DelayError::UnknownSource(s.to_string())),
        }
    }
}

impl TryFrom<String> for SourceKind {
    type Error = DelayError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct InputConfig {
    pub source: SourceKind,
    /// History file, used when `source = "file"`.
    pub path: Option<String>,
    /// Outcomes as free text, used when `source = "manual"`.
    pub numbers: Option<String>,
}

impl InputConfig {
    /// Build the configured outcome source.
    pub fn build_source(&self) -> Result<Box<dyn OutcomeSource>> {
        let source: Box<dyn OutcomeSource> = match self.source {
            SourceKind::Sample => Box::new(SampleSource),
            SourceKind::Manual => {
                Box::new(ManualSource::new(self.numbers.clone().unwrap_or_default()))
            }
            SourceKind::File => {
                let path = self
                    .path
                    .as_deref()
                    .context("input.path is required when input.source = \"file\"")?;
                Box::new(FileSource::new(path))
            }
        };
        Ok(source)
    }
}

/// How reports are printed.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(try_from = "String")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = DelayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(DelayError::UnknownFormat(s.to_string())),
        }
    }
}

impl TryFrom<String> for OutputFormat {
    type Error = DelayError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Run the interactive menu instead of a single pass.
    pub interactive: bool,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;
        Self::from_toml(&contents).with_context(|| format!("Failed to parse config file: {path}"))
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            info!(path, "No config file found, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
